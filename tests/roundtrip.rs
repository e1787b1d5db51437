// SPDX-License-Identifier: Apache-2.0

//! The translation contract: JSON round trips exactly, text round trips
//! after at most one normalization pass.

use cql2_codec::{Cql2Error, Expr, Filter, Op};
use serde_json::json;

const SAMPLES: [&str; 18] = [
    "prop1 = 5",
    "foo NOT BETWEEN 1 AND 10",
    "S_INTERSECTS(geom, POINT(1 2))",
    "TIMESTAMP('2020-01-01T00:00:00Z') > TIMESTAMP('2019-01-01T00:00:00Z')",
    "-x + 1 = y",
    "name LIKE CASEI('abc%')",
    "owner NOT LIKE '%Mike%'",
    "\"value\" IS NOT NULL",
    "NOT \"value\" IS NULL",
    "depth BETWEEN 100.0 and 150.0",
    "eo:cloud_cover IN (0.1, 0.2)",
    "swimming_pool = true AND (floors > 5 OR material LIKE 'brick%')",
    "T_DURING(INTERVAL(starts_at, ends_at), INTERVAL('2005-01-10', '2010-02-10'))",
    "S_WITHIN(geometry, BBOX(-118, 33.8, -117.9, 34))",
    "S_CONTAINS(MULTIPOINT(7 50, 10 51), geom)",
    "A_EQUALS(('a', TRUE, 1.0, 8), \"values\")",
    "ACCENTI(etat_vol) = ACCENTI('débárquér')",
    "value = - foo * 2.0 + \"bar\" / 6.1234 - \"x\" ^ 2.0",
];

// parse_json(to_json(a)) == a
#[test]
fn test_json_roundtrip_is_identity() {
    for src in SAMPLES {
        let a = Filter::parse_text(src).expect(src);
        let back = Filter::parse_json(&a.to_json())
            .unwrap_or_else(|x| panic!("failed re-decoding {src:?}: {x}"));
        assert_eq!(back, a, "JSON round trip diverged for {src:?}");
    }
}

// parse_text(to_text(a)) == a
#[test]
fn test_text_roundtrip_is_identity() {
    for src in SAMPLES {
        let a = Filter::parse_text(src).expect(src);
        let text = a.to_text();
        let back = Filter::parse_text(&text)
            .unwrap_or_else(|x| panic!("failed re-parsing {text:?}: {x}"));
        assert_eq!(back, a, "text round trip diverged for {src:?} via {text:?}");
    }
}

// one rendering pass normalizes; a second changes nothing
#[test]
fn test_text_stabilizes_after_one_pass() {
    for src in SAMPLES {
        let a = Filter::parse_text(src).expect(src);
        let once = a.to_text();
        let twice = Filter::parse_text(&once).expect(&once).to_text();
        assert_eq!(once, twice, "rendering of {src:?} did not stabilize");
    }
}

// emitted AND/OR argument arrays always have at least 2 members
#[test]
fn test_emitted_connective_arity() {
    fn walk(v: &serde_json::Value) {
        if let Some(obj) = v.as_object() {
            let op = obj.get("op").and_then(|x| x.as_str());
            let args = obj.get("args").and_then(|x| x.as_array());
            if let (Some(op @ ("and" | "or")), Some(args)) = (op, args) {
                assert!(args.len() >= 2, "'{op}' emitted with {} args", args.len());
            }
        }
        match v {
            serde_json::Value::Array(xs) => xs.iter().for_each(walk),
            serde_json::Value::Object(m) => m.values().for_each(walk),
            _ => {}
        }
    }

    for src in SAMPLES {
        walk(&Filter::parse_text(src).expect(src).to_json());
    }
}

// ===== the concrete end-to-end scenarios ================================

#[test]
fn test_scenario_comparison() {
    let f = Filter::parse_text("prop1 = 5").unwrap();
    assert_eq!(
        f.to_json(),
        json!({"op": "=", "args": [{"property": "prop1"}, 5.0]})
    );
    assert_eq!(f.to_text(), r#"("prop1" = 5.0)"#);
}

#[test]
fn test_scenario_not_between() {
    let f = Filter::parse_text("foo NOT BETWEEN 1 AND 10").unwrap();
    assert_eq!(
        f.to_json(),
        json!({"op": "not", "args": [
            {"op": "between", "args": [{"property": "foo"}, 1.0, 10.0]}
        ]})
    );
    assert_eq!(f.to_text(), r#""foo" NOT BETWEEN 1.0 AND 10.0"#);
}

#[test]
fn test_scenario_spatial() {
    let f = Filter::parse_text("S_INTERSECTS(geom, POINT(1 2))").unwrap();
    assert_eq!(
        f.to_json(),
        json!({"op": "s_intersects", "args": [
            {"property": "geom"},
            {"type": "Point", "coordinates": [1.0, 2.0]}
        ]})
    );
    assert_eq!(f.to_text(), r#"S_INTERSECTS("geom", POINT(1.0 2.0))"#);
}

#[test]
fn test_scenario_timestamps() {
    const SRC: &str =
        "TIMESTAMP('2020-01-01T00:00:00Z') > TIMESTAMP('2019-01-01T00:00:00Z')";
    const CANONICAL: &str =
        "(TIMESTAMP('2020-01-01T00:00:00.000000Z') > TIMESTAMP('2019-01-01T00:00:00.000000Z'))";

    let f = Filter::parse_text(SRC).unwrap();
    assert_eq!(f.to_text(), CANONICAL);
    assert_eq!(Filter::parse_text(CANONICAL).unwrap().to_text(), CANONICAL);
}

#[test]
fn test_scenario_unary_minus() {
    let f = Filter::parse_text("-x + 1 = y").unwrap();
    let (op, lhs, _) = f.root().as_dyadic().expect("a comparison");
    assert_eq!(op, Op::Eq);
    let expected = Expr::Dyadic(
        Op::Plus,
        Box::new(Expr::Dyadic(
            Op::Mult,
            Box::new(Expr::Num(-1.0)),
            Box::new(Expr::Id("x".into())),
        )),
        Box::new(Expr::Num(1.0)),
    );
    assert_eq!(*lhs, expected);
    assert_eq!(f.to_text(), r#"(((-1.0 * "x") + 1.0) = "y")"#);
}

#[test]
fn test_scenario_like_casei() {
    let f = Filter::parse_text("name LIKE CASEI('abc%')").unwrap();
    assert_eq!(
        f.to_json(),
        json!({"op": "like", "args": [
            {"property": "name"},
            {"op": "casei", "args": ["abc%"]}
        ]})
    );
    assert_eq!(f.to_text(), r#""name" LIKE CASEI('abc%')"#);
}

// ===== boundary cases ===================================================

#[test]
fn test_boundary_cases() {
    // a 1-position line string...
    assert!(matches!(
        Filter::parse_text("S_INTERSECTS(geom, LINESTRING(0 0))"),
        Err(Cql2Error::Syntax { .. })
    ));
    // a 3-position polygon ring...
    assert!(matches!(
        Filter::parse_text("S_INTERSECTS(geom, POLYGON((0 0, 1 0, 0 0)))"),
        Err(Cql2Error::Syntax { .. })
    ));
    // a BBOX inside a GEOMETRYCOLLECTION...
    assert!(matches!(
        Filter::parse_text("S_INTERSECTS(geom, GEOMETRYCOLLECTION(BBOX(0, 0, 1, 1)))"),
        Err(Cql2Error::Syntax { .. })
    ));
    // an empty filter string...
    assert!(matches!(
        Filter::parse_text(""),
        Err(Cql2Error::Syntax { .. })
    ));
    // nesting past the limit...
    let nested = format!("{}TRUE{}", "(".repeat(500), ")".repeat(500));
    assert!(matches!(
        Filter::parse_text(&nested),
        Err(Cql2Error::DepthExceeded(_))
    ));
}
