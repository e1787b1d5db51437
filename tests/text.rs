// SPDX-License-Identifier: Apache-2.0

//! Text-encoding acceptance tests over a corpus of realistic filters.

use cql2_codec::{Cql2Error, Expr, Filter, Op};

const SAMPLES: [&str; 20] = [
    "T_DURING(INTERVAL(starts_at, ends_at), INTERVAL('2005-01-10', '2010-02-10'))",
    "depth BETWEEN 100.0 and 150.0",
    "\"value\" <= (2 ^ \"foo\")",
    "\"value\" <> (22.1 * \"foo\")",
    "    eo:cloud_cover >= 0.1\nAND eo:cloud_cover <= 0.2\nAND landsat:wrs_row=28\nAND landsat:wrs_path=203",
    "(owner LIKE 'mike%' OR owner LIKE 'Mike%') AND floors<4",
    "floors>5 AND S_WITHIN(geometry,BBOX(-118,33.8,-117.9,34))",
    "eo:cloud_cover IN (0.1,0.2)",
    "owner NOT LIKE '%Mike%'",
    "Foo(\"geometry\") = TRUE",
    "ACCENTI(etat_vol) = ACCENTI('débárquér')",
    "A_EQUALS(('a', TRUE, 1.0, 8), \"values\")",
    "name LIKE 'Smith%'",
    "\"value\" NOT IN ('a', 'b', 'c')",
    "T_DURING(INTERVAL(touchdown, liftOff), INTERVAL('1969-07-16T13:32:00Z', '1969-07-24T16:50:35Z'))",
    "swimming_pool=true AND (floors>5 \n                    OR  material LIKE 'brick%'\n                    OR  material LIKE '%brick')",
    "avg(windSpeed) < 4",
    "value = - foo * 2.0 + \"bar\" / 6.1234 - \"x\" ^ 2.0",
    "NOT \"value\" IS NULL",
    "FALSE <> Bar(\"geometry\", 100, 'a', 'b', FALSE)",
];

#[test]
fn test_samples_parse() {
    for src in SAMPLES {
        let f = Filter::parse_text(src);
        assert!(f.is_ok(), "failed parsing {src:?}: {f:?}");
    }
}

#[test]
fn test_case_insensitive_keywords() {
    let f1 = Filter::parse_text(r#""value" NOT BETWEEN 10 AND 20"#).unwrap();
    let f2 = Filter::parse_text(r#""value" Not bEtWeEn 10 and 20"#).unwrap();
    assert_eq!(f1, f2);
}

#[test]
fn test_case_sensitive_identifiers() {
    let f1 = Filter::parse_text("Owner = 'x'").unwrap();
    let f2 = Filter::parse_text("owner = 'x'").unwrap();
    assert_ne!(f1, f2);
}

#[test]
fn test_quoted_and_bare_properties_agree() {
    let f1 = Filter::parse_text(r#"value > 10"#).unwrap();
    let f2 = Filter::parse_text(r#""value" > 10"#).unwrap();
    assert_eq!(f1, f2);
}

#[test]
fn test_not_in_pull_up() {
    let f = Filter::parse_text("\"category\" NOT IN (1, 2, 3, 4)").unwrap();
    match f.root() {
        Expr::Monadic(Op::Not, inner) => {
            let (op, _, list) = inner.as_dyadic().expect("a dyadic expression");
            assert_eq!(op, Op::IsInList);
            assert!(matches!(list, Expr::Array(xs) if xs.len() == 4));
        }
        other => panic!("Expected a NOT wrapper, got {other:?}"),
    }
}

#[test]
fn test_3d_polygon() {
    const F: &str = r#"S_WITHIN(POLYGON Z ((-49.88024 0.5 -75993.341684, -1.5 -0.99999 -100000.0, 0.0 0.5 -0.333333, -49.88024 0.5 -75993.341684)), "geometry")"#;

    let f = Filter::parse_text(F).expect("a spatial predicate");
    let (op, lhs, _) = f.root().as_dyadic().expect("a dyadic expression");
    assert_eq!(op, Op::SWithin);
    let g = lhs.as_spatial().expect("a spatial literal");
    assert!(!cql2_codec::Geo::is_2d(g));
}

#[test]
fn test_nested_boolean_as_argument() {
    // a nested predicate is accepted as a function argument for
    // compatibility; nothing more is done with it...
    let f = Filter::parse_text("Foo(\"a\" > 1) = TRUE");
    assert!(f.is_ok());
}

#[test]
fn test_error_carries_position() {
    match Filter::parse_text("floors >") {
        Err(Cql2Error::Syntax { line, column, .. }) => {
            assert_eq!(line, 1);
            assert!(column > 1);
        }
        other => panic!("Expected a syntax error, got {other:?}"),
    }
}

#[test]
fn test_empty_input_is_syntax_error() {
    assert!(matches!(
        Filter::parse_text(""),
        Err(Cql2Error::Syntax { .. })
    ));
}
