// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! JSON encoding of CQL2 filters: the canonical, lossless representation.
//!
//! Encoding walks the syntax tree and emits `{"op": ..., "args": [...]}`
//! objects plus the handful of special shapes (`property`, `function`,
//! `timestamp`, `date`, `interval`, GeoJSON geometries and `bbox`).
//! Decoding is the direct structural inverse over [`serde_json::Value`],
//! guarded by the configured nesting limit and reporting failures with a
//! JSON Pointer into the offending document.
//!

use crate::{
    Filter,
    config::config,
    error::Cql2Error,
    expr::{Call, Expr},
    geom::{self, BBox, G, Geo},
    op::{JsonArity, Op},
};
use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value, json};
use tracing::debug;

// ===== encoding =========================================================

pub(crate) fn encode(e: &Expr) -> Value {
    match e {
        Expr::Bool(x) => json!(x),
        Expr::Num(x) => json!(x),
        Expr::Str(s) => json!(s),
        Expr::Date(d) => json!({"date": d.to_string()}),
        Expr::Timestamp(t) => json!({"timestamp": t.to_string()}),
        Expr::Unbounded => json!(".."),
        Expr::Interval(a, b) => {
            json!({"interval": [interval_bound(a), interval_bound(b)]})
        }
        Expr::Spatial(g) => g.to_geojson(),
        Expr::Id(name) => json!({"property": name}),
        Expr::Function(c) => {
            let args: Vec<Value> = c.args.iter().map(encode).collect();
            json!({"function": {"name": c.name, "args": args}})
        }
        Expr::Array(xs) => Value::Array(xs.iter().map(encode).collect()),
        Expr::Monadic(op, x) => json!({"op": op.json_name(), "args": [encode(x)]}),
        // BETWEEN flattens its bounds array into 3 sibling arguments...
        Expr::Dyadic(Op::IsBetween, v, bounds) => match &**bounds {
            Expr::Array(xs) if xs.len() == 2 => {
                json!({"op": "between", "args": [encode(v), encode(&xs[0]), encode(&xs[1])]})
            }
            other => json!({"op": "between", "args": [encode(v), encode(other)]}),
        },
        Expr::Dyadic(op, a, b) => {
            json!({"op": op.json_name(), "args": [encode(a), encode(b)]})
        }
        Expr::Variadic(op, xs) => {
            let args: Vec<Value> = xs.iter().map(encode).collect();
            json!({"op": op.json_name(), "args": args})
        }
    }
}

// interval endpoints are bare RFC 3339 strings or '..', never the wrapped
// {"date"}/{"timestamp"} objects...
fn interval_bound(e: &Expr) -> Value {
    match e {
        Expr::Date(d) => json!(d.to_string()),
        Expr::Timestamp(t) => json!(t.to_string()),
        Expr::Unbounded => json!(".."),
        other => encode(other),
    }
}

// ===== decoding =========================================================

pub(crate) fn decode(v: &Value) -> Result<Expr, Cql2Error> {
    decode_at(v, "", 0)
}

fn decode_at(v: &Value, ptr: &str, depth: usize) -> Result<Expr, Cql2Error> {
    let limit = config().max_depth();
    if depth > limit {
        return Err(Cql2Error::DepthExceeded(limit));
    }
    match v {
        Value::Null => Err(Cql2Error::Structure(
            format!("'null' is not a CQL2 expression at '{ptr}'").into(),
        )),
        Value::Bool(x) => Ok(Expr::Bool(*x)),
        Value::Number(n) => n.as_f64().map(Expr::Num).ok_or_else(|| {
            Cql2Error::Encoding(format!("number '{n}' at '{ptr}' has no f64 representation").into())
        }),
        Value::String(s) => Ok(Expr::Str(s.clone())),
        Value::Array(xs) => {
            let items = xs
                .iter()
                .enumerate()
                .map(|(i, x)| decode_at(x, &format!("{ptr}/{i}"), depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Array(items))
        }
        Value::Object(map) => {
            if map.contains_key("op") {
                decode_predicate(map, ptr, depth)
            } else if let Some(p) = map.get("property") {
                let name = p.as_str().ok_or_else(|| {
                    Cql2Error::Structure(
                        format!("'property' must be a string at '{ptr}/property'").into(),
                    )
                })?;
                Ok(Expr::Id(name.into()))
            } else if let Some(x) = map.get("function") {
                decode_function(x, ptr, depth)
            } else if let Some(x) = map.get("timestamp") {
                decode_timestamp(x, &format!("{ptr}/timestamp"))
            } else if let Some(x) = map.get("date") {
                decode_date(x, &format!("{ptr}/date"))
            } else if let Some(x) = map.get("interval") {
                decode_interval(x, &format!("{ptr}/interval"), depth)
            } else if map.contains_key("type") {
                geom::from_geojson(v, ptr).map(Expr::Spatial)
            } else if let Some(x) = map.get("bbox") {
                decode_bbox(x, &format!("{ptr}/bbox"))
            } else {
                Err(Cql2Error::Structure(
                    format!("unrecognized object at '{ptr}'").into(),
                ))
            }
        }
    }
}

fn decode_predicate(
    map: &Map<String, Value>,
    ptr: &str,
    depth: usize,
) -> Result<Expr, Cql2Error> {
    let name = map.get("op").and_then(Value::as_str).ok_or_else(|| {
        Cql2Error::Structure(format!("'op' must be a string at '{ptr}/op'").into())
    })?;
    let op = Op::from_json_name(name).ok_or_else(|| Cql2Error::UnknownOp {
        op: name.into(),
        pointer: format!("{ptr}/op"),
    })?;
    let raw = map.get("args").and_then(Value::as_array).ok_or_else(|| {
        Cql2Error::Structure(format!("missing or non-array 'args' at '{ptr}'").into())
    })?;
    let args = raw
        .iter()
        .enumerate()
        .map(|(i, x)| decode_at(x, &format!("{ptr}/args/{i}"), depth + 1))
        .collect::<Result<Vec<_>, _>>()?;

    // operand counts come from the exhaustive table in `Op::json_arity`, so
    // an operator cannot reach the wrong branch here without first declaring
    // its arity there...
    match op.json_arity() {
        JsonArity::Many => {
            if args.len() < 2 {
                return Err(Cql2Error::Structure(
                    format!("'{name}' needs at least 2 operands at '{ptr}'").into(),
                ));
            }
            Ok(Expr::Variadic(op, args))
        }
        JsonArity::One => {
            let [x]: [Expr; 1] = args.try_into().map_err(|_| {
                Cql2Error::Structure(
                    format!("'{name}' expects exactly 1 operand at '{ptr}'").into(),
                )
            })?;
            Ok(Expr::Monadic(op, Box::new(x)))
        }
        JsonArity::Three => {
            let [v, lo, hi]: [Expr; 3] = args.try_into().map_err(|_| {
                Cql2Error::Structure(
                    format!("'{name}' expects exactly 3 operands at '{ptr}'").into(),
                )
            })?;
            Ok(Expr::Dyadic(
                op,
                Box::new(v),
                Box::new(Expr::Array(vec![lo, hi])),
            ))
        }
        JsonArity::Two => {
            let [a, b]: [Expr; 2] = args.try_into().map_err(|_| {
                Cql2Error::Structure(
                    format!("'{name}' expects exactly 2 operands at '{ptr}'").into(),
                )
            })?;
            if op == Op::IsInList {
                match &b {
                    Expr::Array(xs) if !xs.is_empty() => {}
                    Expr::Array(_) => {
                        return Err(Cql2Error::Structure(
                            format!("the 'in' list at '{ptr}/args/1' must not be empty").into(),
                        ));
                    }
                    _ => {
                        return Err(Cql2Error::Structure(
                            format!("the 'in' list at '{ptr}/args/1' must be an array").into(),
                        ));
                    }
                }
            }
            Ok(Expr::Dyadic(op, Box::new(a), Box::new(b)))
        }
    }
}

fn decode_function(v: &Value, ptr: &str, depth: usize) -> Result<Expr, Cql2Error> {
    let obj = v.as_object().ok_or_else(|| {
        Cql2Error::Structure(format!("'function' must be an object at '{ptr}/function'").into())
    })?;
    let name = obj.get("name").and_then(Value::as_str).ok_or_else(|| {
        Cql2Error::Structure(
            format!("function 'name' must be a string at '{ptr}/function/name'").into(),
        )
    })?;
    let args = match obj.get("args") {
        Some(Value::Array(xs)) => xs
            .iter()
            .enumerate()
            .map(|(i, x)| decode_at(x, &format!("{ptr}/function/args/{i}"), depth + 1))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(Cql2Error::Structure(
                format!("function 'args' must be an array at '{ptr}/function/args'").into(),
            ));
        }
        None => vec![],
    };
    Ok(Expr::Function(Call::new(name, args)))
}

fn decode_timestamp(v: &Value, ptr: &str) -> Result<Expr, Cql2Error> {
    let s = v.as_str().ok_or_else(|| {
        Cql2Error::Structure(format!("'timestamp' must be a string at '{ptr}'").into())
    })?;
    s.parse::<Timestamp>().map(Expr::Timestamp).map_err(|x| {
        Cql2Error::Encoding(format!("bad timestamp '{s}' at '{ptr}': {x}").into())
    })
}

fn decode_date(v: &Value, ptr: &str) -> Result<Expr, Cql2Error> {
    let s = v.as_str().ok_or_else(|| {
        Cql2Error::Structure(format!("'date' must be a string at '{ptr}'").into())
    })?;
    s.parse::<Date>()
        .map(Expr::Date)
        .map_err(|x| Cql2Error::Encoding(format!("bad date '{s}' at '{ptr}': {x}").into()))
}

fn decode_interval(v: &Value, ptr: &str, depth: usize) -> Result<Expr, Cql2Error> {
    let xs = v.as_array().ok_or_else(|| {
        Cql2Error::Structure(format!("'interval' must be an array at '{ptr}'").into())
    })?;
    if xs.len() != 2 {
        return Err(Cql2Error::Structure(
            format!("an interval holds exactly 2 endpoints, found {} at '{ptr}'", xs.len()).into(),
        ));
    }
    let a = decode_interval_bound(&xs[0], &format!("{ptr}/0"), depth)?;
    let b = decode_interval_bound(&xs[1], &format!("{ptr}/1"), depth)?;
    // the grammar tolerates two open ends even though such an interval is
    // useless to most consumers...
    if matches!(a, Expr::Unbounded) && matches!(b, Expr::Unbounded) {
        debug!("interval at '{ptr}' is unbounded on both ends");
    }
    Ok(Expr::Interval(Box::new(a), Box::new(b)))
}

fn decode_interval_bound(v: &Value, ptr: &str, depth: usize) -> Result<Expr, Cql2Error> {
    match v {
        Value::String(s) if s == ".." => Ok(Expr::Unbounded),
        Value::String(s) if s.contains('T') => s.parse::<Timestamp>().map(Expr::Timestamp).map_err(
            |x| Cql2Error::Encoding(format!("bad timestamp '{s}' at '{ptr}': {x}").into()),
        ),
        Value::String(s) => s
            .parse::<Date>()
            .map(Expr::Date)
            .map_err(|x| Cql2Error::Encoding(format!("bad date '{s}' at '{ptr}': {x}").into())),
        Value::Object(_) => {
            let e = decode_at(v, ptr, depth + 1)?;
            match e {
                Expr::Id(_) | Expr::Function(_) => Ok(e),
                _ => Err(Cql2Error::Structure(
                    format!(
                        "an interval endpoint must be a date, timestamp, '..', property or function at '{ptr}'"
                    )
                    .into(),
                )),
            }
        }
        _ => Err(Cql2Error::Structure(
            format!("unusable interval endpoint at '{ptr}'").into(),
        )),
    }
}

fn decode_bbox(v: &Value, ptr: &str) -> Result<Expr, Cql2Error> {
    let xs = v.as_array().ok_or_else(|| {
        Cql2Error::Structure(format!("'bbox' must be an array at '{ptr}'").into())
    })?;
    let nums = xs
        .iter()
        .enumerate()
        .map(|(i, x)| geom::number_at(x, &format!("{ptr}/{i}")))
        .collect::<Result<Vec<_>, _>>()?;
    BBox::try_new(nums).map(|b| Expr::Spatial(G::BBox(b)))
}

// ===== serde integration ================================================

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        Filter::parse_json(&v).map_err(de::Error::custom)
    }
}
