// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Spatial literal types embedded in CQL2 filters.
//!
//! Geometries here are plain coordinate holders: the model stores explicit
//! 2- or 3-tuples and performs no CRS validation or geometric computation.
//! Each type renders itself as WKT (`Display`) and as a GeoJSON value
//! ([`Geo::to_geojson`]); the inverse GeoJSON mapping lives in
//! [`from_geojson`].
//!

mod bbox;
mod collection;
mod line;
mod lines;
mod point;
mod points;
mod polygon;
mod polygons;

pub use bbox::*;
pub use collection::*;
pub use line::*;
pub use lines::*;
pub use point::*;
pub use points::*;
pub use polygon::*;
pub use polygons::*;

use crate::{error::Cql2Error, expr::fmt_num};
use core::fmt;
use serde_json::{Value, json};

// type aliases to keep the deeply nested coordinate vectors readable...
pub(crate) type XY1V = Vec<f64>;
pub(crate) type XY2V = Vec<Vec<f64>>;
pub(crate) type XY3V = Vec<Vec<Vec<f64>>>;
pub(crate) type XY4V = Vec<Vec<Vec<Vec<f64>>>>;

/// Geometry type variants handled by this library.
#[derive(Debug, Clone, PartialEq)]
pub enum G {
    /// Point geometry.
    Point(Point),
    /// Line geometry.
    Line(Line),
    /// Polygon geometry.
    Polygon(Polygon),
    /// Point collection.
    Points(Points),
    /// Line collection.
    Lines(Lines),
    /// Polygon collection.
    Polygons(Polygons),
    /// Mixed collection excluding collections and BBOX.
    Vec(Geometries),
    /// Bounding box geometry.
    BBox(BBox),
}

/// Trait implemented by all [geometry][G] types in this library.
pub trait Geo {
    /// Return TRUE when every coordinate is a 2-tuple; FALSE when any
    /// coordinate carries a Z value.
    fn is_2d(&self) -> bool;

    /// Return the GeoJSON name of this geometry type.
    fn kind(&self) -> &'static str;

    /// Generate the GeoJSON value representing this geometry.
    fn to_geojson(&self) -> Value;
}

impl Geo for G {
    fn is_2d(&self) -> bool {
        match self {
            G::Point(x) => x.is_2d(),
            G::Line(x) => x.is_2d(),
            G::Polygon(x) => x.is_2d(),
            G::Points(x) => x.is_2d(),
            G::Lines(x) => x.is_2d(),
            G::Polygons(x) => x.is_2d(),
            G::Vec(x) => x.is_2d(),
            G::BBox(x) => x.is_2d(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            G::Point(x) => x.kind(),
            G::Line(x) => x.kind(),
            G::Polygon(x) => x.kind(),
            G::Points(x) => x.kind(),
            G::Lines(x) => x.kind(),
            G::Polygons(x) => x.kind(),
            G::Vec(x) => x.kind(),
            G::BBox(x) => x.kind(),
        }
    }

    fn to_geojson(&self) -> Value {
        match self {
            G::Point(x) => x.to_geojson(),
            G::Line(x) => x.to_geojson(),
            G::Polygon(x) => x.to_geojson(),
            G::Points(x) => x.to_geojson(),
            G::Lines(x) => x.to_geojson(),
            G::Polygons(x) => x.to_geojson(),
            G::Vec(x) => x.to_geojson(),
            G::BBox(x) => x.to_geojson(),
        }
    }
}

impl fmt::Display for G {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        match self {
            G::Point(x) => write!(f, "{x}"),
            G::Line(x) => write!(f, "{x}"),
            G::Polygon(x) => write!(f, "{x}"),
            G::Points(x) => write!(f, "{x}"),
            G::Lines(x) => write!(f, "{x}"),
            G::Polygons(x) => write!(f, "{x}"),
            G::Vec(x) => write!(f, "{x}"),
            G::BBox(x) => write!(f, "{x}"),
        }
    }
}

impl G {
    /// Return this if it was indeed a Point, `None` otherwise.
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            G::Point(x) => Some(x),
            _ => None,
        }
    }

    /// Return this if it was indeed a Line, `None` otherwise.
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            G::Line(x) => Some(x),
            _ => None,
        }
    }

    /// Return this if it was indeed a Polygon, `None` otherwise.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            G::Polygon(x) => Some(x),
            _ => None,
        }
    }

    /// Return this if it was indeed a Point collection, `None` otherwise.
    pub fn as_points(&self) -> Option<&Points> {
        match self {
            G::Points(x) => Some(x),
            _ => None,
        }
    }

    /// The `" Z"` WKT dimension marker, or nothing for a 2D geometry.
    pub(crate) fn z_marker(is_2d: bool) -> &'static str {
        if is_2d { "" } else { " Z" }
    }
}

// ----- WKT coordinate rendering, shared by the per-type `Display` impls...

pub(crate) fn fmt_pos(coord: &[f64]) -> String {
    coord
        .iter()
        .map(|x| fmt_num(*x))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn fmt_pos_list(list: &[XY1V]) -> String {
    list.iter()
        .map(|p| fmt_pos(p))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn fmt_ring_list(rings: &[XY2V]) -> String {
    rings
        .iter()
        .map(|r| format!("({})", fmt_pos_list(r)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn all_2d(list: &[XY1V]) -> bool {
    list.iter().all(|p| p.len() == 2)
}

// ----- GeoJSON coordinate construction...

pub(crate) fn pos_json(coord: &[f64]) -> Value {
    Value::Array(coord.iter().map(|x| json!(x)).collect())
}

pub(crate) fn pos_list_json(list: &[XY1V]) -> Value {
    Value::Array(list.iter().map(|p| pos_json(p)).collect())
}

pub(crate) fn ring_list_json(rings: &[XY2V]) -> Value {
    Value::Array(rings.iter().map(|r| pos_list_json(r)).collect())
}

// ----- GeoJSON decoding...

/// Decode a GeoJSON geometry object (one with a `type` member) into a [`G`].
///
/// `ptr` is the JSON Pointer of `v` within the enclosing filter document and
/// only serves error reporting.
pub(crate) fn from_geojson(v: &Value, ptr: &str) -> Result<G, Cql2Error> {
    let obj = v.as_object().ok_or_else(|| {
        Cql2Error::Structure(format!("expected a GeoJSON object at '{ptr}'").into())
    })?;
    let kind = obj.get("type").and_then(Value::as_str).ok_or_else(|| {
        Cql2Error::Structure(format!("GeoJSON 'type' must be a string at '{ptr}'").into())
    })?;

    if kind == "GeometryCollection" {
        let members = obj.get("geometries").and_then(Value::as_array).ok_or_else(|| {
            Cql2Error::Structure(
                format!("GeometryCollection needs a 'geometries' array at '{ptr}'").into(),
            )
        })?;
        let items = members
            .iter()
            .enumerate()
            .map(|(i, m)| from_geojson(m, &format!("{ptr}/geometries/{i}")))
            .collect::<Result<Vec<_>, _>>()?;
        return Geometries::try_new(items).map(G::Vec);
    }

    let coords = obj.get("coordinates").ok_or_else(|| {
        Cql2Error::Structure(format!("GeoJSON 'coordinates' missing at '{ptr}'").into())
    })?;
    let cptr = format!("{ptr}/coordinates");
    match kind {
        "Point" => Point::try_new(position_at(coords, &cptr)?).map(G::Point),
        "LineString" => Line::try_new(positions_at(coords, &cptr)?).map(G::Line),
        "Polygon" => Polygon::try_new(rings_at(coords, &cptr)?).map(G::Polygon),
        "MultiPoint" => Points::try_new(positions_at(coords, &cptr)?).map(G::Points),
        "MultiLineString" => Lines::try_new(rings_at(coords, &cptr)?).map(G::Lines),
        "MultiPolygon" => Polygons::try_new(polygons_at(coords, &cptr)?).map(G::Polygons),
        other => Err(Cql2Error::Structure(
            format!("unsupported GeoJSON type '{other}' at '{ptr}'").into(),
        )),
    }
}

pub(crate) fn number_at(v: &Value, ptr: &str) -> Result<f64, Cql2Error> {
    v.as_f64().ok_or_else(|| {
        Cql2Error::Structure(format!("expected a number at '{ptr}'").into())
    })
}

fn position_at(v: &Value, ptr: &str) -> Result<XY1V, Cql2Error> {
    let xs = v.as_array().ok_or_else(|| {
        Cql2Error::Structure(format!("expected a position array at '{ptr}'").into())
    })?;
    if xs.len() < 2 || xs.len() > 3 {
        return Err(Cql2Error::Structure(
            format!("a position holds 2 or 3 numbers, found {} at '{ptr}'", xs.len()).into(),
        ));
    }
    xs.iter()
        .enumerate()
        .map(|(i, x)| number_at(x, &format!("{ptr}/{i}")))
        .collect()
}

fn positions_at(v: &Value, ptr: &str) -> Result<XY2V, Cql2Error> {
    let xs = v.as_array().ok_or_else(|| {
        Cql2Error::Structure(format!("expected an array of positions at '{ptr}'").into())
    })?;
    xs.iter()
        .enumerate()
        .map(|(i, x)| position_at(x, &format!("{ptr}/{i}")))
        .collect()
}

fn rings_at(v: &Value, ptr: &str) -> Result<XY3V, Cql2Error> {
    let xs = v.as_array().ok_or_else(|| {
        Cql2Error::Structure(format!("expected an array of position lists at '{ptr}'").into())
    })?;
    xs.iter()
        .enumerate()
        .map(|(i, x)| positions_at(x, &format!("{ptr}/{i}")))
        .collect()
}

fn polygons_at(v: &Value, ptr: &str) -> Result<XY4V, Cql2Error> {
    let xs = v.as_array().ok_or_else(|| {
        Cql2Error::Structure(format!("expected an array of polygons at '{ptr}'").into())
    })?;
    xs.iter()
        .enumerate()
        .map(|(i, x)| rings_at(x, &format!("{ptr}/{i}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_geojson_point() {
        let v = serde_json::json!({"type": "Point", "coordinates": [1.0, 2.0]});
        let g = from_geojson(&v, "").expect("a valid point");
        assert!(matches!(g, G::Point(_)));
        assert!(g.is_2d());
        assert_eq!(g.to_string(), "POINT(1.0 2.0)");
    }

    #[test]
    fn test_from_geojson_unknown_type() {
        let v = serde_json::json!({"type": "Circle", "coordinates": [1.0, 2.0]});
        let g = from_geojson(&v, "");
        assert!(matches!(g, Err(Cql2Error::Structure(_))));
    }

    #[test]
    fn test_from_geojson_bad_position() {
        let v = serde_json::json!({"type": "Point", "coordinates": [1.0]});
        let g = from_geojson(&v, "");
        assert!(matches!(g, Err(Cql2Error::Structure(_))));

        let v = serde_json::json!({"type": "Point", "coordinates": [1.0, 2.0, 3.0, 4.0]});
        let g = from_geojson(&v, "");
        assert!(matches!(g, Err(Cql2Error::Structure(_))));
    }

    #[test]
    fn test_roundtrip_geojson() {
        let v = serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        });
        let g = from_geojson(&v, "").expect("a valid polygon");
        assert_eq!(g.to_geojson(), v);
    }
}
