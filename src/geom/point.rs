// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Point geometry.
//!

use crate::{
    error::Cql2Error,
    geom::{G, Geo, XY1V, fmt_pos, pos_json},
};
use core::fmt;
use serde_json::{Value, json};

/// 2D or 3D point geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coord: XY1V,
}

impl Point {
    /// Constructor enforcing 2 or 3 coordinates.
    pub fn try_new(coord: XY1V) -> Result<Self, Cql2Error> {
        if coord.len() == 2 || coord.len() == 3 {
            Ok(Point { coord })
        } else {
            Err(Cql2Error::Structure(
                format!("a point holds 2 or 3 coordinates, found {}", coord.len()).into(),
            ))
        }
    }

    /// Return a reference to the point's coordinates.
    pub fn xy(&self) -> &[f64] {
        &self.coord
    }

    /// Return the 1st coordinate of this.
    pub fn x(&self) -> f64 {
        self.coord[0]
    }

    /// Return the 2nd coordinate of this.
    pub fn y(&self) -> f64 {
        self.coord[1]
    }

    /// Return the 3rd coordinate of this if it's a 3D one. Return `None`
    /// otherwise.
    pub fn z(&self) -> Option<f64> {
        self.coord.get(2).copied()
    }
}

impl Geo for Point {
    fn is_2d(&self) -> bool {
        self.coord.len() == 2
    }

    fn kind(&self) -> &'static str {
        "Point"
    }

    fn to_geojson(&self) -> Value {
        json!({"type": self.kind(), "coordinates": pos_json(&self.coord)})
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "POINT{}({})",
            G::z_marker(self.is_2d()),
            fmt_pos(&self.coord)
        )
    }
}
