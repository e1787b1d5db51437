// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Line string geometry.
//!

use crate::{
    error::Cql2Error,
    geom::{G, Geo, XY2V, all_2d, fmt_pos_list, pos_list_json},
};
use core::fmt;
use serde_json::{Value, json};

/// Line string w/ at least 2 positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    coords: XY2V,
}

impl Line {
    /// Constructor enforcing the 2-position minimum.
    pub fn try_new(coords: XY2V) -> Result<Self, Cql2Error> {
        if coords.len() < 2 {
            return Err(Cql2Error::Structure(
                format!("a line string holds at least 2 positions, found {}", coords.len()).into(),
            ));
        }
        check_positions(&coords)?;
        Ok(Line { coords })
    }

    /// Return a reference to the line's positions.
    pub fn positions(&self) -> &[Vec<f64>] {
        &self.coords
    }
}

// Shared dimensionality guard for line-shaped coordinate lists.
pub(crate) fn check_positions(coords: &XY2V) -> Result<(), Cql2Error> {
    for p in coords {
        if p.len() < 2 || p.len() > 3 {
            return Err(Cql2Error::Structure(
                format!("a position holds 2 or 3 coordinates, found {}", p.len()).into(),
            ));
        }
    }
    Ok(())
}

impl Geo for Line {
    fn is_2d(&self) -> bool {
        all_2d(&self.coords)
    }

    fn kind(&self) -> &'static str {
        "LineString"
    }

    fn to_geojson(&self) -> Value {
        json!({"type": self.kind(), "coordinates": pos_list_json(&self.coords)})
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LINESTRING{}({})",
            G::z_marker(self.is_2d()),
            fmt_pos_list(&self.coords)
        )
    }
}
