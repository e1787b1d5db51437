// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Polygon geometry.
//!

use crate::{
    error::Cql2Error,
    geom::{G, Geo, XY3V, all_2d, fmt_ring_list, line::check_positions, ring_list_json},
};
use core::fmt;
use serde_json::{Value, json};

/// Polygon made of 1 outer ring and any number of inner rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: XY3V,
}

impl Polygon {
    /// Constructor enforcing that every linear ring holds at least 4
    /// positions.
    pub fn try_new(rings: XY3V) -> Result<Self, Cql2Error> {
        if rings.is_empty() {
            return Err(Cql2Error::Structure(
                "a polygon holds at least 1 linear ring".into(),
            ));
        }
        check_rings(&rings)?;
        Ok(Polygon { rings })
    }

    /// Return a reference to the polygon's rings.
    pub fn rings(&self) -> &[Vec<Vec<f64>>] {
        &self.rings
    }
}

// Shared ring guard, also used by the multi-polygon constructor.
pub(crate) fn check_rings(rings: &XY3V) -> Result<(), Cql2Error> {
    for r in rings {
        if r.len() < 4 {
            return Err(Cql2Error::Structure(
                format!("a linear ring holds at least 4 positions, found {}", r.len()).into(),
            ));
        }
        check_positions(r)?;
    }
    Ok(())
}

impl Geo for Polygon {
    fn is_2d(&self) -> bool {
        self.rings.iter().all(|r| all_2d(r))
    }

    fn kind(&self) -> &'static str {
        "Polygon"
    }

    fn to_geojson(&self) -> Value {
        json!({"type": self.kind(), "coordinates": ring_list_json(&self.rings)})
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "POLYGON{}({})",
            G::z_marker(self.is_2d()),
            fmt_ring_list(&self.rings)
        )
    }
}
