// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Multi-polygon geometry.
//!

use crate::{
    error::Cql2Error,
    geom::{G, Geo, XY4V, all_2d, fmt_ring_list, polygon::check_rings, ring_list_json},
};
use core::fmt;
use serde_json::{Value, json};

/// Collection of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygons {
    polys: XY4V,
}

impl Polygons {
    /// Constructor enforcing a non-empty member list and the ring minimums
    /// on each member.
    pub fn try_new(polys: XY4V) -> Result<Self, Cql2Error> {
        if polys.is_empty() {
            return Err(Cql2Error::Structure(
                "a multi-polygon holds at least 1 polygon".into(),
            ));
        }
        for p in &polys {
            if p.is_empty() {
                return Err(Cql2Error::Structure(
                    "a polygon holds at least 1 linear ring".into(),
                ));
            }
            check_rings(p)?;
        }
        Ok(Polygons { polys })
    }

    /// Return a reference to the member polygons.
    pub fn polygons(&self) -> &[Vec<Vec<Vec<f64>>>] {
        &self.polys
    }
}

impl Geo for Polygons {
    fn is_2d(&self) -> bool {
        self.polys.iter().all(|p| p.iter().all(|r| all_2d(r)))
    }

    fn kind(&self) -> &'static str {
        "MultiPolygon"
    }

    fn to_geojson(&self) -> Value {
        let coords: Vec<Value> = self.polys.iter().map(|p| ring_list_json(p)).collect();
        json!({"type": self.kind(), "coordinates": coords})
    }
}

impl fmt::Display for Polygons {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self
            .polys
            .iter()
            .map(|p| format!("({})", fmt_ring_list(p)))
            .collect();
        write!(
            f,
            "MULTIPOLYGON{}({})",
            G::z_marker(self.is_2d()),
            items.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wkt() {
        let ring = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ];
        let mp = Polygons::try_new(vec![vec![ring]]).unwrap();
        assert_eq!(
            mp.to_string(),
            "MULTIPOLYGON(((0.0 0.0, 1.0 0.0, 1.0 1.0, 0.0 0.0)))"
        );
    }
}
