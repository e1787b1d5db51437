// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Multi-point geometry.
//!

use crate::{
    error::Cql2Error,
    geom::{G, Geo, XY2V, all_2d, fmt_pos, line::check_positions, pos_list_json},
};
use core::fmt;
use serde_json::{Value, json};

/// Collection of points.
///
/// The text form always renders each member's coordinates inside its own
/// parentheses; the parser additionally accepts the bare comma-separated
/// spelling found in the wild.
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    coords: XY2V,
}

impl Points {
    /// Constructor enforcing a non-empty member list.
    pub fn try_new(coords: XY2V) -> Result<Self, Cql2Error> {
        if coords.is_empty() {
            return Err(Cql2Error::Structure(
                "a multi-point holds at least 1 point".into(),
            ));
        }
        check_positions(&coords)?;
        Ok(Points { coords })
    }

    /// Return a reference to the member positions.
    pub fn positions(&self) -> &[Vec<f64>] {
        &self.coords
    }

    /// Return the number of member points.
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }
}

impl Geo for Points {
    fn is_2d(&self) -> bool {
        all_2d(&self.coords)
    }

    fn kind(&self) -> &'static str {
        "MultiPoint"
    }

    fn to_geojson(&self) -> Value {
        json!({"type": self.kind(), "coordinates": pos_list_json(&self.coords)})
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.coords.iter().map(|p| format!("({})", fmt_pos(p))).collect();
        write!(
            f,
            "MULTIPOINT{}({})",
            G::z_marker(self.is_2d()),
            items.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesized_output() {
        let mp = Points::try_new(vec![vec![7.0, 50.0], vec![10.0, 51.0]]).unwrap();
        assert_eq!(mp.num_points(), 2);
        assert_eq!(mp.to_string(), "MULTIPOINT((7.0 50.0), (10.0 51.0))");
    }

    #[test]
    fn test_empty() {
        assert!(Points::try_new(vec![]).is_err());
    }
}
