// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Multi-line geometry.
//!

use crate::{
    error::Cql2Error,
    geom::{G, Geo, XY3V, all_2d, fmt_ring_list, line::check_positions, ring_list_json},
};
use core::fmt;
use serde_json::{Value, json};

/// Collection of line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Lines {
    lines: XY3V,
}

impl Lines {
    /// Constructor enforcing a non-empty member list and the 2-position
    /// minimum on each member.
    pub fn try_new(lines: XY3V) -> Result<Self, Cql2Error> {
        if lines.is_empty() {
            return Err(Cql2Error::Structure(
                "a multi-line holds at least 1 line string".into(),
            ));
        }
        for l in &lines {
            if l.len() < 2 {
                return Err(Cql2Error::Structure(
                    format!("a line string holds at least 2 positions, found {}", l.len()).into(),
                ));
            }
            check_positions(l)?;
        }
        Ok(Lines { lines })
    }

    /// Return a reference to the member line strings.
    pub fn lines(&self) -> &[Vec<Vec<f64>>] {
        &self.lines
    }
}

impl Geo for Lines {
    fn is_2d(&self) -> bool {
        self.lines.iter().all(|l| all_2d(l))
    }

    fn kind(&self) -> &'static str {
        "MultiLineString"
    }

    fn to_geojson(&self) -> Value {
        json!({"type": self.kind(), "coordinates": ring_list_json(&self.lines)})
    }
}

impl fmt::Display for Lines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MULTILINESTRING{}({})",
            G::z_marker(self.is_2d()),
            fmt_ring_list(&self.lines)
        )
    }
}
