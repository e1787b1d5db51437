// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Axis-aligned bounding box.
//!

use crate::{
    error::Cql2Error,
    expr::fmt_num,
    geom::{Geo, XY1V, pos_json},
};
use core::fmt;
use serde_json::{Value, json};

/// 2D (4 numbers) or 3D (6 numbers) bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct BBox {
    coords: XY1V,
}

impl BBox {
    /// Constructor enforcing exactly 4 or 6 numbers.
    pub fn try_new(coords: XY1V) -> Result<Self, Cql2Error> {
        if coords.len() == 4 || coords.len() == 6 {
            Ok(BBox { coords })
        } else {
            Err(Cql2Error::Structure(
                format!("a bbox holds 4 or 6 numbers, found {}", coords.len()).into(),
            ))
        }
    }

    /// Return a reference to the box corners, `[xmin, ymin, xmax, ymax]` or
    /// the 6-number 3D form.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }
}

impl Geo for BBox {
    fn is_2d(&self) -> bool {
        self.coords.len() == 4
    }

    fn kind(&self) -> &'static str {
        "BBox"
    }

    fn to_geojson(&self) -> Value {
        json!({"bbox": pos_json(&self.coords)})
    }
}

impl fmt::Display for BBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.coords.iter().map(|x| fmt_num(*x)).collect();
        write!(f, "BBOX({})", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert!(BBox::try_new(vec![0.0; 4]).is_ok());
        assert!(BBox::try_new(vec![0.0; 6]).is_ok());
        assert!(matches!(
            BBox::try_new(vec![0.0; 5]),
            Err(Cql2Error::Structure(_))
        ));
    }

    #[test]
    fn test_wkt() {
        let bb = BBox::try_new(vec![-118.0, 33.8, -117.9, 34.0]).unwrap();
        assert_eq!(bb.to_string(), "BBOX(-118.0, 33.8, -117.9, 34.0)");
    }
}
