// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Mixed geometry collection.
//!

use crate::{
    error::Cql2Error,
    geom::{G, Geo},
};
use core::fmt;
use serde_json::{Value, json};

/// Heterogeneous collection of non-collection geometries.
///
/// Nested collections and BBOX members are rejected: the JSON model has no
/// GeoJSON-compatible shape for a box inside a collection, so the restriction
/// holds on both encodings.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometries {
    items: Vec<G>,
}

impl Geometries {
    /// Constructor rejecting nested collections and BBOX members.
    pub fn try_new(items: Vec<G>) -> Result<Self, Cql2Error> {
        if items.is_empty() {
            return Err(Cql2Error::Structure(
                "a geometry collection holds at least 1 member".into(),
            ));
        }
        for g in &items {
            match g {
                G::Vec(_) => {
                    return Err(Cql2Error::Structure(
                        "a geometry collection cannot nest another collection".into(),
                    ));
                }
                G::BBox(_) => {
                    return Err(Cql2Error::Structure(
                        "a geometry collection cannot hold a BBOX".into(),
                    ));
                }
                _ => {}
            }
        }
        Ok(Geometries { items })
    }

    /// Return a reference to the member geometries.
    pub fn items(&self) -> &[G] {
        &self.items
    }
}

impl Geo for Geometries {
    fn is_2d(&self) -> bool {
        self.items.iter().all(|g| g.is_2d())
    }

    fn kind(&self) -> &'static str {
        "GeometryCollection"
    }

    fn to_geojson(&self) -> Value {
        let members: Vec<Value> = self.items.iter().map(|g| g.to_geojson()).collect();
        json!({"type": self.kind(), "geometries": members})
    }
}

impl fmt::Display for Geometries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.items.iter().map(|g| g.to_string()).collect();
        write!(f, "GEOMETRYCOLLECTION({})", items.join(", "))
    }
}
