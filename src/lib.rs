// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! OGC CQL2 bidirectional translator between the Text and JSON encodings.
//!
//! The next paragraphs explain the elements of this project as well as the
//! rationale behind some of the decisions that shaped its components.
//!
//! # Filters
//!
//! The kernel of this project is the [`Filter`] type wrapping one abstract
//! syntax tree ([`Expr`]). Both mandated encodings parse into the same tree:
//!
//! ```rust
//! use cql2_codec::prelude::*;
//! use std::error::Error;
//!
//! # fn test() -> Result<(), Box<dyn Error>> {
//! let f1 = Filter::parse_text(r#""name" NOT LIKE 'foo%' AND "value" > 10"#)?;
//! // ...
//! let f2 = Filter::from_json_str(r#"
//! {
//!  "op": "t_finishes",
//!  "args": [
//!    { "interval": [ { "property": "starts_at" }, { "property": "ends_at" } ] },
//!    { "interval": [ "1991-10-07", "2010-02-10T05:29:20.073225Z" ] }
//!  ]
//! }"#)?;
//! #    Ok(())
//! # }
//! ```
//! An `Ok` result implies a syntactically correct parsed filter! The library
//! never evaluates filters against data; parsing, rendering and translating
//! between the two encodings is the whole job.
//!
//! # Round trips
//!
//! JSON is the canonical representation: translating a tree to JSON and back
//! is the identity, and so is rendering a tree to text and re-parsing it.
//! Text input itself is *not* reproduced byte-for-byte: the text serializer
//! is opinionated (quoted properties, parenthesized comparisons, `.0`
//! suffixes, 6-digit timestamps), so one pass may rewrite the spelling but a
//! second pass is stable:
//!
//! ```rust
//! use cql2_codec::Filter;
//! # use std::error::Error;
//! # fn test() -> Result<(), Box<dyn Error>> {
//! let f = Filter::parse_text("prop1 = 5")?;
//! assert_eq!(f.to_text(), r#"("prop1" = 5.0)"#);
//! assert_eq!(Filter::parse_text(&f.to_text())?, f);
//! assert_eq!(Filter::parse_json(&f.to_json())?, f);
//! #    Ok(())
//! # }
//! ```
//!
//! For quick manual checks a standalone `repl` binary is included:
//! ```bash
//! cargo r --bin repl↵
//! ```
//!
//! # Third-party crates
//!
//! 1. PEG
//!    * [`peg`](https://crates.io/crates/peg): Provides a Rust macro that builds
//!      a recursive descent parser from a concise definition of a grammar.
//! 2. JSON:
//!    * [serde](https://crates.io/crates/serde) +
//!      [serde_json](https://crates.io/crates/serde_json) for the JSON
//!      encoding and the `Serialize`/`Deserialize` impls on [`Filter`].
//! 3. Date + Time:
//!    * [jiff](https://crates.io/crates/jiff): for calendar dates and UTC
//!      timestamps w/ sub-second precision.
//!
//! Nesting depth of accepted input is bounded; see [`Config`].
//!

mod config;
mod error;
mod expr;
mod geom;
mod json;
mod op;
mod text;

pub use config::{Config, config};
pub use error::Cql2Error;
pub use expr::{Call, Expr};
pub use geom::{BBox, G, Geo, Geometries, Line, Lines, Point, Points, Polygon, Polygons};
pub use op::Op;

pub mod prelude;

use core::fmt;
use serde_json::Value;
use std::str::FromStr;

/// An instance of an OGC CQL2 filter, independent of the encoding it came
/// from.
///
/// Equality is structural equality of the underlying syntax tree; two
/// filters compare equal exactly when they parse to the same tree, whatever
/// spelling or encoding produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter(Expr);

impl Filter {
    /// Try to construct from a text-encoded string.
    pub fn parse_text(s: &str) -> Result<Self, Cql2Error> {
        text::parse(s).map(Filter)
    }

    /// Try to construct from raw bytes holding a text-encoded filter.
    /// Non-UTF-8 input raises [`Cql2Error::Encoding`].
    pub fn parse_text_bytes(b: &[u8]) -> Result<Self, Cql2Error> {
        let s = std::str::from_utf8(b)
            .map_err(|x| Cql2Error::Encoding(format!("input is not valid UTF-8: {x}").into()))?;
        Self::parse_text(s)
    }

    /// Try to construct from a JSON-encoded value.
    pub fn parse_json(v: &Value) -> Result<Self, Cql2Error> {
        json::decode(v).map(Filter)
    }

    /// Try to construct from a JSON-encoded string.
    pub fn from_json_str(s: &str) -> Result<Self, Cql2Error> {
        let v: Value = serde_json::from_str(s).map_err(|x| Cql2Error::Syntax {
            offset: 0,
            line: x.line(),
            column: x.column(),
            expected: format!("well-formed JSON: {x}"),
        })?;
        Self::parse_json(&v)
    }

    /// Render the canonical text encoding of this filter.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Render the canonical JSON encoding of this filter.
    pub fn to_json(&self) -> Value {
        json::encode(&self.0)
    }

    /// Return a reference to the root of the syntax tree.
    pub fn root(&self) -> &Expr {
        &self.0
    }

    /// Consume this filter and return the syntax tree.
    pub fn into_expr(self) -> Expr {
        self.0
    }
}

impl From<Expr> for Filter {
    fn from(e: Expr) -> Self {
        Filter(e)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Filter {
    type Err = Cql2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

/// Parse a text-encoded filter. Alias for [`Filter::parse_text`].
pub fn parse_text(s: &str) -> Result<Filter, Cql2Error> {
    Filter::parse_text(s)
}

/// Parse a JSON-encoded filter. Alias for [`Filter::parse_json`].
pub fn parse_json(v: &Value) -> Result<Filter, Cql2Error> {
    Filter::parse_json(v)
}

/// Render the canonical text encoding. Alias for [`Filter::to_text`].
pub fn to_text(f: &Filter) -> String {
    f.to_text()
}

/// Render the canonical JSON encoding. Alias for [`Filter::to_json`].
pub fn to_json(f: &Filter) -> Value {
    f.to_json()
}
