// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Group imports of many common traits and types by adding a glob import for
//! use by clients of this library.
//!

pub use super::config::*;
pub use super::error::*;
pub use super::expr::{Call, Expr};
pub use super::geom::*;
pub use super::op::Op;

pub use super::Filter;
pub use super::{parse_json, parse_text, to_json, to_text};
