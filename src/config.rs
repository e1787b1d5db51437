// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Configuration parameters affecting the behaviour of this library.
//!

use dotenvy::var;
use std::sync::OnceLock;

/// Fallback nesting limit when `CQL2_MAX_DEPTH` is unset.
pub(crate) const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunable knobs read once from the process environment.
#[derive(Debug)]
pub struct Config {
    max_depth: usize,
}

static CONFIG: OnceLock<Config> = OnceLock::new();
/// This library configuration Singleton.
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

impl Default for Config {
    fn default() -> Self {
        let max_depth = var("CQL2_MAX_DEPTH")
            .ok()
            .and_then(|x| x.parse().ok())
            .unwrap_or(DEFAULT_MAX_DEPTH);

        Self { max_depth }
    }
}

impl Config {
    /// Return the configured cap on filter nesting depth. Both the text
    /// parser and the JSON decoder refuse input nested deeper than this.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_default_max_depth() {
        let max_depth = config().max_depth();
        assert_eq!(max_depth, DEFAULT_MAX_DEPTH);
    }
}
