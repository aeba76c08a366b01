//! Process-wide configuration
//!
//! Defaults for the page parameter name, first-page key handling, and window
//! sizes. Every field can also be overridden per call through
//! [`LinkOptions`](crate::links::LinkOptions) or
//! [`paginate`](crate::links::PageLinkBuilder::paginate) options; the per-call
//! value always wins over the global one.

use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, RwLock};

/// Global pagination defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Query-string key that encodes the page number
    #[serde(default = "default_param_name")]
    pub param_name: String,

    /// Include the page key in URLs even for page 1
    #[serde(default)]
    pub params_on_first_page: bool,

    /// Inner window size: pages shown around the current page
    #[serde(default = "default_window")]
    pub window: u32,

    /// Outer window size: pages always shown near the first and last page
    #[serde(default)]
    pub outer_window: u32,

    /// Left outer window size
    #[serde(default)]
    pub left: u32,

    /// Right outer window size
    #[serde(default)]
    pub right: u32,
}

fn default_param_name() -> String {
    "page".to_string()
}

fn default_window() -> u32 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            param_name: default_param_name(),
            params_on_first_page: false,
            window: default_window(),
            outer_window: 0,
            left: 0,
            right: 0,
        }
    }
}

static GLOBAL: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));

/// Snapshot of the current global configuration
pub fn config() -> Config {
    GLOBAL.read().map(|c| c.clone()).unwrap_or_default()
}

/// Mutate the global configuration
///
/// ```rust
/// pagekit::configure(|c| c.param_name = "p".to_string());
/// # pagekit::configure(|c| *c = pagekit::Config::default());
/// ```
pub fn configure<F: FnOnce(&mut Config)>(f: F) {
    if let Ok(mut guard) = GLOBAL.write() {
        f(&mut guard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.param_name, "page");
        assert!(!config.params_on_first_page);
        assert_eq!(config.window, 4);
        assert_eq!(config.outer_window, 0);
        assert_eq!(config.left, 0);
        assert_eq!(config.right, 0);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_yaml::from_str("param_name: p\n").unwrap();
        assert_eq!(config.param_name, "p");
        assert_eq!(config.window, 4);
    }
}
