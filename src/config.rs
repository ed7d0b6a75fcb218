use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::FilterOptions;
use crate::types::{PrefixPolicy, RuleConfig};

/// Filter configuration document
///
/// ```json
/// {
///   "prefix_policy": "reject",
///   "rules": [
///     { "action": "allow", "address": "192.168.0.0", "prefix_len": 16 },
///     { "action": "deny" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub prefix_policy: PrefixPolicy,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl FilterConfig {
    /// Compile options derived from this document
    pub fn options(&self) -> FilterOptions {
        FilterOptions::new().with_prefix_policy(self.prefix_policy)
    }
}

/// Parse a filter configuration from JSON text.
pub fn parse_config(text: &str) -> Result<FilterConfig> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a filter configuration from a JSON file.
pub fn parse_config_from_file(path: impl AsRef<Path>) -> Result<FilterConfig> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_config(&text)
}
