use serde::{Deserialize, Serialize};

/// Settings shared by every adapter built from one resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Whether top-level fields resolve inherited values when indexing.
    pub inherit_values: bool,
    /// Name of the exact-match keyword sub-field on text mappings.
    pub keyword_subfield: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            inherit_values: true,
            keyword_subfield: "raw".to_string(),
        }
    }
}

impl SearchConfig {
    /// Parses a JSON config object; absent keys keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
