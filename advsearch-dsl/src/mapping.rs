use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node of an index mapping.
///
/// Serializes with the engine's `type` discriminator, e.g.
/// `{"type": "nested", "properties": {...}}` or `{"type": "keyword"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MappingNode {
    /// Each array element is indexed as its own hidden document, so queries
    /// match sibling values only within one element.
    Nested {
        #[serde(default)]
        properties: BTreeMap<String, MappingNode>,
    },
    Object {
        #[serde(default)]
        properties: BTreeMap<String, MappingNode>,
    },
    Text {
        /// Multi-field variants, e.g. a `keyword` copy for exact matching.
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        fields: BTreeMap<String, MappingNode>,
    },
    Keyword,
    Float,
    Boolean,
    Date,
}

impl MappingNode {
    pub fn nested(properties: BTreeMap<String, MappingNode>) -> Self {
        Self::Nested { properties }
    }

    pub fn object(properties: BTreeMap<String, MappingNode>) -> Self {
        Self::Object { properties }
    }

    /// Analyzed text with an exact-match `keyword` sub-field named `subfield`.
    pub fn text_with_keyword(subfield: &str) -> Self {
        Self::Text {
            fields: BTreeMap::from([(subfield.to_string(), Self::Keyword)]),
        }
    }

    /// Child properties of `nested` and `object` nodes.
    pub fn properties(&self) -> Option<&BTreeMap<String, MappingNode>> {
        match self {
            Self::Nested { properties } | Self::Object { properties } => Some(properties),
            _ => None,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested { .. })
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Every variant is a plain map of strings and nodes.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
