use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::FieldAccess;

/// One item of a field collection.
///
/// Serialized as a flat object: the variant key under `type` and one entry
/// per sub-field, e.g. `{"type": "Photo", "caption": "Sunset"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    #[serde(rename = "type")]
    pub variant_type: String,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl CollectionItem {
    pub fn new(variant_type: &str) -> Self {
        Self {
            variant_type: variant_type.into(),
            values: Map::new(),
        }
    }

    /// Builder-style sub-field assignment.
    #[must_use]
    pub fn with(mut self, field: &str, value: Value) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    pub fn variant_type(&self) -> &str {
        &self.variant_type
    }
}

// Items never have a parent: values inside a collection are not inherited.
impl FieldAccess for CollectionItem {
    fn value_of(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }
}

/// The ordered items stored in a collection field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCollection {
    pub items: Vec<CollectionItem>,
}

impl FieldCollection {
    pub fn new(items: Vec<CollectionItem>) -> Self {
        Self { items }
    }

    /// Parses the raw value of a collection field. `null` is an empty
    /// collection.
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Vec::<CollectionItem>::deserialize(value).map(Self::new)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CollectionItem> {
        self.items.iter()
    }
}
