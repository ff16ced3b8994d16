use advsearch_dsl::{MappingNode, Query};
use advsearch_model::{FieldAccess, FieldDefinition};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{FilterResult, IndexContext, Operator};

/// Search behaviour of one field definition.
///
/// Every field kind has an adapter; composite kinds (field collections)
/// delegate to the adapters of their sub-fields through the
/// [`AdapterResolver`](crate::AdapterResolver).
pub trait FieldAdapter {
    fn field_definition(&self) -> &FieldDefinition;

    /// Mapping entry for this field: `(property name, mapping)`.
    fn mapping_entry(&self) -> FilterResult<(String, MappingNode)>;

    /// Compiles a value comparison. `path` is the dotted prefix of the
    /// enclosing object (empty at top level, `"images.Photo."` inside a
    /// collection) and is prepended to the field name.
    fn query_fragment(
        &self,
        value: &Value,
        operator: Operator,
        ignore_inheritance: bool,
        path: &str,
    ) -> FilterResult<Query>;

    /// Compiles a presence test; `is_negated` selects "does not exist".
    fn exists_fragment(
        &self,
        is_negated: bool,
        ignore_inheritance: bool,
        path: &str,
    ) -> FilterResult<Query>;

    /// Value to store in the index document for `object`.
    fn index_value(&self, object: &dyn FieldAccess, ctx: IndexContext) -> FilterResult<Value>;

    /// Entries describing this field to the field-selection UI.
    fn field_selection_information(&self) -> Vec<FieldSelectionInformation> {
        let field = self.field_definition();
        vec![FieldSelectionInformation::new(
            &field.name,
            &field.title,
            field.tag(),
            Map::new(),
        )]
    }
}

/// One selectable field as presented by the search frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSelectionInformation {
    #[serde(rename = "fieldname")]
    pub name: String,
    #[serde(rename = "fieldlabel")]
    pub title: String,
    #[serde(rename = "fieldtype")]
    pub type_tag: String,
    /// Type-specific options, e.g. the allowed variant types of a collection.
    #[serde(rename = "context", default)]
    pub options: Map<String, Value>,
}

impl FieldSelectionInformation {
    pub fn new(name: &str, title: &str, type_tag: &str, options: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            type_tag: type_tag.into(),
            options,
        }
    }
}
