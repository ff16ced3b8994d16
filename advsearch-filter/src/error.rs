//! Error types for the filter layer.

use thiserror::Error;

/// Result type for mapping, query and indexing operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while building mappings, queries or index data.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A variant type key is not registered.
    #[error("unknown field collection type: {0}")]
    UnknownVariantType(String),

    /// A filter names a sub-field the variant type does not declare.
    #[error("invalid filter: unknown field `{field}` in field collection type `{variant_type}`")]
    UnknownSubField { variant_type: String, field: String },

    /// A filter names a field the object class does not declare.
    #[error("invalid filter: unknown field `{field}` in class `{class}`")]
    UnknownField { class: String, field: String },

    /// The filter payload is missing required keys or has the wrong shape.
    #[error("malformed filter: {0}")]
    MalformedFilter(String),

    /// The field's adapter cannot compile this operator.
    #[error("operator `{operator}` is not supported for field `{field}`")]
    UnsupportedOperator { field: String, operator: String },

    /// A filter value or stored value does not fit the field's type.
    #[error("invalid value for field `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },

    /// No adapter is registered for the field definition's type tag.
    #[error("no adapter registered for field type `{0}`")]
    UnsupportedFieldType(String),

    /// The stored value of a collection field is not a list of typed items.
    #[error("malformed field collection `{field}`: {source}")]
    MalformedCollection {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
