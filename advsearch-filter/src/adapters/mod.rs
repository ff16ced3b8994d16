//! Built-in field adapters.

mod default;
mod fieldcollections;

pub use default::{
    DefaultAdapter, NOT_INHERITED_PROPERTY, STANDARD_PROPERTY, ValueType, checkbox_adapter,
    date_adapter, numeric_adapter, text_adapter,
};
pub use fieldcollections::{
    CollectionIndexData, FieldcollectionsAdapter, IndexRecord, fieldcollections_adapter,
};
