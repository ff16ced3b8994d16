//! Object model for advanced object search.
//!
//! Defines the schema-side and instance-side types the search adapters
//! operate on:
//! - [`ObjectSchema`] / [`FieldDefinition`] — a class and its typed fields
//! - [`VariantSchema`] — one field-collection variant type and its sub-fields
//! - [`VariantRegistry`] — lookup of every registered variant type
//! - [`DataObject`] / [`FieldAccess`] — live object data, with parent-based
//!   value inheritance
//! - [`FieldCollection`] / [`CollectionItem`] — the items of a collection field
//!
//! These types carry no search-engine knowledge; the adapters in
//! `advsearch-filter` translate them into mappings, queries and index data.

mod collection;
mod object;
mod registry;
mod schema;

pub use collection::{CollectionItem, FieldCollection};
pub use object::{DataObject, FieldAccess, is_empty_value, resolve_value};
pub use registry::{InMemoryVariantRegistry, VariantRegistry};
pub use schema::{FieldDefinition, FieldKind, ObjectSchema, VariantSchema};
