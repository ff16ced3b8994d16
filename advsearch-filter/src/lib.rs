//! Field definition adapters for advanced object search.
//!
//! Each field kind gets a [`FieldAdapter`] that can
//! - describe its index mapping,
//! - compile a [`FilterEntry`] into a query fragment,
//! - extract its index value from a live object,
//! - describe itself to the field-selection UI.
//!
//! Adapters are looked up through an [`AdapterResolver`], a registry keyed by
//! field type tag. The [`FieldcollectionsAdapter`] recurses through the
//! resolver into the sub-fields of every variant type; [`SearchService`]
//! applies the adapters to all fields of an object class.
//!
//! # Inheritance
//!
//! Whether empty values resolve from parent objects is carried by an
//! [`IndexContext`] passed into every extraction call. Collection items never
//! inherit: the collection adapter hands its sub-fields a context with
//! inheritance disabled and leaves the caller's context as it was.

pub mod adapters;
mod adapter;
mod config;
mod context;
mod error;
mod filter_entry;
mod resolver;
mod service;

pub use adapter::{FieldAdapter, FieldSelectionInformation};
pub use adapters::{
    CollectionIndexData, DefaultAdapter, FieldcollectionsAdapter, IndexRecord, ValueType,
};
pub use config::SearchConfig;
pub use context::IndexContext;
pub use error::{FilterError, FilterResult};
pub use filter_entry::{CollectionQueryFilter, FilterEntry, Operator, OuterOperator};
pub use resolver::{AdapterConstructor, AdapterResolver};
pub use service::SearchService;
