//! Search-engine primitives for advanced object search.
//!
//! Two value types, both rendering to the JSON dialect of a
//! document-oriented search engine:
//! - [`MappingNode`] — one entry of an index mapping (`nested`, `object`,
//!   or a leaf such as `text` / `keyword` / `float`)
//! - [`Query`] — a query fragment; [`BoolQuery`] combines fragments under
//!   `must` / `should` / `must_not` / `filter`, [`NestedQuery`] scopes a
//!   fragment to a nested path
//!
//! Nothing here talks to an engine. Callers serialize with `to_json()` or
//! `serde_json::to_value`.

mod mapping;
mod query;

pub use mapping::MappingNode;
pub use query::{BoolClause, BoolQuery, NestedQuery, Query, RangeOp};
