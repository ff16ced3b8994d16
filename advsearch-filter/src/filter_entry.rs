//! Filter entries: one user condition against one field.
//!
//! Wire format (camelCase keys, as posted by the search frontend):
//!
//! ```json
//! {"fieldname": "caption", "operator": "=", "filterEntryData": "x", "outerOperator": "must"}
//! ```
//!
//! Field-collection filters wrap a condition with the variant type it targets:
//!
//! ```json
//! {"type": "Photo", "filterCondition": {"fieldname": "caption", "filterEntryData": "x"}}
//! ```

use std::fmt;

use advsearch_dsl::{BoolClause, Query};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FilterError, FilterResult};

/// Comparison applied to a field's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "=", alias = "eq", alias = "equals")]
    Equals,
    #[serde(rename = "!=", alias = "ne", alias = "not_equals")]
    NotEquals,
    #[serde(rename = "<", alias = "lt")]
    Lt,
    #[serde(rename = "<=", alias = "lte")]
    Lte,
    #[serde(rename = ">", alias = "gt")]
    Gt,
    #[serde(rename = ">=", alias = "gte")]
    Gte,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "exists")]
    Exists,
    #[serde(rename = "not_exists")]
    NotExists,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Like => "like",
            Self::Exists => "exists",
            Self::NotExists => "not_exists",
        }
    }

    /// `Exists` / `NotExists` test presence instead of comparing a value.
    pub fn is_existence(self) -> bool {
        matches!(self, Self::Exists | Self::NotExists)
    }

    pub fn is_negated_existence(self) -> bool {
        self == Self::NotExists
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a condition combines with its siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OuterOperator {
    #[default]
    #[serde(rename = "must", alias = "and", alias = "AND")]
    And,
    #[serde(rename = "should", alias = "or", alias = "OR")]
    Or,
    #[serde(rename = "must_not", alias = "not", alias = "NOT")]
    Not,
}

impl OuterOperator {
    /// Bool-query slot this operator places a fragment in.
    pub fn clause(self) -> BoolClause {
        match self {
            Self::And => BoolClause::Must,
            Self::Or => BoolClause::Should,
            Self::Not => BoolClause::MustNot,
        }
    }
}

/// A single filter condition.
///
/// When `raw_fragment` is set it is used verbatim and `fieldname`,
/// `operator` and `value` are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEntry {
    pub fieldname: String,
    pub operator: Operator,
    pub value: Value,
    pub outer_operator: OuterOperator,
    pub ignore_inheritance: bool,
    pub raw_fragment: Option<Query>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFilterEntry {
    #[serde(default)]
    fieldname: Option<String>,
    #[serde(default)]
    operator: Operator,
    #[serde(default, alias = "value")]
    filter_entry_data: Value,
    #[serde(default)]
    outer_operator: OuterOperator,
    #[serde(default)]
    ignore_inheritance: bool,
    #[serde(default)]
    raw_query: Option<Value>,
}

impl FilterEntry {
    pub fn new(fieldname: &str, operator: Operator, value: Value) -> Self {
        Self {
            fieldname: fieldname.into(),
            operator,
            value,
            outer_operator: OuterOperator::default(),
            ignore_inheritance: false,
            raw_fragment: None,
        }
    }

    /// An entry carrying a prebuilt query fragment.
    pub fn raw(fragment: Query, outer_operator: OuterOperator) -> Self {
        Self {
            fieldname: String::new(),
            operator: Operator::default(),
            value: Value::Null,
            outer_operator,
            ignore_inheritance: false,
            raw_fragment: Some(fragment),
        }
    }

    #[must_use]
    pub fn with_outer_operator(mut self, outer_operator: OuterOperator) -> Self {
        self.outer_operator = outer_operator;
        self
    }

    #[must_use]
    pub fn ignoring_inheritance(mut self) -> Self {
        self.ignore_inheritance = true;
        self
    }

    /// Parses a condition in the frontend's wire format.
    ///
    /// A `rawQuery` object becomes the raw fragment; otherwise `fieldname`
    /// is required.
    pub fn parse(raw: &Value) -> FilterResult<Self> {
        if !raw.is_object() {
            return Err(FilterError::MalformedFilter(
                "filter condition must be an object".into(),
            ));
        }
        let entry = RawFilterEntry::deserialize(raw)
            .map_err(|e| FilterError::MalformedFilter(e.to_string()))?;

        if let Some(fragment) = entry.raw_query {
            let mut parsed = Self::raw(Query::Raw(fragment), entry.outer_operator);
            parsed.fieldname = entry.fieldname.unwrap_or_default();
            parsed.ignore_inheritance = entry.ignore_inheritance;
            return Ok(parsed);
        }

        let fieldname = entry
            .fieldname
            .filter(|f| !f.is_empty())
            .ok_or_else(|| FilterError::MalformedFilter("missing `fieldname`".into()))?;

        Ok(Self {
            fieldname,
            operator: entry.operator,
            value: entry.filter_entry_data,
            outer_operator: entry.outer_operator,
            ignore_inheritance: entry.ignore_inheritance,
            raw_fragment: None,
        })
    }
}

/// A condition scoped to the items of one field-collection variant type.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionQueryFilter {
    pub variant_type: String,
    pub condition: FilterEntry,
}

impl CollectionQueryFilter {
    pub fn new(variant_type: &str, condition: FilterEntry) -> Self {
        Self {
            variant_type: variant_type.into(),
            condition,
        }
    }

    /// Parses `{"type": ..., "filterCondition": {...}}`. Both keys are
    /// required; `variantType` / `condition` are accepted as aliases.
    pub fn parse(raw: &Value) -> FilterResult<Self> {
        let object = raw.as_object().ok_or_else(|| {
            FilterError::MalformedFilter("field collection filter must be an object".into())
        })?;

        let variant_type = ["type", "variantType"]
            .iter()
            .find_map(|key| object.get(*key))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| FilterError::MalformedFilter("missing field collection `type`".into()))?;

        let condition = ["filterCondition", "condition"]
            .iter()
            .find_map(|key| object.get(*key))
            .ok_or_else(|| FilterError::MalformedFilter("missing `filterCondition`".into()))?;

        Ok(Self::new(variant_type, FilterEntry::parse(condition)?))
    }
}
