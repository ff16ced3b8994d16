//! Adapter for scalar fields (text, numbers, booleans, dates).

use std::collections::BTreeMap;

use advsearch_dsl::{BoolClause, BoolQuery, MappingNode, Query, RangeOp};
use advsearch_model::{FieldAccess, FieldDefinition, resolve_value};
use serde_json::{Number, Value, json};

use crate::{
    AdapterResolver, FieldAdapter, FilterError, FilterResult, IndexContext, Operator,
};

/// Property holding the value with inheritance applied.
pub const STANDARD_PROPERTY: &str = "standard";
/// Property holding the object's own value.
pub const NOT_INHERITED_PROPERTY: &str = "notInherited";

/// Index representation of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Text,
    Numeric,
    Boolean,
    Date,
}

/// Adapter for every scalar field kind.
///
/// With inheritance considered, the field maps as an object with a
/// `standard` and a `notInherited` property and the index stores both
/// values. Without it, the field is a single leaf under its own name.
#[derive(Debug)]
pub struct DefaultAdapter<'r> {
    field: &'r FieldDefinition,
    value_type: ValueType,
    consider_inheritance: bool,
    keyword_subfield: &'r str,
}

impl<'r> DefaultAdapter<'r> {
    pub fn new(
        field: &'r FieldDefinition,
        value_type: ValueType,
        consider_inheritance: bool,
        keyword_subfield: &'r str,
    ) -> Self {
        Self {
            field,
            value_type,
            consider_inheritance,
            keyword_subfield,
        }
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn leaf_mapping(&self) -> MappingNode {
        match self.value_type {
            ValueType::Text => MappingNode::text_with_keyword(self.keyword_subfield),
            ValueType::Numeric => MappingNode::Float,
            ValueType::Boolean => MappingNode::Boolean,
            ValueType::Date => MappingNode::Date,
        }
    }

    /// Full dotted name of the indexed property a query targets.
    fn query_field(&self, path: &str, ignore_inheritance: bool) -> String {
        let base = format!("{path}{}", self.field.name);
        if !self.consider_inheritance {
            return base;
        }
        let property = if ignore_inheritance {
            NOT_INHERITED_PROPERTY
        } else {
            STANDARD_PROPERTY
        };
        format!("{base}.{property}")
    }

    fn unsupported(&self, operator: Operator) -> FilterError {
        FilterError::UnsupportedOperator {
            field: self.field.name.clone(),
            operator: operator.to_string(),
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> FilterError {
        FilterError::InvalidValue {
            field: self.field.name.clone(),
            reason: reason.into(),
        }
    }

    /// Coerces a raw stored value into the index representation.
    fn normalize(&self, value: Option<&Value>) -> FilterResult<Value> {
        let value = match value {
            None | Some(Value::Null) => return Ok(Value::Null),
            Some(v) => v,
        };
        match (self.value_type, value) {
            (ValueType::Text, Value::String(_)) => Ok(value.clone()),
            (ValueType::Text, Value::Number(n)) => Ok(Value::String(n.to_string())),
            (ValueType::Text, Value::Bool(b)) => Ok(Value::String(b.to_string())),
            (ValueType::Numeric, Value::Number(_)) => Ok(value.clone()),
            (ValueType::Numeric, Value::String(s)) if s.is_empty() => Ok(Value::Null),
            (ValueType::Numeric, Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| self.invalid(format!("`{s}` is not a finite number"))),
            (ValueType::Boolean, Value::Bool(_)) => Ok(value.clone()),
            (ValueType::Date, Value::String(_) | Value::Number(_)) => Ok(value.clone()),
            (value_type, other) => {
                Err(self.invalid(format!("{other} is not a {value_type:?} value")))
            }
        }
    }

    /// Checks a filter value against the field type.
    fn comparable(&self, value: &Value) -> FilterResult<Value> {
        let ok = match self.value_type {
            ValueType::Text => value.is_string(),
            ValueType::Numeric => value.is_number(),
            ValueType::Boolean => value.is_boolean(),
            ValueType::Date => value.is_string() || value.is_number(),
        };
        if ok {
            Ok(value.clone())
        } else {
            Err(self.invalid(format!("filter value {value} does not match field type")))
        }
    }
}

fn negate(query: Query) -> Query {
    BoolQuery::new().with(query, BoolClause::MustNot).into()
}

fn range_op(operator: Operator) -> Option<RangeOp> {
    match operator {
        Operator::Lt => Some(RangeOp::Lt),
        Operator::Lte => Some(RangeOp::Lte),
        Operator::Gt => Some(RangeOp::Gt),
        Operator::Gte => Some(RangeOp::Gte),
        _ => None,
    }
}

impl FieldAdapter for DefaultAdapter<'_> {
    fn field_definition(&self) -> &FieldDefinition {
        self.field
    }

    fn mapping_entry(&self) -> FilterResult<(String, MappingNode)> {
        let leaf = self.leaf_mapping();
        let mapping = if self.consider_inheritance {
            MappingNode::object(BTreeMap::from([
                (STANDARD_PROPERTY.to_string(), leaf.clone()),
                (NOT_INHERITED_PROPERTY.to_string(), leaf),
            ]))
        } else {
            leaf
        };
        Ok((self.field.name.clone(), mapping))
    }

    fn query_fragment(
        &self,
        value: &Value,
        operator: Operator,
        ignore_inheritance: bool,
        path: &str,
    ) -> FilterResult<Query> {
        if operator.is_existence() {
            return self.exists_fragment(operator.is_negated_existence(), ignore_inheritance, path);
        }

        let field = self.query_field(path, ignore_inheritance);
        let value = self.comparable(value)?;

        match (self.value_type, operator) {
            (ValueType::Text, Operator::Equals) => {
                Ok(Query::term(format!("{field}.{}", self.keyword_subfield), value))
            }
            (ValueType::Text, Operator::NotEquals) => Ok(negate(Query::term(
                format!("{field}.{}", self.keyword_subfield),
                value,
            ))),
            (ValueType::Text, Operator::Like) => {
                let text = value.as_str().unwrap_or_default();
                Ok(Query::query_string(text, vec![field]))
            }
            (ValueType::Text, op) => Err(self.unsupported(op)),
            (_, Operator::Equals) => Ok(Query::term(field, value)),
            (_, Operator::NotEquals) => Ok(negate(Query::term(field, value))),
            (ValueType::Numeric | ValueType::Date, op) => match range_op(op) {
                Some(range) => Ok(Query::range(field, range, value)),
                None => Err(self.unsupported(op)),
            },
            (ValueType::Boolean, op) => Err(self.unsupported(op)),
        }
    }

    fn exists_fragment(
        &self,
        is_negated: bool,
        ignore_inheritance: bool,
        path: &str,
    ) -> FilterResult<Query> {
        let exists = Query::exists(self.query_field(path, ignore_inheritance));
        Ok(if is_negated { negate(exists) } else { exists })
    }

    fn index_value(&self, object: &dyn FieldAccess, ctx: IndexContext) -> FilterResult<Value> {
        let name = &self.field.name;
        let standard = self.normalize(resolve_value(object, name, ctx.inherit_values()))?;
        if !self.consider_inheritance {
            return Ok(standard);
        }
        let own = self.normalize(object.value_of(name))?;
        Ok(json!({
            STANDARD_PROPERTY: standard,
            NOT_INHERITED_PROPERTY: own,
        }))
    }
}

fn scalar<'r>(
    field: &'r FieldDefinition,
    resolver: &'r AdapterResolver,
    value_type: ValueType,
    consider_inheritance: bool,
) -> FilterResult<Box<dyn FieldAdapter + 'r>> {
    Ok(Box::new(DefaultAdapter::new(
        field,
        value_type,
        consider_inheritance,
        &resolver.config().keyword_subfield,
    )))
}

pub fn text_adapter<'r>(
    field: &'r FieldDefinition,
    resolver: &'r AdapterResolver,
    consider_inheritance: bool,
) -> FilterResult<Box<dyn FieldAdapter + 'r>> {
    scalar(field, resolver, ValueType::Text, consider_inheritance)
}

pub fn numeric_adapter<'r>(
    field: &'r FieldDefinition,
    resolver: &'r AdapterResolver,
    consider_inheritance: bool,
) -> FilterResult<Box<dyn FieldAdapter + 'r>> {
    scalar(field, resolver, ValueType::Numeric, consider_inheritance)
}

pub fn checkbox_adapter<'r>(
    field: &'r FieldDefinition,
    resolver: &'r AdapterResolver,
    consider_inheritance: bool,
) -> FilterResult<Box<dyn FieldAdapter + 'r>> {
    scalar(field, resolver, ValueType::Boolean, consider_inheritance)
}

pub fn date_adapter<'r>(
    field: &'r FieldDefinition,
    resolver: &'r AdapterResolver,
    consider_inheritance: bool,
) -> FilterResult<Box<dyn FieldAdapter + 'r>> {
    scalar(field, resolver, ValueType::Date, consider_inheritance)
}
