//! Adapter for field-collection fields.
//!
//! A collection field holds items of several variant types, each with its own
//! sub-fields. The index keeps one nested level for the field and one per
//! variant type:
//!
//! ```text
//! images                  nested
//! └── Photo               nested
//!     ├── caption         (sub-field mapping)
//!     └── width           (sub-field mapping)
//! ```
//!
//! Queries mirror that shape, so a condition only matches values that sit in
//! the same item of the targeted variant type.

use std::collections::BTreeMap;

use advsearch_dsl::{BoolClause, BoolQuery, MappingNode, Query};
use advsearch_model::{
    FieldAccess, FieldCollection, FieldDefinition, FieldKind, VariantSchema, resolve_value,
};
use serde_json::{Map, Value, json};
use tracing::{debug, trace};

use crate::{
    AdapterResolver, CollectionQueryFilter, FieldAdapter, FieldSelectionInformation, FilterError,
    FilterResult, IndexContext, Operator,
};

/// Extracted sub-field values of one collection item.
pub type IndexRecord = Map<String, Value>;

/// Index data of a collection field: records grouped by variant type, item
/// order preserved within each group.
pub type CollectionIndexData = BTreeMap<String, Vec<IndexRecord>>;

/// Adapter for a `fieldcollections` field definition.
#[derive(Debug)]
pub struct FieldcollectionsAdapter<'r> {
    field: &'r FieldDefinition,
    allowed_types: &'r [String],
    resolver: &'r AdapterResolver,
}

impl<'r> FieldcollectionsAdapter<'r> {
    pub fn new(field: &'r FieldDefinition, resolver: &'r AdapterResolver) -> FilterResult<Self> {
        let FieldKind::Fieldcollections { allowed_types } = &field.kind else {
            return Err(FilterError::UnsupportedFieldType(field.tag().to_string()));
        };
        Ok(Self {
            field,
            allowed_types: allowed_types.as_slice(),
            resolver,
        })
    }

    /// Variant types this field indexes. An empty declaration means every
    /// type currently registered.
    pub fn effective_variant_types(&self) -> Vec<String> {
        if self.allowed_types.is_empty() {
            self.resolver.variants().type_keys()
        } else {
            self.allowed_types.to_vec()
        }
    }

    fn variant(&self, key: &str) -> FilterResult<&'r VariantSchema> {
        self.resolver
            .variants()
            .get_by_key(key)
            .ok_or_else(|| FilterError::UnknownVariantType(key.to_string()))
    }

    /// Two-level nested mapping over every effective variant type.
    pub fn build_mapping(&self) -> FilterResult<(String, MappingNode)> {
        let variant_types = self.effective_variant_types();
        debug!(
            field = %self.field.name,
            variants = variant_types.len(),
            "Building field collection mapping"
        );

        let mut variant_properties = BTreeMap::new();
        for key in variant_types {
            let variant = self.variant(&key)?;
            let mut properties = BTreeMap::new();
            for sub_field in &variant.fields {
                let (name, mapping) = self.resolver.resolve(sub_field, false)?.mapping_entry()?;
                properties.insert(name, mapping);
            }
            variant_properties.insert(key, MappingNode::nested(properties));
        }

        Ok((self.field.name.clone(), MappingNode::nested(variant_properties)))
    }

    /// Compiles a condition on one variant type's sub-field into
    /// `nested(<prefix><field>, nested(<prefix><field>.<type>, bool))`.
    ///
    /// Sub-field adapters are always asked to ignore inheritance; collection
    /// items never inherit, so `_ignore_inheritance` has no effect here.
    pub fn build_query(
        &self,
        filter: &CollectionQueryFilter,
        _ignore_inheritance: bool,
        path: &str,
    ) -> FilterResult<Query> {
        let outer_path = format!("{path}{}", self.field.name);
        let inner_path = format!("{outer_path}.{}", filter.variant_type);
        let condition = &filter.condition;
        let clause = condition.outer_operator.clause();

        let mut inner = BoolQuery::new();
        if let Some(fragment) = &condition.raw_fragment {
            debug!(path = %inner_path, "Adding raw field collection fragment");
            inner.add(fragment.clone(), clause);
        } else {
            let variant = self.variant(&filter.variant_type)?;
            let sub_field = variant.field(&condition.fieldname).ok_or_else(|| {
                FilterError::UnknownSubField {
                    variant_type: filter.variant_type.clone(),
                    field: condition.fieldname.clone(),
                }
            })?;
            let adapter = self.resolver.resolve(sub_field, false)?;
            let sub_path = format!("{inner_path}.");

            let fragment = if condition.operator.is_existence() {
                adapter.exists_fragment(condition.operator.is_negated_existence(), true, &sub_path)?
            } else {
                adapter.query_fragment(&condition.value, condition.operator, true, &sub_path)?
            };
            debug!(
                path = %inner_path,
                field = %condition.fieldname,
                operator = %condition.operator,
                "Compiled field collection condition"
            );
            inner.add(fragment, clause);
        }

        Ok(Query::nested(outer_path, Query::nested(inner_path, inner.into())))
    }

    /// Extracts one record per collection item, grouped by variant type.
    ///
    /// The collection value itself is read under `ctx`; sub-field values are
    /// read with inheritance disabled. `ctx` is a copy, so the caller's
    /// setting is the same after the call whether it succeeds or fails.
    pub fn extract(
        &self,
        object: &dyn FieldAccess,
        ctx: IndexContext,
    ) -> FilterResult<CollectionIndexData> {
        let mut data = CollectionIndexData::new();

        let Some(raw) = resolve_value(object, &self.field.name, ctx.inherit_values()) else {
            trace!(field = %self.field.name, "No field collection value");
            return Ok(data);
        };
        let collection = FieldCollection::from_value(raw).map_err(|source| {
            FilterError::MalformedCollection {
                field: self.field.name.clone(),
                source,
            }
        })?;
        if collection.is_empty() {
            trace!(field = %self.field.name, "Empty field collection");
            return Ok(data);
        }

        let item_ctx = ctx.without_inheritance();
        debug!(field = %self.field.name, items = collection.len(), "Extracting field collection");

        for (position, item) in collection.iter().enumerate() {
            let variant = self.variant(item.variant_type())?;
            trace!(position, variant = %variant.key, "Extracting field collection item");

            let mut record = IndexRecord::new();
            for sub_field in &variant.fields {
                let value = self.resolver.resolve(sub_field, false)?.index_value(item, item_ctx)?;
                record.insert(sub_field.name.clone(), value);
            }
            data.entry(variant.key.clone()).or_default().push(record);
        }

        Ok(data)
    }

    /// Field-selection entry listing the declared allowed types, each
    /// wrapped in a one-element list.
    pub fn describe(&self) -> Vec<FieldSelectionInformation> {
        let allowed_types: Vec<Value> = self.allowed_types.iter().map(|t| json!([t])).collect();
        let mut options = Map::new();
        options.insert("allowedTypes".to_string(), Value::Array(allowed_types));

        vec![FieldSelectionInformation::new(
            &self.field.name,
            &self.field.title,
            self.field.tag(),
            options,
        )]
    }
}

impl FieldAdapter for FieldcollectionsAdapter<'_> {
    fn field_definition(&self) -> &FieldDefinition {
        self.field
    }

    fn mapping_entry(&self) -> FilterResult<(String, MappingNode)> {
        self.build_mapping()
    }

    /// `value` is a field-collection filter,
    /// `{"type": ..., "filterCondition": {...}}`; the operator lives inside it.
    fn query_fragment(
        &self,
        value: &Value,
        _operator: Operator,
        ignore_inheritance: bool,
        path: &str,
    ) -> FilterResult<Query> {
        let filter = CollectionQueryFilter::parse(value)?;
        self.build_query(&filter, ignore_inheritance, path)
    }

    /// Matches objects with (or without) at least one collection item.
    fn exists_fragment(
        &self,
        is_negated: bool,
        _ignore_inheritance: bool,
        path: &str,
    ) -> FilterResult<Query> {
        let any_item = Query::nested(format!("{path}{}", self.field.name), Query::MatchAll);
        Ok(if is_negated {
            BoolQuery::new().with(any_item, BoolClause::MustNot).into()
        } else {
            any_item
        })
    }

    fn index_value(&self, object: &dyn FieldAccess, ctx: IndexContext) -> FilterResult<Value> {
        let data = self.extract(object, ctx)?;
        if data.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::to_value(data)?)
    }

    fn field_selection_information(&self) -> Vec<FieldSelectionInformation> {
        self.describe()
    }
}

pub fn fieldcollections_adapter<'r>(
    field: &'r FieldDefinition,
    resolver: &'r AdapterResolver,
    _consider_inheritance: bool,
) -> FilterResult<Box<dyn FieldAdapter + 'r>> {
    Ok(Box::new(FieldcollectionsAdapter::new(field, resolver)?))
}
