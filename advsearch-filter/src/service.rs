use std::collections::BTreeMap;
use std::sync::Arc;

use advsearch_dsl::{BoolQuery, MappingNode};
use advsearch_model::{FieldAccess, ObjectSchema, VariantRegistry};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::{
    AdapterResolver, FieldSelectionInformation, FilterEntry, FilterError, FilterResult,
    IndexContext, SearchConfig,
};

/// Class-level entry point: mapping, index documents and filter queries for
/// every field of an [`ObjectSchema`].
///
/// Top-level fields are resolved with inheritance considered; collection
/// fields handle their items without it.
#[derive(Debug)]
pub struct SearchService {
    resolver: AdapterResolver,
}

impl SearchService {
    /// Creates a service with the built-in adapters.
    pub fn new(variants: Arc<dyn VariantRegistry>, config: SearchConfig) -> Self {
        Self::with_resolver(AdapterResolver::with_defaults(variants, config))
    }

    pub fn with_resolver(resolver: AdapterResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &AdapterResolver {
        &self.resolver
    }

    /// Context for indexing a top-level object, per the configured default.
    pub fn index_context(&self) -> IndexContext {
        IndexContext::new(self.resolver.config().inherit_values)
    }

    /// Mapping properties for every field of `schema`.
    pub fn mapping(&self, schema: &ObjectSchema) -> FilterResult<BTreeMap<String, MappingNode>> {
        let mut properties = BTreeMap::new();
        for field in &schema.fields {
            let (name, mapping) = self.resolver.resolve(field, true)?.mapping_entry()?;
            properties.insert(name, mapping);
        }
        info!(class = %schema.name, fields = properties.len(), "Built index mapping");
        Ok(properties)
    }

    /// Index document for `object`, read under the configured context.
    pub fn index_document(
        &self,
        schema: &ObjectSchema,
        object: &dyn FieldAccess,
    ) -> FilterResult<Map<String, Value>> {
        self.index_document_with(schema, object, self.index_context())
    }

    pub fn index_document_with(
        &self,
        schema: &ObjectSchema,
        object: &dyn FieldAccess,
        ctx: IndexContext,
    ) -> FilterResult<Map<String, Value>> {
        let mut document = Map::new();
        for field in &schema.fields {
            let value = self.resolver.resolve(field, true)?.index_value(object, ctx)?;
            document.insert(field.name.clone(), value);
        }
        Ok(document)
    }

    /// Combines top-level filter entries into one bool query, each entry
    /// under its own outer operator.
    pub fn query(&self, schema: &ObjectSchema, filters: &[FilterEntry]) -> FilterResult<BoolQuery> {
        let mut query = BoolQuery::new();
        for entry in filters {
            let clause = entry.outer_operator.clause();
            if let Some(fragment) = &entry.raw_fragment {
                query.add(fragment.clone(), clause);
                continue;
            }

            let field = schema.field(&entry.fieldname).ok_or_else(|| FilterError::UnknownField {
                class: schema.name.clone(),
                field: entry.fieldname.clone(),
            })?;
            let adapter = self.resolver.resolve(field, true)?;
            let fragment = if entry.operator.is_existence() {
                adapter.exists_fragment(
                    entry.operator.is_negated_existence(),
                    entry.ignore_inheritance,
                    "",
                )?
            } else {
                adapter.query_fragment(&entry.value, entry.operator, entry.ignore_inheritance, "")?
            };
            query.add(fragment, clause);
        }
        debug!(class = %schema.name, clauses = query.len(), "Built filter query");
        Ok(query)
    }

    /// Parses raw filter conditions and combines them with [`Self::query`].
    pub fn query_from_json(
        &self,
        schema: &ObjectSchema,
        filters: &[Value],
    ) -> FilterResult<BoolQuery> {
        let entries = filters
            .iter()
            .map(FilterEntry::parse)
            .collect::<FilterResult<Vec<_>>>()?;
        self.query(schema, &entries)
    }

    /// Field-selection entries for every field of `schema`.
    pub fn field_selection(
        &self,
        schema: &ObjectSchema,
    ) -> FilterResult<Vec<FieldSelectionInformation>> {
        let mut entries = Vec::new();
        for field in &schema.fields {
            entries.extend(self.resolver.resolve(field, true)?.field_selection_information());
        }
        Ok(entries)
    }
}
