use std::collections::HashMap;
use std::sync::Arc;

use advsearch_model::{FieldDefinition, VariantRegistry};

use crate::adapters::{
    checkbox_adapter, date_adapter, fieldcollections_adapter, numeric_adapter, text_adapter,
};
use crate::{FieldAdapter, FilterError, FilterResult, SearchConfig};

/// Builds the adapter for a field definition.
///
/// `consider_inheritance` selects whether the adapter keeps inherited and
/// own values apart (top-level class fields) or treats the field as flat
/// (sub-fields of collection items, which never inherit).
pub type AdapterConstructor = for<'r> fn(
    &'r FieldDefinition,
    &'r AdapterResolver,
    bool,
) -> FilterResult<Box<dyn FieldAdapter + 'r>>;

/// Registry mapping field type tags to adapter constructors.
pub struct AdapterResolver {
    variants: Arc<dyn VariantRegistry>,
    config: SearchConfig,
    constructors: HashMap<&'static str, AdapterConstructor>,
}

impl AdapterResolver {
    /// A resolver with no constructors registered.
    pub fn new(variants: Arc<dyn VariantRegistry>, config: SearchConfig) -> Self {
        Self {
            variants,
            config,
            constructors: HashMap::new(),
        }
    }

    /// A resolver with adapters for every built-in field kind.
    pub fn with_defaults(variants: Arc<dyn VariantRegistry>, config: SearchConfig) -> Self {
        let mut resolver = Self::new(variants, config);
        resolver
            .register("input", text_adapter)
            .register("textarea", text_adapter)
            .register("numeric", numeric_adapter)
            .register("checkbox", checkbox_adapter)
            .register("date", date_adapter)
            .register("fieldcollections", fieldcollections_adapter);
        resolver
    }

    /// Registers (or replaces) the constructor for `tag`.
    pub fn register(&mut self, tag: &'static str, constructor: AdapterConstructor) -> &mut Self {
        self.constructors.insert(tag, constructor);
        self
    }

    pub fn resolve<'r>(
        &'r self,
        field: &'r FieldDefinition,
        consider_inheritance: bool,
    ) -> FilterResult<Box<dyn FieldAdapter + 'r>> {
        let constructor = self
            .constructors
            .get(field.tag())
            .ok_or_else(|| FilterError::UnsupportedFieldType(field.tag().to_string()))?;
        constructor(field, self, consider_inheritance)
    }

    pub fn variants(&self) -> &dyn VariantRegistry {
        self.variants.as_ref()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl std::fmt::Debug for AdapterResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<_> = self.constructors.keys().collect();
        tags.sort();
        f.debug_struct("AdapterResolver")
            .field("variant_types", &self.variants.type_keys())
            .field("config", &self.config)
            .field("tags", &tags)
            .finish()
    }
}
