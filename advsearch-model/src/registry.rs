use serde::{Deserialize, Serialize};

use crate::VariantSchema;

/// Lookup service for field-collection variant types.
///
/// Implementations are read-only once built; adapters query them on every
/// mapping, query and extraction call, so a registry that changes between
/// calls is observed immediately.
pub trait VariantRegistry: Send + Sync {
    /// Keys of every registered variant type, in registration order.
    fn type_keys(&self) -> Vec<String>;

    /// Returns the variant schema registered under `key`.
    fn get_by_key(&self, key: &str) -> Option<&VariantSchema>;

    fn contains(&self, key: &str) -> bool {
        self.get_by_key(key).is_some()
    }
}

/// Ordered in-memory registry, typically loaded from JSON configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryVariantRegistry {
    variants: Vec<VariantSchema>,
}

impl InMemoryVariantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON array of variant schemas.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut registry = Self::new();
        for schema in serde_json::from_str::<Vec<VariantSchema>>(json)? {
            registry.register(schema);
        }
        Ok(registry)
    }

    /// Registers a variant, replacing any existing schema with the same key
    /// in place.
    pub fn register(&mut self, schema: VariantSchema) {
        match self.variants.iter_mut().find(|v| v.key == schema.key) {
            Some(existing) => *existing = schema,
            None => self.variants.push(schema),
        }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl FromIterator<VariantSchema> for InMemoryVariantRegistry {
    fn from_iter<I: IntoIterator<Item = VariantSchema>>(iter: I) -> Self {
        let mut registry = Self::new();
        for schema in iter {
            registry.register(schema);
        }
        registry
    }
}

impl VariantRegistry for InMemoryVariantRegistry {
    fn type_keys(&self) -> Vec<String> {
        self.variants.iter().map(|v| v.key.clone()).collect()
    }

    fn get_by_key(&self, key: &str) -> Option<&VariantSchema> {
        self.variants.iter().find(|v| v.key == key)
    }
}
