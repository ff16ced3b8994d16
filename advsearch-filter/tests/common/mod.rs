#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Arc;

use advsearch_dsl::{MappingNode, Query};
use advsearch_filter::{
    AdapterResolver, FieldAdapter, FilterError, FilterResult, IndexContext, Operator, SearchConfig,
};
use advsearch_model::{
    FieldAccess, FieldDefinition, InMemoryVariantRegistry, ObjectSchema, VariantSchema,
};
use serde_json::{Value, json};

pub fn photo() -> VariantSchema {
    VariantSchema::new(
        "Photo",
        vec![
            FieldDefinition::input("caption", "Caption"),
            FieldDefinition::numeric("width", "Width"),
        ],
    )
}

pub fn video() -> VariantSchema {
    VariantSchema::new(
        "Video",
        vec![
            FieldDefinition::numeric("length", "Length"),
            FieldDefinition::checkbox("hd", "HD"),
        ],
    )
}

pub fn registry() -> Arc<InMemoryVariantRegistry> {
    Arc::new([photo(), video()].into_iter().collect())
}

pub fn resolver() -> AdapterResolver {
    AdapterResolver::with_defaults(registry(), SearchConfig::default())
}

pub fn images(allowed: &[&str]) -> FieldDefinition {
    FieldDefinition::fieldcollections(
        "images",
        "Images",
        allowed.iter().map(|s| s.to_string()).collect(),
    )
}

pub fn product_schema() -> ObjectSchema {
    ObjectSchema::new(
        "Product",
        vec![
            FieldDefinition::input("name", "Name"),
            FieldDefinition::numeric("price", "Price"),
            images(&[]),
        ],
    )
}

// ── Spy adapter ──────────────────────────────────────────────────
//
// Registered in place of a built-in adapter to observe what the collection
// adapter delegates. Calls are recorded per test thread.

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query {
        field: String,
        path: String,
        operator: Operator,
        value: Value,
        ignore_inheritance: bool,
    },
    Exists {
        field: String,
        path: String,
        is_negated: bool,
        ignore_inheritance: bool,
    },
    Index {
        field: String,
        inherit_values: bool,
    },
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
}

pub fn take_calls() -> Vec<Call> {
    CALLS.with(|calls| calls.take())
}

fn record(call: Call) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

pub struct SpyAdapter<'r> {
    field: &'r FieldDefinition,
}

impl FieldAdapter for SpyAdapter<'_> {
    fn field_definition(&self) -> &FieldDefinition {
        self.field
    }

    fn mapping_entry(&self) -> FilterResult<(String, MappingNode)> {
        Ok((self.field.name.clone(), MappingNode::Keyword))
    }

    fn query_fragment(
        &self,
        value: &Value,
        operator: Operator,
        ignore_inheritance: bool,
        path: &str,
    ) -> FilterResult<Query> {
        record(Call::Query {
            field: self.field.name.clone(),
            path: path.to_string(),
            operator,
            value: value.clone(),
            ignore_inheritance,
        });
        Ok(Query::Raw(json!({"spy_query": format!("{path}{}", self.field.name)})))
    }

    fn exists_fragment(
        &self,
        is_negated: bool,
        ignore_inheritance: bool,
        path: &str,
    ) -> FilterResult<Query> {
        record(Call::Exists {
            field: self.field.name.clone(),
            path: path.to_string(),
            is_negated,
            ignore_inheritance,
        });
        Ok(Query::Raw(json!({"spy_exists": format!("{path}{}", self.field.name)})))
    }

    /// Echoes the raw value; a value of `"boom"` fails.
    fn index_value(&self, object: &dyn FieldAccess, ctx: IndexContext) -> FilterResult<Value> {
        record(Call::Index {
            field: self.field.name.clone(),
            inherit_values: ctx.inherit_values(),
        });
        match object.value_of(&self.field.name) {
            Some(Value::String(s)) if s == "boom" => Err(FilterError::InvalidValue {
                field: self.field.name.clone(),
                reason: "boom".into(),
            }),
            Some(v) => Ok(json!({"spy": v})),
            None => Ok(Value::Null),
        }
    }
}

pub fn spy_adapter<'r>(
    field: &'r FieldDefinition,
    _resolver: &'r AdapterResolver,
    _consider_inheritance: bool,
) -> FilterResult<Box<dyn FieldAdapter + 'r>> {
    Ok(Box::new(SpyAdapter { field }))
}

/// Default resolver with every scalar kind replaced by the spy.
pub fn spy_resolver() -> AdapterResolver {
    let mut resolver = resolver();
    resolver
        .register("input", spy_adapter)
        .register("numeric", spy_adapter)
        .register("checkbox", spy_adapter);
    resolver
}

/// Installs a test subscriber once so `tracing` output shows with
/// `RUST_LOG=debug cargo test`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
