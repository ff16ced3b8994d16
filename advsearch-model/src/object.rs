use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read access to the raw field values of an object or collection item.
///
/// Implemented per object shape so adapters never construct getters by
/// name; the accessor answers for any field it stores.
pub trait FieldAccess {
    /// Raw value stored under `field`, without inheritance.
    fn value_of(&self, field: &str) -> Option<&Value>;

    /// Ancestor consulted when inheritance is enabled and a value is empty.
    fn parent(&self) -> Option<&dyn FieldAccess> {
        None
    }
}

/// Whether a raw value counts as "not set" for inheritance purposes.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Resolves `field` on `access`, walking up the parent chain while the value
/// is empty and `inherit` is set. Without inheritance this is `value_of`.
pub fn resolve_value<'a>(
    access: &'a dyn FieldAccess,
    field: &str,
    inherit: bool,
) -> Option<&'a Value> {
    let own = access.value_of(field);
    if !inherit {
        return own;
    }

    let mut current = access;
    loop {
        if let Some(value) = current.value_of(field).filter(|v| !is_empty_value(v)) {
            return Some(value);
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return own,
        }
    }
}

/// A business object instance.
///
/// `data` holds the raw field values keyed by field name; its structure is
/// defined by the object's [`ObjectSchema`](crate::ObjectSchema).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataObject {
    pub id: String,
    pub class_name: String,
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<DataObject>>,
}

impl DataObject {
    pub fn new(id: &str, class_name: &str, data: Value) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            data,
            parent: None,
        }
    }

    /// Attaches the object values are inherited from.
    #[must_use]
    pub fn with_parent(mut self, parent: DataObject) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

impl FieldAccess for DataObject {
    fn value_of(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    fn parent(&self) -> Option<&dyn FieldAccess> {
        self.parent.as_deref().map(|p| p as &dyn FieldAccess)
    }
}
