use serde::{Deserialize, Serialize};

/// Describes an object class: the fields its instances carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl ObjectSchema {
    pub fn new(name: &str, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A field declared on an object class or on a field-collection variant.
///
/// The kind is flattened into the same JSON object, so a definition reads
/// `{"name": "caption", "title": "Caption", "field_type": "input"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldDefinition {
    fn simple(name: &str, title: &str, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind,
        }
    }

    /// Shorthand for a single-line text field.
    pub fn input(name: &str, title: &str) -> Self {
        Self::simple(name, title, FieldKind::Input)
    }

    /// Shorthand for a multi-line text field.
    pub fn textarea(name: &str, title: &str) -> Self {
        Self::simple(name, title, FieldKind::Textarea)
    }

    /// Shorthand for a numeric field.
    pub fn numeric(name: &str, title: &str) -> Self {
        Self::simple(name, title, FieldKind::Numeric)
    }

    /// Shorthand for a boolean field.
    pub fn checkbox(name: &str, title: &str) -> Self {
        Self::simple(name, title, FieldKind::Checkbox)
    }

    /// Shorthand for a date field.
    pub fn date(name: &str, title: &str) -> Self {
        Self::simple(name, title, FieldKind::Date)
    }

    /// Shorthand for a field-collection field. An empty `allowed_types`
    /// permits every registered variant type.
    pub fn fieldcollections(name: &str, title: &str, allowed_types: Vec<String>) -> Self {
        Self::simple(name, title, FieldKind::Fieldcollections { allowed_types })
    }

    /// Type tag of this field's kind.
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}

/// The data type of a field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field_type", rename_all = "snake_case")]
pub enum FieldKind {
    Input,
    Textarea,
    Numeric,
    Checkbox,
    Date,
    Fieldcollections {
        #[serde(default, alias = "allowedTypes")]
        allowed_types: Vec<String>,
    },
}

impl FieldKind {
    /// Stable tag used to select an adapter for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Numeric => "numeric",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Fieldcollections { .. } => "fieldcollections",
        }
    }
}

/// A field-collection variant type: a registry key plus ordered sub-fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSchema {
    pub key: String,
    pub fields: Vec<FieldDefinition>,
}

impl VariantSchema {
    pub fn new(key: &str, fields: Vec<FieldDefinition>) -> Self {
        Self {
            key: key.into(),
            fields,
        }
    }

    /// Looks up a sub-field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}
