use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

/// Kind of a panel field together with its initial value.
///
/// The wire format tags fields with a free-form `tipo` string; anything not
/// recognised decodes as [`FieldKind::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Date(String),
    DateRange(String),
    Boolean(bool),
    LongText(String),
    Text(String),
    List(Vec<FieldDescriptor>),
}

impl FieldKind {
    /// Wire tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Date(_) => "fecha",
            FieldKind::DateRange(_) => "rango_fecha",
            FieldKind::Boolean(_) => "booleano",
            FieldKind::LongText(_) => "texto_largo",
            FieldKind::Text(_) => "texto",
            FieldKind::List(_) => "lista",
        }
    }
}

/// Declarative description of one editable field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawField", into = "RawField")]
pub struct FieldDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn children(&self) -> &[FieldDescriptor] {
        match &self.kind {
            FieldKind::List(children) => children,
            _ => &[],
        }
    }
}

// Shape of a field as the backend sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawField {
    #[serde(rename = "nombre", default)]
    name: String,
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(rename = "valor", default, skip_serializing_if = "Value::is_null")]
    value: Value,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(
        rename = "campos",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    children: Vec<FieldDescriptor>,
}

fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn flag_of(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

impl From<RawField> for FieldDescriptor {
    fn from(raw: RawField) -> Self {
        let kind = match raw.kind.as_deref() {
            Some("fecha") => FieldKind::Date(text_of(&raw.value)),
            Some("rango_fecha") => FieldKind::DateRange(text_of(&raw.value)),
            Some("booleano") => FieldKind::Boolean(flag_of(&raw.value)),
            Some("texto_largo") => FieldKind::LongText(text_of(&raw.value)),
            Some("lista") => FieldKind::List(raw.children),
            _ => FieldKind::Text(text_of(&raw.value)),
        };

        Self {
            name: raw.name,
            description: raw.description,
            kind,
        }
    }
}

impl From<FieldDescriptor> for RawField {
    fn from(field: FieldDescriptor) -> Self {
        let tag = field.kind.tag().to_string();
        let (value, children) = match field.kind {
            FieldKind::Date(v)
            | FieldKind::DateRange(v)
            | FieldKind::LongText(v)
            | FieldKind::Text(v) => (Value::String(v), Vec::new()),
            FieldKind::Boolean(b) => (Value::Bool(b), Vec::new()),
            FieldKind::List(children) => (Value::Null, children),
        };

        Self {
            name: field.name,
            kind: Some(tag),
            value,
            description: field.description,
            children,
        }
    }
}

/// Panel configuration resource, `{ "titulo": ..., "campos": [...] }` on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "campos", default, deserialize_with = "null_as_default")]
    pub fields: Vec<FieldDescriptor>,
}
