use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::field::{FieldDescriptor, FieldKind, Panel};

/// Current value of one field while the panel is being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Flag(bool),
    Text(String),
    Group(FormState),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FormValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&FormState> {
        match self {
            FormValue::Group(g) => Some(g),
            _ => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Flag(value)
    }
}

/// Names leading to a field: the top-level name, then child names inside lists
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Name of the field itself
    pub fn leaf(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Field name → value map submitted wholesale when the panel is saved.
///
/// Serializes as a plain JSON object; list fields become nested objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState(BTreeMap<String, FormValue>);

impl FormState {
    pub fn get(&self, path: &FieldPath) -> Option<&FormValue> {
        let (last, parents) = path.segments().split_last()?;
        let mut current = self;
        for name in parents {
            current = current.0.get(name)?.as_group()?;
        }
        current.0.get(last)
    }

    pub fn value(&self, name: &str) -> Option<&FormValue> {
        self.0.get(name)
    }

    /// Copy of this state with `value` stored at `path`, creating groups on the way
    pub fn with_value(&self, path: &FieldPath, value: FormValue) -> FormState {
        let mut next = self.clone();
        next.insert_at(path.segments(), value);
        next
    }

    pub fn set(&self, name: &str, value: impl Into<FormValue>) -> FormState {
        self.with_value(&FieldPath::root(name), value.into())
    }

    /// Update a member of a list field
    pub fn set_child(&self, list: &str, child: &str, value: impl Into<FormValue>) -> FormState {
        self.with_value(&FieldPath::root(list).child(child), value.into())
    }

    fn insert_at(&mut self, segments: &[String], value: FormValue) {
        match segments {
            [] => {}
            [name] => {
                self.0.insert(name.clone(), value);
            }
            [name, rest @ ..] => {
                let entry = self
                    .0
                    .entry(name.clone())
                    .or_insert_with(|| FormValue::Group(FormState::default()));
                if !matches!(entry, FormValue::Group(_)) {
                    *entry = FormValue::Group(FormState::default());
                }
                if let FormValue::Group(group) = entry {
                    group.insert_at(rest, value);
                }
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Starting value of a field as loaded from the backend
pub fn initial_value(field: &FieldDescriptor) -> FormValue {
    match &field.kind {
        FieldKind::Date(v)
        | FieldKind::DateRange(v)
        | FieldKind::LongText(v)
        | FieldKind::Text(v) => FormValue::Text(v.clone()),
        FieldKind::Boolean(b) => FormValue::Flag(*b),
        FieldKind::List(children) => FormValue::Group(build_initial_form_state(children)),
    }
}

/// Seed a form state from the loaded descriptors
pub fn build_initial_form_state(fields: &[FieldDescriptor]) -> FormState {
    FormState(
        fields
            .iter()
            .map(|field| (field.name.clone(), initial_value(field)))
            .collect(),
    )
}

/// One edit coming back from a rendered control
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub path: FieldPath,
    pub value: FormValue,
}

/// Loaded panel together with the values being edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelForm {
    pub title: Option<String>,
    pub fields: Vec<FieldDescriptor>,
    pub values: FormState,
}

impl PanelForm {
    pub fn from_panel(panel: Panel) -> Self {
        let values = build_initial_form_state(&panel.fields);
        Self {
            title: panel.title,
            fields: panel.fields,
            values,
        }
    }

    pub fn apply_edit(&self, edit: &FieldEdit) -> PanelForm {
        PanelForm {
            title: self.title.clone(),
            fields: self.fields.clone(),
            values: self.values.with_value(&edit.path, edit.value.clone()),
        }
    }
}
