//! View models handed to the host's widget layer.
//!
//! Nothing here draws anything. Panel fields become a [`Control`] tree and the
//! schedule becomes a [`ScheduleView`]; the host maps those onto its own inputs,
//! tables and buttons and feeds user edits back through the editors.

use crate::models::common::EditMode;
use crate::models::field::{FieldDescriptor, FieldKind};
use crate::models::schedule::{BlockField, Room, Schedule, ScheduleCatalog, TimeBlock};
use crate::services::form_state::{FieldEdit, FieldPath, FormState, FormValue, PanelForm};
use crate::services::schedule::available_rooms;

pub const LONG_TEXT_ROWS: u8 = 4;

/// One input of the dynamic field panel
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    DateInput {
        path: FieldPath,
        label: String,
        value: String,
    },
    Toggle {
        path: FieldPath,
        label: String,
        checked: bool,
    },
    TextArea {
        path: FieldPath,
        label: String,
        value: String,
        rows: u8,
    },
    TextInput {
        path: FieldPath,
        label: String,
        value: String,
    },
    Group {
        path: FieldPath,
        label: String,
        description: Option<String>,
        children: Vec<Control>,
    },
}

impl Control {
    pub fn path(&self) -> &FieldPath {
        match self {
            Control::DateInput { path, .. }
            | Control::Toggle { path, .. }
            | Control::TextArea { path, .. }
            | Control::TextInput { path, .. }
            | Control::Group { path, .. } => path,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Control::DateInput { label, .. }
            | Control::Toggle { label, .. }
            | Control::TextArea { label, .. }
            | Control::TextInput { label, .. }
            | Control::Group { label, .. } => label,
        }
    }

    /// Edit produced when the user changes this control; groups have no value of their own
    pub fn edit(&self, value: impl Into<FormValue>) -> Option<FieldEdit> {
        match self {
            Control::Group { .. } => None,
            _ => Some(FieldEdit {
                path: self.path().clone(),
                value: value.into(),
            }),
        }
    }
}

fn current_text(values: &FormState, path: &FieldPath, initial: &str) -> String {
    values
        .get(path)
        .and_then(FormValue::as_text)
        .unwrap_or(initial)
        .to_string()
}

/// Render one field, recursing into list members
pub fn render_field(
    field: &FieldDescriptor,
    parent: Option<&FieldPath>,
    values: &FormState,
) -> Control {
    let path = match parent {
        Some(parent) => parent.child(field.name.as_str()),
        None => FieldPath::root(field.name.as_str()),
    };
    let label = field.name.clone();

    match &field.kind {
        FieldKind::Date(initial) | FieldKind::DateRange(initial) => Control::DateInput {
            value: current_text(values, &path, initial),
            path,
            label,
        },
        FieldKind::Boolean(initial) => Control::Toggle {
            checked: values
                .get(&path)
                .and_then(FormValue::as_flag)
                .unwrap_or(*initial),
            path,
            label,
        },
        FieldKind::LongText(initial) => Control::TextArea {
            value: current_text(values, &path, initial),
            rows: LONG_TEXT_ROWS,
            path,
            label,
        },
        FieldKind::List(children) => Control::Group {
            children: children
                .iter()
                .map(|child| render_field(child, Some(&path), values))
                .collect(),
            description: field.description.clone(),
            path,
            label,
        },
        FieldKind::Text(initial) => Control::TextInput {
            value: current_text(values, &path, initial),
            path,
            label,
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub title: Option<String>,
    /// Host shows a spinner instead of the controls
    pub loading: bool,
    pub controls: Vec<Control>,
}

pub fn render_panel(form: &PanelForm, loading: bool) -> PanelView {
    PanelView {
        title: form.title.clone(),
        loading,
        controls: form
            .fields
            .iter()
            .map(|field| render_field(field, None, &form.values))
            .collect(),
    }
}

pub const SCHEDULE_HEADING: &str = "Room availability and assignments";
pub const AVAILABLE_HEADING: &str = "Available rooms (no assignments)";
pub const ROOM_NAME_PLACEHOLDER: &str = "Room name";

/// One assignment cell of the schedule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Empty value shown in view mode
    Placeholder(&'static str),
    Select {
        field: BlockField,
        value: String,
        empty_label: &'static str,
        options: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomTitle {
    Heading(String),
    Input {
        value: String,
        placeholder: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRow {
    pub index: usize,
    pub label: String,
    pub course: Cell,
    pub instructor: Cell,
    pub role: Cell,
    pub removable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub id: u64,
    pub title: RoomTitle,
    pub blocks: Vec<BlockRow>,
    pub can_add_block: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAction {
    Edit,
    Save,
    Cancel,
    NewRoom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub action: ScheduleAction,
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView {
    pub heading: &'static str,
    pub loading: bool,
    pub available_rooms: Vec<String>,
    pub toolbar: Vec<Button>,
    pub columns: Vec<&'static str>,
    pub rooms: Vec<RoomView>,
}

fn render_cell(
    block: &TimeBlock,
    field: BlockField,
    mode: EditMode,
    catalog: &ScheduleCatalog,
) -> Cell {
    let value = block.field(field);
    match mode {
        EditMode::View if value.is_empty() => Cell::Placeholder(field.empty_label()),
        EditMode::View => Cell::Text(value.to_string()),
        EditMode::Edit => Cell::Select {
            field,
            value: value.to_string(),
            empty_label: field.empty_label(),
            options: catalog.options(field).to_vec(),
        },
    }
}

fn render_room(room: &Room, mode: EditMode, catalog: &ScheduleCatalog) -> RoomView {
    let editing = mode == EditMode::Edit;
    RoomView {
        id: room.id,
        title: if editing {
            RoomTitle::Input {
                value: room.name.clone(),
                placeholder: ROOM_NAME_PLACEHOLDER,
            }
        } else {
            RoomTitle::Heading(room.name.clone())
        },
        blocks: room
            .time_blocks
            .iter()
            .enumerate()
            .map(|(index, block)| BlockRow {
                index,
                label: block.label.clone(),
                course: render_cell(block, BlockField::Course, mode, catalog),
                instructor: render_cell(block, BlockField::Instructor, mode, catalog),
                role: render_cell(block, BlockField::Role, mode, catalog),
                removable: editing,
            })
            .collect(),
        can_add_block: editing,
    }
}

/// Build the schedule table for the given mode; Edit stays disabled while loading
pub fn render_schedule(
    schedule: &Schedule,
    mode: EditMode,
    saving: bool,
    loading: bool,
    catalog: &ScheduleCatalog,
) -> ScheduleView {
    let toolbar = match mode {
        EditMode::View => vec![Button {
            action: ScheduleAction::Edit,
            label: "Edit",
            enabled: !loading,
        }],
        EditMode::Edit => vec![
            Button {
                action: ScheduleAction::Save,
                label: if saving { "Saving..." } else { "Save" },
                enabled: !saving,
            },
            Button {
                action: ScheduleAction::Cancel,
                label: "Cancel",
                enabled: !saving,
            },
            Button {
                action: ScheduleAction::NewRoom,
                label: "+ New room",
                enabled: !saving,
            },
        ],
    };

    let mut columns = vec!["Block"];
    columns.extend(BlockField::ALL.iter().map(|field| field.header()));
    if mode == EditMode::Edit {
        columns.push("Actions");
    }

    ScheduleView {
        heading: SCHEDULE_HEADING,
        loading,
        available_rooms: available_rooms(schedule)
            .into_iter()
            .map(|room| room.name.clone())
            .collect(),
        toolbar,
        columns,
        rooms: schedule
            .rooms
            .iter()
            .map(|room| render_room(room, mode, catalog))
            .collect(),
    }
}
