use serde::{Deserialize, Serialize};

use super::null_as_default;

pub const PLACEHOLDER_ROOM_NAME: &str = "No data";

/// One scheduling slot inside a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    #[serde(rename = "bloque", default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(rename = "curso", default, deserialize_with = "null_as_default")]
    pub course: String,
    #[serde(rename = "profesor", default, deserialize_with = "null_as_default")]
    pub instructor: String,
    #[serde(rename = "rol", default, deserialize_with = "null_as_default")]
    pub role: String,
}

impl TimeBlock {
    /// An unassigned block with the given label
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            course: String::new(),
            instructor: String::new(),
            role: String::new(),
        }
    }

    /// Label given to the block at 1-based position `number`
    pub fn default_label(number: usize) -> String {
        format!("Block {}", number)
    }

    /// True when no course, instructor or role is assigned
    pub fn is_free(&self) -> bool {
        self.course.is_empty() && self.instructor.is_empty() && self.role.is_empty()
    }

    pub fn field(&self, field: BlockField) -> &str {
        match field {
            BlockField::Course => &self.course,
            BlockField::Instructor => &self.instructor,
            BlockField::Role => &self.role,
        }
    }
}

/// Assignment columns of a [`TimeBlock`] that can be edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockField {
    Course,
    Instructor,
    Role,
}

impl BlockField {
    pub const ALL: [BlockField; 3] = [BlockField::Course, BlockField::Instructor, BlockField::Role];

    /// Text shown instead of an empty value
    pub fn empty_label(self) -> &'static str {
        match self {
            BlockField::Course => "Free",
            BlockField::Instructor | BlockField::Role => "Unassigned",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            BlockField::Course => "Course",
            BlockField::Instructor => "Instructor",
            BlockField::Role => "Supervision role",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: u64,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "horarios", default, deserialize_with = "null_as_default")]
    pub time_blocks: Vec<TimeBlock>,
}

impl Room {
    /// A room is available when none of its blocks carries an assignment
    pub fn is_available(&self) -> bool {
        self.time_blocks.iter().all(TimeBlock::is_free)
    }
}

/// Root of the availability resource, `{ "salones": [...] }` on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "salones", default, deserialize_with = "null_as_default")]
    pub rooms: Vec<Room>,
}

impl Schedule {
    /// Single "No data" room shown when nothing could be loaded
    pub fn placeholder() -> Self {
        Self {
            rooms: vec![Room {
                id: 0,
                name: PLACEHOLDER_ROOM_NAME.to_string(),
                time_blocks: vec![TimeBlock::empty(TimeBlock::default_label(1))],
            }],
        }
    }

    pub fn room(&self, room_id: u64) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Static option lists offered by the selection controls in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCatalog {
    pub courses: Vec<String>,
    pub instructors: Vec<String>,
    pub roles: Vec<String>,
}

impl ScheduleCatalog {
    pub fn options(&self, field: BlockField) -> &[String] {
        match field {
            BlockField::Course => &self.courses,
            BlockField::Instructor => &self.instructors,
            BlockField::Role => &self.roles,
        }
    }
}

impl Default for ScheduleCatalog {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            courses: owned(&["Mathematics", "Physics", "Chemistry", "Biology", "History"]),
            instructors: owned(&["Ana Pérez", "Juan López", "Laura Gómez", "Carlos Ruiz"]),
            roles: owned(&["Teacher", "Supervisor", "Assistant"]),
        }
    }
}
