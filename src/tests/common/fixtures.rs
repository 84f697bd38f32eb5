use serde_json::{json, Value};

use crate::models::field::{FieldDescriptor, FieldKind, Panel};
use crate::models::schedule::{Room, Schedule, TimeBlock};

/// Build a block with the given assignments
pub fn block(label: &str, course: &str, instructor: &str, role: &str) -> TimeBlock {
    TimeBlock {
        label: label.to_string(),
        course: course.to_string(),
        instructor: instructor.to_string(),
        role: role.to_string(),
    }
}

pub fn room(id: u64, name: &str, time_blocks: Vec<TimeBlock>) -> Room {
    Room {
        id,
        name: name.to_string(),
        time_blocks,
    }
}

/// Two rooms with ids 2 and 5; room 2 is fully booked, room 5 is free
pub fn sample_schedule() -> Schedule {
    Schedule {
        rooms: vec![
            room(
                2,
                "Room 101",
                vec![
                    block("Block 1", "Mathematics", "Ana Pérez", "Teacher"),
                    block("Block 2", "Physics", "", ""),
                ],
            ),
            room(5, "Lab A", vec![block("Block 1", "", "", "")]),
        ],
    }
}

pub fn sample_schedule_json() -> Value {
    json!({
        "salones": [
            {
                "id": 2,
                "nombre": "Room 101",
                "horarios": [
                    {
                        "bloque": "Block 1",
                        "curso": "Mathematics",
                        "profesor": "Ana Pérez",
                        "rol": "Teacher"
                    },
                    { "bloque": "Block 2", "curso": "Physics", "profesor": "", "rol": "" }
                ]
            },
            {
                "id": 5,
                "nombre": "Lab A",
                "horarios": [
                    { "bloque": "Block 1", "curso": "", "profesor": "", "rol": "" }
                ]
            }
        ]
    })
}

pub fn sample_panel() -> Panel {
    Panel {
        title: Some("Term settings".to_string()),
        fields: vec![
            FieldDescriptor::new("start_date", FieldKind::Date("2025-03-01".to_string())),
            FieldDescriptor::new("enrollment_open", FieldKind::Boolean(true)),
            FieldDescriptor::new("notes", FieldKind::LongText("Bring ID".to_string())),
            FieldDescriptor::new("code", FieldKind::Text("T-2025".to_string())),
            FieldDescriptor::new(
                "contact",
                FieldKind::List(vec![
                    FieldDescriptor::new("phone", FieldKind::Text("555-0101".to_string())),
                    FieldDescriptor::new("on_call", FieldKind::Boolean(false)),
                ]),
            )
            .with_description("Front desk"),
        ],
    }
}

pub fn sample_panel_json() -> Value {
    json!({
        "titulo": "Term settings",
        "campos": [
            { "nombre": "start_date", "tipo": "fecha", "valor": "2025-03-01" },
            { "nombre": "enrollment_open", "tipo": "booleano", "valor": true },
            { "nombre": "notes", "tipo": "texto_largo", "valor": "Bring ID" },
            { "nombre": "code", "tipo": "texto", "valor": "T-2025" },
            {
                "nombre": "contact",
                "tipo": "lista",
                "descripcion": "Front desk",
                "campos": [
                    { "nombre": "phone", "tipo": "texto", "valor": "555-0101" },
                    { "nombre": "on_call", "tipo": "booleano", "valor": false }
                ]
            }
        ]
    })
}
