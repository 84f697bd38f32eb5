//! Copy-on-write edits over a [`Schedule`].
//!
//! Every function takes the current snapshot by reference and returns a new one;
//! the input is never touched. An unknown room id or block index leaves the
//! schedule unchanged.

use tracing::debug;

use crate::models::schedule::{BlockField, Room, Schedule, TimeBlock};

/// Maximum number of rooms listed in the "available rooms" summary
pub const AVAILABLE_SUMMARY_LIMIT: usize = 3;

// Rebuild the schedule, passing only the matching room through `edit`
fn map_room<F>(schedule: &Schedule, room_id: u64, edit: F) -> Schedule
where
    F: Fn(&Room) -> Room,
{
    if schedule.room(room_id).is_none() {
        debug!("Room {} not found, schedule left unchanged", room_id);
    }

    let rooms = schedule
        .rooms
        .iter()
        .map(|room| {
            if room.id == room_id {
                edit(room)
            } else {
                room.clone()
            }
        })
        .collect();

    Schedule { rooms }
}

/// Replace one assignment field of one block
pub fn set_block_field(
    schedule: &Schedule,
    room_id: u64,
    block_index: usize,
    field: BlockField,
    value: &str,
) -> Schedule {
    map_room(schedule, room_id, |room| {
        if block_index >= room.time_blocks.len() {
            debug!(
                "Block {} out of range for room {} ({} blocks)",
                block_index,
                room_id,
                room.time_blocks.len()
            );
        }

        let time_blocks = room
            .time_blocks
            .iter()
            .enumerate()
            .map(|(idx, block)| {
                if idx != block_index {
                    return block.clone();
                }
                let mut block = block.clone();
                match field {
                    BlockField::Course => block.course = value.to_string(),
                    BlockField::Instructor => block.instructor = value.to_string(),
                    BlockField::Role => block.role = value.to_string(),
                }
                block
            })
            .collect();

        Room {
            time_blocks,
            ..room.clone()
        }
    })
}

/// Rename a room
pub fn set_room_name(schedule: &Schedule, room_id: u64, value: &str) -> Schedule {
    map_room(schedule, room_id, |room| Room {
        name: value.to_string(),
        ..room.clone()
    })
}

/// Append an unassigned block labelled after its position
pub fn add_block(schedule: &Schedule, room_id: u64) -> Schedule {
    map_room(schedule, room_id, |room| {
        let mut time_blocks = room.time_blocks.clone();
        time_blocks.push(TimeBlock::empty(TimeBlock::default_label(
            room.time_blocks.len() + 1,
        )));
        Room {
            time_blocks,
            ..room.clone()
        }
    })
}

/// Drop the block at `block_index`; remaining labels are kept as they are
pub fn remove_block(schedule: &Schedule, room_id: u64, block_index: usize) -> Schedule {
    map_room(schedule, room_id, |room| {
        let time_blocks = room
            .time_blocks
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != block_index)
            .map(|(_, block)| block.clone())
            .collect();
        Room {
            time_blocks,
            ..room.clone()
        }
    })
}

/// Id for the next room: one more than the current maximum, or 1 when empty.
/// When the maximum is `u64::MAX` the lowest unused positive id is taken instead.
pub fn next_room_id(schedule: &Schedule) -> u64 {
    let Some(max) = schedule.rooms.iter().map(|room| room.id).max() else {
        return 1;
    };
    match max.checked_add(1) {
        Some(id) => id,
        None => {
            debug!("Room id {} is the largest possible, reusing a free id", max);
            (1..max).find(|id| schedule.room(*id).is_none()).unwrap_or(max)
        }
    }
}

/// Append a new room with a single empty block
pub fn add_room(schedule: &Schedule) -> Schedule {
    let id = next_room_id(schedule);
    debug!("Adding room {}", id);

    let mut rooms = schedule.rooms.clone();
    rooms.push(Room {
        id,
        name: format!("New room {}", id),
        time_blocks: vec![TimeBlock::empty(TimeBlock::default_label(1))],
    });
    Schedule { rooms }
}

/// First few rooms with no assignment in any block
pub fn available_rooms(schedule: &Schedule) -> Vec<&Room> {
    schedule
        .rooms
        .iter()
        .filter(|room| room.is_available())
        .take(AVAILABLE_SUMMARY_LIMIT)
        .collect()
}
