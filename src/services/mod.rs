pub mod form_state;
pub mod render;
pub mod schedule;
