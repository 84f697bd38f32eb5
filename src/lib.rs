//! Classroom Admin Panels
//!
//! This library provides the client side of two administrative panels backed by
//! a REST API: a room availability editor and a dynamic field panel. It holds the
//! state, edit rules and backend calls; the host shell turns the produced view
//! models into actual widgets.
//!
//! # Modules
//!
//! - `client`: `AdminApiClient` for the four REST endpoints
//! - `editor`: generic load/edit/save/cancel lifecycle over a remote resource
//! - `resources`: the schedule and panel resources plugged into the editor
//! - `services`: pure schedule edits, form state, and view-model rendering
//! - `console`: both editors mounted together
//!
//! # Configuration
//!
//! The backend base URL is passed in explicitly through `ApiConfig`;
//! `ApiConfig::from_env` reads it from `ADMIN_API_URL` for hosts that want that.

pub mod client;
pub mod config;
pub mod console;
pub mod editor;
pub mod error;
pub mod models;
pub mod resources;
pub mod services;

#[cfg(test)]
mod client_mock;

// Re-export the main API types for ease of use
pub use client::{AdminApi, AdminApiClient};
pub use config::ApiConfig;
pub use console::AdminConsole;
pub use editor::{CancelPolicy, EditorState, LoadOutcome, RemoteEditor, RemoteResource};
pub use error::{ApiError, ConfigError, EditorError};
pub use resources::{PanelEditor, PanelResource, ScheduleEditor, ScheduleResource};
