use async_trait::async_trait;
use std::sync::Arc;

use crate::client::AdminApi;
use crate::editor::{RemoteEditor, RemoteResource};
use crate::error::{ApiError, EditorError};
use crate::models::common::Notice;
use crate::models::schedule::{BlockField, Schedule, ScheduleCatalog};
use crate::services::form_state::{FieldEdit, PanelForm};
use crate::services::render::{render_panel, render_schedule, PanelView, ScheduleView};
use crate::services::schedule;

/// Room availability backed by `/api/disponibilidad`
pub struct ScheduleResource {
    api: Arc<dyn AdminApi>,
    catalog: ScheduleCatalog,
}

impl ScheduleResource {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self::with_catalog(api, ScheduleCatalog::default())
    }

    pub fn with_catalog(api: Arc<dyn AdminApi>, catalog: ScheduleCatalog) -> Self {
        Self { api, catalog }
    }

    pub fn catalog(&self) -> &ScheduleCatalog {
        &self.catalog
    }
}

#[async_trait]
impl RemoteResource for ScheduleResource {
    type Data = Schedule;

    fn name(&self) -> &'static str {
        "schedule"
    }

    async fn fetch(&self) -> Result<Schedule, ApiError> {
        self.api.fetch_schedule().await
    }

    async fn save(&self, data: &Schedule) -> Result<(), ApiError> {
        self.api.save_schedule(data).await
    }

    fn placeholder(&self) -> Schedule {
        Schedule::placeholder()
    }

    fn load_failure_notice(&self, err: &ApiError) -> Notice {
        match err {
            ApiError::EmptyPayload => Notice::warning("No schedule data found, showing empty data"),
            _ => Notice::warning("Could not load schedule, showing empty data"),
        }
    }

    fn saved_notice(&self) -> Notice {
        Notice::info("Schedule saved")
    }
}

/// Dynamic field panel backed by `/api/panel-info`
pub struct PanelResource {
    api: Arc<dyn AdminApi>,
}

impl PanelResource {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RemoteResource for PanelResource {
    type Data = PanelForm;

    fn name(&self) -> &'static str {
        "panel"
    }

    async fn fetch(&self) -> Result<PanelForm, ApiError> {
        let panel = self.api.fetch_panel().await?;
        Ok(PanelForm::from_panel(panel))
    }

    async fn save(&self, data: &PanelForm) -> Result<(), ApiError> {
        self.api.save_panel(&data.values).await
    }

    fn placeholder(&self) -> PanelForm {
        PanelForm::default()
    }

    fn load_failure_notice(&self, _err: &ApiError) -> Notice {
        Notice::warning("Could not load panel, showing empty form")
    }

    fn saved_notice(&self) -> Notice {
        Notice::info("Panel saved")
    }
}

pub type ScheduleEditor = RemoteEditor<ScheduleResource>;
pub type PanelEditor = RemoteEditor<PanelResource>;

impl RemoteEditor<ScheduleResource> {
    pub fn set_block_field(
        &self,
        room_id: u64,
        block_index: usize,
        field: BlockField,
        value: &str,
    ) -> Result<(), EditorError> {
        self.apply(|current| schedule::set_block_field(current, room_id, block_index, field, value))
    }

    pub fn set_room_name(&self, room_id: u64, value: &str) -> Result<(), EditorError> {
        self.apply(|current| schedule::set_room_name(current, room_id, value))
    }

    pub fn add_block(&self, room_id: u64) -> Result<(), EditorError> {
        self.apply(|current| schedule::add_block(current, room_id))
    }

    pub fn remove_block(&self, room_id: u64, block_index: usize) -> Result<(), EditorError> {
        self.apply(|current| schedule::remove_block(current, room_id, block_index))
    }

    pub fn add_room(&self) -> Result<(), EditorError> {
        self.apply(schedule::add_room)
    }

    pub fn render(&self) -> ScheduleView {
        let catalog = self.resource().catalog();
        self.view(|state| {
            render_schedule(&state.data, state.mode, state.saving, state.loading, catalog)
        })
    }
}

impl RemoteEditor<PanelResource> {
    pub fn apply_edit(&self, edit: &FieldEdit) -> Result<(), EditorError> {
        self.apply(|current| current.apply_edit(edit))
    }

    pub fn render(&self) -> PanelView {
        self.view(|state| render_panel(&state.data, state.loading))
    }
}
