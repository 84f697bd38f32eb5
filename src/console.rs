use std::sync::Arc;
use tracing::info;

use crate::client::{AdminApi, AdminApiClient};
use crate::config::ApiConfig;
use crate::editor::{CancelPolicy, LoadOutcome};
use crate::error::ApiError;
use crate::models::schedule::ScheduleCatalog;
use crate::resources::{PanelEditor, PanelResource, ScheduleEditor, ScheduleResource};

/// Both admin panels as mounted by the host shell
#[derive(Clone)]
pub struct AdminConsole {
    pub schedule: ScheduleEditor,
    pub panel: PanelEditor,
}

impl AdminConsole {
    /// Build both editors against the backend described by `config`
    pub fn connect(config: ApiConfig) -> Result<Self, ApiError> {
        let client = AdminApiClient::new(config)?;
        Ok(Self::with_api(Arc::new(client)))
    }

    pub fn with_api(api: Arc<dyn AdminApi>) -> Self {
        Self::with_options(api, ScheduleCatalog::default(), CancelPolicy::default())
    }

    pub fn with_options(
        api: Arc<dyn AdminApi>,
        catalog: ScheduleCatalog,
        cancel_policy: CancelPolicy,
    ) -> Self {
        Self {
            schedule: ScheduleEditor::new(ScheduleResource::with_catalog(Arc::clone(&api), catalog))
                .with_cancel_policy(cancel_policy),
            panel: PanelEditor::new(PanelResource::new(api)).with_cancel_policy(cancel_policy),
        }
    }

    /// Load both panels concurrently
    pub async fn mount(&self) -> (LoadOutcome, LoadOutcome) {
        info!("Mounting admin console");
        futures::join!(self.schedule.load(), self.panel.load())
    }

    /// Close both editors so late responses are ignored
    pub fn unmount(&self) {
        info!("Unmounting admin console");
        self.schedule.close();
        self.panel.close();
    }
}
