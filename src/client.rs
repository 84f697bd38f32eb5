use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::field::Panel;
use crate::models::schedule::Schedule;
use crate::services::form_state::FormState;

pub const SCHEDULE_PATH: &str = "/api/disponibilidad";
pub const PANEL_PATH: &str = "/api/panel-info";

/// Backend operations used by the editors
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Fetch the room schedule; an absent or empty room list is [`ApiError::EmptyPayload`]
    async fn fetch_schedule(&self) -> Result<Schedule, ApiError>;

    /// Replace the whole room schedule
    async fn save_schedule(&self, schedule: &Schedule) -> Result<(), ApiError>;

    /// Fetch the panel title and field descriptors
    async fn fetch_panel(&self) -> Result<Panel, ApiError>;

    /// Submit the edited panel values
    async fn save_panel(&self, values: &FormState) -> Result<(), ApiError>;
}

/// HTTP client for the admin REST backend
#[derive(Debug, Clone)]
pub struct AdminApiClient {
    client: Client,
    config: ApiConfig,
}

impl AdminApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // Turn a non-2xx response into an error carrying the status
    fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!("{} answered with status {}", response.url(), status);
            Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);

        let res = self.client.get(&url).send().await?;
        info!("Response received with status: {}", res.status());

        let body = Self::check_status(res)?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn post_json<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);

        let res = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;
        info!("Response received with status: {}", res.status());

        Self::check_status(res)?;
        Ok(())
    }
}

#[async_trait]
impl AdminApi for AdminApiClient {
    async fn fetch_schedule(&self) -> Result<Schedule, ApiError> {
        info!("Loading room schedule");
        let schedule: Schedule = self.get_json(SCHEDULE_PATH).await?;

        if schedule.is_empty() {
            return Err(ApiError::EmptyPayload);
        }
        info!("Loaded {} rooms", schedule.rooms.len());
        Ok(schedule)
    }

    async fn save_schedule(&self, schedule: &Schedule) -> Result<(), ApiError> {
        info!("Saving room schedule with {} rooms", schedule.rooms.len());
        self.post_json(SCHEDULE_PATH, schedule).await
    }

    async fn fetch_panel(&self) -> Result<Panel, ApiError> {
        info!("Loading panel configuration");
        let panel: Panel = self.get_json(PANEL_PATH).await?;
        info!("Loaded panel with {} fields", panel.fields.len());
        Ok(panel)
    }

    async fn save_panel(&self, values: &FormState) -> Result<(), ApiError> {
        info!("Saving panel values ({} fields)", values.len());
        self.post_json(PANEL_PATH, values).await
    }
}
