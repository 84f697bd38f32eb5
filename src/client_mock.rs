use async_trait::async_trait;
use mockall::mock;
use std::sync::{Arc, Mutex};

use crate::client::AdminApi;
use crate::error::ApiError;
use crate::models::field::Panel;
use crate::models::schedule::Schedule;
use crate::services::form_state::FormState;

// Define a mock of the admin backend
mock! {
    pub Backend {}

    #[async_trait]
    impl AdminApi for Backend {
        async fn fetch_schedule(&self) -> Result<Schedule, ApiError>;
        async fn save_schedule(&self, schedule: &Schedule) -> Result<(), ApiError>;
        async fn fetch_panel(&self) -> Result<Panel, ApiError>;
        async fn save_panel(&self, values: &FormState) -> Result<(), ApiError>;
    }
}

// A simple in-memory store standing in for the persisted backend state
pub struct MockDataStore {
    pub schedule: Mutex<Schedule>,
    pub panel: Mutex<Panel>,
    pub saved_panels: Mutex<Vec<FormState>>,
}

impl MockDataStore {
    pub fn new(schedule: Schedule, panel: Panel) -> Self {
        Self {
            schedule: Mutex::new(schedule),
            panel: Mutex::new(panel),
            saved_panels: Mutex::new(Vec::new()),
        }
    }

    pub fn persisted_schedule(&self) -> Schedule {
        self.schedule.lock().unwrap().clone()
    }

    pub fn replace_schedule(&self, schedule: Schedule) {
        *self.schedule.lock().unwrap() = schedule;
    }

    pub fn last_saved_panel(&self) -> Option<FormState> {
        self.saved_panels.lock().unwrap().last().cloned()
    }
}

// Helper function to set up a mock backend that reads and writes the store
pub fn setup_mock_backend(schedule: Schedule, panel: Panel) -> (MockBackend, Arc<MockDataStore>) {
    let data_store = Arc::new(MockDataStore::new(schedule, panel));
    let mut mock = MockBackend::default();

    let store_ref1 = Arc::clone(&data_store);
    mock.expect_fetch_schedule().returning(move || {
        let schedule = store_ref1.persisted_schedule();
        if schedule.is_empty() {
            Err(ApiError::EmptyPayload)
        } else {
            Ok(schedule)
        }
    });

    let store_ref2 = Arc::clone(&data_store);
    mock.expect_save_schedule().returning(move |schedule| {
        store_ref2.replace_schedule(schedule.clone());
        Ok(())
    });

    let store_ref3 = Arc::clone(&data_store);
    mock.expect_fetch_panel()
        .returning(move || Ok(store_ref3.panel.lock().unwrap().clone()));

    let store_ref4 = Arc::clone(&data_store);
    mock.expect_save_panel().returning(move |values| {
        store_ref4.saved_panels.lock().unwrap().push(values.clone());
        Ok(())
    });

    (mock, data_store)
}

pub fn server_error(url: &str) -> ApiError {
    ApiError::Status {
        status: 500,
        url: url.to_string(),
    }
}
