use axum::{
    extract::{Json as ExtractJson, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// In-process stand-in for the admin REST backend
pub struct StubBackend {
    pub schedule_body: Mutex<Value>,
    pub panel_body: Mutex<Value>,
    pub get_status: Mutex<StatusCode>,
    pub post_status: Mutex<StatusCode>,
    pub get_delay: Mutex<Duration>,
    pub get_calls: AtomicUsize,
    pub schedule_posts: Mutex<Vec<Value>>,
    pub panel_posts: Mutex<Vec<Value>>,
}

impl StubBackend {
    pub fn new(schedule_body: Value, panel_body: Value) -> Arc<Self> {
        Arc::new(Self {
            schedule_body: Mutex::new(schedule_body),
            panel_body: Mutex::new(panel_body),
            get_status: Mutex::new(StatusCode::OK),
            post_status: Mutex::new(StatusCode::OK),
            get_delay: Mutex::new(Duration::ZERO),
            get_calls: AtomicUsize::new(0),
            schedule_posts: Mutex::new(Vec::new()),
            panel_posts: Mutex::new(Vec::new()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::new(json!({ "salones": [] }), json!({}))
    }

    pub fn set_get_status(&self, status: StatusCode) {
        *self.get_status.lock().unwrap() = status;
    }

    pub fn set_post_status(&self, status: StatusCode) {
        *self.post_status.lock().unwrap() = status;
    }

    pub fn set_get_delay(&self, delay: Duration) {
        *self.get_delay.lock().unwrap() = delay;
    }

    pub fn set_schedule_body(&self, body: Value) {
        *self.schedule_body.lock().unwrap() = body;
    }

    /// Resolve once the backend has received `expected` GET requests
    pub async fn wait_for_gets(&self, expected: usize) {
        while self.get_calls.load(Ordering::SeqCst) < expected {
            tokio::task::yield_now().await;
        }
    }
}

async fn respond_after_delay(
    stub: &StubBackend,
    body: &Mutex<Value>,
) -> (StatusCode, Json<Value>) {
    stub.get_calls.fetch_add(1, Ordering::SeqCst);
    let delay = *stub.get_delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let status = *stub.get_status.lock().unwrap();
    let body = body.lock().unwrap().clone();
    (status, Json(body))
}

async fn get_schedule(State(stub): State<Arc<StubBackend>>) -> (StatusCode, Json<Value>) {
    respond_after_delay(&stub, &stub.schedule_body).await
}

async fn post_schedule(
    State(stub): State<Arc<StubBackend>>,
    ExtractJson(body): ExtractJson<Value>,
) -> StatusCode {
    stub.schedule_posts.lock().unwrap().push(body.clone());
    let status = *stub.post_status.lock().unwrap();
    if status.is_success() {
        stub.set_schedule_body(body);
    }
    status
}

async fn get_panel(State(stub): State<Arc<StubBackend>>) -> (StatusCode, Json<Value>) {
    respond_after_delay(&stub, &stub.panel_body).await
}

async fn post_panel(
    State(stub): State<Arc<StubBackend>>,
    ExtractJson(body): ExtractJson<Value>,
) -> StatusCode {
    stub.panel_posts.lock().unwrap().push(body);
    let status = *stub.post_status.lock().unwrap();
    status
}

/// Serve the stub on an ephemeral local port and return its base URL
pub async fn spawn_stub_backend(stub: Arc<StubBackend>) -> String {
    let app = Router::new()
        .route("/api/disponibilidad", get(get_schedule).post(post_schedule))
        .route("/api/panel-info", get(get_panel).post(post_panel))
        .with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Route test logs through the test writer; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
