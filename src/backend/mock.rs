//! In-process stand-in for the hosted backend, used by tests.
//!
//! Routes are matched on (method, path) and answer with a canned status and
//! JSON body. Every request is captured for assertions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use axum::Router;

#[derive(Debug, Clone)]
pub(crate) struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

type Routes = HashMap<(String, String), (u16, serde_json::Value)>;

#[derive(Clone)]
struct MockState {
    routes: Arc<Routes>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub(crate) struct MockBackend {
    pub url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockBackend {
    /// Bind to an ephemeral loopback port and serve `routes`.
    pub async fn start(routes: Vec<(&str, &str, u16, serde_json::Value)>) -> Self {
        let routes: Routes = routes
            .into_iter()
            .map(|(method, path, status, body)| {
                ((method.to_string(), path.to_string()), (status, body))
            })
            .collect();
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            routes: Arc::new(routes),
            captured: captured.clone(),
        };

        let app = Router::new().fallback(handle).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            url: format!("http://{addr}"),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().expect("captured lock").clone()
    }

    pub fn last_request(&self) -> CapturedRequest {
        self.requests()
            .pop()
            .expect("mock backend received no request")
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    state
        .captured
        .lock()
        .expect("captured lock")
        .push(CapturedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query,
            headers,
            body,
        });

    let key = (method.to_string(), uri.path().to_string());
    let (status, payload) = match state.routes.get(&key) {
        Some((status, payload)) => (*status, payload.clone()),
        None => (404, serde_json::json!({"message": "no such route"})),
    };

    let body = if payload.is_null() {
        Body::empty()
    } else {
        Body::from(payload.to_string())
    };

    Response::builder()
        .status(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("mock response")
}
