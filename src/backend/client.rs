use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{BackendError, Query, Record};
use crate::config::AppConfig;

/// Error body fields checked in order for a human-readable message.
const ERROR_MESSAGE_FIELDS: &[&str] = &["message", "msg", "error_description", "error"];

/// HTTP client for the hosted backend.
///
/// Requests are independent: no retries, no backoff, no ordering between
/// calls. The access token of the signed-in user is passed per call.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    anon_key: String,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str, anon_key: &str, timeout_secs: u64) -> Result<Self, BackendError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let anon_key = anon_key.trim();
        if base_url.is_empty() || anon_key.is_empty() {
            return Err(BackendError::NotConfigured);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            anon_key: anon_key.to_string(),
            http,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, BackendError> {
        Self::new(
            &config.backend_url,
            &config.backend_anon_key,
            config.request_timeout_secs,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn rest_url(&self, query: &Query) -> String {
        format!("{}/rest/v1/{}", self.base_url, query.target().as_str())
    }

    /// Base request with the `apikey` header. Without a user token the anon
    /// key doubles as the bearer, as the auth endpoints expect.
    pub(crate) fn request(&self, method: Method, url: &str, token: Option<&str>) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(token.unwrap_or(&self.anon_key))
    }

    // ── Rows ────────────────────────────────────────────────

    /// Fetch every row matching `query`, validating each one.
    pub async fn select<T: Record>(&self, token: &str, query: &Query) -> Result<Vec<T>, BackendError> {
        let response = self
            .request(Method::GET, &self.rest_url(query), Some(token))
            .query(&query.params(true))
            .send()
            .await?;

        let rows: Vec<T> = decode(response, T::TABLE.as_str()).await?;
        validate_rows(&rows)?;
        tracing::debug!(table = T::TABLE.as_str(), rows = rows.len(), "Fetched rows");
        Ok(rows)
    }

    /// First row matching `query`, if any.
    pub async fn select_one<T: Record>(
        &self,
        token: &str,
        query: &Query,
    ) -> Result<Option<T>, BackendError> {
        let limited = query.clone().limit(1);
        Ok(self.select(token, &limited).await?.into_iter().next())
    }

    /// Insert one row and return it as stored.
    pub async fn insert<T, N>(&self, token: &str, row: &N) -> Result<T, BackendError>
    where
        T: Record,
        N: Serialize + ?Sized,
    {
        let url = format!("{}/rest/v1/{}", self.base_url, T::TABLE.as_str());
        let response = self
            .request(Method::POST, &url, Some(token))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        let rows: Vec<T> = decode(response, T::TABLE.as_str()).await?;
        validate_rows(&rows)?;
        let stored = rows.into_iter().next().ok_or_else(|| BackendError::InvalidRecord {
            table: T::TABLE.as_str(),
            reason: "insert returned no row".into(),
        })?;
        tracing::info!(table = T::TABLE.as_str(), "Row inserted");
        Ok(stored)
    }

    /// Patch every row matching `query`; returns the updated rows.
    pub async fn update<T, P>(&self, token: &str, query: &Query, patch: &P) -> Result<Vec<T>, BackendError>
    where
        T: Record,
        P: Serialize + ?Sized,
    {
        let response = self
            .request(Method::PATCH, &self.rest_url(query), Some(token))
            .query(&query.params(false))
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;

        let rows: Vec<T> = decode(response, T::TABLE.as_str()).await?;
        validate_rows(&rows)?;
        tracing::info!(table = T::TABLE.as_str(), rows = rows.len(), "Rows updated");
        Ok(rows)
    }

    /// Delete every row matching `query`.
    pub async fn delete(&self, token: &str, query: &Query) -> Result<(), BackendError> {
        let response = self
            .request(Method::DELETE, &self.rest_url(query), Some(token))
            .query(&query.params(false))
            .send()
            .await?;

        check_status(response).await?;
        tracing::info!(table = query.target().as_str(), "Rows deleted");
        Ok(())
    }
}

fn validate_rows<T: Record>(rows: &[T]) -> Result<(), BackendError> {
    for row in rows {
        row.validate().map_err(|reason| BackendError::InvalidRecord {
            table: T::TABLE.as_str(),
            reason,
        })?;
    }
    Ok(())
}

/// Pass 2xx responses through; turn anything else into `BackendError::Api`.
pub(crate) async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    tracing::warn!(status = status.as_u16(), %message, "Backend request failed");
    Err(BackendError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Check the status, then decode the JSON body.
pub(crate) async fn decode<D: DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<D, BackendError> {
    let bytes = check_status(response).await?.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| BackendError::Decode {
        context: context.to_string(),
        source,
    })
}

/// Pull a readable message out of an error body.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ERROR_MESSAGE_FIELDS {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    match status.canonical_reason() {
        Some(reason) => format!("Request failed: {reason}"),
        None => format!("Request failed with status {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::backend::{Order, Table};
    use crate::models::{JournalEntry, NewJournalEntry, Profile};
    use serde_json::json;
    use uuid::Uuid;

    const USER: &str = "0b2d9a4e-2f1c-4b5d-8e7f-9a0b1c2d3e4f";

    fn journal_row(id: &str, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "user_id": USER,
            "title": title,
            "content": "Wrote a little today",
            "mood": "good",
            "tags": ["calm"],
            "created_at": "2025-03-01T18:30:00+00:00"
        })
    }

    #[test]
    fn new_rejects_missing_configuration() {
        assert!(matches!(
            BackendClient::new("", "key", 5),
            Err(BackendError::NotConfigured)
        ));
        assert!(matches!(
            BackendClient::new("https://x.supabase.co", "  ", 5),
            Err(BackendError::NotConfigured)
        ));
    }

    #[test]
    fn new_trims_trailing_slash() {
        let client = BackendClient::new("https://x.supabase.co/", "key", 5).unwrap();
        assert_eq!(client.base_url(), "https://x.supabase.co");
        assert_eq!(client.auth_url("/token"), "https://x.supabase.co/auth/v1/token");
    }

    #[test]
    fn error_message_prefers_known_fields() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(error_message(status, r#"{"message":"duplicate key"}"#), "duplicate key");
        assert_eq!(
            error_message(status, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(error_message(status, r#"{"msg":"User already registered"}"#), "User already registered");
        assert_eq!(error_message(status, "plain failure"), "plain failure");
        assert_eq!(error_message(status, ""), "Request failed: Bad Request");
    }

    #[tokio::test]
    async fn select_sends_filters_and_headers() {
        let id = Uuid::new_v4().to_string();
        let server = MockBackend::start(vec![(
            "GET",
            "/rest/v1/journal_entries",
            200,
            json!([journal_row(&id, "Morning")]),
        )])
        .await;
        let client = BackendClient::new(&server.url, "anon-key", 5).unwrap();

        let query = Query::table(Table::JournalEntries)
            .eq("user_id", USER)
            .order("created_at", Order::Descending);
        let rows: Vec<JournalEntry> = client.select("user-token", &query).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Morning");
        assert_eq!(rows[0].id.to_string(), id);

        let req = server.last_request();
        assert_eq!(req.method, "GET");
        assert_eq!(req.header("apikey"), Some("anon-key"));
        assert_eq!(req.header("authorization"), Some("Bearer user-token"));
        assert_eq!(req.query_value("select"), Some("*"));
        assert_eq!(req.query_value("user_id"), Some(format!("eq.{USER}").as_str()));
        assert_eq!(req.query_value("order"), Some("created_at.desc"));
    }

    #[tokio::test]
    async fn select_rejects_invalid_rows() {
        let server = MockBackend::start(vec![(
            "GET",
            "/rest/v1/journal_entries",
            200,
            json!([journal_row(&Uuid::new_v4().to_string(), "   ")]),
        )])
        .await;
        let client = BackendClient::new(&server.url, "anon-key", 5).unwrap();

        let err = client
            .select::<JournalEntry>("t", &Query::table(Table::JournalEntries))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BackendError::InvalidRecord { table: "journal_entries", .. }
        ));
    }

    #[tokio::test]
    async fn select_reports_wrong_shapes_as_decode_errors() {
        let server = MockBackend::start(vec![(
            "GET",
            "/rest/v1/profiles",
            200,
            json!([{"id": "not-a-uuid"}]),
        )])
        .await;
        let client = BackendClient::new(&server.url, "anon-key", 5).unwrap();

        let err = client
            .select::<Profile>("t", &Query::table(Table::Profiles))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Decode { ref context, .. } if context == "profiles"));
    }

    #[tokio::test]
    async fn select_one_limits_and_handles_empty() {
        let server =
            MockBackend::start(vec![("GET", "/rest/v1/profiles", 200, json!([]))]).await;
        let client = BackendClient::new(&server.url, "anon-key", 5).unwrap();

        let profile: Option<Profile> = client
            .select_one("t", &Query::table(Table::Profiles).eq("user_id", USER))
            .await
            .unwrap();
        assert!(profile.is_none());
        assert_eq!(server.last_request().query_value("limit"), Some("1"));
    }

    #[tokio::test]
    async fn insert_asks_for_representation() {
        let id = Uuid::new_v4().to_string();
        let server = MockBackend::start(vec![(
            "POST",
            "/rest/v1/journal_entries",
            201,
            json!([journal_row(&id, "Evening")]),
        )])
        .await;
        let client = BackendClient::new(&server.url, "anon-key", 5).unwrap();

        let row = NewJournalEntry {
            user_id: USER.parse().unwrap(),
            title: "Evening".into(),
            content: "Wrote a little today".into(),
            mood: None,
            tags: vec!["calm".into()],
        };
        let stored: JournalEntry = client.insert("t", &row).await.unwrap();
        assert_eq!(stored.title, "Evening");

        let req = server.last_request();
        assert_eq!(req.method, "POST");
        assert_eq!(req.header("prefer"), Some("return=representation"));
        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body["title"], "Evening");
        assert_eq!(body["tags"], json!(["calm"]));
        assert!(body["mood"].is_null());
    }

    #[tokio::test]
    async fn api_errors_carry_backend_message() {
        let server = MockBackend::start(vec![(
            "POST",
            "/rest/v1/journal_entries",
            403,
            json!({"code": "42501", "message": "new row violates row-level security policy"}),
        )])
        .await;
        let client = BackendClient::new(&server.url, "anon-key", 5).unwrap();

        let row = json!({"title": "x"});
        let err = client.insert::<JournalEntry, _>("t", &row).await.unwrap_err();
        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "new row violates row-level security policy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_sends_filters_without_select() {
        let server = MockBackend::start(vec![(
            "DELETE",
            "/rest/v1/journal_entries",
            204,
            serde_json::Value::Null,
        )])
        .await;
        let client = BackendClient::new(&server.url, "anon-key", 5).unwrap();

        client
            .delete("t", &Query::table(Table::JournalEntries).eq("id", "abc"))
            .await
            .unwrap();

        let req = server.last_request();
        assert_eq!(req.method, "DELETE");
        assert_eq!(req.query_value("id"), Some("eq.abc"));
        assert_eq!(req.query_value("select"), None);
    }

    #[tokio::test]
    async fn unreachable_backend_is_http_error() {
        // Port 9 (discard) is not listening on loopback in test environments.
        let client = BackendClient::new("http://127.0.0.1:9", "anon-key", 2).unwrap();
        let err = client
            .select::<Profile>("t", &Query::table(Table::Profiles))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Http(_)));
        assert!(err.to_string().starts_with("Network error"));
    }
}
