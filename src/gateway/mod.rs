//! Hosted-Backend Gateway
//!
//! REST adapter for the backend-as-a-service that owns all persistence:
//! the auth service, the row API (`/rest/v1`), and file storage
//! (`/storage/v1`). Organized by domain like the rest of the crate.

mod auth;
mod profiles;
mod restaurants;
mod storage;

pub use auth::AuthUser;

use leptos::prelude::expect_context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

const SESSION_KEY: &str = "dinefinder.session";

/// Client for the hosted backend. Cheap to clone; provided via context.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

/// Get the gateway from context.
pub fn use_gateway() -> Gateway {
    expect_context::<Gateway>()
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    /// Attach the project key plus the session bearer token (anonymous key
    /// when nobody is signed in).
    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = load_session()
            .map(|s| s.access_token)
            .unwrap_or_else(|| self.config.anon_key.clone());
        req.header("apikey", &self.config.anon_key).bearer_auth(token)
    }

    // ========================
    // Row API plumbing
    // ========================

    pub(crate) async fn rows_get<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(String, String)],
    ) -> Result<Vec<T>, GatewayError> {
        let resp = self
            .authorized(self.http.get(self.rest_url(table)))
            .query(&[("select", "*")])
            .query(filters)
            .send()
            .await
            .map_err(|e| GatewayError::Fetch(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(api_error(resp, GatewayError::Fetch).await);
        }
        resp.json()
            .await
            .map_err(|e| GatewayError::Fetch(e.to_string()))
    }

    pub(crate) async fn rows_insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<Vec<T>, GatewayError> {
        let resp = self
            .authorized(self.http.post(self.rest_url(table)))
            .header("prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Write(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(api_error(resp, GatewayError::Write).await);
        }
        resp.json()
            .await
            .map_err(|e| GatewayError::Write(e.to_string()))
    }

    pub(crate) async fn rows_update<B: Serialize>(
        &self,
        table: &str,
        id: u32,
        body: &B,
    ) -> Result<(), GatewayError> {
        let resp = self
            .authorized(self.http.patch(self.rest_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Write(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(api_error(resp, GatewayError::Write).await);
        }
        Ok(())
    }

    pub(crate) async fn rows_delete(&self, table: &str, id: u32) -> Result<(), GatewayError> {
        let resp = self
            .authorized(self.http.delete(self.rest_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| GatewayError::Write(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(api_error(resp, GatewayError::Write).await);
        }
        Ok(())
    }
}

/// Turn a non-2xx response into the caller's error category, keeping the
/// backend's message string as the error identity.
async fn api_error(resp: reqwest::Response, wrap: fn(String) -> GatewayError) -> GatewayError {
    let status = resp.status();
    let body: ApiErrorBody = resp.json().await.unwrap_or_default();
    wrap(body.into_message(status))
}

/// The backend spells its error message differently per service.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ApiErrorBody {
    fn into_message(self, status: reqwest::StatusCode) -> String {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("request failed with status {status}"))
    }
}

// ========================
// Session persistence
// ========================

/// Token material kept in browser local storage across page loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user_id: String,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub(crate) fn load_session() -> Option<StoredSession> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub(crate) fn store_session(session: &StoredSession) {
    if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

pub(crate) fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
