//! HTTP client for the hosted backend
//!
//! Wraps the PostgREST data API and the GoTrue auth API behind a single
//! `send` path so every response is converted to a `BackendError` the same
//! way.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;
use crate::config::BackendConfig;
use crate::utils::errors::{BackendError, BackendResult, PortalError, Result};
use crate::utils::logging::{log_backend_call, log_backend_error};

const REST_PREFIX: &str = "rest/v1/";
const AUTH_PREFIX: &str = "auth/v1/";

/// Thin client for the backend's REST surface
///
/// Cheap to clone; clones share the signed-in access token.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
    anon_key: String,
    application_name: String,
    access_token: Arc<RwLock<Option<String>>>,
}

impl BackendClient {
    /// Create a new client from the backend configuration
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(format!("{}/{}", config.application_name, env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PortalError::Http)?;

        // `Url::join` replaces the last path segment unless the base ends in '/'
        let mut base = config.url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        Ok(Self {
            http,
            base_url,
            anon_key: config.anon_key.clone(),
            application_name: config.application_name.clone(),
            access_token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Use a signed-in user's token instead of the anon key for `Authorization`
    pub fn set_access_token(&self, token: Option<String>) {
        let mut guard = self.access_token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = token;
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn bearer(&self) -> String {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(|| self.anon_key.clone())
    }

    fn rest_url(&self, table: &str) -> BackendResult<Url> {
        self.base_url
            .join(&format!("{}{}", REST_PREFIX, table))
            .map_err(|e| BackendError::InvalidResponse(format!("invalid table path {}: {}", table, e)))
    }

    pub(crate) fn auth_url(&self, path: &str) -> BackendResult<Url> {
        self.base_url
            .join(&format!("{}{}", AUTH_PREFIX, path))
            .map_err(|e| BackendError::InvalidResponse(format!("invalid auth path {}: {}", path, e)))
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.request_with_token(method, url, &self.bearer())
    }

    /// Request authorized with an explicit bearer token
    pub(crate) fn request_with_token(&self, method: Method, url: Url, token: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .header("x-application-name", &self.application_name)
    }

    pub(crate) fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Send a request and convert transport and HTTP failures
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        operation: &str,
        table: &str,
    ) -> BackendResult<Response> {
        let started = Instant::now();
        let outcome = match request.send().await {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(error_from_response(response).await),
            Err(e) => Err(error_from_transport(&e)),
        };

        let elapsed = started.elapsed().as_millis() as u64;
        log_backend_call(operation, table, elapsed, outcome.is_ok());
        if let Err(e) = &outcome {
            log_backend_error(operation, table, &e.to_string());
        }
        outcome
    }

    /// `GET /rest/v1/{table}?select=*`, optionally ordered by one column
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        order: Option<(&str, bool)>,
    ) -> BackendResult<Vec<T>> {
        let mut url = self.rest_url(table)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            if let Some((column, ascending)) = order {
                let direction = if ascending { "asc" } else { "desc" };
                query.append_pair("order", &format!("{}.{}", column, direction));
            }
        }

        let response = self.send(self.request(Method::GET, url), "select", table).await?;
        decode(response).await
    }

    /// `POST /rest/v1/{table}` returning the inserted row
    pub async fn insert<B, T>(&self, table: &str, body: &B) -> BackendResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.rest_url(table)?;
        let request = self
            .request(Method::POST, url)
            .header("Prefer", "return=representation")
            .json(&[body]);

        let response = self.send(request, "insert", table).await?;
        let mut rows: Vec<T> = decode(response).await?;
        if rows.is_empty() {
            return Err(BackendError::InvalidResponse(format!(
                "insert into {} returned no rows",
                table
            )));
        }
        Ok(rows.swap_remove(0))
    }

    /// `PATCH /rest/v1/{table}?id=eq.{id}`; `None` when no row matched
    pub async fn update<B, T>(&self, table: &str, id: Uuid, body: &B) -> BackendResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.row_url(table, id)?;
        let request = self
            .request(Method::PATCH, url)
            .header("Prefer", "return=representation")
            .json(body);

        let response = self.send(request, "update", table).await?;
        let mut rows: Vec<T> = decode(response).await?;
        Ok(if rows.is_empty() { None } else { Some(rows.swap_remove(0)) })
    }

    /// `DELETE /rest/v1/{table}?id=eq.{id}`
    pub async fn delete(&self, table: &str, id: Uuid) -> BackendResult<()> {
        let url = self.row_url(table, id)?;
        self.send(self.request(Method::DELETE, url), "delete", table).await?;
        Ok(())
    }

    /// Ping the auth health endpoint
    pub async fn health_check(&self) -> bool {
        let url = match self.auth_url("health") {
            Ok(url) => url,
            Err(_) => return false,
        };
        match self.send(self.request(Method::GET, url), "health", "auth").await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Backend health check failed");
                false
            }
        }
    }

    fn row_url(&self, table: &str, id: Uuid) -> BackendResult<Url> {
        let mut url = self.rest_url(table)?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{}", id));
        Ok(url)
    }
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
    let body = response
        .bytes()
        .await
        .map_err(|e| error_from_transport(&e))?;
    serde_json::from_slice(&body).map_err(|e| BackendError::InvalidResponse(e.to_string()))
}

fn error_from_transport(error: &reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::Timeout
    } else if error.is_connect() {
        BackendError::Unavailable
    } else {
        BackendError::InvalidResponse(error.to_string())
    }
}

async fn error_from_response(response: Response) -> BackendError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), body = %body, "Backend returned an error");
    classify_error(status, &body)
}

/// Map an error status and body to a `BackendError`
///
/// PostgREST sends `{code, message, details, hint}`; GoTrue sends either
/// `{error, error_description}` or `{code, msg}` with a numeric code.
pub(crate) fn classify_error(status: StatusCode, body: &str) -> BackendError {
    let json: Value = serde_json::from_str(body).unwrap_or(Value::Null);

    let code = match json.get("code").or_else(|| json.get("error")) {
        Some(Value::String(code)) => Some(code.clone()),
        Some(Value::Number(code)) => Some(code.to_string()),
        _ => None,
    };
    let message = ["message", "msg", "error_description", "details"]
        .iter()
        .find_map(|key| json.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    if code.as_deref() == Some(BackendError::UNIQUE_VIOLATION) || status == StatusCode::CONFLICT {
        return BackendError::Duplicate(message);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Unauthorized(message),
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => BackendError::Unavailable,
        StatusCode::GATEWAY_TIMEOUT | StatusCode::REQUEST_TIMEOUT => BackendError::Timeout,
        _ => BackendError::Rejected {
            status: status.as_u16(),
            code,
            message,
        },
    }
}
