//! Mock backend server for testing
//!
//! Simulates the PostgREST data API and the GoTrue auth API with wiremock.

use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

pub const TEST_ANON_KEY: &str = "test-anon-key";
pub const TEST_ACCESS_TOKEN: &str = "user-access-token";

/// Mock backend server
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    fn table_path(table: &str) -> String {
        format!("/rest/v1/{}", table)
    }

    /// `GET /rest/v1/{table}` answering with `rows`
    pub async fn mock_list(&self, table: &str, rows: Value) {
        Mock::given(method("GET"))
            .and(path(Self::table_path(table)))
            .and(query_param("select", "*"))
            .and(header("apikey", TEST_ANON_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .mount(&self.server)
            .await;
    }

    /// Same as `mock_list` but asserting the number of calls on drop
    pub async fn mock_list_expecting(&self, table: &str, rows: Value, calls: u64) {
        Mock::given(method("GET"))
            .and(path(Self::table_path(table)))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_list_failure(&self, table: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(Self::table_path(table)))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "code": "PGRST000",
                "message": "Could not connect to the database",
                "details": null,
                "hint": null
            })))
            .mount(&self.server)
            .await;
    }

    /// `POST /rest/v1/{table}` echoing `row` as the inserted representation
    pub async fn mock_insert(&self, table: &str, row: Value) {
        Mock::given(method("POST"))
            .and(path(Self::table_path(table)))
            .and(header("prefer", "return=representation"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([row])))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Unique violation on insert
    pub async fn mock_insert_duplicate(&self, table: &str) {
        Mock::given(method("POST"))
            .and(path(Self::table_path(table)))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "code": "23505",
                "message": format!("duplicate key value violates unique constraint \"{}_email_key\"", table),
                "details": "Key (email)=(ana@example.com) already exists.",
                "hint": null
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_update(&self, table: &str, id: Uuid, rows: Value) {
        Mock::given(method("PATCH"))
            .and(path(Self::table_path(table)))
            .and(query_param("id", format!("eq.{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_delete(&self, table: &str, id: Uuid) {
        Mock::given(method("DELETE"))
            .and(path(Self::table_path(table)))
            .and(query_param("id", format!("eq.{}", id)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Password grant succeeding for `email`
    pub async fn mock_sign_in(&self, email: &str, role: Option<&str>) {
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(body_partial_json(json!({ "email": email })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_response(email, role)))
            .mount(&self.server)
            .await;
    }

    /// Password grant failing with `invalid_grant`, expecting `calls` attempts
    pub async fn mock_sign_in_rejected(&self, calls: u64) {
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_refresh(&self, email: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_response(email, None)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_logout(&self, calls: u64) {
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .respond_with(ResponseTemplate::new(204))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Requests received so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests received so far with the given HTTP method
    pub async fn requests_with_method(&self, http_method: &str) -> Vec<Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|request| request.method.as_str() == http_method)
            .collect()
    }
}

/// GoTrue token response body
pub fn token_response(email: &str, role: Option<&str>) -> Value {
    let metadata = match role {
        Some(role) => json!({ "role": role }),
        None => json!({}),
    };
    json!({
        "access_token": TEST_ACCESS_TOKEN,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-token",
        "user": {
            "id": Uuid::new_v4(),
            "email": email,
            "user_metadata": metadata
        }
    })
}
