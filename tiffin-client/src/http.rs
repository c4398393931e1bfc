//! HTTP gateway for backend API calls
//!
//! Central place for bearer-token attachment, the request timeout and
//! status-to-error mapping. The one global side effect lives here: a 401
//! response purges the in-memory token and the persisted credential, so the
//! caller is forced back through login.

use std::sync::{Arc, RwLock};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use shared::response::Empty;

use crate::storage::CredentialStorage;
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the booking backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
    storage: Option<CredentialStorage>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: format!("{}/api", config.base_url.trim_end_matches('/')),
            token: Arc::new(RwLock::new(None)),
            storage: None,
        })
    }

    /// Attach a credential store to purge on 401
    pub fn with_storage(mut self, storage: CredentialStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Set the bearer token used for subsequent requests
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    /// Drop the bearer token
    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    /// Get the current token
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request with JSON body
    pub async fn delete<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiResponse<Empty>>(&text)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or(text);

            if status == StatusCode::UNAUTHORIZED {
                self.purge_credentials();
                return Err(ClientError::Unauthorized);
            }
            return Err(match status {
                StatusCode::BAD_REQUEST => ClientError::Validation(message),
                StatusCode::FORBIDDEN => ClientError::Forbidden(message),
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::CONFLICT => ClientError::Conflict(message),
                _ => ClientError::Internal(message),
            });
        }

        response.json().await.map_err(Into::into)
    }

    /// Clear in-memory token and delete the persisted credential
    fn purge_credentials(&self) {
        self.clear_token();
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.delete() {
                tracing::warn!("Failed to delete stored credential: {}", e);
            }
        }
        tracing::warn!("Session rejected by backend, credentials purged");
    }
}

/// Unwrap the envelope, requiring `success` and a data payload
pub(crate) fn expect_data<T>(response: ApiResponse<T>) -> ClientResult<T> {
    if !response.success {
        return Err(ClientError::InvalidResponse(format!(
            "Backend rejected request: {}",
            response.message()
        )));
    }
    response
        .data
        .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
}
