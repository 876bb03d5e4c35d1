use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::types::{ApiError, RecordId, SESSION_EXPIRED_MESSAGE},
    config,
    state::session::Session,
};

/// Thin wrapper around `reqwest` bound to the backend base URL.
///
/// Authenticated calls need a bearer token; it is never read from ambient
/// storage here. Callers obtain one from the session context and attach it with
/// [`ApiClient::with_session`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    bearer: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            bearer: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            bearer: None,
        }
    }

    pub fn with_session(&self, session: &Session) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            bearer: Some(session.token.clone()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) async fn record_url(&self, path: &str, id: &RecordId) -> String {
        let encoded = utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC);
        format!("{}{}/{}", self.resolved_base_url().await, path, encoded)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) fn require_session(&self) -> Result<(), ApiError> {
        if self.bearer.is_some() {
            Ok(())
        } else {
            Err(ApiError::unauthorized(SESSION_EXPIRED_MESSAGE))
        }
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
        let body = response.json::<Value>().await.ok();
        let message = body
            .as_ref()
            .and_then(|v| v.get("error").or_else(|| v.get("message")))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        if status == StatusCode::UNAUTHORIZED {
            let mut error = ApiError::unauthorized(message);
            error.details = body;
            error
        } else {
            let mut error = ApiError::http(status.as_u16(), message);
            error.details = body;
            error
        }
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let response = self.send(self.client.get(url).query(query)).await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let response = self.send(self.client.post(url).json(body)).await?;
        Self::parse_json(response).await
    }

    /// Mutations whose response body is not needed; the caller refetches.
    pub(crate) async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path).await;
        self.send(self.client.post(url).json(body)).await.map(|_| ())
    }

    pub(crate) async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path).await;
        self.send(self.client.put(url).json(body)).await.map(|_| ())
    }

    pub(crate) async fn put_record<B: Serialize>(
        &self,
        path: &str,
        id: &RecordId,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.record_url(path, id).await;
        self.send(self.client.put(url).json(body)).await.map(|_| ())
    }

    pub(crate) async fn delete_record(&self, path: &str, id: &RecordId) -> Result<(), ApiError> {
        let url = self.record_url(path, id).await;
        self.send(self.client.delete(url)).await.map(|_| ())
    }
}
