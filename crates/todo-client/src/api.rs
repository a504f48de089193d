//! HTTP client for the task REST surface
//!
//! `ApiClient` attaches a bearer credential to every request and decodes
//! the server's JSON bodies, surfacing the `error` field on failures.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ClientError;
use crate::types::{CreateTask, Task, UpdateTask};

/// Supplies the bearer credential for outgoing requests
///
/// Identity providers hand out short-lived tokens, so the credential is
/// fetched per request rather than captured at construction.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, ClientError>;
}

/// A fixed token, for tests and scripted use
pub struct StaticToken(pub String);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String, ClientError> {
        Ok(self.0.clone())
    }
}

/// Remote task operations, abstracted so the store can be tested without
/// a live server
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ClientError>;
    async fn fetch_task(&self, id: Uuid) -> Result<Task, ClientError>;
    async fn create_task(&self, data: &CreateTask) -> Result<Task, ClientError>;
    async fn update_task(&self, id: Uuid, data: &UpdateTask) -> Result<Task, ClientError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), ClientError>;
}

/// HTTP implementation of [`TaskApi`]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiClient {
    /// Create a client against a base URL such as
    /// `http://localhost:5000/api/v1`
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn bearer(&self) -> Result<String, ClientError> {
        self.tokens.access_token().await
    }

    /// Convert a non-success response into `ClientError::Api`, keeping the
    /// server's `error` field when the body carries one
    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error);

        tracing::debug!(status = status.as_u16(), ?message, "API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TaskApi for ApiClient {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self
            .http
            .get(self.endpoint("/tasks"))
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn fetch_task(&self, id: Uuid) -> Result<Task, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/tasks/{}", id)))
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_task(&self, data: &CreateTask) -> Result<Task, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/tasks"))
            .bearer_auth(self.bearer().await?)
            .json(data)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_task(&self, id: Uuid, data: &UpdateTask) -> Result<Task, ClientError> {
        let response = self
            .http
            .put(self.endpoint(&format!("/tasks/{}", id)))
            .bearer_auth(self.bearer().await?)
            .json(data)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/tasks/{}", id)))
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;

        let response = Self::check(response).await?;
        debug_assert_eq!(response.status(), StatusCode::NO_CONTENT);
        Ok(())
    }
}
