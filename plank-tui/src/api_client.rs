//! REST client for the tracker API.
//!
//! JSON bodies, cookie-based credentials. Failures are typed; retry policy
//! belongs to the callers (there is none - see the sync layer).

use crate::config::TuiConfig;
use plank_core::{
    CreateIssueRequest, CreateIssueResponse, ProjectId, ProjectResponse, Task, TaskId,
    UpdateOrderRequest, UserResponse,
};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session_headers: HeaderMap,
}

impl ApiClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;

        let session_headers = build_session_headers(config.session_cookie.as_deref())?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session_headers,
        })
    }

    /// Full refetch of a project's issues.
    pub async fn list_issues(&self, project: &ProjectId) -> Result<Vec<Task>, ApiClientError> {
        let path = format!("/projects/{}/issues", project);
        self.get_json(&path).await
    }

    /// Project metadata (title), display only.
    pub async fn get_project(&self, project: &ProjectId) -> Result<ProjectResponse, ApiClientError> {
        let path = format!("/projects/{}", project);
        self.get_json(&path).await
    }

    /// The authenticated user.
    pub async fn current_user(&self) -> Result<UserResponse, ApiClientError> {
        self.get_json("/user/me").await
    }

    pub async fn create_issue(
        &self,
        project: &ProjectId,
        request: &CreateIssueRequest,
    ) -> Result<CreateIssueResponse, ApiClientError> {
        let url = format!("{}/projects/{}/issues/create", self.base_url, project);
        let response = self
            .client
            .post(url)
            .headers(self.session_headers.clone())
            .json(request)
            .send()
            .await?;
        self.parse_response(response).await
    }

    pub async fn delete_issue(
        &self,
        project: &ProjectId,
        id: &TaskId,
    ) -> Result<(), ApiClientError> {
        let url = format!("{}/projects/{}/issues/{}", self.base_url, project, id);
        let response = self
            .client
            .delete(url)
            .headers(self.session_headers.clone())
            .send()
            .await?;
        self.expect_success(response).await
    }

    /// Column-scoped reorder/re-status PATCH; void response.
    pub async fn update_order(
        &self,
        project: &ProjectId,
        request: &UpdateOrderRequest,
    ) -> Result<(), ApiClientError> {
        let url = format!("{}/projects/{}/issues/updateOrder", self.base_url, project);
        let response = self
            .client
            .patch(url)
            .headers(self.session_headers.clone())
            .json(request)
            .send()
            .await?;
        self.expect_success(response).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(url)
            .headers(self.session_headers.clone())
            .send()
            .await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let text = response.text().await?;
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )))
        }
    }

    async fn expect_success(&self, response: reqwest::Response) -> Result<(), ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = response.text().await?;
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )))
        }
    }
}

fn build_session_headers(session_cookie: Option<&str>) -> Result<HeaderMap, ApiClientError> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = session_cookie {
        headers.insert(
            COOKIE,
            HeaderValue::from_str(cookie).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    Ok(headers)
}
