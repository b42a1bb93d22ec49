//! GitHub REST client built on reqwest.

use std::process::Command;
use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use super::error::{GitHubError, Result};
use super::types::ErrorBody;
use crate::shared::config::ApiConfig;
use crate::shared::env_var::EnvVars;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const USER_AGENT_VALUE: &str = "ghpm";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// How a response status is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
    Success,
    NotFound,
    Rejected,
    ServerError,
    Unexpected,
}

/// Classify a status code. `mutation` is true for PATCH and friends, where
/// GitHub answers 501 for repositories it refuses to touch.
pub(crate) fn classify(status: StatusCode, mutation: bool) -> StatusClass {
    match status {
        s if s.is_success() => StatusClass::Success,
        StatusCode::NOT_FOUND => StatusClass::NotFound,
        StatusCode::NOT_IMPLEMENTED if mutation => StatusClass::NotFound,
        StatusCode::UNPROCESSABLE_ENTITY => StatusClass::Rejected,
        s if s.is_server_error() => StatusClass::ServerError,
        _ => StatusClass::Unexpected,
    }
}

/// Authenticated GitHub REST client.
///
/// Holds the bearer token and a pooled `reqwest::Client`. Cheap to share
/// behind an `Arc` across concurrent tasks; nothing in it is mutated after
/// construction.
#[derive(Debug)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for the API described by `config`.
    pub fn new(token: impl Into<String>, config: &ApiConfig) -> Result<Self> {
        Self::build(token.into(), &config.base_url, config.timeout())
    }

    /// Create a client against an arbitrary base URL (mock servers, GHES).
    #[cfg(test)]
    pub fn with_base_url(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        Self::build(token.to_string(), base_url, timeout)
    }

    fn build(token: String, base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GitHubError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Send one request and decode a JSON body on success.
    ///
    /// `resource` names what the request is about (a repository full name,
    /// "user", ...) and ends up in error messages.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        resource: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let response = self.send(method, path, resource, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| GitHubError::Decode {
                resource: resource.to_string(),
                source,
            })
    }

    /// Send one request where only the status matters. A success body, if
    /// any, is never read.
    pub async fn request_status(
        &self,
        method: Method,
        path: &str,
        resource: &str,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        self.send(method, path, resource, body).await.map(drop)
    }

    /// Send and classify; returns the response only for a success status.
    async fn send(
        &self,
        method: Method,
        path: &str,
        resource: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let mutation = method != Method::GET;
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.token)
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(API_VERSION_HEADER, API_VERSION);
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        tracing::debug!(%method, path, "GitHub request");

        let response = builder.send().await.map_err(|source| GitHubError::Transport {
            resource: resource.to_string(),
            source,
        })?;
        let status = response.status();

        let resource = resource.to_string();
        match classify(status, mutation) {
            StatusClass::Success => Ok(response),
            StatusClass::NotFound => Err(GitHubError::NotFound { resource }),
            StatusClass::Rejected => Err(GitHubError::Rejected {
                resource,
                message: error_message(response).await,
            }),
            StatusClass::ServerError => Err(GitHubError::ServerError { resource, status }),
            StatusClass::Unexpected => Err(GitHubError::UnexpectedStatus {
                resource,
                status,
                message: error_message(response).await,
            }),
        }
    }
}

async fn error_message(response: reqwest::Response) -> Option<String> {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
}

/// Resolve the bearer token: environment variables first, then `gh auth token`.
pub fn resolve_token(env: &EnvVars) -> Result<String> {
    if let Some((name, token)) = env.token() {
        tracing::debug!(source = name, "using token from environment");
        return Ok(token.to_string());
    }
    get_gh_token()
}

/// Get GitHub token from `gh auth token` command.
/// This reuses the authentication from GitHub CLI.
fn get_gh_token() -> Result<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .map_err(|e| {
            GitHubError::TokenError(format!(
                "no GHPM_TOKEN/GH_TOKEN/GITHUB_TOKEN set and failed to run gh auth token: {e}"
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitHubError::TokenError(format!(
            "gh auth token failed: {}",
            stderr.trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(GitHubError::TokenError(
            "gh auth token returned empty token".to_string(),
        ));
    }

    Ok(token)
}
