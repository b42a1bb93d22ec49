//! GitHub API error types.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Failed to get GitHub token: {0}")]
    TokenError(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("{resource} was not found. Did you spell that right?")]
    NotFound { resource: String },

    #[error("GitHub rejected the request for {resource}{}", format_message(.message))]
    Rejected {
        resource: String,
        message: Option<String>,
    },

    #[error("GitHub is likely down (HTTP {}) while requesting {resource}. Retry later", .status.as_u16())]
    ServerError {
        resource: String,
        status: StatusCode,
    },

    #[error("Unexpected HTTP {} from GitHub for {resource}{}", .status.as_u16(), format_message(.message))]
    UnexpectedStatus {
        resource: String,
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Could not reach GitHub for {resource}: {source}")]
    Transport {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not decode GitHub response for {resource}: {source}")]
    Decode {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request for {resource} was cancelled")]
    Cancelled { resource: String },
}

impl GitHubError {
    /// Short machine-friendly reason, used in reports and log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::TokenError(_) => "token",
            Self::ClientBuild(_) => "client",
            Self::NotFound { .. } => "not-found",
            Self::Rejected { .. } => "rejected",
            Self::ServerError { .. } => "server-error",
            Self::UnexpectedStatus { .. } => "unexpected-status",
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
            Self::Cancelled { .. } => "cancelled",
        }
    }
}

fn format_message(message: &Option<String>) -> String {
    match message.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => format!(": {m}"),
        _ => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;
