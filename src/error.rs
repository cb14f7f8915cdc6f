//! Error types for listing resource groups.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RgError>;

/// Every way a run can fail, one variant per failing step.
#[derive(Debug, Error)]
pub enum RgError {
    /// AZURE_CLIENT_ID or AZURE_SUBSCRIPTION_ID missing.
    #[error("Azure subscription ID is not set")]
    MissingSubscriptionId,

    #[error("failed to execute {program}: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },

    #[error("invalid command output: {0}")]
    CommandOutput(String),

    #[error("failed to create request: {0}")]
    InvalidUrl(String),

    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success HTTP status, body kept for logging.
    #[error("unexpected response status code: {status}")]
    Status { status: u16, body: String },

    #[error("failed to parse JSON response: path={path} error={message}")]
    Decode { path: String, message: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RgError {
    /// Short prefix naming the step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            RgError::MissingSubscriptionId => "Configuration error",
            RgError::CommandSpawn { .. }
            | RgError::CommandFailed { .. }
            | RgError::CommandOutput(_) => "Error getting access token",
            RgError::InvalidUrl(_)
            | RgError::Transport(_)
            | RgError::Status { .. }
            | RgError::Decode { .. } => "Error fetching resource groups",
            RgError::Output(_) => "Error writing output",
        }
    }

    /// HTTP status code for protocol errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RgError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code() {
        let err = RgError::Status {
            status: 403,
            body: "{}".to_string(),
        };
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.to_string(), "unexpected response status code: 403");
        assert_eq!(err.step(), "Error fetching resource groups");
    }

    #[test]
    fn test_steps() {
        assert_eq!(RgError::MissingSubscriptionId.step(), "Configuration error");
        assert_eq!(
            RgError::CommandOutput("empty".to_string()).step(),
            "Error getting access token"
        );
        assert_eq!(RgError::MissingSubscriptionId.status_code(), None);
    }
}
