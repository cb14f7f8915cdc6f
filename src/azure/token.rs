//! Access token retrieval through the Azure CLI.
//!
//! The CLI is trusted to already hold a login session (`az login`); this
//! module only asks it for a bearer token scoped to one subscription.

use super::cli;
use crate::config::AZ_CLI;
use crate::error::{Result, RgError};

/// Arguments asking the Azure CLI for a plain-text access token.
pub fn access_token_args(subscription_id: &str) -> [&str; 8] {
    [
        "account",
        "get-access-token",
        "--query",
        "accessToken",
        "--output",
        "tsv",
        "--subscription",
        subscription_id,
    ]
}

/// Fetch an access token for `subscription_id` using the Azure CLI.
pub fn get_access_token(subscription_id: &str) -> Result<String> {
    get_access_token_with(subscription_id, cli::run_args)
}

/// Fetch an access token, running the CLI through `runner`.
///
/// The runner gets the program and its arguments and returns the process
/// stdout. The subscription ID is passed through exactly as given. The
/// returned token is that stdout with surrounding whitespace trimmed.
pub fn get_access_token_with<F>(subscription_id: &str, runner: F) -> Result<String>
where
    F: FnOnce(&str, &[&str]) -> Result<String>,
{
    if subscription_id.is_empty() {
        return Err(RgError::MissingSubscriptionId);
    }

    log::info!("Requesting access token for subscription {subscription_id}");
    let args = access_token_args(subscription_id);
    let stdout = runner(AZ_CLI, &args[..])?;

    let token = stdout.trim();
    if token.is_empty() {
        return Err(RgError::CommandOutput(
            "az returned an empty access token".to_string(),
        ));
    }
    log::debug!("Got access token, {} chars", token.len());
    Ok(token.to_string())
}
