//! Runtime configuration read from the environment.
//!
//! Values are read once at startup into [`Config`] and passed explicitly to
//! everything that needs them.

use crate::error::{Result, RgError};

/// Azure Resource Manager API version used for the resource group listing.
pub const API_VERSION: &str = "2022-01-01";
/// Default Azure Resource Manager endpoint.
pub const MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";
/// Azure CLI executable.
pub const AZ_CLI: &str = "az";

pub const ENV_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
pub const ENV_TENANT_ID: &str = "AZURE_TENANT_ID";
pub const ENV_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
pub const ENV_SHOW_SECRETS: &str = "AZURE_RG_SHOW_SECRETS";
pub const ENV_MANAGEMENT_ENDPOINT: &str = "AZURE_MANAGEMENT_ENDPOINT";

/// The four Azure credential values, as read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub subscription_id: String,
}

impl Credentials {
    /// Build from a variable lookup, unset variables read as empty strings.
    pub fn from_lookup<F>(lookup: F) -> Credentials
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).unwrap_or_default();
        Credentials {
            client_id: read(ENV_CLIENT_ID),
            client_secret: read(ENV_CLIENT_SECRET),
            tenant_id: read(ENV_TENANT_ID),
            subscription_id: read(ENV_SUBSCRIPTION_ID),
        }
    }

    /// The credential set only counts as present when a client ID was given.
    pub fn is_populated(&self) -> bool {
        !self.client_id.is_empty()
    }

    /// Subscription ID to scope the token and the request to, exactly as read.
    pub fn subscription_id(&self) -> Result<&str> {
        if !self.is_populated() || self.subscription_id.is_empty() {
            return Err(RgError::MissingSubscriptionId);
        }
        Ok(&self.subscription_id)
    }
}

/// Everything a run needs, constructed once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Print the client secret and access token unmasked.
    pub show_secrets: bool,
    /// Resource Manager base URL without trailing slash.
    pub endpoint: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup);
        let show_secrets = lookup(ENV_SHOW_SECRETS)
            .map(|v| is_truthy(&v))
            .unwrap_or(false);
        let endpoint = lookup(ENV_MANAGEMENT_ENDPOINT)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| MANAGEMENT_ENDPOINT.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        log::debug!(
            "Config loaded: populated={} show_secrets={show_secrets} endpoint={endpoint}",
            credentials.is_populated()
        );

        Config {
            credentials,
            show_secrets,
            endpoint,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
