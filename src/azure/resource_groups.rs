//! Azure Resource Manager resource group listing.

use crate::config::API_VERSION;
use crate::error::{Result, RgError};
use crate::models::{ResourceGroup, ResourceGroupList};
use reqwest::{StatusCode, Url};

/// HTTP client for the Resource Manager resource group endpoint.
#[derive(Debug, Clone)]
pub struct ResourceGroupClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ResourceGroupClient {
    /// Create a client for `endpoint`, e.g. `https://management.azure.com`.
    pub fn new(endpoint: &str) -> ResourceGroupClient {
        ResourceGroupClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Listing URL for one subscription.
    pub fn url(&self, subscription_id: &str) -> Result<Url> {
        let url = format!(
            "{endpoint}/subscriptions/{subscription_id}/resourcegroups?api-version={API_VERSION}",
            endpoint = self.endpoint
        );
        Url::parse(&url).map_err(|e| RgError::InvalidUrl(format!("{url}: {e}")))
    }

    /// List the resource groups of a subscription, in server order.
    ///
    /// The whole body is read before the status is checked, so the
    /// connection is released on every path.
    pub async fn list(&self, subscription_id: &str, token: &str) -> Result<Vec<ResourceGroup>> {
        let url = self.url(subscription_id)?;
        log::info!("GET {url}");

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(RgError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(RgError::Transport)?;
        log::debug!("status={status} body.len()={}", body.len());

        if status != StatusCode::OK {
            log::info!("Unexpected status {status} listing resource groups");
            log::debug!("Response body:\n{body}");
            return Err(RgError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let groups = decode_resource_groups(&body)?;
        log::info!("Got {} resource groups", groups.len());
        Ok(groups)
    }
}

/// Decode a `{"value": [{"id": .., "name": ..}, ..]}` body.
pub fn decode_resource_groups(body: &str) -> Result<Vec<ResourceGroup>> {
    let mut de = serde_json::Deserializer::from_str(body);
    let list: ResourceGroupList = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        log::debug!("BODY START:\n\n{}\n\nBODY END\n", body);
        RgError::Decode {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })?;
    Ok(list.value)
}
