// cargo watch -x 'fmt' -x 'run'

pub mod azure;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

use azure::ResourceGroupClient;
use config::Config;
use error::Result;
use models::ResourceGroup;
use std::io::Write;

pub use error::RgError;

/// Run the whole listing: dump credentials, fetch a token, list groups, report.
///
/// `fetch_token` gets the subscription ID and returns a bearer token,
/// normally [`azure::get_access_token`]. Nothing is fetched when the
/// subscription ID is missing, and nothing is reported when a step fails.
pub async fn list_resource_groups<F, W>(
    config: &Config,
    fetch_token: F,
    out: &mut W,
) -> Result<Vec<ResourceGroup>>
where
    F: FnOnce(&str) -> Result<String>,
    W: Write,
{
    log::info!("#Start list_resource_groups()");
    output::write_credentials(out, &config.credentials, config.show_secrets)?;

    let subscription_id = config.credentials.subscription_id()?;
    output::write_subscription(out, subscription_id)?;

    let token = fetch_token(subscription_id)?;
    output::write_access_token(out, &token, config.show_secrets)?;

    let client = ResourceGroupClient::new(&config.endpoint);
    let groups = client.list(subscription_id, &token).await?;

    output::write_resource_groups(out, &groups)?;
    Ok(groups)
}
