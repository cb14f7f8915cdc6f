//! Azure CLI and Resource Manager interaction.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for Azure CLI
//! - [`token`] - Access token retrieval via `az account get-access-token`
//! - [`resource_groups`] - Resource Manager resource group listing

mod cli;
mod resource_groups;
mod token;

// Re-export public types and functions
pub use cli::run_args;
pub use resource_groups::{decode_resource_groups, ResourceGroupClient};
pub use token::{access_token_args, get_access_token, get_access_token_with};
