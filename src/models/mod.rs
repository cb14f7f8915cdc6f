//! Domain models for the Azure resource group listing.
//!
//! - [`ResourceGroup`] - one resource group as returned by Resource Manager
//! - [`ResourceGroupList`] - the `{"value": [...]}` response envelope

mod resource_group;

pub use resource_group::{ResourceGroup, ResourceGroupList};
