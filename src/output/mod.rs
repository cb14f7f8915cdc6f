//! Output formatting for the resource group listing.
//!
//! - [`terminal`] - human readable report written to stdout

mod terminal;

pub use terminal::{
    banner, mask_secret, write_access_token, write_credentials, write_error,
    write_resource_groups, write_subscription,
};
