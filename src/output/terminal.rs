//! Terminal output.
//!
//! Everything is written to a `Write` so the report can be captured in tests.

use crate::config::Credentials;
use crate::error::RgError;
use crate::models::ResourceGroup;
use colored::Colorize;
use std::io::{self, Write};

/// Number of leading characters of a secret left visible when masking.
const MASK_VISIBLE: usize = 4;

/// Banner printed before the resource group list.
pub fn banner() -> String {
    format!("{}Resource Groups{}", "#".repeat(43), "#".repeat(50))
}

/// Hide all but the first few characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let visible: String = secret.chars().take(MASK_VISIBLE).collect();
    if visible.chars().count() == secret.chars().count() {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

fn shown(secret: &str, show_secrets: bool) -> String {
    if show_secrets {
        secret.to_string()
    } else {
        mask_secret(secret)
    }
}

/// Dump the credential values read from the environment.
pub fn write_credentials<W: Write>(
    out: &mut W,
    credentials: &Credentials,
    show_secrets: bool,
) -> io::Result<()> {
    writeln!(out, "Exported Values:")?;
    writeln!(out, "ARM_CLIENT_ID: {}", credentials.client_id)?;
    writeln!(
        out,
        "ARM_CLIENT_SECRET: {}",
        shown(&credentials.client_secret, show_secrets)
    )?;
    writeln!(out, "ARM_TENANT_ID: {}", credentials.tenant_id)?;
    writeln!(out, "ARM_SUBSCRIPTION_ID: {}", credentials.subscription_id)?;
    Ok(())
}

pub fn write_subscription<W: Write>(out: &mut W, subscription_id: &str) -> io::Result<()> {
    writeln!(out, "Subscription ID: {subscription_id}")
}

pub fn write_access_token<W: Write>(
    out: &mut W,
    token: &str,
    show_secrets: bool,
) -> io::Result<()> {
    writeln!(out, "Access Token: {}", shown(token, show_secrets))
}

/// One line naming the failed step and why.
pub fn write_error<W: Write>(out: &mut W, err: &RgError) -> io::Result<()> {
    writeln!(out, "{}: {err}", err.step().red())
}

/// Print the banner, then each group numbered from 1 with its name and ID.
pub fn write_resource_groups<W: Write>(out: &mut W, groups: &[ResourceGroup]) -> io::Result<()> {
    writeln!(out, "{}", banner().bold())?;
    for (i, rg) in groups.iter().enumerate() {
        writeln!(out, "{}. Name: {}", i + 1, rg.name)?;
        writeln!(out, "   ID: {}", rg.id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("abc"), "****");
        assert_eq!(mask_secret("abcd"), "****");
        assert_eq!(mask_secret("abcdefgh"), "abcd****");
    }

    #[test]
    fn test_credentials_secret_masked() {
        let creds = Credentials {
            client_id: "client".to_string(),
            client_secret: "supersecret".to_string(),
            tenant_id: "tenant".to_string(),
            subscription_id: "sub".to_string(),
        };
        let text = render(|out| write_credentials(out, &creds, false));
        assert!(text.starts_with("Exported Values:\n"));
        assert!(text.contains("ARM_CLIENT_SECRET: supe****\n"));
        assert!(!text.contains("supersecret"));
        assert!(text.contains("ARM_SUBSCRIPTION_ID: sub\n"));

        let text = render(|out| write_credentials(out, &creds, true));
        assert!(text.contains("ARM_CLIENT_SECRET: supersecret\n"));
    }

    #[test]
    fn test_access_token_line() {
        let text = render(|out| write_access_token(out, "eyJ0eXAiOiJKV1Qi", false));
        assert_eq!(text, "Access Token: eyJ0****\n");
    }

    #[test]
    fn test_resource_groups_numbered_from_one() {
        let groups = vec![
            ResourceGroup {
                id: "/subscriptions/x/resourceGroups/rg1".to_string(),
                name: "rg1".to_string(),
            },
            ResourceGroup {
                id: "/subscriptions/x/resourceGroups/rg2".to_string(),
                name: "rg2".to_string(),
            },
        ];
        let text = render(|out| write_resource_groups(out, &groups));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Resource Groups"));
        assert_eq!(lines[1], "1. Name: rg1");
        assert_eq!(lines[2], "   ID: /subscriptions/x/resourceGroups/rg1");
        assert_eq!(lines[3], "2. Name: rg2");
        assert_eq!(lines[4], "   ID: /subscriptions/x/resourceGroups/rg2");
    }

    #[test]
    fn test_error_line() {
        let err = RgError::Status {
            status: 403,
            body: String::new(),
        };
        let text = render(|out| write_error(out, &err));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("Error fetching resource groups"));
        assert!(text.ends_with(": unexpected response status code: 403\n"));
    }

    #[test]
    fn test_resource_groups_empty() {
        let text = render(|out| write_resource_groups(out, &[]));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("Resource Groups"));
    }
}
