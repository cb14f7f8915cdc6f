//! Azure CLI command execution.
//!
//! Runs an external program and hands back its stdout.

use crate::error::{Result, RgError};
use colored::Colorize;
use std::process::Command;

/// Largest stdout accepted from a command, a token is far smaller.
const MAX_STDOUT_BYTES: usize = 64 * 1024;

/// Run `program` with `args` and return its stdout.
///
/// Arguments reach the process unchanged, no shell and no re-splitting.
/// Blocks until the process exits, there is no timeout.
///
/// # Errors
/// * [`RgError::CommandSpawn`] - the program could not be started
/// * [`RgError::CommandFailed`] - non-zero exit, carries stderr
/// * [`RgError::CommandOutput`] - stdout too large or not UTF-8
pub fn run_args(program: &str, args: &[&str]) -> Result<String> {
    let cmd = format!("{program} {}", args.join(" "));
    log::debug!("run({cmd})", cmd = cmd.on_blue());
    log::trace!("args={:?}", args);

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::debug!("Command execution failed: {}", e);
        RgError::CommandSpawn {
            program: program.to_string(),
            source: e,
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::info!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(RgError::CommandFailed {
            status: output.status.to_string(),
            stderr,
        });
    }

    log::debug!("Success cmd: {cmd}");
    log::debug!("Success output.stdout.len(): {}", output.stdout.len());

    if output.stdout.len() > MAX_STDOUT_BYTES {
        return Err(RgError::CommandOutput(format!(
            "response too large: {} bytes for command: {program} {args:?}",
            output.stdout.len()
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| RgError::CommandOutput(format!("invalid UTF-8: {e}")))
}
