use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;

/// Run rustfmt over `files`.
///
/// The binary defaults to `rustfmt` and can be replaced with `CRUDGEN_RUSTFMT_BIN`.
pub fn format_files(files: &[PathBuf]) -> anyhow::Result<()> {
    if files.is_empty() {
        return Ok(());
    }
    // Allow tests to override the rustfmt binary path without mutating PATH
    let rustfmt_bin = std::env::var("CRUDGEN_RUSTFMT_BIN").unwrap_or_else(|_| "rustfmt".to_string());

    let status = Command::new(&rustfmt_bin)
        .arg("--edition")
        .arg("2021")
        .args(files)
        .status()
        .with_context(|| format!("failed to run {rustfmt_bin}"))?;
    if !status.success() {
        anyhow::bail!("{rustfmt_bin} exited with {status}");
    }
    Ok(())
}
