use anyhow::{anyhow, Context as _, Result};
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

use crate::ledger::Ledger;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file '{0}' not found")]
    NotFound(String),
    #[error("failed to read '{0}'")]
    Io(String, #[source] std::io::Error),
    #[error("'{0}' is not a valid ledger file")]
    Format(String, #[source] serde_json::Error),
}

/// Reads a ledger from `path`, replacing nothing on failure: the caller
/// only swaps in the returned value on `Ok`. A missing file is reported
/// as [`LoadError::NotFound`] so the shell can tailor its message.
pub fn load(path: &Path) -> Result<Ledger, LoadError> {
    log::info!("Loading ledger from {}...", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.display().to_string()))
        }
        Err(err) => return Err(LoadError::Io(path.display().to_string(), err)),
    };
    let mut ledger: Ledger = serde_json::from_str(&content)
        .map_err(|err| LoadError::Format(path.display().to_string(), err))?;
    // Files written by hand or by older versions may be unsorted
    ledger.ensure_sorted();

    log::info!("Loading ledger...done");
    Ok(ledger)
}

/// Writes the ledger to `path` as pretty-printed JSON.
pub fn save(ledger: &Ledger, path: &Path) -> Result<()> {
    log::info!("Saving ledger to {}...", path.display());

    let content = serde_json::to_string_pretty(ledger).context("Failed to encode the ledger")?;

    // First write to a temporary file so we don't lose data if writing fails halfway
    let filename = path
        .file_name()
        .ok_or_else(|| anyhow!("Path has no filename"))?
        .to_str()
        .ok_or_else(|| anyhow!("Filename isn't valid utf-8"))?;
    let tmppath = path.with_file_name(format!("{filename}.temp"));
    std::fs::write(&tmppath, content)
        .with_context(|| format!("Failed to write {}", tmppath.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmppath, std::fs::Permissions::from_mode(0o644))?;
    }

    // Ok, writing succeeded, let's now replace the real file with the tmpfile
    std::fs::rename(&tmppath, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    log::info!("Saving ledger...done");
    Ok(())
}
