//! Preference file handling.
//!
//! Preferences live in a small TOML file:
//!
//! ```toml
//! theme = "light"
//! syntax = "classic"
//! ```
//!
//! Lookup order is an explicit path, then `./sqaull.toml`, then
//! `<config dir>/sqaull/config.toml`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SqaullError, SqaullResult};
use crate::prefs::Preferences;

/// File name looked up in the working directory.
pub const LOCAL_FILE: &str = "sqaull.toml";

/// Per-user config path, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sqaull").join("config.toml"))
}

/// Where preferences are read from and written to.
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = Path::new(LOCAL_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }
    user_config_path()
}

/// Parse preferences from TOML text. Unset fields take their defaults.
pub fn parse(content: &str) -> SqaullResult<Preferences> {
    toml::from_str(content).map_err(|e| SqaullError::Config(e.to_string()))
}

/// Load preferences from `path`, or defaults when it does not exist.
pub fn load_from(path: &Path) -> SqaullResult<Preferences> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Preferences::default());
    }
    let content = fs::read_to_string(path)?;
    let prefs: Preferences = toml::from_str(&content)
        .map_err(|e| SqaullError::Config(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(
        "Loaded config from {} (theme={}, syntax={})",
        path.display(),
        prefs.theme,
        prefs.syntax
    );
    Ok(prefs)
}

/// Load preferences using the standard lookup order.
pub fn load(explicit: Option<&Path>) -> SqaullResult<Preferences> {
    match resolve_path(explicit) {
        Some(path) => load_from(&path),
        None => Ok(Preferences::default()),
    }
}

/// Write preferences to `path`, creating parent directories.
pub fn save_to(path: &Path, prefs: &Preferences) -> SqaullResult<()> {
    let content = toml::to_string(prefs).map_err(|e| SqaullError::Config(e.to_string()))?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::info!("Saved preferences to {}", path.display());
    Ok(())
}
