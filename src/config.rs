//! Generator configuration file (`crudgen.toml`).
//!
//! Every key is optional:
//!
//! ```toml
//! output_dir = "src"
//! templates_dir = "templates/crud"
//! format = true
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```
//!
//! Command line flags take precedence over the file; `CRUDGEN_LOG_LEVEL` and
//! `CRUDGEN_LOG_FORMAT` take precedence over the `[logging]` table.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::logging::LogFormat;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "crudgen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root directory for generated files.
    pub output_dir: Option<PathBuf>,
    /// Directory holding template overrides.
    pub templates_dir: Option<PathBuf>,
    /// Run rustfmt over generated files.
    pub format: bool,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

/// Load and parse a config file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick the config file to use.
///
/// An explicit path is always returned, even if it does not exist, so that a
/// typo surfaces as a read error. Otherwise [`DEFAULT_CONFIG_FILE`] in `cwd`
/// is used when present.
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = cwd.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

/// Resolve and load the configuration, falling back to defaults when no file applies.
pub fn load_effective_config(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<GeneratorConfig> {
    match resolve_config_path(explicit, cwd) {
        Some(path) => {
            let config = load_config(&path)
                .with_context(|| format!("Failed to load generator config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "generator config loaded");
            Ok(config)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;

    #[test]
    fn test_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crudgen.toml");
        fs::write(
            &path,
            r#"
output_dir = "src"
templates_dir = "tpl"
format = true

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("src")));
        assert_eq!(config.templates_dir, Some(PathBuf::from("tpl")));
        assert!(config.format);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format, Some(LogFormat::Json));
    }

    #[test]
    fn test_empty_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crudgen.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(load_config(&path).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crudgen.toml");
        fs::write(&path, "outptu_dir = \"src\"\n").unwrap();
        assert!(matches!(
            load_config(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_resolve_config_path() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_config_path(None, dir.path()), None);

        let explicit = dir.path().join("other.toml");
        assert_eq!(
            resolve_config_path(Some(&explicit), dir.path()),
            Some(explicit.clone())
        );

        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "").unwrap();
        assert_eq!(
            resolve_config_path(None, dir.path()),
            Some(dir.path().join(DEFAULT_CONFIG_FILE))
        );
    }

    #[test]
    fn test_effective_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("missing.toml");
        let err = load_effective_config(Some(&explicit), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("missing.toml"));

        assert_eq!(
            load_effective_config(None, dir.path()).unwrap(),
            GeneratorConfig::default()
        );
    }
}
