//! Application configuration stored as TOML (`registrar.toml` by default).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Registrar configuration (TOML).
///
/// Constructed explicitly and passed to the components that need it; there
/// is no global configuration state. Missing fields default to sensible
/// values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory that receives exported records and backups.
    pub data_dir: PathBuf,

    /// File name (within `data_dir`) for the student export.
    pub export_file: String,

    /// Name prefix for timestamped backup directories.
    pub backup_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("registrar_data"),
            export_file: "students.json".to_string(),
            backup_prefix: "backup".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow!("data_dir must be a non-empty path"));
        }
        if self.export_file.trim().is_empty() {
            return Err(anyhow!("export_file must be non-empty"));
        }
        if self.export_file.contains('/') || self.export_file.contains('\\') {
            return Err(anyhow!("export_file must be a bare file name"));
        }
        if self.backup_prefix.trim().is_empty() {
            return Err(anyhow!("backup_prefix must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AppConfig::default()`.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let cfg = AppConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &AppConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("registrar.toml");
        let cfg = AppConfig {
            data_dir: temp.path().join("records"),
            ..AppConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("registrar.toml");
        fs::write(&path, "data_dir = \"campus\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.data_dir, PathBuf::from("campus"));
        assert_eq!(cfg.export_file, "students.json");
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let cfg = AppConfig {
            export_file: String::new(),
            ..AppConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = AppConfig {
            export_file: "nested/students.json".to_string(),
            ..AppConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = AppConfig {
            backup_prefix: "  ".to_string(),
            ..AppConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
