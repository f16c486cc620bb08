//! Timestamped backups of exported files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::info;

use crate::io::config::AppConfig;

/// Outcome of a backup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupOutcome {
    pub dir: PathBuf,
    pub files_copied: usize,
    pub total_bytes: u64,
}

/// Copy every exported file into a fresh timestamped backup directory.
///
/// The directory is `data_dir/<prefix>_<UTC timestamp>`; only regular files
/// directly under `data_dir` are copied, so earlier backup directories are
/// left alone.
pub fn backup_exports(config: &AppConfig) -> Result<BackupOutcome> {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let dir = reserve_backup_dir(&config.data_dir, &config.backup_prefix, &timestamp)?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("create backup directory {}", dir.display()))?;

    let mut files_copied = 0;
    let mut total_bytes = 0;
    let entries = fs::read_dir(&config.data_dir)
        .with_context(|| format!("read data directory {}", config.data_dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| "read data directory entry".to_string())?;
        let meta = entry
            .metadata()
            .with_context(|| format!("stat {}", entry.path().display()))?;
        if !meta.is_file() {
            continue;
        }
        let target = dir.join(entry.file_name());
        total_bytes += fs::copy(entry.path(), &target)
            .with_context(|| format!("copy {} to backup", entry.path().display()))?;
        files_copied += 1;
    }

    info!(files = files_copied, dir = %dir.display(), "backup complete");
    Ok(BackupOutcome {
        dir,
        files_copied,
        total_bytes,
    })
}

/// Total size in bytes of every file under `path`, recursively.
///
/// A missing path counts as zero.
pub fn dir_size(path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }
    let mut total = 0;
    let entries =
        fs::read_dir(path).with_context(|| format!("read directory {}", path.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry under {}", path.display()))?;
        let meta = entry
            .metadata()
            .with_context(|| format!("stat {}", entry.path().display()))?;
        if meta.is_dir() {
            total += dir_size(&entry.path())?;
        } else {
            total += meta.len();
        }
    }
    Ok(total)
}

/// Pick an unused backup directory name, probing numeric suffixes on
/// collision (two backups within the same second).
fn reserve_backup_dir(data_dir: &Path, prefix: &str, timestamp: &str) -> Result<PathBuf> {
    let base = format!("{prefix}_{timestamp}");
    let mut candidate = data_dir.join(&base);
    for suffix in 2..=999u32 {
        if !candidate.exists() {
            return Ok(candidate);
        }
        candidate = data_dir.join(format!("{base}-{suffix}"));
    }
    bail!("could not find an unused backup directory name for {base}");
}
