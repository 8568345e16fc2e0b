//! # File I/O Module
//!
//! Handles project file operations with safety features:
//! - **Atomic saves**: write to .tmp, sync, rename over the target
//! - **File locking**: stop two people editing the same job on a shared drive
//! - **Version validation**: refuse files from an incompatible schema
//!
//! ## File Format
//!
//! Projects are saved as `.fwp` files containing pretty-printed JSON.
//! Lock files use the `.fwp.lock` extension and record who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bom_core::file_io::{save_project, load_project, FileLock};
//! use bom_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Sam Maker", "FW-0001", "Print Lab");
//! let path = Path::new("shop.fwp");
//!
//! let lock = FileLock::acquire(path, "sam@example.com").unwrap();
//! save_project(&project, path).unwrap();
//! drop(lock);
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Locks older than this are taken over regardless of owner
pub const STALE_LOCK_HOURS: i64 = 24;

/// Lock file metadata stored in .fwp.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }

    /// True when the holder is gone or the lock has expired
    pub fn is_stale(&self) -> bool {
        if Utc::now() - self.locked_at > chrono::Duration::hours(STALE_LOCK_HOURS) {
            return true;
        }
        match hostname() {
            Some(machine) if machine == self.machine => !process_alive(self.pid),
            _ => false,
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME").ok().or_else(|| std::env::var("HOST").ok())
    }
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    Path::new(&format!("/proc/{pid}")).exists()
}

#[cfg(windows)]
fn process_alive(pid: u32) -> bool {
    use std::process::Command;
    match Command::new("tasklist")
        .args(["/FI", &format!("PID eq {pid}"), "/NH"])
        .output()
    {
        Ok(output) => String::from_utf8_lossy(&output.stdout).contains(&pid.to_string()),
        Err(_) => true,
    }
}

#[cfg(not(any(unix, windows)))]
fn process_alive(_pid: u32) -> bool {
    true
}

/// File lock guard that releases the lock when dropped.
///
/// Holds an OS-level exclusive lock (fs2) on the `.fwp.lock` file, and
/// writes [`LockInfo`] into it so other users can see who has the job open.
pub struct FileLock {
    project_path: PathBuf,
    lock_path: PathBuf,
    _lock_file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project file.
    ///
    /// A lock file left behind by a dead process, or older than
    /// [`STALE_LOCK_HOURS`], is taken over. Otherwise returns
    /// [`CalcError::FileLocked`].
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if let Ok(existing) = read_lock_info(&lock_path) {
            if !existing.is_stale() {
                return Err(CalcError::file_locked(
                    path.display().to_string(),
                    format!("{} ({})", existing.user_id, existing.machine),
                    existing.locked_at.to_rfc3339(),
                ));
            }
            tracing::info!(
                path = %path.display(),
                previous_owner = %existing.user_id,
                "taking over stale lock"
            );
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string()))?;

        lock_file
            .try_lock_exclusive()
            .map_err(|_| CalcError::file_locked(path.display().to_string(), "another process", "unknown"))?;

        let lock_json = serde_json::to_string_pretty(&info).map_err(CalcError::serialization)?;
        lock_file
            .write_all(lock_json.as_bytes())
            .map_err(|e| CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string()))?;
        lock_file
            .sync_all()
            .map_err(|e| CalcError::file_error("sync lock", lock_path.display().to_string(), e.to_string()))?;

        tracing::debug!(path = %path.display(), user = %info.user_id, "lock acquired");
        Ok(FileLock {
            project_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Who holds the lock on a file, if anyone (stale locks are ignored)
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_lock_info(&lock_path_for(path)).ok().filter(|info| !info.is_stale())
    }

    /// Path to the locked project file
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn lock_path_for(project_path: &Path) -> PathBuf {
    let mut lock_path = project_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> CalcResult<LockInfo> {
    let contents = fs::read_to_string(lock_path)
        .map_err(|e| CalcError::file_error("read lock", lock_path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&contents).map_err(CalcError::serialization)
}

/// Save a project with atomic write semantics.
///
/// Serializes to `<path>.tmp`, syncs it to disk, then renames it over
/// `path`. An interrupted save leaves the previous file untouched.
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(CalcError::serialization)?;

    let tmp_path = tmp_path_for(path);
    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;
    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;
    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), items = project.item_count(), "project saved");
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp_path = path.to_path_buf();
    let extension = tmp_path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp_path.set_extension(extension);
    tmp_path
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Err(CalcError::VersionMismatch)` - file schema is incompatible
/// * `Err(CalcError::SerializationError)` - invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let mut file =
        File::open(path).map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&project.meta.version)?;
    project.settings.validate()?;

    tracing::debug!(path = %path.display(), items = project.item_count(), "project loaded");
    Ok(project)
}

/// Load a project and report whether someone else holds its lock.
pub fn load_project_with_lock_check(path: &Path) -> CalcResult<(Project, Option<LockInfo>)> {
    let project = load_project(path)?;
    Ok((project, FileLock::check(path)))
}

/// Major versions must match. While the schema is 0.x, a newer minor
/// version is rejected as well.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };

    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, rest @ ..], [current_major, current_rest @ ..]) => {
            if file_major != current_major {
                return Err(mismatch());
            }
            if *current_major == 0 {
                if let (Some(file_minor), Some(current_minor)) = (rest.first(), current_rest.first()) {
                    if file_minor > current_minor {
                        return Err(mismatch());
                    }
                }
            }
            Ok(())
        }
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{BomRequest, MaterialConfiguration, StructuralDimensions, TableConfiguration};
    use tempfile::TempDir;

    fn project_path(dir: &TempDir) -> PathBuf {
        dir.path().join("shop.fwp")
    }

    #[test]
    fn test_lock_path_generation() {
        let lock_path = lock_path_for(Path::new("/jobs/shop.fwp"));
        assert_eq!(lock_path, Path::new("/jobs/shop.fwp.lock"));
        assert_eq!(tmp_path_for(Path::new("/jobs/shop.fwp")), Path::new("/jobs/shop.fwp.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = project_path(&dir);

        let mut project = Project::new("Sam Maker", "FW-0001", "Print Lab");
        project.settings.large_span_threshold_mm = 1200.0;
        let id = project.add_item(BomRequest::new(
            "Enclosure",
            StructuralDimensions::inside(900.0, 500.0, 800.0),
            TableConfiguration::enclosure_only(),
            MaterialConfiguration::default(),
        ));
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.maker, "Sam Maker");
        assert_eq!(loaded.settings.large_span_threshold_mm, 1200.0);
        assert_eq!(loaded.get_item(&id), project.get_item(&id));
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = project_path(&dir);

        save_project(&Project::new("Test", "TEST", "Client"), &path).unwrap();

        assert!(path.exists());
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_project(&dir.path().join("nope.fwp")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_rejects_other_major_version() {
        let dir = TempDir::new().unwrap();
        let path = project_path(&dir);
        let mut project = Project::new("Test", "TEST", "Client");
        project.meta.version = "1.0.0".to_string();
        save_project(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_load_rejects_bad_settings() {
        let dir = TempDir::new().unwrap();
        let path = project_path(&dir);
        let mut project = Project::new("Test", "TEST", "Client");
        project.settings.panel_edge_clearance_mm = -1.0;
        save_project(&project, &path).unwrap();

        assert_eq!(load_project(&path).unwrap_err().error_code(), "INVALID_SETTING");
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let dir = TempDir::new().unwrap();
        let path = project_path(&dir);
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "sam@example.com").unwrap();
        assert_eq!(lock.info.user_id, "sam@example.com");
        assert_eq!(lock.project_path(), path.as_path());

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());
        assert!(FileLock::check(&path).is_some());

        drop(lock);
        assert!(!lock_path.exists());
        assert!(FileLock::check(&path).is_none());
    }

    #[test]
    fn test_held_lock_is_refused() {
        let dir = TempDir::new().unwrap();
        let path = project_path(&dir);

        let _held = FileLock::acquire(&path, "first@example.com").unwrap();
        let err = FileLock::acquire(&path, "second@example.com").err().unwrap();

        assert_eq!(err.error_code(), "FILE_LOCKED");
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("first@example.com"));
    }

    #[test]
    fn test_stale_lock_is_taken_over() {
        let dir = TempDir::new().unwrap();
        let path = project_path(&dir);

        let old = LockInfo {
            user_id: "gone@example.com".to_string(),
            machine: "old-bench".to_string(),
            pid: 1,
            locked_at: Utc::now() - chrono::Duration::hours(STALE_LOCK_HOURS + 1),
        };
        assert!(old.is_stale());
        fs::write(lock_path_for(&path), serde_json::to_string(&old).unwrap()).unwrap();
        assert!(FileLock::check(&path).is_none());

        let lock = FileLock::acquire(&path, "new@example.com").unwrap();
        assert_eq!(lock.info.user_id, "new@example.com");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_load_with_lock_check() {
        let dir = TempDir::new().unwrap();
        let path = project_path(&dir);
        save_project(&Project::new("Test", "TEST", "Client"), &path).unwrap();

        let (loaded, lock_info) = load_project_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.job_id, "TEST");
        assert!(lock_info.is_none());
    }
}
