//! # File I/O Module
//!
//! Handles design file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: Prevent concurrent edits on shared drives
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Projects are saved as `.rad` files containing JSON. Lock files use the
//! `.rad.lock` extension with metadata about who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use radiant_core::file_io::{save_project, load_project, FileLock};
//! use radiant_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Smith Residence", "Warm Floors Ltd", "12 Hill Rd");
//! let path = Path::new("smith_residence.rad");
//!
//! // Acquire lock before saving
//! let lock = FileLock::acquire(path, "estimator@warmfloors.example").unwrap();
//!
//! // Save with atomic write
//! save_project(&project, path).unwrap();
//!
//! // Lock is released when dropped
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

/// Lock file metadata stored in .rad.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where the lock was acquired
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
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Uses both:
/// 1. OS-level file locking (via fs2) for process safety
/// 2. .lock file with metadata for user visibility
pub struct FileLock {
    /// Path to the design file this lock protects
    design_path: PathBuf,
    /// Path to the lock file
    lock_path: PathBuf,
    /// The underlying file handle (keeps the OS lock)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a design file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the .rad design file
    /// * `user_id` - Identifier for the user acquiring the lock
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired successfully
    /// * `Err(CalcError::FileLocked)` - Another process holds the lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        // Respect a live lock; a stale one may be taken over
        if let Some(existing) = read_live_lock(&lock_path) {
            return Err(CalcError::file_locked(
                path.display().to_string(),
                format!("{} ({})", existing.user_id, existing.machine),
                existing.locked_at.to_rfc3339(),
            ));
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        // Non-blocking exclusive OS-level lock
        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json = serde_json::to_string_pretty(&info).map_err(|e| {
            CalcError::SerializationError {
                reason: e.to_string(),
            }
        })?;

        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;

        lock_file.sync_all().map_err(|e| {
            CalcError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            design_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check if a design file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_live_lock(&lock_path_for(path))
    }

    /// Get the path to the design file
    pub fn design_path(&self) -> &Path {
        &self.design_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Remove the lock file; the OS lock goes with the handle
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// Get the lock file path for a design file
fn lock_path_for(design_path: &Path) -> PathBuf {
    let mut lock_path = design_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

/// Read lock metadata, ignoring missing, unreadable, or stale locks
fn read_live_lock(lock_path: &Path) -> Option<LockInfo> {
    let contents = fs::read_to_string(lock_path).ok()?;
    let info: LockInfo = serde_json::from_str(&contents).ok()?;
    if is_lock_stale(&info) {
        None
    } else {
        Some(info)
    }
}

/// A lock is stale when its process is gone or it is over 24 hours old
fn is_lock_stale(info: &LockInfo) -> bool {
    if let Some(our_machine) = hostname() {
        if info.machine == our_machine {
            #[cfg(windows)]
            {
                use std::process::Command;
                let output = Command::new("tasklist")
                    .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                    .output();
                if let Ok(output) = output {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                        return true;
                    }
                }
            }
            #[cfg(unix)]
            {
                if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                    return true;
                }
            }
        }
    }

    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

/// Save a project to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize project to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to .rad (atomic on most filesystems)
///
/// This prevents corruption if the process is interrupted during write.
///
/// # Example
///
/// ```rust,no_run
/// use radiant_core::file_io::save_project;
/// use radiant_core::project::Project;
/// use std::path::Path;
///
/// let project = Project::new("Smith Residence", "Warm Floors Ltd", "12 Hill Rd");
/// save_project(&project, Path::new("smith_residence.rad"))?;
/// # Ok::<(), radiant_core::errors::CalcError>(())
/// ```
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("rad.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File schema is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
///
/// # Example
///
/// ```rust,no_run
/// use radiant_core::file_io::load_project;
/// use std::path::Path;
///
/// let project = load_project(Path::new("smith_residence.rad"))?;
/// println!("Loaded project: {}", project.meta.name);
/// # Ok::<(), radiant_core::errors::CalcError>(())
/// ```
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    Ok(project)
}

/// Load a project, reporting whether another user holds its lock.
///
/// # Returns
///
/// * `Ok((Project, None))` - Loaded successfully, no lock
/// * `Ok((Project, Some(LockInfo)))` - Loaded, but another user has the lock
/// * `Err(_)` - Failed to load
pub fn load_project_with_lock_check(path: &Path) -> CalcResult<(Project, Option<LockInfo>)> {
    let project = load_project(path)?;
    Ok((project, FileLock::check(path)))
}

/// Validate that a file schema version is compatible with this build.
///
/// Major versions must match; within 0.x, files newer than this build
/// are rejected (pre-1.0 minors may break the schema).
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (file_major, file_minor) = parse_major_minor(file_version).ok_or_else(mismatch)?;
    let (our_major, our_minor) = parse_major_minor(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != our_major {
        return Err(mismatch());
    }
    if our_major == 0 && file_minor > our_minor {
        return Err(mismatch());
    }

    Ok(())
}

fn parse_major_minor(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().unwrap_or("0").parse().ok()?;
    Some((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_design_path(name: &str) -> PathBuf {
        temp_dir().join(format!("radiant_test_{}.rad", name))
    }

    fn test_project() -> Project {
        Project::new("Smith Residence", "Warm Floors Ltd", "12 Hill Rd")
    }

    #[test]
    fn test_lock_path_generation() {
        let design_path = Path::new("/path/to/house.rad");
        assert_eq!(lock_path_for(design_path), Path::new("/path/to/house.rad.lock"));
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("estimator@warmfloors.example");
        assert_eq!(info.user_id, "estimator@warmfloors.example");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_design_path("roundtrip");

        save_project(&test_project(), &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.name, "Smith Residence");
        assert_eq!(loaded.meta.contractor, "Warm Floors Ltd");
        assert_eq!(loaded.meta.address, "12 Hill Rd");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_design_path("atomic");
        let tmp_path = path.with_extension("rad.tmp");

        save_project(&test_project(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_design_path("lock");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "estimator@warmfloors.example").unwrap();
        assert_eq!(lock.info.user_id, "estimator@warmfloors.example");
        assert_eq!(lock.design_path(), path.as_path());

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());

        // Different major
        assert!(validate_version("1.0.0").is_err());
        // Newer minor within 0.x
        assert!(validate_version("0.2.0").is_err());
        // Garbage
        assert!(validate_version("latest").is_err());
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = temp_design_path("lock_check");

        save_project(&test_project(), &path).unwrap();

        let (loaded, lock_info) = load_project_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.name, "Smith Residence");
        assert!(lock_info.is_none());

        let _ = fs::remove_file(&path);
    }
}
