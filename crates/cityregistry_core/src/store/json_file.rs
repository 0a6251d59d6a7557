//! Whole-file JSON load/save primitives.
//!
//! # Responsibility
//! - Read a record collection from disk, creating the file when absent.
//! - Rewrite a record collection in place after every mutation.
//!
//! # Invariants
//! - A missing file is bootstrap-initialized to an empty array, never an
//!   error.
//! - A present but malformed file fails the load; it is never silently
//!   replaced.

use super::{StoreError, StoreResult};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Loads a full record collection from `path`.
///
/// When no file exists there, writes an empty collection first so the
/// backing file is materialized on first start.
///
/// # Side effects
/// - May create the file and its parent directories.
/// - Emits `store_load` log events with duration and status.
pub fn load_or_init<T>(path: &Path) -> StoreResult<Vec<T>>
where
    T: Serialize + DeserializeOwned,
{
    let started_at = Instant::now();
    info!(
        "event=store_load module=store status=start file={}",
        path.display()
    );

    if !path.exists() {
        save::<T>(path, &[])?;
    }

    let raw = std::fs::read_to_string(path).map_err(|source| {
        let err = StoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        log_load_failure(path, started_at, &err);
        err
    })?;

    let records = serde_json::from_str::<Vec<T>>(&raw).map_err(|source| {
        let err = StoreError::Parse {
            path: path.to_path_buf(),
            source,
        };
        log_load_failure(path, started_at, &err);
        err
    })?;

    info!(
        "event=store_load module=store status=ok file={} records={} duration_ms={}",
        path.display(),
        records.len(),
        started_at.elapsed().as_millis()
    );
    Ok(records)
}

/// Serializes the full collection and overwrites the file at `path`.
///
/// The write is a direct overwrite; last write wins for the whole file.
///
/// # Side effects
/// - Creates missing parent directories.
/// - Emits `store_save` log events with duration and status.
pub fn save<T: Serialize>(path: &Path, records: &[T]) -> StoreResult<()> {
    let started_at = Instant::now();

    let io_error = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let body = serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    match std::fs::write(path, body) {
        Ok(()) => {
            info!(
                "event=store_save module=store status=ok file={} records={} duration_ms={}",
                path.display(),
                records.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(source) => {
            let err = io_error(source);
            error!(
                "event=store_save module=store status=error file={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn log_load_failure(path: &Path, started_at: Instant, err: &StoreError) {
    error!(
        "event=store_load module=store status=error file={} duration_ms={} error={}",
        path.display(),
        started_at.elapsed().as_millis(),
        err
    );
}
