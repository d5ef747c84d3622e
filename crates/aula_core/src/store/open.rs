//! Connection bootstrap utilities for the document store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by core behavior.
//! - Trigger schema migrations before handing out a usable store.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.
//! - Open failures are logged with duration and a stable error code.

use super::migrations::apply_migrations;
use super::{Store, StoreResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a store file and applies all pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<Store> {
    bootstrap("file", || Connection::open(path))
}

/// Opens an in-memory store and applies all pending migrations.
///
/// Primarily used by tests and the CLI smoke probe.
pub fn open_store_in_memory() -> StoreResult<Store> {
    bootstrap("memory", Connection::open_in_memory)
}

fn bootstrap(
    mode: &str,
    open: impl FnOnce() -> Result<Connection, rusqlite::Error>,
) -> StoreResult<Store> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode={mode}");

    let result = open().map_err(Into::into).and_then(|mut conn| {
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        Ok(conn)
    });

    match result {
        Ok(conn) => {
            info!(
                "event=store_open module=store status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(Store::new(conn))
        }
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode={mode} duration_ms={} error_code=store_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
