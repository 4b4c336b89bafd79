// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All statements are serialized through tokio-rusqlite's single background
//! thread. `Database` owns that one connection; do not open a second
//! connection for writes.

use std::time::Duration;

use roster_core::RosterError;
use tracing::debug;

/// How long a statement waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// The single SQLite connection used by every query module.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (creating if needed) the database at `path` in WAL mode and run
    /// pending migrations.
    pub async fn open(path: &str) -> Result<Self, RosterError> {
        Self::open_with(path, true).await
    }

    /// Open the database, choosing whether to switch the journal to WAL.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, RosterError> {
        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| RosterError::Storage { source: Box::new(e) })?;

        conn.call(move |conn| -> Result<(), rusqlite::Error> {
            if wal_mode {
                let mode: String = conn.pragma_update_and_check(
                    None,
                    "journal_mode",
                    "WAL",
                    |row| row.get(0),
                )?;
                debug!(journal_mode = %mode, "journal mode set");
            }
            conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA synchronous = NORMAL;")?;
            conn.busy_timeout(BUSY_TIMEOUT)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        conn.call(|conn| -> Result<(), RosterError> { crate::migrations::run_migrations(conn) })
            .await
            .map_err(|e| RosterError::storage(e.to_string()))?;

        debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL into the main database file.
    pub async fn checkpoint(&self) -> Result<(), RosterError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))
            })
            .await
            .map_err(map_tr_err)
    }

    /// Checkpoint and close the connection.
    pub async fn close(self) -> Result<(), RosterError> {
        self.checkpoint().await?;
        self.conn
            .close()
            .await
            .map_err(|e| RosterError::storage(e.to_string()))
    }
}

/// Convert a tokio-rusqlite error into [`RosterError::Storage`].
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> RosterError {
    RosterError::Storage { source: Box::new(e) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_file_and_schema() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("open.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        assert!(db_path.exists());

        let tables: Vec<String> = db
            .connection()
            .call(|conn| -> Result<Vec<String>, rusqlite::Error> {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' \
                     AND name IN ('departments', 'employees') ORDER BY name",
                )?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                rows.collect()
            })
            .await
            .unwrap();
        assert_eq!(tables, vec!["departments", "employees"]);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reopening_does_not_rerun_migrations() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");
        let path = db_path.to_str().unwrap();

        Database::open(path).await.unwrap().close().await.unwrap();
        let db = Database::open(path).await.unwrap();

        let applied: i64 = db
            .connection()
            .call(|conn| -> Result<i64, rusqlite::Error> {
                conn.query_row("SELECT COUNT(*) FROM refinery_schema_history", [], |row| {
                    row.get(0)
                })
            })
            .await
            .unwrap();
        assert_eq!(applied, 1);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("fk.db");
        let db = Database::open_with(db_path.to_str().unwrap(), false)
            .await
            .unwrap();

        let enabled: i64 = db
            .connection()
            .call(|conn| -> Result<i64, rusqlite::Error> {
                conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            })
            .await
            .unwrap();
        assert_eq!(enabled, 1);
        db.close().await.unwrap();
    }
}
