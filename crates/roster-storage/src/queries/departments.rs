// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Department queries.

use roster_core::{Department, RosterError};

use crate::database::{Database, map_tr_err};

/// All departments ordered by id.
pub async fn list_all(db: &Database) -> Result<Vec<Department>, RosterError> {
    db.connection()
        .call(|conn| -> Result<Vec<Department>, rusqlite::Error> {
            let mut stmt =
                conn.prepare("SELECT dept_id, dept_name FROM departments ORDER BY dept_id")?;
            let rows = stmt.query_map([], |row| {
                Ok(Department {
                    dept_id: row.get(0)?,
                    dept_name: row.get(1)?,
                })
            })?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

/// Insert a department and return its id.
pub async fn insert(db: &Database, name: &str) -> Result<i64, RosterError> {
    let name = name.to_string();
    db.connection()
        .call(move |conn| -> Result<i64, rusqlite::Error> {
            conn.execute(
                "INSERT INTO departments (dept_name) VALUES (?1)",
                rusqlite::params![name],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(map_tr_err)
}

pub async fn count(db: &Database) -> Result<u64, RosterError> {
    let n = db
        .connection()
        .call(|conn| -> Result<i64, rusqlite::Error> {
            conn.query_row("SELECT COUNT(*) FROM departments", [], |row| row.get(0))
        })
        .await
        .map_err(map_tr_err)?;
    Ok(u64::try_from(n).unwrap_or(0))
}
