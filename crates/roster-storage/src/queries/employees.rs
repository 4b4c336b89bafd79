// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Employee queries.
//!
//! Reads left-join `departments` so each row carries its department when the
//! foreign key resolves. Every listing is ordered by `emp_id`.

use rusqlite::ffi;
use rusqlite::types::{Type, Value};
use rusqlite::{ErrorCode, Row, params, params_from_iter};
use tracing::debug;

use roster_core::{Department, Employee, EmployeePatch, Gender, NewEmployee, RosterError};

use crate::database::{Database, map_tr_err};

const SELECT_WITH_DEPT: &str = "SELECT e.emp_id, e.emp_name, e.gender, e.email, e.d_id, \
     d.dept_id, d.dept_name \
     FROM employees e LEFT JOIN departments d ON d.dept_id = e.d_id";

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    let gender: String = row.get(2)?;
    let gender = gender
        .parse::<Gender>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
    let dept_id: Option<i64> = row.get(5)?;
    let dept_name: Option<String> = row.get(6)?;
    let department = match (dept_id, dept_name) {
        (Some(dept_id), Some(dept_name)) => Some(Department { dept_id, dept_name }),
        _ => None,
    };
    Ok(Employee {
        emp_id: row.get(0)?,
        emp_name: row.get(1)?,
        gender,
        email: row.get(3)?,
        d_id: row.get(4)?,
        department,
    })
}

/// Map a constraint violation on a write to [`RosterError::Conflict`].
///
/// Returns `None` for every other failure so it stays a storage error.
fn write_conflict(err: &rusqlite::Error) -> Option<RosterError> {
    let rusqlite::Error::SqliteFailure(e, _) = err else {
        return None;
    };
    if e.code != ErrorCode::ConstraintViolation {
        return None;
    }
    let conflict = if e.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY {
        RosterError::Conflict {
            field: "dId",
            message: "department does not exist".into(),
        }
    } else {
        RosterError::Conflict {
            field: "empName",
            message: "employee name is already taken".into(),
        }
    };
    Some(conflict)
}

fn to_sql_int(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

pub async fn list_all(db: &Database) -> Result<Vec<Employee>, RosterError> {
    db.connection()
        .call(|conn| -> Result<Vec<Employee>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!("{SELECT_WITH_DEPT} ORDER BY e.emp_id"))?;
            let rows = stmt.query_map([], employee_from_row)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

pub async fn count(db: &Database) -> Result<u64, RosterError> {
    let n = db
        .connection()
        .call(|conn| -> Result<i64, rusqlite::Error> {
            conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
        })
        .await
        .map_err(map_tr_err)?;
    Ok(u64::try_from(n).unwrap_or(0))
}

/// One window of the id-ordered employee set.
pub async fn list_page(db: &Database, offset: u64, limit: u64) -> Result<Vec<Employee>, RosterError> {
    let (offset, limit) = (to_sql_int(offset), to_sql_int(limit));
    db.connection()
        .call(move |conn| -> Result<Vec<Employee>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_WITH_DEPT} ORDER BY e.emp_id LIMIT ?1 OFFSET ?2"
            ))?;
            let rows = stmt.query_map(params![limit, offset], employee_from_row)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

pub async fn find_by_id(db: &Database, id: i64) -> Result<Option<Employee>, RosterError> {
    db.connection()
        .call(move |conn| -> Result<Option<Employee>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!("{SELECT_WITH_DEPT} WHERE e.emp_id = ?1"))?;
            let mut rows = stmt.query_map(params![id], employee_from_row)?;
            rows.next().transpose()
        })
        .await
        .map_err(map_tr_err)
}

/// Insert an employee and return the assigned id.
pub async fn insert(db: &Database, employee: &NewEmployee) -> Result<i64, RosterError> {
    let employee = employee.clone();
    db.connection()
        .call(move |conn| -> Result<Result<i64, RosterError>, rusqlite::Error> {
            let inserted = conn.execute(
                "INSERT INTO employees (emp_name, gender, email, d_id) VALUES (?1, ?2, ?3, ?4)",
                params![
                    employee.emp_name,
                    employee.gender.to_string(),
                    employee.email,
                    employee.d_id
                ],
            );
            match inserted {
                Ok(_) => Ok(Ok(conn.last_insert_rowid())),
                Err(e) => write_conflict(&e).map(Err).ok_or(e),
            }
        })
        .await
        .map_err(map_tr_err)?
}

/// Write only the fields present in `patch`. Returns rows touched.
pub async fn update_selective(
    db: &Database,
    id: i64,
    patch: &EmployeePatch,
) -> Result<u64, RosterError> {
    if patch.is_empty() {
        debug!(emp_id = id, "empty patch, nothing to write");
        return Ok(0);
    }

    let mut sets: Vec<&'static str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();
    if let Some(name) = &patch.emp_name {
        sets.push("emp_name = ?");
        values.push(Value::Text(name.clone()));
    }
    if let Some(gender) = patch.gender {
        sets.push("gender = ?");
        values.push(Value::Text(gender.to_string()));
    }
    if let Some(email) = &patch.email {
        sets.push("email = ?");
        values.push(Value::Text(email.clone()));
    }
    if let Some(d_id) = patch.d_id {
        sets.push("d_id = ?");
        values.push(d_id.map_or(Value::Null, Value::Integer));
    }
    values.push(Value::Integer(id));
    let sql = format!("UPDATE employees SET {} WHERE emp_id = ?", sets.join(", "));

    db.connection()
        .call(move |conn| -> Result<Result<u64, RosterError>, rusqlite::Error> {
            match conn.execute(&sql, params_from_iter(values)) {
                Ok(n) => Ok(Ok(n as u64)),
                Err(e) => write_conflict(&e).map(Err).ok_or(e),
            }
        })
        .await
        .map_err(map_tr_err)?
}

pub async fn delete_by_id(db: &Database, id: i64) -> Result<u64, RosterError> {
    let n = db
        .connection()
        .call(move |conn| -> Result<usize, rusqlite::Error> {
            conn.execute("DELETE FROM employees WHERE emp_id = ?1", params![id])
        })
        .await
        .map_err(map_tr_err)?;
    Ok(n as u64)
}

/// Ids bound per `IN (...)` statement, well under SQLite's variable limit.
const DELETE_CHUNK: usize = 500;

/// Delete every listed id in one transaction. Unknown ids are skipped.
pub async fn delete_by_ids(db: &Database, ids: &[i64]) -> Result<u64, RosterError> {
    if ids.is_empty() {
        return Ok(0);
    }
    let ids = ids.to_vec();
    let n = db
        .connection()
        .call(move |conn| -> Result<usize, rusqlite::Error> {
            let tx = conn.transaction()?;
            let mut n = 0;
            for chunk in ids.chunks(DELETE_CHUNK) {
                let placeholders = vec!["?"; chunk.len()].join(", ");
                n += tx.execute(
                    &format!("DELETE FROM employees WHERE emp_id IN ({placeholders})"),
                    params_from_iter(chunk.iter()),
                )?;
            }
            tx.commit()?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;
    Ok(n as u64)
}

pub async fn exists_by_name(db: &Database, name: &str) -> Result<bool, RosterError> {
    let name = name.to_string();
    db.connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            conn.query_row(
                "SELECT EXISTS (SELECT 1 FROM employees WHERE emp_name = ?1)",
                params![name],
                |row| row.get(0),
            )
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::departments;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir, i64) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("employees.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        let dept = departments::insert(&db, "Development").await.unwrap();
        (db, dir, dept)
    }

    fn new_employee(name: &str, d_id: i64) -> NewEmployee {
        NewEmployee {
            emp_name: name.to_string(),
            gender: Gender::M,
            email: format!("{name}@example.com"),
            d_id,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_joins_department() {
        let (db, _dir, dept) = setup_db().await;
        let id = insert(&db, &new_employee("alice_01", dept)).await.unwrap();

        let emp = find_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(emp.emp_name, "alice_01");
        assert_eq!(emp.gender, Gender::M);
        assert_eq!(emp.d_id, Some(dept));
        assert_eq!(emp.department.unwrap().dept_name, "Development");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let (db, _dir, _) = setup_db().await;
        assert!(find_by_id(&db, 999).await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict() {
        let (db, _dir, dept) = setup_db().await;
        insert(&db, &new_employee("bob_0001", dept)).await.unwrap();
        let err = insert(&db, &new_employee("bob_0001", dept))
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::Conflict { field: "empName", .. }));
        assert_eq!(count(&db).await.unwrap(), 1);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn unknown_department_is_a_conflict() {
        let (db, _dir, _) = setup_db().await;
        let err = insert(&db, &new_employee("carol_01", 42)).await.unwrap_err();
        assert!(matches!(err, RosterError::Conflict { field: "dId", .. }));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn pages_are_ordered_and_bounded() {
        let (db, _dir, dept) = setup_db().await;
        for i in 0..7 {
            insert(&db, &new_employee(&format!("worker_{i:02}"), dept))
                .await
                .unwrap();
        }
        assert_eq!(count(&db).await.unwrap(), 7);

        let first = list_page(&db, 0, 5).await.unwrap();
        let second = list_page(&db, 5, 5).await.unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 2);
        assert!(first.windows(2).all(|w| w[0].emp_id < w[1].emp_id));
        assert!(first[4].emp_id < second[0].emp_id);
        assert!(list_page(&db, 10, 5).await.unwrap().is_empty());
        assert_eq!(list_all(&db).await.unwrap().len(), 7);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn selective_update_leaves_absent_fields() {
        let (db, _dir, dept) = setup_db().await;
        let id = insert(&db, &new_employee("dave_0001", dept)).await.unwrap();

        let patch = EmployeePatch {
            email: Some("dave@corp.example".into()),
            gender: Some(Gender::F),
            ..EmployeePatch::default()
        };
        assert_eq!(update_selective(&db, id, &patch).await.unwrap(), 1);

        let emp = find_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(emp.emp_name, "dave_0001");
        assert_eq!(emp.email, "dave@corp.example");
        assert_eq!(emp.gender, Gender::F);
        assert_eq!(emp.d_id, Some(dept));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn update_can_clear_department() {
        let (db, _dir, dept) = setup_db().await;
        let id = insert(&db, &new_employee("erin_0001", dept)).await.unwrap();
        let patch = EmployeePatch {
            d_id: Some(None),
            ..EmployeePatch::default()
        };
        update_selective(&db, id, &patch).await.unwrap();

        let emp = find_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(emp.d_id, None);
        assert!(emp.department.is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn empty_patch_and_missing_id_touch_nothing() {
        let (db, _dir, dept) = setup_db().await;
        let id = insert(&db, &new_employee("fred_0001", dept)).await.unwrap();
        assert_eq!(
            update_selective(&db, id, &EmployeePatch::default())
                .await
                .unwrap(),
            0
        );
        let patch = EmployeePatch {
            email: Some("x@y.zz".into()),
            ..EmployeePatch::default()
        };
        assert_eq!(update_selective(&db, 999, &patch).await.unwrap(), 0);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn rename_onto_existing_name_is_a_conflict() {
        let (db, _dir, dept) = setup_db().await;
        insert(&db, &new_employee("gina_0001", dept)).await.unwrap();
        let id = insert(&db, &new_employee("hank_0001", dept)).await.unwrap();
        let patch = EmployeePatch {
            emp_name: Some("gina_0001".into()),
            ..EmployeePatch::default()
        };
        let err = update_selective(&db, id, &patch).await.unwrap_err();
        assert!(matches!(err, RosterError::Conflict { field: "empName", .. }));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_single_and_batch() {
        let (db, _dir, dept) = setup_db().await;
        let mut ids = Vec::new();
        for i in 0..4 {
            ids.push(
                insert(&db, &new_employee(&format!("temp_{i:04}"), dept))
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(delete_by_id(&db, ids[0]).await.unwrap(), 1);
        assert_eq!(delete_by_id(&db, ids[0]).await.unwrap(), 0);

        let removed = delete_by_ids(&db, &[ids[1], ids[2], 9999]).await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(delete_by_ids(&db, &[]).await.unwrap(), 0);

        let left = list_all(&db).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].emp_id, ids[3]);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn batch_delete_spans_many_statements() {
        let (db, _dir, dept) = setup_db().await;
        let mut ids = Vec::new();
        for i in 0..3 {
            ids.push(
                insert(&db, &new_employee(&format!("bulk_{i:04}"), dept))
                    .await
                    .unwrap(),
            );
        }
        let keep = insert(&db, &new_employee("bulk_keep", dept)).await.unwrap();

        let mut targets: Vec<i64> = (100_000..140_000).collect();
        targets.insert(0, ids[0]);
        targets.insert(20_000, ids[1]);
        targets.push(ids[2]);

        assert_eq!(delete_by_ids(&db, &targets).await.unwrap(), 3);
        let left = list_all(&db).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].emp_id, keep);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn name_existence_is_exact() {
        let (db, _dir, dept) = setup_db().await;
        insert(&db, &new_employee("ivan_0001", dept)).await.unwrap();
        assert!(exists_by_name(&db, "ivan_0001").await.unwrap());
        assert!(!exists_by_name(&db, "ivan_000").await.unwrap());
        assert!(!exists_by_name(&db, "IVAN_0001").await.unwrap());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn deleting_department_nulls_the_reference() {
        let (db, _dir, dept) = setup_db().await;
        let id = insert(&db, &new_employee("jane_0001", dept)).await.unwrap();
        db.connection()
            .call(move |conn| -> Result<usize, rusqlite::Error> {
                conn.execute("DELETE FROM departments WHERE dept_id = ?1", params![dept])
            })
            .await
            .unwrap();
        let emp = find_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(emp.d_id, None);
        db.close().await.unwrap();
    }
}
