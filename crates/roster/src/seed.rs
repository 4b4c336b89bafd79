// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `roster seed` command implementation.
//!
//! Inserts two departments into an empty store, then `n` employees with
//! random names in the first department.

use roster_config::RosterConfig;
use roster_core::{
    DepartmentRepository, EmployeeRepository, Gender, NewEmployee, RosterError, StorageAdapter,
};
use roster_storage::SqliteStorage;
use tracing::{info, warn};

pub const DEFAULT_EMPLOYEES: usize = 1500;

const DEFAULT_DEPARTMENTS: [&str; 2] = ["Development", "Testing"];

/// Counts written by one seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub departments: usize,
    pub employees: usize,
    /// Generated names that collided with an existing employee.
    pub skipped: usize,
}

pub async fn run_seed(config: RosterConfig, employees: usize) -> Result<(), RosterError> {
    crate::serve::init_tracing(&config.server.log_level);

    let storage = SqliteStorage::new(config.storage.clone());
    storage.initialize().await?;
    let report = seed(&storage, employees).await;
    storage.close().await?;
    let report = report?;

    info!(
        departments = report.departments,
        employees = report.employees,
        skipped = report.skipped,
        "seed complete"
    );
    println!(
        "roster: seeded {} departments and {} employees into {}",
        report.departments, report.employees, config.storage.database_path
    );
    Ok(())
}

/// `uuid[..5]` followed by the index, so names are unique within one run.
fn generated_name(i: usize) -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{i}", &uuid[..5])
}

pub async fn seed(storage: &SqliteStorage, employees: usize) -> Result<SeedReport, RosterError> {
    let mut report = SeedReport::default();

    if storage.department_count().await? == 0 {
        for name in DEFAULT_DEPARTMENTS {
            storage.insert_department(name).await?;
            report.departments += 1;
        }
    }
    let d_id = DepartmentRepository::list_all(storage)
        .await?
        .first()
        .map(|d| d.dept_id)
        .ok_or_else(|| RosterError::Internal("no department to assign employees to".into()))?;

    for i in 0..employees {
        let emp_name = generated_name(i);
        let employee = NewEmployee {
            email: format!("{emp_name}@example.com"),
            emp_name,
            gender: Gender::M,
            d_id,
        };
        match storage.insert(&employee).await {
            Ok(_) => report.employees += 1,
            Err(RosterError::Conflict { .. }) => {
                warn!(emp_name = %employee.emp_name, "generated name already taken, skipping");
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_config::model::StorageConfig;

    async fn open(dir: &tempfile::TempDir) -> SqliteStorage {
        let storage = SqliteStorage::new(StorageConfig {
            database_path: dir.path().join("seed.db").to_string_lossy().to_string(),
            wal_mode: true,
        });
        storage.initialize().await.unwrap();
        storage
    }

    #[test]
    fn generated_names_pass_the_name_rule() {
        for i in [0, 9, 10, 1499] {
            let name = generated_name(i);
            assert!(name.ends_with(&i.to_string()));
            assert!(roster_crud::validation::is_valid_name(&name), "{name}");
        }
    }

    #[tokio::test]
    async fn seeds_departments_once() {
        let dir = tempfile::tempdir().unwrap();
        let storage = open(&dir).await;

        let first = seed(&storage, 20).await.unwrap();
        assert_eq!(first.departments, 2);
        assert_eq!(first.employees + first.skipped, 20);

        let second = seed(&storage, 5).await.unwrap();
        assert_eq!(second.departments, 0);
        assert_eq!(storage.department_count().await.unwrap(), 2);
        assert_eq!(
            EmployeeRepository::count(&storage).await.unwrap() as usize,
            first.employees + second.employees
        );
        storage.close().await.unwrap();
    }
}
