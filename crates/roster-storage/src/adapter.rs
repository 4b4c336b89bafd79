// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the storage and repository traits.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use roster_config::model::StorageConfig;
use roster_core::{
    Department, DepartmentRepository, Employee, EmployeePatch, EmployeeRepository, HealthStatus,
    NewEmployee, PluginAdapter, RosterError, StorageAdapter,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed storage adapter.
///
/// Wraps a [`Database`] handle and delegates to the typed query modules. The
/// database is opened on the first call to [`StorageAdapter::initialize`].
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    /// Create a new SqliteStorage with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is called.
    ///
    /// [`initialize`]: StorageAdapter::initialize
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    fn db(&self) -> Result<&Database, RosterError> {
        self.db.get().ok_or_else(|| RosterError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }

    /// Insert a department. Departments are read-only over HTTP; this is
    /// used by seeding and test setup.
    pub async fn insert_department(&self, name: &str) -> Result<i64, RosterError> {
        queries::departments::insert(self.db()?, name).await
    }

    pub async fn department_count(&self) -> Result<u64, RosterError> {
        queries::departments::count(self.db()?).await
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, RosterError> {
        let Some(db) = self.db.get() else {
            return Ok(HealthStatus::Unhealthy("storage not initialized".into()));
        };
        let probe = db
            .connection()
            .call(|conn| -> Result<i64, rusqlite::Error> {
                conn.query_row("SELECT 1", [], |row| row.get(0))
            })
            .await;
        match probe {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Degraded(e.to_string())),
        }
    }

    async fn shutdown(&self) -> Result<(), RosterError> {
        if let Some(db) = self.db.get() {
            db.checkpoint().await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn initialize(&self) -> Result<(), RosterError> {
        let path = self.config.database_path.clone();
        let db = Database::open_with(&path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| RosterError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), RosterError> {
        self.db()?.checkpoint().await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for SqliteStorage {
    async fn list_all(&self) -> Result<Vec<Employee>, RosterError> {
        queries::employees::list_all(self.db()?).await
    }

    async fn count(&self) -> Result<u64, RosterError> {
        queries::employees::count(self.db()?).await
    }

    async fn list_page(&self, offset: u64, limit: u64) -> Result<Vec<Employee>, RosterError> {
        queries::employees::list_page(self.db()?, offset, limit).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RosterError> {
        queries::employees::find_by_id(self.db()?, id).await
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i64, RosterError> {
        queries::employees::insert(self.db()?, employee).await
    }

    async fn update_selective(&self, id: i64, patch: &EmployeePatch) -> Result<u64, RosterError> {
        queries::employees::update_selective(self.db()?, id, patch).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RosterError> {
        queries::employees::delete_by_id(self.db()?, id).await
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, RosterError> {
        queries::employees::delete_by_ids(self.db()?, ids).await
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RosterError> {
        queries::employees::exists_by_name(self.db()?, name).await
    }
}

#[async_trait]
impl DepartmentRepository for SqliteStorage {
    async fn list_all(&self) -> Result<Vec<Department>, RosterError> {
        queries::departments::list_all(self.db()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::Gender;
    use tempfile::tempdir;

    fn storage_in(dir: &tempfile::TempDir) -> SqliteStorage {
        let db_path = dir.path().join("adapter.db");
        SqliteStorage::new(StorageConfig {
            database_path: db_path.to_str().unwrap().to_string(),
            wal_mode: true,
        })
    }

    #[tokio::test]
    async fn operations_fail_before_initialize() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);
        assert!(EmployeeRepository::count(&storage).await.is_err());
        assert_eq!(
            storage.health_check().await.unwrap(),
            HealthStatus::Unhealthy("storage not initialized".into())
        );
    }

    #[tokio::test]
    async fn initialize_twice_is_an_error() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.initialize().await.unwrap();
        assert!(storage.initialize().await.is_err());
        storage.close().await.unwrap();
    }

    #[tokio::test]
    async fn full_lifecycle_through_traits() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.initialize().await.unwrap();
        assert_eq!(storage.name(), "sqlite");
        assert_eq!(storage.health_check().await.unwrap(), HealthStatus::Healthy);

        let dept = storage.insert_department("Testing").await.unwrap();
        assert_eq!(storage.department_count().await.unwrap(), 1);
        let depts = DepartmentRepository::list_all(&storage).await.unwrap();
        assert_eq!(depts[0].dept_id, dept);

        let id = storage
            .insert(&NewEmployee {
                emp_name: "kate_0001".into(),
                gender: Gender::F,
                email: "kate@example.com".into(),
                d_id: dept,
            })
            .await
            .unwrap();
        assert!(storage.exists_by_name("kate_0001").await.unwrap());
        assert_eq!(EmployeeRepository::list_all(&storage).await.unwrap().len(), 1);
        assert_eq!(storage.delete_by_id(id).await.unwrap(), 1);
        assert_eq!(EmployeeRepository::count(&storage).await.unwrap(), 0);

        storage.shutdown().await.unwrap();
        storage.close().await.unwrap();
    }
}
