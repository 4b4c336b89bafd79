// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data-access contracts consumed by the CRUD layer.

use async_trait::async_trait;

use crate::error::RosterError;
use crate::types::{Department, Employee, EmployeePatch, NewEmployee};

/// Parameterized operations over employee rows.
///
/// Every listing is ordered by `emp_id` ascending so that pages computed from
/// `count` + `list_page` are stable across requests.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees, ordered by id.
    async fn list_all(&self) -> Result<Vec<Employee>, RosterError>;

    /// Total number of employees.
    async fn count(&self) -> Result<u64, RosterError>;

    /// One window of the ordered employee set.
    async fn list_page(&self, offset: u64, limit: u64) -> Result<Vec<Employee>, RosterError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RosterError>;

    /// Inserts a validated employee and returns the server-assigned id.
    ///
    /// A store-level constraint violation is reported as
    /// [`RosterError::Conflict`].
    async fn insert(&self, employee: &NewEmployee) -> Result<i64, RosterError>;

    /// Writes only the fields present in `patch`. Returns the number of rows
    /// touched; a missing id touches zero rows and is not an error.
    async fn update_selective(&self, id: i64, patch: &EmployeePatch) -> Result<u64, RosterError>;

    /// Deletes one row. Returns the number of rows removed.
    async fn delete_by_id(&self, id: i64) -> Result<u64, RosterError>;

    /// Deletes every listed row as a single atomic operation.
    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, RosterError>;

    /// True when an employee with exactly this name exists.
    async fn exists_by_name(&self, name: &str) -> Result<bool, RosterError>;
}

/// Read access to departments.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// All departments, ordered by id.
    async fn list_all(&self) -> Result<Vec<Department>, RosterError>;
}
