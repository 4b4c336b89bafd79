// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain operations over the repository traits.
//!
//! Services hold the shared repository handle and the pagination settings.
//! They speak typed values; [`crate::controller`] turns them into envelopes.

use std::sync::Arc;

use tracing::debug;

use roster_config::model::PaginationConfig;
use roster_core::{
    Department, DepartmentRepository, Employee, EmployeePatch, EmployeeRepository, NewEmployee,
    RosterError,
};

use crate::delete::DeleteTarget;
use crate::pagination::{Page, PageRequest};
use crate::username::{self, Availability};

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
    pagination: PaginationConfig,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>, pagination: PaginationConfig) -> Self {
        Self { repo, pagination }
    }

    /// One page of employees ordered by id. The requested page is clamped.
    pub async fn list_page(&self, requested: Option<i64>) -> Result<Page<Employee>, RosterError> {
        let total = self.repo.count().await?;
        let request = PageRequest::resolve(requested, total, u64::from(self.pagination.page_size));
        let list = if request.pages == 0 {
            Vec::new()
        } else {
            self.repo
                .list_page(request.offset(), request.limit())
                .await?
        };
        debug!(
            page = request.page_num,
            pages = request.pages,
            total,
            "employee page fetched"
        );
        Ok(Page::new(
            list,
            request,
            u64::from(self.pagination.navigate_pages),
        ))
    }

    /// Persist an already-validated employee.
    pub async fn create(&self, employee: &NewEmployee) -> Result<i64, RosterError> {
        let id = self.repo.insert(employee).await?;
        debug!(emp_id = id, "employee created");
        Ok(id)
    }

    pub async fn check_name(&self, name: &str) -> Result<Availability, RosterError> {
        username::check_username(self.repo.as_ref(), name).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Employee>, RosterError> {
        self.repo.find_by_id(id).await
    }

    /// Selective update. Fields are written as given: the create rules are
    /// not applied here, and a missing id is a no-op.
    pub async fn update(&self, id: i64, patch: &EmployeePatch) -> Result<u64, RosterError> {
        let touched = self.repo.update_selective(id, patch).await?;
        debug!(emp_id = id, touched, "employee updated");
        Ok(touched)
    }

    pub async fn delete(&self, target: &DeleteTarget) -> Result<u64, RosterError> {
        match target {
            DeleteTarget::One(id) => self.delete_one(*id).await,
            DeleteTarget::Many(ids) => self.delete_many(ids).await,
        }
    }

    pub async fn delete_one(&self, id: i64) -> Result<u64, RosterError> {
        let removed = self.repo.delete_by_id(id).await?;
        debug!(emp_id = id, removed, "employee deleted");
        Ok(removed)
    }

    /// Atomic batch delete. Ids that do not exist are skipped.
    pub async fn delete_many(&self, ids: &[i64]) -> Result<u64, RosterError> {
        let removed = self.repo.delete_by_ids(ids).await?;
        debug!(requested = ids.len(), removed, "employees deleted");
        Ok(removed)
    }
}

#[derive(Clone)]
pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Department>, RosterError> {
        self.repo.list_all().await
    }
}
