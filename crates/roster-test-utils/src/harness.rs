// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use roster_config::model::{PaginationConfig, StorageConfig};
use roster_core::{EmployeeRepository, Gender, NewEmployee, RosterError, StorageAdapter};
use roster_crud::{DepartmentService, EmployeeService};
use roster_gateway::{GatewayState, build_router};
use roster_storage::SqliteStorage;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    departments: Vec<String>,
    employees: usize,
    pagination: PaginationConfig,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            departments: vec!["Development".to_string(), "Testing".to_string()],
            employees: 0,
            pagination: PaginationConfig::default(),
        }
    }

    /// Replace the default departments.
    pub fn with_departments(mut self, names: &[&str]) -> Self {
        self.departments = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Pre-insert `n` employees named `employee_0000`, `employee_0001`, ...
    /// in the first department.
    pub fn with_employees(mut self, n: usize) -> Self {
        self.employees = n;
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    pub async fn build(self) -> Result<TestHarness, RosterError> {
        let temp_dir = tempfile::TempDir::new().map_err(RosterError::storage)?;
        let db_path = temp_dir.path().join("test.db");

        let storage = SqliteStorage::new(StorageConfig {
            database_path: db_path.to_string_lossy().to_string(),
            wal_mode: true,
        });
        storage.initialize().await?;
        let storage = Arc::new(storage);

        let mut department_ids = Vec::with_capacity(self.departments.len());
        for name in &self.departments {
            department_ids.push(storage.insert_department(name).await?);
        }

        let mut employee_ids = Vec::with_capacity(self.employees);
        for i in 0..self.employees {
            let employee = NewEmployee {
                emp_name: format!("employee_{i:04}"),
                gender: if i % 2 == 0 { Gender::M } else { Gender::F },
                email: format!("employee_{i:04}@example.com"),
                d_id: department_ids.first().copied().ok_or_else(|| {
                    RosterError::Internal("employees need at least one department".into())
                })?,
            };
            employee_ids.push(storage.insert(&employee).await?);
        }
        tracing::debug!(
            departments = department_ids.len(),
            employees = employee_ids.len(),
            "test harness seeded"
        );

        let state = GatewayState {
            employees: EmployeeService::new(storage.clone(), self.pagination),
            departments: DepartmentService::new(storage.clone()),
            health: storage.clone(),
        };

        Ok(TestHarness {
            router: build_router(state),
            storage,
            department_ids,
            employee_ids,
            _temp_dir: temp_dir,
        })
    }
}

/// A running in-process stack backed by a temp database.
pub struct TestHarness {
    router: Router,
    /// SQLite storage adapter (temp DB, removed on drop).
    pub storage: Arc<SqliteStorage>,
    /// Ids of the departments inserted at build time, in order.
    pub department_ids: Vec<i64>,
    /// Ids of the employees inserted at build time, in order.
    pub employee_ids: Vec<i64>,
    _temp_dir: tempfile::TempDir,
}

/// Status and decoded JSON body of one response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// True when the envelope status is `SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.body["status"] == "SUCCESS"
    }

    /// A payload entry from the envelope's `extend` map.
    pub fn extend(&self, key: &str) -> &Value {
        &self.body["extend"][key]
    }
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Drive one request through the router.
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {});
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    /// POST a form-encoded body such as `empName=a&gender=M`.
    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(form)).await
    }

    /// PUT a form-encoded body.
    pub async fn put_form(&self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::PUT, uri, Some(form)).await
    }

    async fn send(&self, method: Method, uri: &str, form: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };
        match builder.body(body) {
            Ok(request) => self.request(request).await,
            Err(e) => TestResponse {
                status: StatusCode::BAD_REQUEST,
                body: Value::String(format!("could not build request: {e}")),
            },
        }
    }

    /// Checkpoint the WAL and release the database.
    pub async fn close(&self) -> Result<(), RosterError> {
        self.storage.close().await
    }
}
