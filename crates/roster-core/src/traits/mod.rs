// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter and repository trait definitions.
//!
//! All traits use `#[async_trait]` so they can be held as trait objects
//! (`Arc<dyn EmployeeRepository>`) by the CRUD services and the gateway.

pub mod adapter;
pub mod repository;
pub mod storage;

pub use adapter::PluginAdapter;
pub use repository::{DepartmentRepository, EmployeeRepository};
pub use storage::StorageAdapter;
