// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Roster employee service.
//!
//! This crate provides the error type, the domain types shared by every other
//! crate, and the repository traits the CRUD layer is written against. The
//! SQLite store implements the traits; nothing here knows about SQL or HTTP.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RosterError;
pub use types::{Department, Employee, EmployeePatch, Gender, HealthStatus, NewEmployee};

pub use traits::{DepartmentRepository, EmployeeRepository, PluginAdapter, StorageAdapter};
