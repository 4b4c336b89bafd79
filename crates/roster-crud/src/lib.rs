// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The employee/department CRUD core.
//!
//! Sits between the HTTP transport and the repository traits. Every
//! operation funnels into a [`Message`] envelope; the transport only decides
//! the status code.

pub mod controller;
pub mod delete;
pub mod envelope;
pub mod error;
pub mod pagination;
pub mod service;
pub mod username;
pub mod validation;

#[cfg(test)]
pub(crate) mod fake;

pub use delete::DeleteTarget;
pub use envelope::{Message, Status};
pub use error::ApiError;
pub use pagination::Page;
pub use service::{DepartmentService, EmployeeService};
pub use username::Availability;
pub use validation::{EmployeeForm, EmployeeUpdateForm, FieldErrors};
