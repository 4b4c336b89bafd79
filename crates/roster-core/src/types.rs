// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the repository traits and the CRUD layer.
//!
//! Field names serialize in camelCase (`empId`, `empName`, `dId`,
//! `deptName`) because that is the wire format the list/edit forms consume.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Employee gender as stored and transmitted (`M` or `F`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Gender {
    M,
    F,
}

/// A department row. Read-only from the API's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub dept_id: i64,
    pub dept_name: String,
}

/// An employee row as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned identity.
    pub emp_id: i64,
    pub emp_name: String,
    pub gender: Gender,
    pub email: String,
    /// Department foreign key. Nullable in storage.
    pub d_id: Option<i64>,
    /// The referenced department, joined on read when it exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

/// A validated employee ready to be inserted.
///
/// Only the validation layer constructs these from wire input, so every
/// value here has already passed the field constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub emp_name: String,
    pub gender: Gender,
    pub email: String,
    pub d_id: i64,
}

/// A selective update. `None` means "leave the stored value alone".
///
/// `d_id` is tri-state because the column is nullable: `None` leaves it,
/// `Some(None)` clears it, `Some(Some(id))` sets it. An explicitly supplied
/// empty string for a text field is `Some(String::new())` and is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub emp_name: Option<String>,
    pub gender: Option<Gender>,
    pub email: Option<String>,
    pub d_id: Option<Option<i64>>,
}

impl EmployeePatch {
    /// True when no field is supplied, i.e. the update would write nothing.
    pub fn is_empty(&self) -> bool {
        self.emp_name.is_none()
            && self.gender.is_none()
            && self.email.is_none()
            && self.d_id.is_none()
    }
}
