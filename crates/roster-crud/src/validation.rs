// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field-level validation of employee forms.
//!
//! Create runs every rule and reports one message per failing field. Update
//! only decodes; it does not apply the create rules.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use roster_core::{EmployeePatch, Gender, NewEmployee};

use crate::error::ApiError;

/// 6-16 ASCII letters, digits, `_` or `-`; or 2-5 CJK characters.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9_-]{6,16}|[\x{2E80}-\x{9FFF}]{2,5})$").unwrap()
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z0-9_.-]+)@([\da-z.-]+)\.([a-z.]{2,6})$").unwrap()
});

pub const NAME_SHAPE_MESSAGE: &str =
    "name must be 6-16 letters, digits, '_' or '-', or 2-5 CJK characters";
pub const EMAIL_SHAPE_MESSAGE: &str = "email address is not valid";
pub const GENDER_MESSAGE: &str = "gender must be M or F";
pub const DEPT_MESSAGE: &str = "department id must be an integer";

pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Employee fields as submitted by a form. Every field is optional so a
/// missing field is a validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    pub emp_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub d_id: Option<String>,
}

/// Field name to message, serialized as a flat JSON object under `errorFiled`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Check every field of a create form. Never short-circuits.
pub fn validate(form: &EmployeeForm) -> Result<NewEmployee, FieldErrors> {
    let mut errors = FieldErrors::default();

    let emp_name = match present(&form.emp_name) {
        None => {
            errors.insert("empName", "employee name is required");
            None
        }
        Some(name) if !is_valid_name(name) => {
            errors.insert("empName", NAME_SHAPE_MESSAGE);
            None
        }
        Some(name) => Some(name.to_string()),
    };

    let gender = match present(&form.gender) {
        None => {
            errors.insert("gender", "gender is required");
            None
        }
        Some(g) => match g.parse::<Gender>() {
            Ok(g) => Some(g),
            Err(_) => {
                errors.insert("gender", GENDER_MESSAGE);
                None
            }
        },
    };

    let email = match present(&form.email) {
        None => {
            errors.insert("email", "email is required");
            None
        }
        Some(e) if !is_valid_email(e) => {
            errors.insert("email", EMAIL_SHAPE_MESSAGE);
            None
        }
        Some(e) => Some(e.to_string()),
    };

    let d_id = match present(&form.d_id) {
        None => {
            errors.insert("dId", "department is required");
            None
        }
        Some(d) => match d.parse::<i64>() {
            Ok(d) => Some(d),
            Err(_) => {
                errors.insert("dId", DEPT_MESSAGE);
                None
            }
        },
    };

    match (emp_name, gender, email, d_id) {
        (Some(emp_name), Some(gender), Some(email), Some(d_id)) if errors.is_empty() => {
            Ok(NewEmployee {
                emp_name,
                gender,
                email,
                d_id,
            })
        }
        _ => Err(errors),
    }
}

/// Employee fields as submitted by an update form. Absent fields are left
/// untouched by the update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdateForm {
    pub emp_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub d_id: Option<String>,
}

impl TryFrom<EmployeeUpdateForm> for EmployeePatch {
    type Error = ApiError;

    /// Decode without validating. An empty `gender` is treated as absent;
    /// an empty `dId` clears the department. Empty `empName` and `email`
    /// values are kept and written as empty strings.
    fn try_from(form: EmployeeUpdateForm) -> Result<Self, Self::Error> {
        let gender = match present(&form.gender) {
            None => None,
            Some(g) => Some(g.parse::<Gender>().map_err(|_| ApiError::InvalidForm {
                field: "gender",
                message: GENDER_MESSAGE.into(),
            })?),
        };
        let d_id = match form.d_id.as_deref() {
            None => None,
            Some("") => Some(None),
            Some(d) => Some(Some(d.parse::<i64>().map_err(|_| ApiError::InvalidForm {
                field: "dId",
                message: DEPT_MESSAGE.into(),
            })?)),
        };
        Ok(EmployeePatch {
            emp_name: form.emp_name,
            gender,
            email: form.email,
            d_id,
        })
    }
}
