// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operations as the transport sees them: decoded input in, envelope out.
//!
//! Expected outcomes (invalid form, taken name, unknown id) are FAILURE
//! envelopes returned as `Ok`. `Err` is reserved for [`ApiError`].

use tracing::{debug, warn};

use roster_core::EmployeePatch;

use crate::delete::DeleteTarget;
use crate::envelope::Message;
use crate::error::ApiError;
use crate::service::{DepartmentService, EmployeeService};
use crate::username::Availability;
use crate::validation::{self, EmployeeForm, EmployeeUpdateForm};

/// All departments under `depts`.
pub async fn get_departments(svc: &DepartmentService) -> Result<Message, ApiError> {
    let depts = svc.list().await?;
    Ok(Message::success().add("depts", depts))
}

/// One page of employees under `pageInfo`.
pub async fn list_employees(
    svc: &EmployeeService,
    page: Option<i64>,
) -> Result<Message, ApiError> {
    let page = svc.list_page(page).await?;
    Ok(Message::success().add("pageInfo", page))
}

/// Validate then insert. Field failures are reported under `errorFiled`.
pub async fn create_employee(
    svc: &EmployeeService,
    form: &EmployeeForm,
) -> Result<Message, ApiError> {
    match validation::validate(form) {
        Ok(employee) => {
            svc.create(&employee).await?;
            Ok(Message::success())
        }
        Err(errors) => {
            warn!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "employee form rejected"
            );
            Ok(Message::fail().add("errorFiled", errors))
        }
    }
}

/// Name availability; the advisory goes under `va_msg`.
pub async fn check_username(svc: &EmployeeService, name: &str) -> Result<Message, ApiError> {
    let availability = svc.check_name(name).await?;
    Ok(match availability.message() {
        None => Message::success(),
        Some(advice) => {
            debug!(emp_name = %name, ?availability, "name not available");
            Message::fail().add("va_msg", advice)
        }
    })
}

/// One employee under `emp`, or a FAILURE envelope with `msg`.
pub async fn get_employee(svc: &EmployeeService, id: i64) -> Result<Message, ApiError> {
    Ok(match svc.get(id).await? {
        Some(employee) => Message::success().add("emp", employee),
        None => Message::fail().add("msg", format!("employee {id} not found")),
    })
}

/// Selective update. Does not validate; see [`EmployeeService::update`].
pub async fn update_employee(
    svc: &EmployeeService,
    id: i64,
    form: EmployeeUpdateForm,
) -> Result<Message, ApiError> {
    let patch = EmployeePatch::try_from(form)?;
    svc.update(id, &patch).await?;
    Ok(Message::success())
}

/// Delete one id or a dash-joined batch. A malformed token deletes nothing.
pub async fn delete_employees(svc: &EmployeeService, raw: &str) -> Result<Message, ApiError> {
    let target: DeleteTarget = raw.parse()?;
    svc.delete(&target).await?;
    Ok(Message::success())
}
