// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Employee name availability check used for as-you-type form feedback.

use roster_core::{EmployeeRepository, RosterError};
use tracing::debug;

use crate::validation::{NAME_SHAPE_MESSAGE, is_valid_name};

pub const NAME_TAKEN_MESSAGE: &str = "name unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// Fails the name rule; the store was not consulted.
    InvalidShape,
    Taken,
}

impl Availability {
    /// Advisory shown to the user, `None` when the name is usable.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Availability::Available => None,
            Availability::InvalidShape => Some(NAME_SHAPE_MESSAGE),
            Availability::Taken => Some(NAME_TAKEN_MESSAGE),
        }
    }
}

/// Shape check first, then an exact-match existence lookup. Read-only.
///
/// This does not reserve the name; a concurrent create can still claim it.
pub async fn check_username(
    repo: &dyn EmployeeRepository,
    name: &str,
) -> Result<Availability, RosterError> {
    if !is_valid_name(name) {
        debug!(emp_name = %name, "name rejected by shape rule");
        return Ok(Availability::InvalidShape);
    }
    if repo.exists_by_name(name).await? {
        return Ok(Availability::Taken);
    }
    Ok(Availability::Available)
}
