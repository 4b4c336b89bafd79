// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request-level failures that abort an operation.
//!
//! Expected outcomes (validation failures, taken names, missing rows) are
//! FAILURE envelopes, not errors. What remains here is either the caller's
//! fault (bad identifier, bad form) or the store's.

use roster_core::RosterError;
use thiserror::Error;

use crate::envelope::Message;
use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A delete path segment that is not an integer.
    #[error("malformed employee identifier `{0}`")]
    MalformedIdentifier(String),

    /// A form field that cannot be decoded into its typed value.
    #[error("invalid form field `{field}`: {message}")]
    InvalidForm {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl ApiError {
    /// The FAILURE envelope describing this error to the client.
    ///
    /// Store failures other than conflicts are reported generically; the
    /// detail belongs in the server log.
    pub fn envelope(&self) -> Message {
        match self {
            ApiError::MalformedIdentifier(_) | ApiError::InvalidForm { .. } => {
                Message::fail().add("msg", self.to_string())
            }
            ApiError::Roster(RosterError::Conflict { field, message }) => {
                let mut errors = FieldErrors::default();
                errors.insert(field, message.clone());
                Message::fail().add("errorFiled", errors)
            }
            ApiError::Roster(_) => Message::fail().add("msg", "internal server error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_identifier_envelope() {
        let msg = ApiError::MalformedIdentifier("3-x".into()).envelope();
        assert!(!msg.is_success());
        assert_eq!(
            msg.get("msg"),
            Some(&json!("malformed employee identifier `3-x`"))
        );
    }

    #[test]
    fn conflict_names_the_field() {
        let msg = ApiError::from(RosterError::Conflict {
            field: "empName",
            message: "employee name is already taken".into(),
        })
        .envelope();
        assert_eq!(
            msg.get("errorFiled"),
            Some(&json!({"empName": "employee name is already taken"}))
        );
    }

    #[test]
    fn storage_detail_is_not_leaked() {
        let msg = ApiError::from(RosterError::storage("disk I/O error at /var/db")).envelope();
        assert_eq!(msg.get("msg"), Some(&json!("internal server error")));
    }
}
