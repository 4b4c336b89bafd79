// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Roster service.

use thiserror::Error;

/// The error type shared by the repository traits and the CRUD layer.
///
/// Domain outcomes that are part of the API contract (validation failures,
/// taken names, missing rows) are not errors at this level; they are
/// returned as values and turned into failure envelopes by the controllers.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration errors (invalid values discovered after loading).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (connection, query failure, row decoding).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A write was rejected by a store constraint (unique name, unknown department).
    #[error("conflict on `{field}`: {message}")]
    Conflict {
        /// Wire name of the field the constraint applies to.
        field: &'static str,
        message: String,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Wrap any error as a storage failure.
    pub fn storage(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        RosterError::Storage { source: err.into() }
    }
}
