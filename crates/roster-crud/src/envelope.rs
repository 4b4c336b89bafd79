// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Uniform response envelope.
//!
//! Serializes as `{"status", "code", "msg", "extend": {...}}` where `code` is
//! 100 for success and 200 for failure.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use strum::Display;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    /// Numeric status code carried on the wire.
    pub fn code(self) -> u16 {
        match self {
            Status::Success => 100,
            Status::Failure => 200,
        }
    }
}

/// Success/failure wrapper with an open key-value payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub status: Status,
    pub code: u16,
    pub msg: String,
    pub extend: BTreeMap<String, Value>,
}

impl Message {
    fn with_status(status: Status) -> Self {
        let msg = match status {
            Status::Success => "success",
            Status::Failure => "failure",
        };
        Self {
            status,
            code: status.code(),
            msg: msg.to_string(),
            extend: BTreeMap::new(),
        }
    }

    pub fn success() -> Self {
        Self::with_status(Status::Success)
    }

    pub fn fail() -> Self {
        Self::with_status(Status::Failure)
    }

    /// Attach a payload entry. Duplicate keys overwrite.
    pub fn add(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let key = key.into();
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            warn!(key = %key, error = %e, "payload value failed to serialize");
            Value::Null
        });
        self.extend.insert(key, value);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extend.get(key)
    }
}
