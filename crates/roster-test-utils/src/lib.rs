// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Roster integration tests.
//!
//! [`TestHarness`] assembles the full stack (temp SQLite database, services,
//! axum router) and drives it in-process without binding a socket.

pub mod harness;

pub use axum::http::StatusCode;
pub use harness::{TestHarness, TestResponse};
