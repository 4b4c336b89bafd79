// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Roster service.
//!
//! Decodes requests, calls the CRUD controllers, and maps their outcome to a
//! status code plus the JSON envelope.

pub mod handlers;
pub mod server;

pub use server::{GatewayState, ServerConfig, build_router, start_server};
