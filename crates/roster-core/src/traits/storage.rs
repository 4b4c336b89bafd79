// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait for persistence backends.

use async_trait::async_trait;

use crate::error::RosterError;
use crate::traits::adapter::PluginAdapter;

/// Lifecycle of a persistence backend.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend (connection, PRAGMAs, migrations).
    async fn initialize(&self) -> Result<(), RosterError>;

    /// Closes the storage backend, flushing pending writes.
    async fn close(&self) -> Result<(), RosterError>;
}
