// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that every pluggable backend implements.

use async_trait::async_trait;

use crate::error::RosterError;
use crate::types::HealthStatus;

/// The base trait for Roster backends.
///
/// Provides identity, health, and shutdown so the binary and the `/health`
/// route can treat backends uniformly.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, RosterError>;

    /// Gracefully shuts down the adapter, releasing any held resources.
    async fn shutdown(&self) -> Result<(), RosterError>;
}
