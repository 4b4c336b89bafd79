// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `roster serve` command implementation.
//!
//! Opens the SQLite store, wires the services into the gateway, and serves
//! until Ctrl-C. The store is checkpointed and closed on the way out.

use std::sync::Arc;

use roster_config::RosterConfig;
use roster_core::{PluginAdapter, RosterError, StorageAdapter};
use roster_crud::{DepartmentService, EmployeeService};
use roster_gateway::{GatewayState, ServerConfig, start_server};
use roster_storage::SqliteStorage;
use tracing::{info, warn};

pub async fn run_serve(config: RosterConfig) -> Result<(), RosterError> {
    init_tracing(&config.server.log_level);

    let storage = Arc::new(SqliteStorage::new(config.storage.clone()));
    storage.initialize().await?;
    info!(
        path = %config.storage.database_path,
        adapter = storage.name(),
        version = %storage.version(),
        "storage ready"
    );

    let state = GatewayState {
        employees: EmployeeService::new(storage.clone(), config.pagination),
        departments: DepartmentService::new(storage.clone()),
        health: storage.clone(),
    };
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    let served = start_server(&server_config, state, shutdown_signal()).await;

    // Close the store even when the server failed.
    if let Err(e) = storage.shutdown().await {
        warn!(error = %e, "storage shutdown failed");
    }
    storage.close().await?;
    info!("roster serve shutdown complete");
    served
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C; stop the process to exit");
            std::future::pending::<()>().await;
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub(crate) fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
