// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::future::Future;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use roster_core::{PluginAdapter, RosterError};
use roster_crud::{DepartmentService, EmployeeService};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub employees: EmployeeService,
    pub departments: DepartmentService,
    /// Backend probed by `GET /health`.
    pub health: Arc<dyn PluginAdapter>,
}

/// Listener address (mirrors the `[server]` section of the config crate).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    /// `0` binds an ephemeral port.
    pub port: u16,
}

/// All routes with tracing and CORS layers applied.
///
/// - GET /depts
/// - GET /emps?pn=, POST /emps
/// - GET /checkuser?empName=
/// - GET, PUT, DELETE /emp/{id}
/// - GET /health
pub fn build_router(state: GatewayState) -> Router {
    let api_routes = Router::new()
        .route("/depts", get(handlers::get_depts))
        .route(
            "/emps",
            get(handlers::get_emps).post(handlers::post_emp),
        )
        .route("/checkuser", get(handlers::check_user))
        .route(
            "/emp/{id}",
            get(handlers::get_emp)
                .put(handlers::put_emp)
                .delete(handlers::delete_emp),
        )
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind `host:port` and serve until `shutdown` resolves.
pub async fn start_server<F>(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: F,
) -> Result<(), RosterError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RosterError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;
    let local = listener
        .local_addr()
        .map_err(|e| RosterError::Internal(format!("failed to read bound address: {e}")))?;

    tracing::info!(addr = %local, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| RosterError::Internal(format!("gateway server error: {e}")))?;

    tracing::info!("gateway stopped");
    Ok(())
}
