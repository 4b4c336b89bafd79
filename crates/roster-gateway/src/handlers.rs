// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.
//!
//! Every response body is a [`Message`] envelope. Expected failures travel
//! with 200; the status code only changes for undecodable input (400), store
//! conflicts (409), store failures (500) and an unhealthy backend (503).

use axum::{
    Form, Json,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, warn};

use roster_core::{HealthStatus, RosterError};
use roster_crud::{ApiError, EmployeeForm, EmployeeUpdateForm, Message, controller};

use crate::server::GatewayState;

/// Query string for GET /emps.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Requested page, 1-based. An empty value counts as absent.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pn: Option<i64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("cannot parse integer: {e}"))),
    }
}

/// Query string for GET /checkuser.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameQuery {
    pub emp_name: String,
}

pub fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::MalformedIdentifier(_) | ApiError::InvalidForm { .. } => StatusCode::BAD_REQUEST,
        ApiError::Roster(RosterError::Conflict { .. }) => StatusCode::CONFLICT,
        ApiError::Roster(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond(result: Result<Message, ApiError>) -> Response {
    match result {
        Ok(message) => (StatusCode::OK, Json(message)).into_response(),
        Err(err) => {
            let status = status_for(&err);
            if status.is_server_error() {
                error!(error = %err, "request failed");
            } else {
                warn!(error = %err, status = status.as_u16(), "request rejected");
            }
            (status, Json(err.envelope())).into_response()
        }
    }
}

fn bad_request(detail: String) -> Response {
    warn!(detail = %detail, "undecodable request");
    (
        StatusCode::BAD_REQUEST,
        Json(Message::fail().add("msg", detail)),
    )
        .into_response()
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::MalformedIdentifier(raw.to_string()))
}

/// GET /depts
pub async fn get_depts(State(state): State<GatewayState>) -> Response {
    respond(controller::get_departments(&state.departments).await)
}

/// GET /emps?pn={page}
pub async fn get_emps(
    State(state): State<GatewayState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => respond(controller::list_employees(&state.employees, query.pn).await),
        Err(rejection) => bad_request(rejection.body_text()),
    }
}

/// POST /emps (form-encoded)
pub async fn post_emp(
    State(state): State<GatewayState>,
    form: Result<Form<EmployeeForm>, FormRejection>,
) -> Response {
    match form {
        Ok(Form(form)) => respond(controller::create_employee(&state.employees, &form).await),
        Err(rejection) => bad_request(rejection.body_text()),
    }
}

/// GET /checkuser?empName={name}
pub async fn check_user(
    State(state): State<GatewayState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => {
            respond(controller::check_username(&state.employees, &query.emp_name).await)
        }
        Err(rejection) => bad_request(rejection.body_text()),
    }
}

/// GET /emp/{id}
pub async fn get_emp(State(state): State<GatewayState>, Path(raw): Path<String>) -> Response {
    match parse_id(&raw) {
        Ok(id) => respond(controller::get_employee(&state.employees, id).await),
        Err(err) => respond(Err(err)),
    }
}

/// PUT /emp/{id} (form-encoded, selective)
pub async fn put_emp(
    State(state): State<GatewayState>,
    Path(raw): Path<String>,
    form: Result<Form<EmployeeUpdateForm>, FormRejection>,
) -> Response {
    let id = match parse_id(&raw) {
        Ok(id) => id,
        Err(err) => return respond(Err(err)),
    };
    match form {
        Ok(Form(form)) => respond(controller::update_employee(&state.employees, id, form).await),
        Err(rejection) => bad_request(rejection.body_text()),
    }
}

/// DELETE /emp/{id} or /emp/{id-id-...}
pub async fn delete_emp(State(state): State<GatewayState>, Path(raw): Path<String>) -> Response {
    respond(controller::delete_employees(&state.employees, &raw).await)
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Response {
    let adapter = state.health.name().to_string();
    let (status, message) = match state.health.health_check().await {
        Ok(HealthStatus::Healthy) => (StatusCode::OK, Message::success().add("health", "healthy")),
        Ok(HealthStatus::Degraded(reason)) => (
            StatusCode::OK,
            Message::success().add("health", format!("degraded: {reason}")),
        ),
        Ok(HealthStatus::Unhealthy(reason)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Message::fail().add("health", format!("unhealthy: {reason}")),
        ),
        Err(e) => {
            error!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Message::fail().add("health", "unhealthy"),
            )
        }
    };
    (status, Json(message.add("adapter", adapter))).into_response()
}
