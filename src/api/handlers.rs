//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Local, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::Employee;

use super::request::{AddWorkEntryRequest, CreateEmployeeRequest};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeCreatedResponse, ReportResponse, RosterEntry,
    RosterResponse, WorkEntryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route("/employees/:id/entries", post(add_work_entry_handler))
        .route("/employees/:id/report", get(report_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn map_json_rejection(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /employees.
///
/// Creates an employee with a validated name and hourly rate and adds it
/// to the roster.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = map_json_rejection(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let employee = match Employee::new(request.name, request.hourly_rate) {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let response = EmployeeCreatedResponse::from(&employee);
    {
        let mut roster = state.roster().write().expect("roster lock poisoned");
        roster.add(employee);
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %response.employee_id,
        "Employee created"
    );
    (StatusCode::CREATED, Json(response)).into_response()
}

/// Handler for GET /employees.
///
/// Lists every employee in the roster in insertion order.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    let roster = state.roster().read().expect("roster lock poisoned");
    let response = RosterResponse {
        employees: roster.iter().map(RosterEntry::from).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /employees/{id}/entries.
///
/// Range-checks the hours, then has the employee validate, classify and
/// price the day. The current date is taken from the local clock, so the
/// future-date and current-year rules track the moment of the request.
async fn add_work_entry_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    payload: Result<Json<AddWorkEntryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing work entry request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = map_json_rejection(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if let Err(err) = request.validate_hours() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Hours rejected"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let today = Local::now().date_naive();
    let mut roster = state.roster().write().expect("roster lock poisoned");

    let Some(employee) = roster.get_mut(employee_id) else {
        let api_error: ApiErrorResponse =
            EngineError::EmployeeNotFound { id: employee_id }.into();
        return api_error.into_response();
    };

    match employee.add_work_entry(request.work_date, request.hours_worked, state.calendar(), today)
    {
        Ok(entry) => {
            let response = WorkEntryResponse {
                employee_id,
                entry,
                total_pay: employee.total_pay(),
            };
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                work_date = %entry.work_date,
                day_class = %entry.day_class,
                daily_pay = %entry.daily_pay,
                "Work entry recorded"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Work entry rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /employees/{id}/report.
///
/// Returns the employee's pay report: one row per entry in insertion
/// order plus the accumulated total.
async fn report_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> impl IntoResponse {
    let roster = state.roster().read().expect("roster lock poisoned");

    let Some(employee) = roster.get(employee_id) else {
        let api_error: ApiErrorResponse =
            EngineError::EmployeeNotFound { id: employee_id }.into();
        return api_error.into_response();
    };

    let response = ReportResponse::new(employee.report(), Uuid::new_v4(), Utc::now());
    (StatusCode::OK, Json(response)).into_response()
}
