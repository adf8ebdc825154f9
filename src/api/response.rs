//! Response types for the payroll engine API.
//!
//! This module defines the success response bodies, the error response
//! structures, and the mapping from engine errors to HTTP statuses and
//! stable error codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, ValidationError};
use crate::models::{Employee, PayReport, PayReportRow, WorkEntry};

/// Response body for a created employee.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeCreatedResponse {
    /// The id assigned to the employee.
    pub employee_id: Uuid,
    /// The employee's name.
    pub name: String,
    /// The employee's hourly rate.
    pub hourly_rate: Decimal,
}

impl From<&Employee> for EmployeeCreatedResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id(),
            name: employee.name().to_string(),
            hourly_rate: employee.hourly_rate(),
        }
    }
}

/// Response body for a recorded work entry.
#[derive(Debug, Clone, Serialize)]
pub struct WorkEntryResponse {
    /// The employee the entry was recorded for.
    pub employee_id: Uuid,
    /// The recorded entry.
    pub entry: WorkEntry,
    /// The employee's running total after this entry.
    pub total_pay: Decimal,
}

/// One employee line in the roster listing.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    /// The employee's id.
    pub employee_id: Uuid,
    /// The employee's name.
    pub name: String,
    /// The employee's hourly rate.
    pub hourly_rate: Decimal,
    /// How many work entries the employee has.
    pub entry_count: usize,
    /// The employee's running total pay.
    pub total_pay: Decimal,
}

impl From<&Employee> for RosterEntry {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id(),
            name: employee.name().to_string(),
            hourly_rate: employee.hourly_rate(),
            entry_count: employee.work_entries().len(),
            total_pay: employee.total_pay(),
        }
    }
}

/// Response body for the roster listing.
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    /// All employees in insertion order.
    pub employees: Vec<RosterEntry>,
}

/// Response body for a pay report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    /// A unique id for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub timestamp: DateTime<Utc>,
    /// The employee the report is for.
    pub employee_id: Uuid,
    /// The employee's name.
    pub employee_name: String,
    /// The employee's hourly rate.
    pub hourly_rate: Decimal,
    /// One row per work entry, in insertion order.
    pub entries: Vec<PayReportRow>,
    /// The accumulated total pay.
    pub total_pay: Decimal,
}

impl ReportResponse {
    /// Wraps a core report into a response envelope.
    pub fn new(report: PayReport, report_id: Uuid, timestamp: DateTime<Utc>) -> Self {
        Self {
            report_id,
            timestamp,
            employee_id: report.employee_id,
            employee_name: report.employee_name,
            hourly_rate: report.hourly_rate,
            entries: report.entries,
            total_pay: report.total_pay,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidEmployee { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    format!("Invalid employee field '{}': {}", field, message),
                    "The employee data contains invalid information",
                ),
            },
            EngineError::HoursOutOfRange { hours, min, max } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "HOURS_OUT_OF_RANGE",
                    format!("Hours worked {} outside allowed range", hours),
                    format!("Hours worked must lie between {} and {}", min, max),
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", id),
                ),
            },
            EngineError::WorkDate(validation) => ApiErrorResponse::from(validation),
        }
    }
}

impl From<ValidationError> for ApiErrorResponse {
    fn from(error: ValidationError) -> Self {
        // All three outcomes are recoverable: the client is expected to
        // re-submit with a different date, hence 422 rather than 400.
        let code = match error {
            ValidationError::FutureDate { .. } => "FUTURE_DATE",
            ValidationError::WrongYear { .. } => "WRONG_YEAR",
            ValidationError::DuplicateDate { .. } => "DUPLICATE_DATE",
        };
        ApiErrorResponse {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: ApiError::new(code, error.to_string()),
        }
    }
}
