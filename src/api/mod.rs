//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for managing the employee
//! roster, recording work entries, and fetching pay reports. It is the
//! thin I/O collaborator around the core: range pre-validation, JSON
//! shapes and status codes live here, business rules do not.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AddWorkEntryRequest, CreateEmployeeRequest};
pub use response::ApiError;
pub use state::{AppState, Roster};
