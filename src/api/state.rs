//! Application state for the payroll engine API.
//!
//! This module defines the shared application state available to all
//! request handlers: the holiday calendar and the in-memory employee
//! roster.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::models::{Employee, HolidayCalendar};

/// An in-memory store of employees, in insertion order.
///
/// The roster owns every [`Employee`] it holds; employees are looked up by
/// their id and listed in the order they were added.
#[derive(Debug, Default)]
pub struct Roster {
    employees: HashMap<Uuid, Employee>,
    order: Vec<Uuid>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee and returns its id.
    pub fn add(&mut self, employee: Employee) -> Uuid {
        let id = employee.id();
        self.order.push(id);
        self.employees.insert(id, employee);
        id
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: Uuid) -> Option<&Employee> {
        self.employees.get(&id)
    }

    /// Looks up an employee by id for mutation.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Employee> {
        self.employees.get_mut(&id)
    }

    /// Iterates over all employees in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.order.iter().filter_map(|id| self.employees.get(id))
    }

    /// The number of employees in the roster.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the roster holds no employees.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Shared application state.
///
/// Contains resources shared across all request handlers: the holiday
/// calendar consulted by the pricing pipeline and the employee roster.
#[derive(Clone)]
pub struct AppState {
    calendar: Arc<HolidayCalendar>,
    roster: Arc<RwLock<Roster>>,
}

impl AppState {
    /// Creates a new application state around the given calendar.
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self {
            calendar: Arc::new(calendar),
            roster: Arc::new(RwLock::new(Roster::new())),
        }
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the roster lock.
    pub fn roster(&self) -> &RwLock<Roster> {
        &self.roster
    }
}
