//! Hourly Payroll Engine
//!
//! This crate computes hourly-worker pay from daily work entries, applying
//! overtime and holiday/weekend pay premiums, and keeps a running pay total
//! per employee. A thin HTTP API exposes the engine to clients.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
