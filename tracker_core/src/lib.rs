#![forbid(unsafe_code)]

//! Core domain model and business logic for the Daytrack daily health tracker.
//!
//! This crate provides:
//! - The daily tracker (calorie, step, and water totals)
//! - Hydration alarm decisions
//! - Status reports against daily goals
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod tracker;
pub mod alarm;
pub mod report;
pub mod command;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use types::*;
pub use config::Config;
pub use tracker::DailyTracker;
pub use alarm::HydrationAlarm;
pub use report::{DailyReport, MetricProgress};
pub use command::Command;
