//! Core domain types for the daily tracker.
//!
//! This module defines:
//! - Daily goals and their defaults
//! - Receipts returned by the logging operations
//! - Per-metric status labels used by the report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Goals
// ============================================================================

/// Daily targets the tracker evaluates against.
///
/// Fixed for the lifetime of a tracker once it has been constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    #[serde(default = "default_calorie_goal")]
    pub calorie_goal: u64,

    #[serde(default = "default_step_goal")]
    pub step_goal: u64,

    #[serde(default = "default_water_goal_liters")]
    pub water_goal_liters: f64,

    /// Amount the user is asked to drink when the hydration alarm fires
    #[serde(default = "default_water_increment_goal")]
    pub water_increment_goal: f64,

    /// Hours without a drink before the hydration alarm may fire
    #[serde(default = "default_alarm_after_hours")]
    pub alarm_after_hours: u64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calorie_goal: default_calorie_goal(),
            step_goal: default_step_goal(),
            water_goal_liters: default_water_goal_liters(),
            water_increment_goal: default_water_increment_goal(),
            alarm_after_hours: default_alarm_after_hours(),
        }
    }
}

fn default_calorie_goal() -> u64 {
    2000
}

fn default_step_goal() -> u64 {
    10_000
}

fn default_water_goal_liters() -> f64 {
    2.5
}

fn default_water_increment_goal() -> f64 {
    0.25
}

fn default_alarm_after_hours() -> u64 {
    2
}

// ============================================================================
// Log Receipts
// ============================================================================

/// Outcome of an accepted logging operation: the increment and the new total.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogReceipt {
    Meal {
        entry: String,
        calories: u64,
        total_calories: u64,
    },
    Steps {
        steps: u64,
        total_steps: u64,
    },
    Water {
        liters: f64,
        total_liters: f64,
        logged_at: DateTime<Utc>,
    },
}

impl fmt::Display for LogReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogReceipt::Meal {
                calories,
                total_calories,
                ..
            } => write!(
                f,
                "Calorie Log: Added {} kcal. Total: {} kcal.",
                calories, total_calories
            ),
            LogReceipt::Steps { steps, total_steps } => write!(
                f,
                "Step Log: Added {} steps. Total: {} steps.",
                steps, total_steps
            ),
            LogReceipt::Water {
                liters,
                total_liters,
                ..
            } => write!(
                f,
                "Hydration Log: Added {:.2} L. Total: {:.2} L.",
                liters, total_liters
            ),
        }
    }
}

// ============================================================================
// Status Labels
// ============================================================================

/// Calorie intake compared to the daily ceiling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CalorieStatus {
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "OVER LIMIT")]
    OverLimit,
}

impl CalorieStatus {
    pub fn classify(consumed: u64, goal: u64) -> Self {
        if consumed <= goal {
            CalorieStatus::Good
        } else {
            CalorieStatus::OverLimit
        }
    }
}

impl fmt::Display for CalorieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalorieStatus::Good => "GOOD",
            CalorieStatus::OverLimit => "OVER LIMIT",
        })
    }
}

/// Step count compared to the daily target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    #[serde(rename = "GOAL MET")]
    GoalMet,
    #[serde(rename = "Keep Moving!")]
    KeepMoving,
}

impl StepStatus {
    pub fn classify(taken: u64, goal: u64) -> Self {
        if taken >= goal {
            StepStatus::GoalMet
        } else {
            StepStatus::KeepMoving
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepStatus::GoalMet => "GOAL MET",
            StepStatus::KeepMoving => "Keep Moving!",
        })
    }
}

/// Water intake compared to the daily target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WaterStatus {
    #[serde(rename = "GOAL MET")]
    GoalMet,
    #[serde(rename = "Need more water.")]
    NeedMore,
}

impl WaterStatus {
    pub fn classify(liters: f64, goal: f64) -> Self {
        if liters >= goal {
            WaterStatus::GoalMet
        } else {
            WaterStatus::NeedMore
        }
    }
}

impl fmt::Display for WaterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WaterStatus::GoalMet => "GOAL MET",
            WaterStatus::NeedMore => "Need more water.",
        })
    }
}
