//! The daily tracker: running totals for one day and the operations on them.
//!
//! Mutators validate their input and return a [`LogReceipt`] or a
//! [`ValidationError`]. A rejected call never touches state.

use crate::{Goals, LogReceipt, ValidationError};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

/// Accumulated calories, steps, and water for a single day
#[derive(Clone, Debug, Serialize)]
pub struct DailyTracker {
    day: NaiveDate,
    calories_consumed: u64,
    steps_taken: u64,
    water_intake_liters: f64,
    last_water_log: DateTime<Utc>,
    meal_log: Vec<String>,
    goals: Goals,
}

impl Default for DailyTracker {
    fn default() -> Self {
        Self::new(Goals::default())
    }
}

impl DailyTracker {
    /// Start a new day now with the given goals
    pub fn new(goals: Goals) -> Self {
        Self::started_at(goals, Utc::now())
    }

    /// Start a new day at an explicit time
    pub fn started_at(goals: Goals, started: DateTime<Utc>) -> Self {
        let day = started.with_timezone(&Local).date_naive();
        tracing::debug!("Tracking day {} with goals {:?}", day, goals);
        Self {
            day,
            calories_consumed: 0,
            steps_taken: 0,
            water_intake_liters: 0.0,
            last_water_log: started,
            meal_log: Vec::new(),
            goals,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn calories_consumed(&self) -> u64 {
        self.calories_consumed
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn water_intake_liters(&self) -> f64 {
        self.water_intake_liters
    }

    /// Time of the last accepted water entry, or the start of the day
    pub fn last_water_log(&self) -> DateTime<Utc> {
        self.last_water_log
    }

    /// Logged meals in insertion order, formatted as `"<description>: <calories> kcal"`
    pub fn meal_log(&self) -> &[String] {
        &self.meal_log
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Record a meal and add its calories to the day's total
    pub fn log_meal(
        &mut self,
        description: &str,
        calories: i64,
    ) -> Result<LogReceipt, ValidationError> {
        let calories = u64::try_from(calories).map_err(|_| {
            tracing::warn!("Rejected meal {:?} with {} kcal", description, calories);
            ValidationError::NegativeCalories(calories)
        })?;

        self.calories_consumed = self.calories_consumed.checked_add(calories).ok_or_else(|| {
            tracing::warn!("Rejected meal {:?}: {} kcal overflows the total", description, calories);
            ValidationError::CalorieTotalOverflow(calories)
        })?;
        let entry = format!("{}: {} kcal", description, calories);
        self.meal_log.push(entry.clone());

        tracing::info!(
            "Logged meal {:?}: +{} kcal (total {} kcal)",
            description,
            calories,
            self.calories_consumed
        );

        Ok(LogReceipt::Meal {
            entry,
            calories,
            total_calories: self.calories_consumed,
        })
    }

    /// Add steps to the day's total
    pub fn log_steps(&mut self, steps: i64) -> Result<LogReceipt, ValidationError> {
        let steps = u64::try_from(steps).map_err(|_| {
            tracing::warn!("Rejected step count {}", steps);
            ValidationError::NegativeSteps(steps)
        })?;

        self.steps_taken = self.steps_taken.checked_add(steps).ok_or_else(|| {
            tracing::warn!("Rejected step count {}: overflows the total", steps);
            ValidationError::StepTotalOverflow(steps)
        })?;
        tracing::info!("Logged steps: +{} (total {})", steps, self.steps_taken);

        Ok(LogReceipt::Steps {
            steps,
            total_steps: self.steps_taken,
        })
    }

    /// Add water, stamping the entry with the current time
    pub fn log_water(&mut self, amount_liters: f64) -> Result<LogReceipt, ValidationError> {
        self.log_water_at(amount_liters, Utc::now())
    }

    /// Add water, stamping the entry with `at`
    ///
    /// Zero, negative, and non-finite amounts are rejected, as is any amount
    /// that would push the total past the largest finite value.
    pub fn log_water_at(
        &mut self,
        amount_liters: f64,
        at: DateTime<Utc>,
    ) -> Result<LogReceipt, ValidationError> {
        if !(amount_liters.is_finite() && amount_liters > 0.0) {
            tracing::warn!("Rejected water amount {} L", amount_liters);
            return Err(ValidationError::NonPositiveWater(amount_liters));
        }

        let total = self.water_intake_liters + amount_liters;
        if !total.is_finite() {
            tracing::warn!("Rejected water amount {} L: total is not finite", amount_liters);
            return Err(ValidationError::WaterTotalOverflow(amount_liters));
        }

        self.water_intake_liters = total;
        self.last_water_log = at;

        tracing::info!(
            "Logged water: +{:.2} L (total {:.2} L)",
            amount_liters,
            self.water_intake_liters
        );

        Ok(LogReceipt::Water {
            liters: amount_liters,
            total_liters: self.water_intake_liters,
            logged_at: at,
        })
    }

    /// Whole hours elapsed between the last water entry and `now`, never negative
    pub fn hours_since_last_drink(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.last_water_log).num_hours()).unwrap_or(0)
    }
}
