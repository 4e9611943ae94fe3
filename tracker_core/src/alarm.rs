//! Hydration alarm decision.
//!
//! The alarm fires when the user has gone at least `alarm_after_hours`
//! without drinking and is still more than one increment short of the
//! daily water goal. Once the goal is met the alarm stays off for the day.

use crate::DailyTracker;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A triggered hydration alarm
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HydrationAlarm {
    pub hours_since_last_drink: u64,
    /// How much to drink now
    pub increment_liters: f64,
    /// Water still needed to reach the daily goal
    pub remaining_liters: f64,
}

impl fmt::Display for HydrationAlarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- ALARM TRIGGERED: Time Check ---")?;
        writeln!(
            f,
            "It's been {} hours! Drink at least {:.2} L.",
            self.hours_since_last_drink, self.increment_liters
        )?;
        writeln!(f, "Remaining Goal: {:.2} L", self.remaining_liters)?;
        write!(f, "----------------------------------")
    }
}

impl DailyTracker {
    /// Decide whether an alarm is due after `hours_since_last_drink` hours
    ///
    /// Pure: no logging, no state change.
    pub fn hydration_alarm(&self, hours_since_last_drink: u64) -> Option<HydrationAlarm> {
        let goals = self.goals();
        if self.water_intake_liters() >= goals.water_goal_liters {
            return None;
        }
        if hours_since_last_drink < goals.alarm_after_hours {
            return None;
        }

        let remaining = goals.water_goal_liters - self.water_intake_liters();
        if remaining > goals.water_increment_goal {
            Some(HydrationAlarm {
                hours_since_last_drink,
                increment_liters: goals.water_increment_goal,
                remaining_liters: remaining,
            })
        } else {
            None
        }
    }

    /// Decide on the alarm and log the outcome, returning the alarm if it fired
    pub fn raise_hydration_alarm(&self, hours_since_last_drink: u64) -> Option<HydrationAlarm> {
        let alarm = self.hydration_alarm(hours_since_last_drink);
        match &alarm {
            Some(alarm) => tracing::warn!(
                "Hydration alarm: {} h since last drink, {:.2} L remaining",
                alarm.hours_since_last_drink,
                alarm.remaining_liters
            ),
            None => tracing::debug!(
                "No hydration alarm after {} h ({:.2} L logged)",
                hours_since_last_drink,
                self.water_intake_liters()
            ),
        }
        alarm
    }

    /// Check the alarm for a caller-supplied elapsed time, logging it when it fires
    pub fn check_hydration_alarm(&self, hours_since_last_drink: u64) -> bool {
        self.raise_hydration_alarm(hours_since_last_drink).is_some()
    }

    /// Check the alarm using the time elapsed since the last water entry
    pub fn check_hydration_alarm_at(&self, now: DateTime<Utc>) -> bool {
        self.check_hydration_alarm(self.hours_since_last_drink(now))
    }
}
