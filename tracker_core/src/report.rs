//! Daily status report.
//!
//! [`DailyTracker::generate_report`] computes the numbers; the `Display`
//! impl renders the console summary.

use crate::{CalorieStatus, DailyTracker, StepStatus, WaterStatus};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

const HEAVY_RULE: &str = "=============================================";
const LIGHT_RULE: &str = "---------------------------------------------";

/// One metric's progress toward its goal
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricProgress<T, S> {
    pub value: T,
    pub goal: T,
    pub percent: f64,
    pub status: S,
}

/// Snapshot of the day's progress
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub calories: MetricProgress<u64, CalorieStatus>,
    pub steps: MetricProgress<u64, StepStatus>,
    pub water_liters: MetricProgress<f64, WaterStatus>,
    pub last_water_log: DateTime<Utc>,
    pub meals: Vec<String>,
}

fn percent(value: f64, goal: f64) -> f64 {
    value * 100.0 / goal
}

impl DailyTracker {
    /// Compute progress for every metric against the tracker's goals
    pub fn generate_report(&self) -> DailyReport {
        let goals = self.goals();
        let calories = self.calories_consumed();
        let steps = self.steps_taken();
        let water = self.water_intake_liters();

        DailyReport {
            date: self.day(),
            calories: MetricProgress {
                value: calories,
                goal: goals.calorie_goal,
                percent: percent(calories as f64, goals.calorie_goal as f64),
                status: CalorieStatus::classify(calories, goals.calorie_goal),
            },
            steps: MetricProgress {
                value: steps,
                goal: goals.step_goal,
                percent: percent(steps as f64, goals.step_goal as f64),
                status: StepStatus::classify(steps, goals.step_goal),
            },
            water_liters: MetricProgress {
                value: water,
                goal: goals.water_goal_liters,
                percent: percent(water, goals.water_goal_liters),
                status: WaterStatus::classify(water, goals.water_goal_liters),
            },
            last_water_log: self.last_water_log(),
            meals: self.meal_log().to_vec(),
        }
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEAVY_RULE)?;
        writeln!(f, "            DAILY FITNESS SUMMARY            ")?;
        writeln!(f, "{}", HEAVY_RULE)?;
        writeln!(
            f,
            "[CALORIES] Consumed: {} / {} kcal ({:.1}%) - Status: {}",
            self.calories.value, self.calories.goal, self.calories.percent, self.calories.status
        )?;
        writeln!(
            f,
            "[STEPS]    Taken: {} / {} steps ({:.1}%) - Status: {}",
            self.steps.value, self.steps.goal, self.steps.percent, self.steps.status
        )?;
        writeln!(
            f,
            "[WATER]    Intake: {:.2} / {:.2} L ({:.1}%) - Status: {}",
            self.water_liters.value,
            self.water_liters.goal,
            self.water_liters.percent,
            self.water_liters.status
        )?;
        writeln!(f, "{}", LIGHT_RULE)?;
        writeln!(
            f,
            "Last Water Intake Logged At: {}",
            self.last_water_log.with_timezone(&Local).format("%H:%M:%S")
        )?;
        write!(f, "{}", LIGHT_RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Goals;
    use chrono::TimeZone;

    fn tracker() -> DailyTracker {
        crate::logging::init_test();
        DailyTracker::started_at(
            Goals::default(),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_breakfast_percent() {
        let mut t = tracker();
        t.log_meal("Breakfast", 350).unwrap();

        let report = t.generate_report();
        assert_eq!(report.calories.value, 350);
        assert_eq!(report.calories.percent, 17.5);
        assert_eq!(report.calories.status, CalorieStatus::Good);
    }

    #[test]
    fn test_fresh_tracker_report() {
        let report = tracker().generate_report();
        assert_eq!(report.calories.percent, 0.0);
        assert_eq!(report.steps.status, StepStatus::KeepMoving);
        assert_eq!(report.water_liters.status, WaterStatus::NeedMore);
        assert!(report.meals.is_empty());
    }

    #[test]
    fn test_end_of_day_statuses() {
        let mut t = tracker();
        t.log_meal("Breakfast", 350).unwrap();
        t.log_meal("Lunch", 600).unwrap();
        t.log_meal("Dinner & Dessert", 1200).unwrap();
        t.log_steps(10_000).unwrap();
        t.log_water(2.5).unwrap();

        let report = t.generate_report();
        assert_eq!(report.calories.value, 2150);
        assert_eq!(report.calories.status, CalorieStatus::OverLimit);
        assert_eq!(report.steps.status, StepStatus::GoalMet);
        assert_eq!(report.water_liters.status, WaterStatus::GoalMet);
        assert_eq!(report.water_liters.percent, 100.0);
        assert_eq!(report.meals.len(), 3);
    }

    #[test]
    fn test_report_does_not_mutate() {
        let mut t = tracker();
        t.log_steps(42).unwrap();
        let first = t.generate_report();
        let second = t.generate_report();
        assert_eq!(first, second);
        assert_eq!(t.steps_taken(), 42);
    }

    #[test]
    fn test_rendered_report() {
        let mut t = tracker();
        t.log_meal("Breakfast", 350).unwrap();
        t.log_steps(2500).unwrap();
        t.log_water(0.5).unwrap();

        let text = t.generate_report().to_string();
        assert!(text.contains("DAILY FITNESS SUMMARY"));
        assert!(text.contains("[CALORIES] Consumed: 350 / 2000 kcal (17.5%) - Status: GOOD"));
        assert!(text.contains("[STEPS]    Taken: 2500 / 10000 steps (25.0%) - Status: Keep Moving!"));
        assert!(text.contains(
            "[WATER]    Intake: 0.50 / 2.50 L (20.0%) - Status: Need more water."
        ));
        assert!(text.contains("Last Water Intake Logged At: "));
    }

    #[test]
    fn test_report_json_shape() {
        let mut t = tracker();
        t.log_meal("Breakfast", 350).unwrap();

        let json = serde_json::to_value(t.generate_report()).unwrap();
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["calories"]["value"], 350);
        assert_eq!(json["calories"]["status"], "GOOD");
        assert_eq!(json["meals"][0], "Breakfast: 350 kcal");
    }
}
