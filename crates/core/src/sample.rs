//! Static weekly sample data behind the Health Analytics page

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of patient metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub date: NaiveDate,
    pub heart_rate: u32,
    pub blood_pressure_systolic: u32,
    pub blood_pressure_diastolic: u32,
    /// mg/dL
    pub blood_glucose: f64,
    pub sleep_hours: f64,
    pub steps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthData {
    pub patient: String,
    pub week_start: NaiveDate,
    pub days: Vec<DailyMetrics>,
}

// (heart rate, systolic, diastolic, glucose, sleep, steps)
const WEEK: [(u32, u32, u32, f64, f64, u32); 7] = [
    (72, 118, 78, 96.0, 7.5, 8200),
    (75, 121, 80, 102.0, 6.8, 7400),
    (78, 126, 82, 110.0, 6.1, 5100),
    (74, 122, 79, 99.0, 7.0, 9000),
    (80, 131, 85, 118.0, 5.6, 4300),
    (71, 117, 76, 94.0, 8.2, 11200),
    (70, 116, 75, 92.0, 8.0, 10100),
];

/// The fixed sample week shown on the dashboard and sent for insights
pub fn sample_health_data() -> HealthData {
    let week_start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default();
    let days = WEEK
        .iter()
        .zip(0u64..)
        .map(|(&(hr, sys, dia, glucose, sleep, steps), offset)| DailyMetrics {
            date: week_start
                .checked_add_days(Days::new(offset))
                .unwrap_or(week_start),
            heart_rate: hr,
            blood_pressure_systolic: sys,
            blood_pressure_diastolic: dia,
            blood_glucose: glucose,
            sleep_hours: sleep,
            steps,
        })
        .collect();

    HealthData {
        patient: "Sample Patient".to_string(),
        week_start,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_covers_one_consecutive_week() {
        let data = sample_health_data();
        assert_eq!(data.days.len(), 7);
        assert_eq!(data.days[0].date, data.week_start);
        assert_eq!(data.days[6].date.to_string(), "2025-01-12");
    }

    #[test]
    fn sample_is_stable() {
        assert_eq!(sample_health_data(), sample_health_data());
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let value = serde_json::to_value(sample_health_data()).unwrap();
        assert_eq!(value["week_start"], "2025-01-06");
        assert_eq!(value["days"][4]["heart_rate"], 80);
    }
}
