use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::{Department, BUSINESS_HOURS, FIRST_WEEKEND_DAY, FLOORS, NIGHT_HOURS};
use crate::error::{AnalyticsError, Result};

/// One simulated hour of metered consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    pub timestamp: NaiveDateTime,
    pub consumption_kwh: f64,
    pub department: Department,
    pub floor: u8,
    /// Hour of day (0-23), derived from `timestamp`
    pub hour: u8,
    /// Day of week (Monday = 0 .. Sunday = 6), derived from `timestamp`
    pub weekday: u8,
}

impl ConsumptionRecord {
    /// Build a record, deriving hour and weekday from the timestamp.
    pub fn new(
        timestamp: NaiveDateTime,
        consumption_kwh: f64,
        department: Department,
        floor: u8,
    ) -> Result<Self> {
        if !consumption_kwh.is_finite() || consumption_kwh < 0.0 {
            return Err(AnalyticsError::InvalidArgument(format!(
                "consumption_kwh must be a finite value >= 0, got {consumption_kwh}"
            )));
        }
        if !FLOORS.contains(&floor) {
            return Err(AnalyticsError::InvalidArgument(format!(
                "floor must be within {}..={}, got {floor}",
                FLOORS.start(),
                FLOORS.end()
            )));
        }

        Ok(Self {
            timestamp,
            consumption_kwh,
            department,
            floor,
            hour: timestamp.hour() as u8,
            weekday: timestamp.weekday().num_days_from_monday() as u8,
        })
    }

    pub fn is_weekend(&self) -> bool {
        self.weekday >= FIRST_WEEKEND_DAY
    }

    pub fn is_business_hour(&self) -> bool {
        BUSINESS_HOURS.contains(&self.hour)
    }

    pub fn is_night(&self) -> bool {
        NIGHT_HOURS.contains(&self.hour)
    }
}

/// Ordered hourly series, one record per simulated hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumptionSeries(Vec<ConsumptionRecord>);

impl ConsumptionSeries {
    pub fn new(records: Vec<ConsumptionRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[ConsumptionRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConsumptionRecord> {
        self.0.iter()
    }

    /// Sum of consumption over every record (unrounded)
    pub fn total_kwh(&self) -> f64 {
        self.0.iter().map(|r| r.consumption_kwh).sum()
    }

    pub fn into_inner(self) -> Vec<ConsumptionRecord> {
        self.0
    }
}

impl From<Vec<ConsumptionRecord>> for ConsumptionSeries {
    fn from(records: Vec<ConsumptionRecord>) -> Self {
        Self(records)
    }
}

impl FromIterator<ConsumptionRecord> for ConsumptionSeries {
    fn from_iter<I: IntoIterator<Item = ConsumptionRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConsumptionSeries {
    type Item = &'a ConsumptionRecord;
    type IntoIter = std::slice::Iter<'a, ConsumptionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Summary metrics derived from one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionInsights {
    pub total_consumption: f64,
    pub peak_hour: u8,
    pub peak_consumption: f64,
    pub highest_consumption_department: Department,
    /// Average consumption per record, by department
    pub per_department_consumption: BTreeMap<Department, f64>,
    pub night_waste_pct: f64,
    pub off_hours_pct: f64,
    /// `None` when the series contains no weekend hours
    pub weekend_difference_pct: Option<f64>,
}

/// Average consumption for one hour of the day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyAverage {
    pub hour: u8,
    pub average_kwh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Actionable efficiency suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub estimated_savings: String,
}
