//! Chart-ready aggregates of a consumption series.

use std::collections::BTreeMap;

use super::patterns::{accumulate_by_department, accumulate_by_hour};
use crate::domain::{round2, ConsumptionSeries, Department, HourlyAverage};
use crate::error::Result;

/// Average consumption per hour of day, ascending by hour.
///
/// Hours with no samples are left out.
pub fn hourly_profile(series: &ConsumptionSeries) -> Result<Vec<HourlyAverage>> {
    let hours = accumulate_by_hour(series)?;
    Ok(hours
        .iter()
        .enumerate()
        .filter_map(|(hour, acc)| {
            acc.mean().map(|mean| HourlyAverage {
                hour: hour as u8,
                average_kwh: round2(mean),
            })
        })
        .collect())
}

/// Summed consumption per department (share of the total).
pub fn department_totals(series: &ConsumptionSeries) -> BTreeMap<Department, f64> {
    accumulate_by_department(series)
        .into_iter()
        .map(|(dept, acc)| (dept, round2(acc.sum)))
        .collect()
}
