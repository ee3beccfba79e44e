//! Consumption Pattern Analysis
//!
//! Aggregates an hourly series into peak, waste and weekday/weekend metrics.

use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::{round2, ConsumptionInsights, ConsumptionSeries, Department};
use crate::error::{AnalyticsError, Result};

/// Running sum and sample count for one bucket
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Accumulator {
    pub sum: f64,
    pub count: usize,
}

impl Accumulator {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Per-hour accumulators, rejecting records with an out-of-range hour.
pub(crate) fn accumulate_by_hour(series: &ConsumptionSeries) -> Result<[Accumulator; 24]> {
    let mut hours = [Accumulator::default(); 24];
    for record in series {
        let slot = hours.get_mut(record.hour as usize).ok_or_else(|| {
            AnalyticsError::InvalidArgument(format!("hour {} outside 0..=23", record.hour))
        })?;
        slot.add(record.consumption_kwh);
    }
    Ok(hours)
}

pub(crate) fn accumulate_by_department(
    series: &ConsumptionSeries,
) -> BTreeMap<Department, Accumulator> {
    let mut departments: BTreeMap<Department, Accumulator> = BTreeMap::new();
    for record in series {
        departments
            .entry(record.department)
            .or_default()
            .add(record.consumption_kwh);
    }
    departments
}

/// Analyze a consumption series.
///
/// Ties for the peak hour resolve to the lowest hour; ties for the highest
/// department resolve to the first department in declaration order.
pub fn analyze(series: &ConsumptionSeries) -> Result<ConsumptionInsights> {
    if series.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let mut night = 0.0;
    let mut off_hours = 0.0;
    let mut weekday = Accumulator::default();
    let mut weekend = Accumulator::default();

    for record in series {
        if record.weekday > 6 {
            return Err(AnalyticsError::InvalidArgument(format!(
                "weekday {} outside 0..=6",
                record.weekday
            )));
        }
        if record.is_night() {
            night += record.consumption_kwh;
        }
        if !record.is_business_hour() {
            off_hours += record.consumption_kwh;
        }
        if record.is_weekend() {
            weekend.add(record.consumption_kwh);
        } else {
            weekday.add(record.consumption_kwh);
        }
    }

    let total = series.total_kwh();
    if total <= 0.0 {
        return Err(AnalyticsError::DivisionUndefined(
            "total consumption is zero".to_string(),
        ));
    }

    let hours = accumulate_by_hour(series)?;
    let (peak_hour, peak_consumption) = hours
        .iter()
        .enumerate()
        .filter_map(|(hour, acc)| acc.mean().map(|mean| (hour as u8, mean)))
        .fold(None, |best: Option<(u8, f64)>, (hour, mean)| match best {
            Some((_, top)) if mean <= top => best,
            _ => Some((hour, mean)),
        })
        .ok_or(AnalyticsError::EmptyInput)?;

    let departments = accumulate_by_department(series);
    let per_department_consumption: BTreeMap<Department, f64> = departments
        .iter()
        .filter_map(|(dept, acc)| acc.mean().map(|mean| (*dept, mean)))
        .collect();
    let (highest_consumption_department, _) = per_department_consumption
        .iter()
        .fold(None, |best: Option<(Department, f64)>, (dept, mean)| match best {
            Some((_, top)) if *mean <= top => best,
            _ => Some((*dept, *mean)),
        })
        .ok_or(AnalyticsError::EmptyInput)?;

    let weekday_avg = weekday
        .mean()
        .filter(|avg| *avg != 0.0)
        .ok_or_else(|| {
            AnalyticsError::DivisionUndefined(
                "weekday average consumption is zero or has no samples".to_string(),
            )
        })?;
    let weekend_difference_pct = weekend
        .mean()
        .map(|weekend_avg| round2((weekend_avg - weekday_avg) / weekday_avg * 100.0));

    let insights = ConsumptionInsights {
        total_consumption: round2(total),
        peak_hour,
        peak_consumption: round2(peak_consumption),
        highest_consumption_department,
        per_department_consumption: per_department_consumption
            .into_iter()
            .map(|(dept, mean)| (dept, round2(mean)))
            .collect(),
        night_waste_pct: round2(night / total * 100.0),
        off_hours_pct: round2(off_hours / total * 100.0),
        weekend_difference_pct,
    };

    debug!(
        records = series.len(),
        total = insights.total_consumption,
        peak_hour = insights.peak_hour,
        department = %insights.highest_consumption_department,
        "analyzed consumption series"
    );

    Ok(insights)
}
