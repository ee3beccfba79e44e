//! # Corporate Consumption Simulation
//!
//! Produces a synthetic hourly metering series for an office building.
//! Each hour's load is a base load scaled by a business-hours factor and a
//! weekend factor, plus normally distributed noise:
//!
//! ```text
//! consumption = max(min_kwh, base × hour_factor × day_factor + N(0, σ))
//! ```
//!
//! The random source is injectable so runs can be reproduced from a seed.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    round2, ConsumptionRecord, ConsumptionSeries, Department, BUSINESS_HOURS, FIRST_WEEKEND_DAY,
    FLOORS,
};
use crate::error::{AnalyticsError, Result};

const BUSINESS_HOUR_FACTOR: f64 = 1.8;
const OFF_HOUR_FACTOR: f64 = 0.6;
const WEEKEND_FACTOR: f64 = 0.7;

/// Longest series a single call may generate
pub const MAX_DAYS: u32 = 30;

/// Consumption generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionGeneratorConfig {
    /// First simulated hour
    pub start: NaiveDateTime,
    /// Base hourly load in kWh before factors are applied
    pub base_load_kwh: f64,
    /// Standard deviation of the hourly noise in kWh
    pub noise_std_dev_kwh: f64,
    /// Lower clamp for a single hour's consumption in kWh
    pub min_consumption_kwh: f64,
    /// Random seed for reproducibility (None = random)
    pub random_seed: Option<u64>,
}

impl Default for ConsumptionGeneratorConfig {
    fn default() -> Self {
        Self {
            start: default_epoch(),
            base_load_kwh: 50.0,
            noise_std_dev_kwh: 5.0,
            min_consumption_kwh: 10.0,
            random_seed: None,
        }
    }
}

fn default_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Multiplier for the time of day: business hours draw more than the rest.
pub fn hour_factor(hour: u8) -> f64 {
    if BUSINESS_HOURS.contains(&hour) {
        BUSINESS_HOUR_FACTOR
    } else {
        OFF_HOUR_FACTOR
    }
}

/// Multiplier for the day of week (Monday = 0)
pub fn day_factor(weekday: u8) -> f64 {
    if weekday >= FIRST_WEEKEND_DAY {
        WEEKEND_FACTOR
    } else {
        1.0
    }
}

/// Generates synthetic hourly consumption series
pub struct ConsumptionGenerator {
    config: ConsumptionGeneratorConfig,
    rng: rand::rngs::StdRng,
}

impl ConsumptionGenerator {
    pub fn new(config: ConsumptionGeneratorConfig) -> Self {
        use rand::SeedableRng;

        let rng = match config.random_seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    /// Generator with default factors and a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ConsumptionGeneratorConfig {
            random_seed: Some(seed),
            ..Default::default()
        })
    }

    pub fn config(&self) -> &ConsumptionGeneratorConfig {
        &self.config
    }

    /// Generate `days × 24` hourly records, advancing this generator's RNG.
    pub fn generate(&mut self, days: u32) -> Result<ConsumptionSeries> {
        generate_series_with(&self.config, days, &mut self.rng)
    }
}

/// Generate a series with default factors and an entropy-seeded RNG.
pub fn generate_series(days: u32) -> Result<ConsumptionSeries> {
    ConsumptionGenerator::new(ConsumptionGeneratorConfig::default()).generate(days)
}

/// Generate a series drawing every random value from `rng`.
pub fn generate_series_with<R: Rng + ?Sized>(
    config: &ConsumptionGeneratorConfig,
    days: u32,
    rng: &mut R,
) -> Result<ConsumptionSeries> {
    if !(1..=MAX_DAYS).contains(&days) {
        return Err(AnalyticsError::InvalidArgument(format!(
            "days must be within 1..={MAX_DAYS}, got {days}"
        )));
    }
    if !config.base_load_kwh.is_finite() || config.base_load_kwh < 0.0 {
        return Err(AnalyticsError::InvalidArgument(format!(
            "base_load_kwh must be a finite value >= 0, got {}",
            config.base_load_kwh
        )));
    }
    if !config.min_consumption_kwh.is_finite() || config.min_consumption_kwh < 0.0 {
        return Err(AnalyticsError::InvalidArgument(format!(
            "min_consumption_kwh must be a finite value >= 0, got {}",
            config.min_consumption_kwh
        )));
    }

    if !config.noise_std_dev_kwh.is_finite() || config.noise_std_dev_kwh < 0.0 {
        return Err(AnalyticsError::InvalidArgument(format!(
            "noise_std_dev_kwh must be a finite value >= 0, got {}",
            config.noise_std_dev_kwh
        )));
    }

    let noise = Normal::new(0.0, config.noise_std_dev_kwh).map_err(|e| {
        AnalyticsError::InvalidArgument(format!(
            "noise_std_dev_kwh {}: {e}",
            config.noise_std_dev_kwh
        ))
    })?;

    let departments = Department::all();
    let hours = days as i64 * 24;
    let mut records = Vec::with_capacity(hours as usize);

    for offset in 0..hours {
        let timestamp = config.start + Duration::hours(offset);
        let department = departments[rng.gen_range(0..departments.len())];
        let floor = rng.gen_range(FLOORS);

        // Calendar fields come from the record so factors and analysis agree
        let mut record = ConsumptionRecord::new(timestamp, 0.0, department, floor)?;
        let perturbation = noise.sample(rng);
        let load = config.base_load_kwh * hour_factor(record.hour) * day_factor(record.weekday)
            + perturbation;
        record.consumption_kwh = round2(load.max(config.min_consumption_kwh));

        records.push(record);
    }

    debug!(
        days,
        records = records.len(),
        start = %config.start,
        "generated consumption series"
    );

    Ok(ConsumptionSeries::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_factors() {
        assert_eq!(hour_factor(7), 0.6);
        assert_eq!(hour_factor(8), 1.8);
        assert_eq!(hour_factor(18), 1.8);
        assert_eq!(hour_factor(19), 0.6);
        assert_eq!(day_factor(0), 1.0);
        assert_eq!(day_factor(4), 1.0);
        assert_eq!(day_factor(5), 0.7);
        assert_eq!(day_factor(6), 0.7);
    }

    #[test]
    fn test_series_length_and_floor() {
        let mut generator = ConsumptionGenerator::seeded(42);
        let series = generator.generate(7).unwrap();

        assert_eq!(series.len(), 7 * 24);
        for record in series.iter() {
            assert!(record.consumption_kwh >= 10.0);
            assert!((1..=4).contains(&record.floor));
            assert_eq!(record.hour as u32, record.timestamp.hour());
        }
    }

    #[test]
    fn test_zero_days_rejected() {
        let mut generator = ConsumptionGenerator::seeded(1);
        assert!(matches!(
            generator.generate(0),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_days_above_limit_rejected() {
        let mut generator = ConsumptionGenerator::seeded(1);
        assert_eq!(generator.generate(MAX_DAYS).unwrap().len(), 720);
        assert!(matches!(
            generator.generate(MAX_DAYS + 1),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            generator.generate(u32::MAX),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_hours_are_sequential_from_epoch() {
        let series = ConsumptionGenerator::seeded(7).generate(2).unwrap();
        let first = &series.records()[0];
        assert_eq!(first.timestamp, default_epoch());
        // 2025-01-01 is a Wednesday
        assert_eq!(first.weekday, 2);
        for pair in series.records().windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::hours(1));
        }
    }

    #[test]
    fn test_same_seed_reproduces_series() {
        let a = ConsumptionGenerator::seeded(99).generate(3).unwrap();
        let b = ConsumptionGenerator::seeded(99).generate(3).unwrap();
        let c = ConsumptionGenerator::seeded(100).generate(3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_noise_free_series_is_exact() {
        let config = ConsumptionGeneratorConfig {
            noise_std_dev_kwh: 0.0,
            random_seed: Some(5),
            ..Default::default()
        };
        let series = ConsumptionGenerator::new(config).generate(7).unwrap();

        for record in series.iter() {
            let expected = match (record.is_business_hour(), record.is_weekend()) {
                (true, false) => 90.0,
                (false, false) => 30.0,
                (true, true) => 63.0,
                (false, true) => 21.0,
            };
            assert!((record.consumption_kwh - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_business_hour_mean_within_tolerance() {
        let series = ConsumptionGenerator::seeded(2024).generate(28).unwrap();
        let weekday_business: Vec<f64> = series
            .iter()
            .filter(|r| r.is_business_hour() && !r.is_weekend())
            .map(|r| r.consumption_kwh)
            .collect();
        let mean = weekday_business.iter().sum::<f64>() / weekday_business.len() as f64;

        // 50 × 1.8 = 90 kWh expected, noise σ = 5 averaged over 220 samples
        assert!((mean - 90.0).abs() < 2.0, "mean was {mean}");
    }

    #[test]
    fn test_every_department_is_drawn() {
        let series = ConsumptionGenerator::seeded(3).generate(7).unwrap();
        for department in Department::all() {
            assert!(series.iter().any(|r| r.department == department));
        }
    }

    #[test]
    fn test_custom_rng_is_used() {
        use rand::SeedableRng;

        let config = ConsumptionGeneratorConfig::default();
        let mut rng_a = rand::rngs::StdRng::seed_from_u64(11);
        let mut rng_b = rand::rngs::StdRng::seed_from_u64(11);
        let a = generate_series_with(&config, 1, &mut rng_a).unwrap();
        let b = generate_series_with(&config, 1, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_noise_rejected() {
        let mut rng = rand::thread_rng();
        for noise_std_dev_kwh in [-1.0, -0.01, f64::NAN, f64::INFINITY] {
            let config = ConsumptionGeneratorConfig {
                noise_std_dev_kwh,
                ..Default::default()
            };
            assert!(matches!(
                generate_series_with(&config, 1, &mut rng),
                Err(AnalyticsError::InvalidArgument(_))
            ));
        }
    }
}
