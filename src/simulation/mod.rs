//! # Consumption Simulation Module
//!
//! Synthetic metering data for corporate buildings, standing in for a real
//! metering integration.
//!
//! ## Usage
//!
//! ```rust
//! use smartenergy_analytics::simulation::ConsumptionGenerator;
//!
//! let mut generator = ConsumptionGenerator::seeded(42);
//! let series = generator.generate(7).unwrap();
//! assert_eq!(series.len(), 7 * 24);
//! ```

pub mod consumption;

pub use consumption::{
    day_factor, generate_series, generate_series_with, hour_factor, ConsumptionGenerator,
    ConsumptionGeneratorConfig, MAX_DAYS,
};
