//! SmartEnergy Analytics: corporate consumption analysis and rooftop solar
//! feasibility.
//!
//! ```rust
//! use smartenergy_analytics::{analysis, simulation::ConsumptionGenerator, solar};
//!
//! let series = ConsumptionGenerator::seeded(7).generate(7).unwrap();
//! let insights = analysis::analyze(&series).unwrap();
//! let recommendations = analysis::recommend(&insights);
//! assert!(!recommendations.is_empty());
//!
//! let reference = solar::ReferenceData::default();
//! let calculator = solar::FeasibilityCalculator::new(&reference);
//! let result = calculator.evaluate(insights.total_consumption, "SP", 50.0, None).unwrap();
//! let tier = solar::classify(&result).tier;
//! # let _ = tier;
//! ```

pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod simulation;
pub mod solar;
pub mod telemetry;

pub use error::{AnalyticsError, Result};
pub use report::{run_analysis, AnalysisReport, AnalysisRequest};
