//! # Solar Feasibility Module
//!
//! - **Reference**: irradiation table and economic constants
//! - **Feasibility**: capacity, generation, payback, ROI and CO2 of one roof
//! - **Scenarios**: fixed area presets and viability classification

pub mod feasibility;
pub mod reference;
pub mod scenarios;

pub use feasibility::{
    FeasibilityCalculator, DAYS_PER_MONTH, LIFESPAN_YEARS, PANEL_KWP_PER_M2, PERFORMANCE_RATIO,
};
pub use reference::{ReferenceData, DEFAULT_IRRADIATION};
pub use scenarios::classify;
