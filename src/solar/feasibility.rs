//! # Solar Feasibility
//!
//! Converts roof area and regional irradiation into installed capacity,
//! generation and the financial/environmental figures of one installation.
//!
//! ```text
//! kWp        = area × 0.15
//! generation = kWp × irradiation × 30 × 0.75
//! payback    = investment / (monthly_savings × 12)
//! ROI(25y)   = (monthly_savings × 12 × 25 − investment) / investment × 100
//! ```

use tracing::{debug, warn};

use super::reference::ReferenceData;
use crate::domain::{round2, FeasibilityResult};
use crate::error::{AnalyticsError, Result};

/// Panel output per square metre of roof (kWp/m²)
pub const PANEL_KWP_PER_M2: f64 = 0.15;
/// Derating for wiring, inverter and soiling losses
pub const PERFORMANCE_RATIO: f64 = 0.75;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const LIFESPAN_YEARS: u32 = 25;

/// Feasibility calculator bound to one set of reference data
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityCalculator<'a> {
    reference: &'a ReferenceData,
}

impl<'a> FeasibilityCalculator<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &'a ReferenceData {
        self.reference
    }

    /// Evaluate one installation.
    ///
    /// `cost_per_kwp` overrides the reference cost when given.
    pub fn evaluate(
        &self,
        monthly_consumption: f64,
        state: &str,
        available_area_m2: f64,
        cost_per_kwp: Option<f64>,
    ) -> Result<FeasibilityResult> {
        if !monthly_consumption.is_finite() || monthly_consumption <= 0.0 {
            return Err(AnalyticsError::InvalidArgument(format!(
                "monthly consumption must be greater than zero, got {monthly_consumption}"
            )));
        }
        let irradiation = self.reference.irradiation_for(state)?;
        if !available_area_m2.is_finite() || available_area_m2 <= 0.0 {
            return Err(AnalyticsError::InvalidArgument(format!(
                "available area must be greater than zero, got {available_area_m2}"
            )));
        }
        let cost_per_kwp = cost_per_kwp.unwrap_or(self.reference.cost_per_kwp);
        if !cost_per_kwp.is_finite() || cost_per_kwp <= 0.0 {
            return Err(AnalyticsError::InvalidArgument(format!(
                "cost per kWp must be greater than zero, got {cost_per_kwp}"
            )));
        }

        let installed_power_kwp = available_area_m2 * PANEL_KWP_PER_M2;
        let monthly_generation_kwh =
            installed_power_kwp * irradiation * DAYS_PER_MONTH * PERFORMANCE_RATIO;

        // Cap before rounding so 100 is reachable but never exceeded
        let self_sufficiency_pct = (monthly_generation_kwh / monthly_consumption * 100.0).min(100.0);

        let total_investment = installed_power_kwp * cost_per_kwp;
        let monthly_savings = monthly_generation_kwh * self.reference.energy_tariff;
        let annual_savings = monthly_savings * 12.0;

        let payback_years = if monthly_savings > 0.0 {
            Some(round2(total_investment / annual_savings))
        } else {
            warn!(state, available_area_m2, "installation produces no savings, payback undefined");
            None
        };

        let co2_reduction_ton_year =
            monthly_generation_kwh * 12.0 * self.reference.co2_emission_factor / 1000.0;
        let lifetime_savings = annual_savings * LIFESPAN_YEARS as f64;
        let roi_25y_pct = (lifetime_savings - total_investment) / total_investment * 100.0;

        let figures = [
            ("installed power", installed_power_kwp),
            ("monthly generation", monthly_generation_kwh),
            ("total investment", total_investment),
            ("lifetime savings", lifetime_savings),
            ("25-year ROI", roi_25y_pct),
        ];
        if let Some((name, value)) = figures.iter().find(|(_, value)| !value.is_finite()) {
            return Err(AnalyticsError::InvalidArgument(format!(
                "{name} overflows for area {available_area_m2} and cost {cost_per_kwp} per kWp, got {value}"
            )));
        }

        let result = FeasibilityResult {
            state: state.trim().to_uppercase(),
            available_area_m2,
            irradiation,
            installed_power_kwp: round2(installed_power_kwp),
            monthly_generation_kwh: round2(monthly_generation_kwh),
            self_sufficiency_pct: round2(self_sufficiency_pct),
            total_investment: round2(total_investment),
            monthly_savings: round2(monthly_savings),
            payback_years,
            co2_reduction_ton_year: round2(co2_reduction_ton_year),
            roi_25y_pct: round2(roi_25y_pct),
            lifespan_years: LIFESPAN_YEARS,
        };

        debug!(
            state = %result.state,
            area_m2 = available_area_m2,
            kwp = result.installed_power_kwp,
            generation_kwh = result.monthly_generation_kwh,
            "evaluated solar feasibility"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case_sao_paulo() {
        let reference = ReferenceData::default();
        let calc = FeasibilityCalculator::new(&reference);
        let r = calc.evaluate(5000.0, "SP", 50.0, None).unwrap();

        assert_eq!(r.installed_power_kwp, 7.5);
        assert_eq!(r.monthly_generation_kwh, 759.38);
        assert_eq!(r.total_investment, 33750.0);
        assert_eq!(r.self_sufficiency_pct, 15.19);
        assert_eq!(r.monthly_savings, 607.5);
        assert_eq!(r.payback_years, Some(4.63));
        assert_eq!(r.co2_reduction_ton_year, 4.56);
        assert_eq!(r.roi_25y_pct, 440.0);
        assert_eq!(r.lifespan_years, 25);
        assert_eq!(r.irradiation, 4.5);
        assert_eq!(r.available_area_m2, 50.0);
        assert_eq!(r.state, "SP");
    }

    #[test]
    fn test_self_sufficiency_capped() {
        let reference = ReferenceData::default();
        let calc = FeasibilityCalculator::new(&reference);
        let r = calc.evaluate(100.0, "CE", 200.0, None).unwrap();
        assert_eq!(r.self_sufficiency_pct, 100.0);
    }

    #[test]
    fn test_cost_override() {
        let reference = ReferenceData::default();
        let calc = FeasibilityCalculator::new(&reference);
        let r = calc.evaluate(5000.0, "SP", 50.0, Some(3000.0)).unwrap();
        assert_eq!(r.total_investment, 22500.0);
        assert_eq!(r.payback_years, Some(3.09));
    }

    #[test]
    fn test_zero_tariff_never_pays_back() {
        let reference = ReferenceData {
            energy_tariff: 0.0,
            ..Default::default()
        };
        let calc = FeasibilityCalculator::new(&reference);
        let r = calc.evaluate(5000.0, "SP", 50.0, None).unwrap();
        assert_eq!(r.monthly_savings, 0.0);
        assert_eq!(r.payback_years, None);
        assert_eq!(r.roi_25y_pct, -100.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let reference = ReferenceData::default();
        let calc = FeasibilityCalculator::new(&reference);

        assert!(matches!(
            calc.evaluate(0.0, "SP", 50.0, None),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc.evaluate(-10.0, "SP", 50.0, None),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc.evaluate(5000.0, "SP", 0.0, None),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc.evaluate(5000.0, "SP", 50.0, Some(0.0)),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc.evaluate(5000.0, "XX", 50.0, None),
            Err(AnalyticsError::UnknownRegion { .. })
        ));
    }

    #[test]
    fn test_overflowing_inputs_rejected() {
        let reference = ReferenceData::default();
        let calc = FeasibilityCalculator::new(&reference);

        assert!(matches!(
            calc.evaluate(5000.0, "SP", 1e308, None),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc.evaluate(5000.0, "SP", 50.0, Some(1e308)),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc.evaluate(5000.0, "SP", 50.0, Some(1e-310)),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_tariff_override_per_calculator() {
        let cheap = ReferenceData::default();
        let pricey = ReferenceData {
            energy_tariff: 1.6,
            ..Default::default()
        };
        let a = FeasibilityCalculator::new(&cheap)
            .evaluate(5000.0, "MG", 50.0, None)
            .unwrap();
        let b = FeasibilityCalculator::new(&pricey)
            .evaluate(5000.0, "MG", 50.0, None)
            .unwrap();
        assert_eq!(a.monthly_generation_kwh, b.monthly_generation_kwh);
        assert!(b.monthly_savings > a.monthly_savings);
        assert!(b.payback_years.unwrap() < a.payback_years.unwrap());
    }
}
