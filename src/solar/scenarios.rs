use strum::IntoEnumIterator;
use tracing::debug;

use super::feasibility::FeasibilityCalculator;
use crate::domain::{FeasibilityResult, ScenarioSet, ScenarioSize, ViabilityClassification, ViabilityTier};
use crate::error::Result;

impl FeasibilityCalculator<'_> {
    /// Evaluate every area preset against the same consumption and state.
    pub fn compare_scenarios(&self, monthly_consumption: f64, state: &str) -> Result<ScenarioSet> {
        let scenarios = ScenarioSize::iter()
            .map(|size| {
                self.evaluate(monthly_consumption, state, size.area_m2(), None)
                    .map(|result| (size, result))
            })
            .collect::<Result<ScenarioSet>>()?;

        debug!(state, scenarios = scenarios.len(), "compared installation scenarios");
        Ok(scenarios)
    }
}

/// Bucket a feasibility result into a viability tier.
///
/// First matching rule wins; a result that never pays back is worse than
/// any finite payback.
pub fn classify(result: &FeasibilityResult) -> ViabilityClassification {
    let payback = result.payback_or_infinity();
    let self_sufficiency = result.self_sufficiency_pct;

    let tier = if payback <= 4.0 && self_sufficiency >= 50.0 {
        ViabilityTier::HighlyViable
    } else if payback <= 6.0 && self_sufficiency >= 30.0 {
        ViabilityTier::Viable
    } else if payback <= 8.0 {
        ViabilityTier::ModeratelyViable
    } else {
        ViabilityTier::LowViability
    };

    ViabilityClassification {
        tier,
        recommendation_text: tier.recommendation().to_string(),
        color_tag: tier.color(),
        payback_years: result.payback_years,
        self_sufficiency_pct: self_sufficiency,
    }
}
