use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter};

use super::types::round2;

/// Trees needed to absorb one ton of CO2 per year
pub const TREES_PER_TON_CO2: f64 = 7.0;

/// Outcome of one feasibility evaluation. Figures are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    pub state: String,
    pub available_area_m2: f64,
    /// Average daily irradiation for the state (kWh/m²/day)
    pub irradiation: f64,
    pub installed_power_kwp: f64,
    pub monthly_generation_kwh: f64,
    /// Share of consumption covered by generation, capped at 100
    pub self_sufficiency_pct: f64,
    pub total_investment: f64,
    pub monthly_savings: f64,
    /// `None` when the installation never pays back (zero savings)
    pub payback_years: Option<f64>,
    pub co2_reduction_ton_year: f64,
    pub roi_25y_pct: f64,
    pub lifespan_years: u32,
}

impl FeasibilityResult {
    pub fn annual_savings(&self) -> f64 {
        round2(self.monthly_savings * 12.0)
    }

    pub fn annual_generation_kwh(&self) -> f64 {
        round2(self.monthly_generation_kwh * 12.0)
    }

    /// Number of trees with an equivalent yearly CO2 uptake
    pub fn tree_equivalent(&self) -> u64 {
        (self.co2_reduction_ton_year * TREES_PER_TON_CO2).round() as u64
    }

    /// Payback as a plain float, infinite when it never pays back
    pub fn payback_or_infinity(&self) -> f64 {
        self.payback_years.unwrap_or(f64::INFINITY)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ViabilityTier {
    HighlyViable,
    Viable,
    ModeratelyViable,
    LowViability,
}

impl ViabilityTier {
    pub fn recommendation(&self) -> &'static str {
        match self {
            ViabilityTier::HighlyViable => "Recommended investment - fast return and high impact",
            ViabilityTier::Viable => "Attractive investment - good financial return",
            ViabilityTier::ModeratelyViable => "Weigh benefits beyond the financial return",
            ViabilityTier::LowViability => "Consider other energy-efficiency alternatives",
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            ViabilityTier::HighlyViable => ColorTag::Green,
            ViabilityTier::Viable => ColorTag::Blue,
            ViabilityTier::ModeratelyViable => ColorTag::Orange,
            ViabilityTier::LowViability => ColorTag::Red,
        }
    }
}

/// Display hint consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorTag {
    Green,
    Blue,
    Orange,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViabilityClassification {
    pub tier: ViabilityTier,
    pub recommendation_text: String,
    pub color_tag: ColorTag,
    pub payback_years: Option<f64>,
    pub self_sufficiency_pct: f64,
}

/// Fixed roof-area presets compared side by side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScenarioSize {
    Small,
    Medium,
    Large,
    Maximum,
}

impl ScenarioSize {
    pub fn area_m2(&self) -> f64 {
        match self {
            ScenarioSize::Small => 25.0,
            ScenarioSize::Medium => 50.0,
            ScenarioSize::Large => 100.0,
            ScenarioSize::Maximum => 200.0,
        }
    }
}

/// Feasibility results keyed by scenario, all sharing one consumption and state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioSet(BTreeMap<ScenarioSize, FeasibilityResult>);

impl ScenarioSet {
    pub fn get(&self, size: ScenarioSize) -> Option<&FeasibilityResult> {
        self.0.get(&size)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScenarioSize, &FeasibilityResult)> {
        self.0.iter().map(|(size, result)| (*size, result))
    }

    /// Scenario with the highest 25-year ROI; the smaller preset wins ties.
    pub fn best_by_roi(&self) -> Option<(ScenarioSize, &FeasibilityResult)> {
        self.iter().fold(None, |best, candidate| match best {
            Some((_, current)) if candidate.1.roi_25y_pct <= current.roi_25y_pct => best,
            _ => Some(candidate),
        })
    }
}

impl FromIterator<(ScenarioSize, FeasibilityResult)> for ScenarioSet {
    fn from_iter<I: IntoIterator<Item = (ScenarioSize, FeasibilityResult)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(area: f64, roi: f64) -> FeasibilityResult {
        FeasibilityResult {
            state: "SP".to_string(),
            available_area_m2: area,
            irradiation: 4.5,
            installed_power_kwp: area * 0.15,
            monthly_generation_kwh: 759.38,
            self_sufficiency_pct: 15.19,
            total_investment: 33750.0,
            monthly_savings: 607.5,
            payback_years: Some(4.63),
            co2_reduction_ton_year: 4.56,
            roi_25y_pct: roi,
            lifespan_years: 25,
        }
    }

    #[test]
    fn test_derived_figures() {
        let r = result(50.0, 440.0);
        assert_eq!(r.annual_savings(), 7290.0);
        assert_eq!(r.annual_generation_kwh(), 9112.56);
        assert_eq!(r.tree_equivalent(), 32);
    }

    #[test]
    fn test_payback_or_infinity() {
        let mut r = result(50.0, 440.0);
        assert_eq!(r.payback_or_infinity(), 4.63);
        r.payback_years = None;
        assert!(r.payback_or_infinity().is_infinite());
    }

    #[test]
    fn test_tier_fixed_texts_and_colors() {
        assert_eq!(ViabilityTier::HighlyViable.color(), ColorTag::Green);
        assert_eq!(ViabilityTier::Viable.color(), ColorTag::Blue);
        assert_eq!(ViabilityTier::ModeratelyViable.color(), ColorTag::Orange);
        assert_eq!(ViabilityTier::LowViability.color(), ColorTag::Red);
        assert_eq!(ViabilityTier::LowViability.to_string(), "LOW_VIABILITY");
        assert_eq!(ColorTag::Orange.to_string(), "orange");
        assert!(!ViabilityTier::Viable.recommendation().is_empty());
    }

    #[test]
    fn test_scenario_areas_and_names() {
        assert_eq!(ScenarioSize::Small.area_m2(), 25.0);
        assert_eq!(ScenarioSize::Medium.area_m2(), 50.0);
        assert_eq!(ScenarioSize::Large.area_m2(), 100.0);
        assert_eq!(ScenarioSize::Maximum.area_m2(), 200.0);
        assert_eq!(ScenarioSize::Maximum.to_string(), "maximum");
    }

    #[test]
    fn test_best_by_roi_prefers_smaller_on_tie() {
        let set: ScenarioSet = vec![
            (ScenarioSize::Small, result(25.0, 100.0)),
            (ScenarioSize::Medium, result(50.0, 120.0)),
            (ScenarioSize::Large, result(100.0, 120.0)),
        ]
        .into_iter()
        .collect();

        let (size, best) = set.best_by_roi().unwrap();
        assert_eq!(size, ScenarioSize::Medium);
        assert_eq!(best.roi_25y_pct, 120.0);
        assert!(ScenarioSet::default().best_by_roi().is_none());
    }

    #[test]
    fn test_scenario_set_serializes_keyed_by_name() {
        let set: ScenarioSet = vec![(ScenarioSize::Large, result(100.0, 1.0))]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["large"]["available_area_m2"], 100.0);
    }
}
