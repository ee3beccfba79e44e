use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{AnalyticsError, Result};

/// Average daily irradiation per Brazilian state (kWh/m²/day)
pub const DEFAULT_IRRADIATION: [(&str, f64); 12] = [
    ("SP", 4.5),
    ("RJ", 4.8),
    ("MG", 5.2),
    ("RS", 4.2),
    ("PR", 4.6),
    ("SC", 4.3),
    ("BA", 5.5),
    ("CE", 5.8),
    ("PE", 5.6),
    ("GO", 5.3),
    ("DF", 5.4),
    ("ES", 4.9),
];

/// Read-only reference data for feasibility calculations.
///
/// Loaded once and borrowed by the calculator; build a new value to run
/// with different tariffs or tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    /// State code → average irradiation (kWh/m²/day)
    pub irradiation: BTreeMap<String, f64>,
    /// Installed cost per kWp (R$)
    pub cost_per_kwp: f64,
    /// Grid energy tariff (R$/kWh)
    pub energy_tariff: f64,
    /// Grid emission factor (kg CO2/kWh)
    pub co2_emission_factor: f64,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            irradiation: DEFAULT_IRRADIATION
                .iter()
                .map(|(code, value)| (code.to_string(), *value))
                .collect(),
            cost_per_kwp: 4500.0,
            energy_tariff: 0.80,
            co2_emission_factor: 0.5,
        }
    }
}

impl ReferenceData {
    /// Irradiation for a state code; codes are matched case-insensitively.
    pub fn irradiation_for(&self, state: &str) -> Result<f64> {
        self.irradiation
            .get(&state.trim().to_ascii_uppercase())
            .copied()
            .ok_or_else(|| AnalyticsError::UnknownRegion {
                state: state.to_string(),
                available: self.states(),
            })
    }

    /// Fold state codes to uppercase.
    ///
    /// Environment overrides arrive with lowercased keys, so on a collision a
    /// key that was not already uppercase replaces the uppercase one.
    pub fn with_uppercase_codes(mut self) -> Self {
        let mut irradiation = BTreeMap::new();
        for (code, value) in std::mem::take(&mut self.irradiation) {
            let canonical = code.trim().to_ascii_uppercase();
            if canonical == code {
                irradiation.entry(canonical).or_insert(value);
            } else {
                irradiation.insert(canonical, value);
            }
        }
        self.irradiation = irradiation;
        self
    }

    pub fn states(&self) -> Vec<String> {
        self.irradiation.keys().cloned().collect()
    }

    /// Validate reference data for sanity
    pub fn validate(&self) -> Result<()> {
        if self.irradiation.is_empty() {
            return Err(AnalyticsError::InvalidArgument(
                "irradiation table cannot be empty".to_string(),
            ));
        }

        for (state, value) in &self.irradiation {
            if state.is_empty() || *state != state.trim().to_ascii_uppercase() {
                return Err(AnalyticsError::InvalidArgument(format!(
                    "state code '{state}' must be non-empty uppercase"
                )));
            }
            if !value.is_finite() || *value < 0.0 {
                return Err(AnalyticsError::InvalidArgument(format!(
                    "irradiation for {state} must be a finite value >= 0"
                )));
            }
        }

        if !self.cost_per_kwp.is_finite() || self.cost_per_kwp <= 0.0 {
            return Err(AnalyticsError::InvalidArgument(
                "cost_per_kwp must be positive".to_string(),
            ));
        }

        if !self.energy_tariff.is_finite() || self.energy_tariff < 0.0 {
            return Err(AnalyticsError::InvalidArgument(
                "energy_tariff cannot be negative".to_string(),
            ));
        }

        if !self.co2_emission_factor.is_finite() || self.co2_emission_factor < 0.0 {
            return Err(AnalyticsError::InvalidArgument(
                "co2_emission_factor cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}
