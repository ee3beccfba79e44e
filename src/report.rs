//! End-to-end analysis run: generate → analyze → recommend → evaluate →
//! classify → compare.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;
use validator::Validate;

use crate::analysis::{analyze, department_totals, hourly_profile, recommend};
use crate::domain::{
    ConsumptionInsights, ConsumptionSeries, Department, FeasibilityResult, HourlyAverage,
    Recommendation, ScenarioSet, ScenarioSize, ViabilityClassification,
};
use crate::error::Result;
use crate::simulation::{ConsumptionGenerator, ConsumptionGeneratorConfig};
use crate::solar::{classify, FeasibilityCalculator, ReferenceData};

/// Parameters supplied by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnalysisRequest {
    #[validate(range(min = 1, max = 30))]
    pub days: u32,
    #[validate(length(equal = 2))]
    pub state: String,
    #[validate(range(exclusive_min = 0.0))]
    pub area_m2: f64,
    /// Seed for the consumption generator (None = random)
    pub random_seed: Option<u64>,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            days: 7,
            state: "SP".to_string(),
            area_m2: 50.0,
            random_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestScenario {
    pub scenario: ScenarioSize,
    pub result: FeasibilityResult,
}

/// Everything the dashboard renders for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub request: AnalysisRequest,
    pub series: ConsumptionSeries,
    pub insights: ConsumptionInsights,
    pub recommendations: Vec<Recommendation>,
    pub hourly_profile: Vec<HourlyAverage>,
    pub department_totals: BTreeMap<Department, f64>,
    pub feasibility: FeasibilityResult,
    pub classification: ViabilityClassification,
    pub scenarios: ScenarioSet,
    pub best_scenario: Option<BestScenario>,
}

/// Run the full analysis for one request.
pub fn run_analysis(request: &AnalysisRequest, reference: &ReferenceData) -> Result<AnalysisReport> {
    request.validate()?;
    reference.validate()?;

    info!(
        days = request.days,
        state = %request.state,
        area_m2 = request.area_m2,
        seeded = request.random_seed.is_some(),
        "starting energy analysis"
    );

    let mut generator = ConsumptionGenerator::new(ConsumptionGeneratorConfig {
        random_seed: request.random_seed,
        ..Default::default()
    });
    let series = generator.generate(request.days)?;

    let insights = analyze(&series)?;
    let recommendations = recommend(&insights);
    let hourly_profile = hourly_profile(&series)?;
    let department_totals = department_totals(&series);

    let calculator = FeasibilityCalculator::new(reference);
    let feasibility = calculator.evaluate(
        insights.total_consumption,
        &request.state,
        request.area_m2,
        None,
    )?;
    let classification = classify(&feasibility);
    let scenarios = calculator.compare_scenarios(insights.total_consumption, &request.state)?;
    let best_scenario = scenarios.best_by_roi().map(|(scenario, result)| BestScenario {
        scenario,
        result: result.clone(),
    });

    info!(
        total_kwh = insights.total_consumption,
        recommendations = recommendations.len(),
        tier = %classification.tier,
        self_sufficiency_pct = feasibility.self_sufficiency_pct,
        "energy analysis complete"
    );

    Ok(AnalysisReport {
        request: request.clone(),
        series,
        insights,
        recommendations,
        hourly_profile,
        department_totals,
        feasibility,
        classification,
        scenarios,
        best_scenario,
    })
}
