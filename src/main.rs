use anyhow::Result;
use smartenergy_analytics::{config, report, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;

    if cfg.analysis.random_seed.is_none() {
        warn!("no random_seed configured - consumption data will differ between runs");
    }

    let report = report::run_analysis(&cfg.analysis, &cfg.reference)?;

    info!(
        tier = %report.classification.tier,
        payback_years = ?report.feasibility.payback_years,
        "writing report"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
