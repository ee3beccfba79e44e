use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;

use crate::report::AnalysisRequest;
use crate::solar::ReferenceData;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisRequest,
    #[serde(default)]
    pub reference: ReferenceData,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file("config/default.toml"))
                .merge(env_overrides()),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let mut cfg: Self = figment.extract()?;
        cfg.reference = cfg.reference.with_uppercase_codes();
        cfg.reference.validate()?;
        Ok(cfg)
    }
}

/// `SEA__SECTION__KEY=value` environment overrides
fn env_overrides() -> Env {
    Env::prefixed("SEA__").split("__")
}
