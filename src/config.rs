use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::processors::window_splitter::YearWindows;
use crate::utils::constants::{
    DEFAULT_BASELINE_END, DEFAULT_BASELINE_START, DEFAULT_COMPARISON_YEAR, DEFAULT_LOCATION,
    ENV_PREFIX,
};

/// Settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PipelineConfig {
    #[validate(range(min = 1700, max = 2200))]
    pub baseline_start: i32,

    #[validate(range(min = 1700, max = 2200))]
    pub baseline_end: i32,

    #[validate(range(min = 1700, max = 2200))]
    pub comparison_year: i32,

    #[validate(length(min = 1))]
    pub location: String,
}

/// Values given explicitly on the command line; they win over every other layer
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub baseline_start: Option<i32>,
    pub baseline_end: Option<i32>,
    pub comparison_year: Option<i32>,
    pub location: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            baseline_start: DEFAULT_BASELINE_START,
            baseline_end: DEFAULT_BASELINE_END,
            comparison_year: DEFAULT_COMPARISON_YEAR,
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Layer defaults, an optional config file, `RECORD_TEMPS_*` environment
    /// variables and command-line overrides, in that order
    pub fn load(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("baseline_start", i64::from(DEFAULT_BASELINE_START))?
            .set_default("baseline_end", i64::from(DEFAULT_BASELINE_END))?
            .set_default("comparison_year", i64::from(DEFAULT_COMPARISON_YEAR))?
            .set_default("location", DEFAULT_LOCATION)?;

        if let Some(path) = config_file {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        builder = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .set_override_option("baseline_start", overrides.baseline_start.map(i64::from))?
            .set_override_option("baseline_end", overrides.baseline_end.map(i64::from))?
            .set_override_option("comparison_year", overrides.comparison_year.map(i64::from))?
            .set_override_option("location", overrides.location.clone())?;

        let config: PipelineConfig = builder.build()?.try_deserialize()?;
        config.check()?;

        debug!(?config, "Resolved pipeline configuration");
        Ok(config)
    }

    /// Field validation followed by the year-window rules
    pub fn check(&self) -> Result<()> {
        self.validate()?;
        self.windows()?;
        Ok(())
    }

    pub fn windows(&self) -> Result<YearWindows> {
        YearWindows::new(self.baseline_start, self.baseline_end, self.comparison_year)
    }

    pub fn chart_title(&self) -> String {
        format!(
            "Record-Breaking Temperatures in {} ({})",
            self.comparison_year, self.location
        )
    }
}
