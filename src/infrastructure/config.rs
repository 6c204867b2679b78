//! # Optimizer Settings
//!
//! Layered configuration for a sale run.
//!
//! Settings resolve in increasing precedence: built-in defaults, an
//! optional TOML file, then `LOTOPT_*` environment variables. Command-line
//! flags are applied on top by the binary through the `with_*` builders.
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::domain::value_objects::Amount;
//! use lot_optimizer::infrastructure::config::OptimizerSettings;
//!
//! let settings = OptimizerSettings::default()
//!     .with_input("lots.json")
//!     .with_gain_ceiling(Amount::from_whole(10_000))
//!     .with_allow_loss(true);
//!
//! assert_eq!(settings.min_age_months(), 12);
//! assert!(settings.allow_loss());
//! ```

use crate::application::error::InfrastructureError;
use crate::application::services::lot_filter::{DEFAULT_MIN_AGE_MONTHS, LotFilter};
use crate::domain::value_objects::Amount;
use chrono::NaiveDate;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "LOTOPT";

/// Default gain ceiling, in whole currency units.
const DEFAULT_GAIN_CEILING: i64 = 25_000;

/// Settings for one optimization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    /// Statement file to read.
    input: Option<PathBuf>,
    /// Upper bound on total realized gain.
    gain_ceiling: Amount,
    /// Minimum holding age in months.
    min_age_months: u32,
    /// Only lots issued under this plan, when set.
    plan: Option<String>,
    /// Whether loss lots may be sold.
    allow_loss: bool,
    /// Print the available lots before solving.
    summary: bool,
    /// Export the filtered statement as JSON to this path.
    write: Option<PathBuf>,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            input: None,
            gain_ceiling: Amount::from_whole(DEFAULT_GAIN_CEILING),
            min_age_months: DEFAULT_MIN_AGE_MONTHS,
            plan: None,
            allow_loss: false,
            summary: false,
            write: None,
        }
    }
}

impl OptimizerSettings {
    /// Loads settings from an optional TOML file and the environment.
    ///
    /// A missing `path` is an error; pass `None` to use defaults and the
    /// environment only.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if a source cannot be
    /// read or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, InfrastructureError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        let settings: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| InfrastructureError::configuration(e.to_string()))?;
        settings.log_config();
        Ok(settings)
    }

    /// Sets the statement file.
    #[must_use]
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Sets the gain ceiling.
    #[must_use]
    pub fn with_gain_ceiling(mut self, ceiling: Amount) -> Self {
        self.gain_ceiling = ceiling;
        self
    }

    /// Sets the minimum holding age in months.
    #[must_use]
    pub fn with_min_age_months(mut self, months: u32) -> Self {
        self.min_age_months = months;
        self
    }

    /// Sets the plan restriction. An empty name matches every plan.
    #[must_use]
    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        let plan = plan.into();
        self.plan = (!plan.is_empty()).then_some(plan);
        self
    }

    /// Sets whether loss lots may be sold.
    #[must_use]
    pub fn with_allow_loss(mut self, allow: bool) -> Self {
        self.allow_loss = allow;
        self
    }

    /// Sets whether to print the available lots.
    #[must_use]
    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    /// Sets the JSON export path.
    #[must_use]
    pub fn with_write(mut self, path: impl Into<PathBuf>) -> Self {
        self.write = Some(path.into());
        self
    }

    /// Returns the statement file, if configured.
    #[must_use]
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Returns the gain ceiling.
    #[must_use]
    pub fn gain_ceiling(&self) -> Amount {
        self.gain_ceiling
    }

    /// Returns the minimum holding age in months.
    #[must_use]
    pub fn min_age_months(&self) -> u32 {
        self.min_age_months
    }

    /// Returns the plan restriction, if any.
    #[must_use]
    pub fn plan(&self) -> Option<&str> {
        self.plan.as_deref().filter(|plan| !plan.is_empty())
    }

    /// Returns whether loss lots may be sold.
    #[must_use]
    pub fn allow_loss(&self) -> bool {
        self.allow_loss
    }

    /// Returns whether to print the available lots.
    #[must_use]
    pub fn summary(&self) -> bool {
        self.summary
    }

    /// Returns the JSON export path, if any.
    #[must_use]
    pub fn write(&self) -> Option<&Path> {
        self.write.as_deref()
    }

    /// Builds the eligibility filter for a run on `as_of`.
    #[must_use]
    pub fn lot_filter(&self, as_of: NaiveDate) -> LotFilter {
        let filter = LotFilter::new(as_of)
            .with_min_age_months(self.min_age_months)
            .with_allow_loss(self.allow_loss);
        match self.plan() {
            Some(plan) => filter.with_plan(plan),
            None => filter,
        }
    }

    /// Logs the resolved settings.
    pub fn log_config(&self) {
        info!(
            input = ?self.input,
            gain_ceiling = %self.gain_ceiling,
            min_age_months = self.min_age_months,
            plan = ?self.plan,
            allow_loss = self.allow_loss,
            "optimizer settings resolved"
        );
    }
}
