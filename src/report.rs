//! Serializable record of a resolution, for diagnostics and audits.
//!
//! A [`Resolution`](crate::Resolution) carries its answer in its type
//! parameters. [`ResolutionReport`] flattens that answer into names and the
//! chosen classification so a dispatch layer can log or persist it.

use crate::classification::{Classification, Origin};
use crate::config::BuildConfig;
use crate::error::{ResolveError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub callable: String,
    pub functor: String,
    pub result: String,
    pub outcome: Classification,
    pub origin: Origin,
    /// Structural matches only.
    pub arity: Option<usize>,
    pub config: BuildConfig,
}

impl ResolutionReport {
    pub fn new(
        callable: impl Into<String>,
        functor: impl Into<String>,
        result: impl Into<String>,
        outcome: Classification,
        arity: Option<usize>,
    ) -> Self {
        Self {
            callable: callable.into(),
            functor: functor.into(),
            result: result.into(),
            outcome,
            origin: outcome.origin(),
            arity,
            config: BuildConfig::current(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.outcome.is_known()
    }

    pub fn expect_outcome(&self, expected: Classification) -> Result<()> {
        if self.outcome == expected {
            return Ok(());
        }
        Err(ResolveError::OutcomeMismatch {
            callable: self.callable.clone(),
            expected,
            actual: self.outcome,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Emits the report as one structured `debug` event.
    pub fn log(&self) {
        debug!(
            callable = %self.callable,
            functor = %self.functor,
            result = %self.result,
            outcome = %self.outcome,
            raw_pointer = self.origin.is_raw_pointer(),
            declared = self.outcome.is_declared(),
            arity = ?self.arity,
            "callable resolved"
        );
    }
}
