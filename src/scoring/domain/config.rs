//! Scoring configuration and weight validation.
#![expect(
    clippy::float_arithmetic,
    reason = "scoring weights are fractional coefficients"
)]

use super::ScoringError;
use serde::{Deserialize, Serialize};

/// Allowed deviation of the weight sum from `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Weights applied to the four sub-scores in the composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the output score.
    pub output: f64,
    /// Weight of the quality score.
    pub quality: f64,
    /// Weight of the reliability score.
    pub reliability: f64,
    /// Weight of the consistency score.
    pub consistency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            output: 0.35,
            quality: 0.25,
            reliability: 0.25,
            consistency: 0.15,
        }
    }
}

impl ScoreWeights {
    /// Creates a weight set.
    #[must_use]
    pub const fn new(output: f64, quality: f64, reliability: f64, consistency: f64) -> Self {
        Self {
            output,
            quality,
            reliability,
            consistency,
        }
    }

    /// Returns the sum of all four weights.
    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.output + self.quality + self.reliability + self.consistency
    }

    /// Checks each weight lies in `[0, 1]` and the sum is within
    /// [`WEIGHT_SUM_TOLERANCE`] of one.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::CoefficientOutOfRange`] or
    /// [`ScoringError::WeightsDoNotSumToOne`].
    pub fn validate(&self) -> Result<(), ScoringError> {
        check_unit("output weight", self.output)?;
        check_unit("quality weight", self.quality)?;
        check_unit("reliability weight", self.reliability)?;
        check_unit("consistency weight", self.consistency)?;
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::WeightsDoNotSumToOne { sum });
        }
        Ok(())
    }
}

/// What a completed task contributes towards the weekly output target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputBasis {
    /// Each completed task counts as one.
    #[default]
    CompletedTasks,
    /// Each completed task counts its size units (SMALL 0.5 to XLARGE 2).
    SizeUnits,
}

/// Tunables for the scoring engine.
///
/// Missing fields in a configuration document fall back to the defaults.
///
/// # Examples
///
/// ```
/// use taskboard::scoring::domain::ScoringConfig;
///
/// let config = ScoringConfig::from_json(r#"{ "weekly_output_target": 8 }"#)?;
/// assert_eq!(config.weekly_output_target, 8);
/// assert!((config.reopen_penalty - 0.25).abs() < f64::EPSILON);
/// # Ok::<(), taskboard::scoring::domain::ScoringError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Completions expected per five-workday week, counted per
    /// [`Self::output_basis`].
    pub weekly_output_target: u32,
    /// How completions are counted against the target.
    pub output_basis: OutputBasis,
    /// Composite weights.
    pub weights: ScoreWeights,
    /// Quality lost per reopen of a task.
    pub reopen_penalty: f64,
    /// Largest quality loss from overrunning the estimate.
    pub overrun_penalty_cap: f64,
    /// Reliability lost per deadline carry-forward.
    pub carry_forward_decay: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weekly_output_target: 10,
            output_basis: OutputBasis::default(),
            weights: ScoreWeights::default(),
            reopen_penalty: 0.25,
            overrun_penalty_cap: 0.5,
            carry_forward_decay: 0.2,
        }
    }
}

impl ScoringConfig {
    /// Preset for teams new to tracking: lower target, softer penalties.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            weekly_output_target: 6,
            reopen_penalty: 0.15,
            overrun_penalty_cap: 0.3,
            carry_forward_decay: 0.1,
            ..Self::default()
        }
    }

    /// Preset for mature teams: higher target, harsher penalties.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            weekly_output_target: 14,
            output_basis: OutputBasis::default(),
            weights: ScoreWeights::new(0.3, 0.3, 0.3, 0.1),
            reopen_penalty: 0.35,
            overrun_penalty_cap: 0.7,
            carry_forward_decay: 0.3,
        }
    }

    /// Replaces the weekly output target.
    #[must_use]
    pub const fn with_weekly_output_target(mut self, target: u32) -> Self {
        self.weekly_output_target = target;
        self
    }

    /// Replaces the output basis.
    #[must_use]
    pub const fn with_output_basis(mut self, basis: OutputBasis) -> Self {
        self.output_basis = basis;
        self
    }

    /// Replaces the composite weights.
    #[must_use]
    pub const fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidConfig`] when the document is not
    /// valid JSON for this shape, or any error from [`Self::validate`].
    pub fn from_json(document: &str) -> Result<Self, ScoringError> {
        let config: Self = serde_json::from_str(document)
            .map_err(|err| ScoringError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks weights and penalties.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::CoefficientOutOfRange`] for a penalty outside
    /// `[0, 1]`, or the error from [`ScoreWeights::validate`].
    pub fn validate(&self) -> Result<(), ScoringError> {
        self.weights.validate()?;
        check_unit("reopen_penalty", self.reopen_penalty)?;
        check_unit("overrun_penalty_cap", self.overrun_penalty_cap)?;
        check_unit("carry_forward_decay", self.carry_forward_decay)
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ScoringError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::CoefficientOutOfRange { name, value })
    }
}
