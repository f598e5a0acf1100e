//! SA configuration and cooling schedules.

use crate::error::{Error, Result};
use crate::ops::Operator;

/// Cooling schedule mapping a step index to a temperature.
///
/// Both schedules are monotone non-increasing from `t_max` at step 0 to
/// `t_min` at the final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Exponential interpolation: `T(k) = t_max * (t_min/t_max)^(k/(steps-1))`.
    ///
    /// Spends proportionally more steps at low temperatures; the usual
    /// annealer default.
    Exponential,
    /// Linear interpolation between `t_max` and `t_min`.
    Linear,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Exponential
    }
}

impl CoolingSchedule {
    /// Temperature at `step` out of `steps` total (`step < steps`).
    pub fn temperature(&self, t_max: f64, t_min: f64, step: usize, steps: usize) -> f64 {
        let fraction = if steps <= 1 {
            0.0
        } else {
            step as f64 / (steps - 1) as f64
        };
        match self {
            CoolingSchedule::Exponential => t_max * (t_min / t_max).powf(fraction),
            CoolingSchedule::Linear => t_max - (t_max - t_min) * fraction,
        }
    }
}

/// Configuration for simulated annealing.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::SaConfig;
/// use tsp_metaheur::ops::Operator;
///
/// let config = SaConfig::default()
///     .with_temperatures(20.0, 0.5)
///     .with_steps(50_000)
///     .with_operator(Operator::Reverse);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature.
    pub t_max: f64,
    /// Final temperature; must stay below `t_max`.
    pub t_min: f64,
    /// Number of annealing steps (one neighbor evaluated per step).
    pub steps: usize,
    /// Move operator.
    pub operator: Operator,
    /// Cooling schedule.
    pub cooling: CoolingSchedule,
    /// Random seed (None for a fresh seed per run).
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            t_max: 10.0,
            t_min: 0.1,
            steps: 10_000,
            operator: Operator::Swap,
            cooling: CoolingSchedule::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the temperature ceiling and floor.
    pub fn with_temperatures(mut self, t_max: f64, t_min: f64) -> Self {
        self.t_max = t_max;
        self.t_min = t_min;
        self
    }

    /// Sets the number of annealing steps.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the move operator.
    pub fn with_operator(mut self, op: Operator) -> Self {
        self.operator = op;
        self
    }

    /// Sets the cooling schedule.
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.t_max.is_finite() || self.t_max <= 0.0 {
            return Err(Error::Configuration(format!(
                "t_max must be positive and finite, got {}",
                self.t_max
            )));
        }
        if !self.t_min.is_finite() || self.t_min <= 0.0 {
            return Err(Error::Configuration(format!(
                "t_min must be positive and finite, got {}",
                self.t_min
            )));
        }
        if self.t_min >= self.t_max {
            return Err(Error::Configuration(format!(
                "t_min ({}) must be less than t_max ({})",
                self.t_min, self.t_max
            )));
        }
        if self.steps == 0 {
            return Err(Error::Configuration("steps must be at least 1".into()));
        }
        Ok(())
    }
}
