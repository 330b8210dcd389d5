//! Runqueue construction settings
//!
//! Picks an implementation and, for the array variant, its sizing policy.

use thiserror::Error;

use crate::array::{
    GrowthPolicy, OrderedArrayRunqueue, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY,
    DEFAULT_LOAD_FACTOR, MAX_GROWTH_FACTOR,
};
use crate::queue::{Runqueue, RunqueueKind};

/// Errors raised while interpreting runqueue settings.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Implementation name did not match any known kind.
    #[error("unknown runqueue implementation '{0}' (expected tree, array or list)")]
    UnknownKind(String),

    /// Array capacity must hold at least one slot.
    #[error("initial capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// Growth must strictly enlarge the array, by a bounded amount.
    #[error("growth factor must be in (1, 16], got {0}")]
    InvalidGrowthFactor(f64),

    /// Load factor is a fraction of capacity.
    #[error("load factor must be in (0, 1], got {0}")]
    InvalidLoadFactor(f64),
}

/// Settings for building a runqueue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunqueueConfig {
    /// Which implementation to build.
    pub kind: RunqueueKind,

    /// Slots allocated up front (array only).
    pub initial_capacity: usize,

    /// Capacity multiplier on growth (array only).
    pub growth_factor: f64,

    /// Fill fraction that triggers growth (array only).
    pub load_factor: f64,
}

impl Default for RunqueueConfig {
    fn default() -> Self {
        Self::new(RunqueueKind::default())
    }
}

impl RunqueueConfig {
    /// Default settings for `kind`.
    pub fn new(kind: RunqueueKind) -> Self {
        Self {
            kind,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Set the array's initial capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the array's growth factor.
    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Set the array's load factor.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.initial_capacity));
        }
        if !(self.growth_factor > 1.0 && self.growth_factor <= MAX_GROWTH_FACTOR) {
            return Err(ConfigError::InvalidGrowthFactor(self.growth_factor));
        }
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }

    /// Array sizing derived from these settings.
    pub fn growth_policy(&self) -> GrowthPolicy {
        GrowthPolicy {
            initial_capacity: self.initial_capacity,
            growth_factor: self.growth_factor,
            load_factor: self.load_factor,
        }
    }

    /// Validate and build an empty runqueue.
    pub fn build(&self) -> Result<Box<dyn Runqueue>, ConfigError> {
        self.validate()?;
        Ok(match self.kind {
            RunqueueKind::Array => Box::new(OrderedArrayRunqueue::with_policy(self.growth_policy())),
            kind => kind.build(),
        })
    }
}
