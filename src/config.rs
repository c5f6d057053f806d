//! Simulation configuration
//!
//! Configuration values are immutable once built and are passed explicitly into each
//! simulation call.

use crate::{error::ConfigError, EventCounts, Policy, Result};

/// Default per-base insertion rate
pub const DEFAULT_INSERTION_RATE: f64 = 0.01;

/// Default per-base deletion rate
pub const DEFAULT_DELETION_RATE: f64 = 0.01;

/// Default per-base substitution rate
pub const DEFAULT_SUBSTITUTION_RATE: f64 = 0.05;

/// Per-base error rates for each kind of edit event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorRates {
    insertion: f64,
    deletion: f64,
    substitution: f64,
}
impl Default for ErrorRates {
    fn default() -> Self {
        Self {
            insertion: DEFAULT_INSERTION_RATE,
            deletion: DEFAULT_DELETION_RATE,
            substitution: DEFAULT_SUBSTITUTION_RATE,
        }
    }
}
impl ErrorRates {
    /// Creates a new set of error rates
    ///
    /// Each rate must be finite and within `[0, 1]`. Deletions and substitutions each
    /// consume a reference base, so their rates may not sum to more than 1.
    pub fn new(insertion: f64, deletion: f64, substitution: f64) -> Result<Self> {
        for (kind, rate) in [
            ("insertion", insertion),
            ("deletion", deletion),
            ("substitution", substitution),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::InvalidRate { kind, rate }.into());
            }
        }
        if deletion + substitution > 1.0 {
            return Err(ConfigError::ExcessiveConsumingRate {
                deletion,
                substitution,
            }
            .into());
        }
        Ok(Self {
            insertion,
            deletion,
            substitution,
        })
    }

    #[must_use]
    pub fn insertion(&self) -> f64 {
        self.insertion
    }

    #[must_use]
    pub fn deletion(&self) -> f64 {
        self.deletion
    }

    #[must_use]
    pub fn substitution(&self) -> f64 {
        self.substitution
    }

    /// Number of events of each kind expected over `length` bases
    ///
    /// Deletions and substitutions are capped so that together they never exceed `length`,
    /// which can otherwise happen when both counts round up.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn event_counts(&self, length: usize) -> EventCounts {
        let count = |rate: f64| (rate * length as f64).round() as usize;
        let deletions = count(self.deletion).min(length);
        let substitutions = count(self.substitution).min(length - deletions);
        EventCounts::new(count(self.insertion), deletions, substitutions)
    }
}

/// Settings for a [`ReadSimulator`](crate::ReadSimulator)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationConfig {
    /// Per-base rates used to derive event counts for each read
    pub error_rates: ErrorRates,

    /// Handling of invalid nucleotides in mutated sequences
    pub policy: Policy,

    /// Seed for the simulation RNG (`None` draws from OS entropy)
    pub seed: Option<u64>,
}

/// Builder for [`SimulationConfig`] instances
#[derive(Default)]
pub struct SimulationConfigBuilder {
    error_rates: Option<ErrorRates>,
    policy: Option<Policy>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the per-base error rates
    #[must_use]
    pub fn error_rates(mut self, error_rates: ErrorRates) -> Self {
        self.error_rates = Some(error_rates);
        self
    }

    /// Sets the policy for handling invalid nucleotides
    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Sets the RNG seed
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn build(self) -> SimulationConfig {
        SimulationConfig {
            error_rates: self.error_rates.unwrap_or_default(),
            policy: self.policy.unwrap_or_default(),
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_rates() {
        let rates = ErrorRates::default();
        assert_eq!(rates.insertion(), 0.01);
        assert_eq!(rates.deletion(), 0.01);
        assert_eq!(rates.substitution(), 0.05);
    }

    #[test]
    fn test_event_counts_rounding() -> anyhow::Result<()> {
        let rates = ErrorRates::default();
        assert_eq!(rates.event_counts(100), EventCounts::new(1, 1, 5));
        assert_eq!(rates.event_counts(10), EventCounts::new(0, 0, 1));

        let rates = ErrorRates::new(0.25, 0.0, 0.5)?;
        assert_eq!(rates.event_counts(6), EventCounts::new(2, 0, 3));
        Ok(())
    }

    #[test]
    fn test_invalid_rate() {
        assert!(matches!(
            ErrorRates::new(0.1, 1.5, 0.1),
            Err(Error::ConfigError(ConfigError::InvalidRate {
                kind: "deletion",
                ..
            }))
        ));
        assert!(ErrorRates::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(ErrorRates::new(0.0, 0.0, -0.1).is_err());
    }

    #[test]
    fn test_consuming_rates_capped() -> anyhow::Result<()> {
        // 0.5 * 9 rounds up to 5 for both kinds
        let rates = ErrorRates::new(0.0, 0.5, 0.5)?;
        assert_eq!(rates.event_counts(9), EventCounts::new(0, 5, 4));

        let rates = ErrorRates::new(0.3, 1.0, 0.0)?;
        assert_eq!(rates.event_counts(7), EventCounts::new(2, 7, 0));
        Ok(())
    }

    #[test]
    fn test_excessive_consuming_rate() {
        assert!(matches!(
            ErrorRates::new(0.0, 0.6, 0.6),
            Err(Error::ConfigError(ConfigError::ExcessiveConsumingRate { .. }))
        ));
        // insertions do not consume reference bases
        assert!(ErrorRates::new(1.0, 0.5, 0.5).is_ok());
    }

    #[test]
    fn test_builder() -> anyhow::Result<()> {
        let config = SimulationConfigBuilder::default()
            .error_rates(ErrorRates::new(0.0, 0.0, 0.1)?)
            .policy(Policy::DropInvalid)
            .seed(42)
            .build();
        assert_eq!(config.error_rates.substitution(), 0.1);
        assert_eq!(config.policy, Policy::DropInvalid);
        assert_eq!(config.seed, Some(42));

        let config = SimulationConfigBuilder::default().build();
        assert_eq!(config, SimulationConfig::default());
        Ok(())
    }
}
