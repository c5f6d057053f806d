use crate::{error::QualityError, Result};

/// Welford's running mean and variance for a single stream of observations
///
/// The accumulator is always seeded with a first observation, so `count` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningMoments {
    count: u64,
    mean: f64,
    /// Sum of squared deviations from the running mean
    m2: f64,
}
impl RunningMoments {
    /// Starts a new accumulator from the first observation
    #[must_use]
    pub fn new(seed: f64) -> Self {
        Self {
            count: 1,
            mean: seed,
            m2: 0.0,
        }
    }

    /// Folds one more observation into the running moments
    #[allow(clippy::cast_precision_loss)]
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample (or population) variance of the observations so far
    #[allow(clippy::cast_precision_loss)]
    pub fn variance(&self, population: bool) -> Result<f64> {
        if self.count < 2 {
            return Err(QualityError::InsufficientObservations(self.count).into());
        }
        let denominator = if population {
            self.count
        } else {
            self.count - 1
        };
        Ok(self.m2 / denominator as f64)
    }

    /// Returns the mean and the sample (or population) standard deviation
    pub fn finalize(&self, population: bool) -> Result<(f64, f64)> {
        Ok((self.mean, self.variance(population)?.sqrt()))
    }
}
