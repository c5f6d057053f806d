use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::QualityModel;
use crate::{error::QualityError, Result};

/// Draws synthetic quality arrays from a [`QualityModel`]
///
/// Each position is sampled independently from a normal distribution parameterized by that
/// position's mean and standard deviation, then truncated toward zero.
#[derive(Debug, Clone)]
pub struct QualitySampler {
    distributions: Vec<Normal<f64>>,
}
impl QualitySampler {
    /// Builds one normal distribution per model position
    ///
    /// Returns an error if a mean is not finite or a standard deviation is negative or not finite.
    pub fn new(model: &QualityModel) -> Result<Self> {
        let distributions = model
            .iter()
            .enumerate()
            .map(|(position, (mean, sd))| -> Result<Normal<f64>> {
                let invalid = || QualityError::InvalidDistribution { position, mean, sd };
                // Normal::new accepts a negative sd and mirrors the distribution
                if !(mean.is_finite() && sd.is_finite() && sd >= 0.0) {
                    return Err(invalid().into());
                }
                Normal::new(mean, sd).map_err(|_| invalid().into())
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { distributions })
    }

    #[must_use]
    pub fn read_length(&self) -> usize {
        self.distributions.len()
    }

    /// Draws the quality at a single read position
    ///
    /// Returns `None` if the position is past the end of the model.
    #[allow(clippy::cast_possible_truncation)]
    pub fn sample_at<R: Rng + ?Sized>(&self, position: usize, rng: &mut R) -> Option<i32> {
        self.distributions
            .get(position)
            .map(|normal| normal.sample(rng).trunc() as i32)
    }

    /// Draws one quality value per position
    #[allow(clippy::cast_possible_truncation)]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i32> {
        self.distributions
            .iter()
            .map(|normal| normal.sample(rng).trunc() as i32)
            .collect()
    }

    /// Returns a lazy iterator over `n` independent quality arrays
    pub fn sample_n<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R, n: usize) -> SampleIter<'a, R> {
        SampleIter {
            sampler: self,
            rng,
            remaining: n,
        }
    }
}

/// Iterator over quality arrays drawn by [`QualitySampler::sample_n`]
pub struct SampleIter<'a, R: Rng + ?Sized> {
    sampler: &'a QualitySampler,
    rng: &'a mut R,
    remaining: usize,
}
impl<R: Rng + ?Sized> Iterator for SampleIter<'_, R> {
    type Item = Vec<i32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.sampler.sample(&mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<R: Rng + ?Sized> ExactSizeIterator for SampleIter<'_, R> {}

/// Draws one quality value per position of `model`
pub fn sample_qualities<R: Rng + ?Sized>(model: &QualityModel, rng: &mut R) -> Result<Vec<i32>> {
    Ok(QualitySampler::new(model)?.sample(rng))
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::{create_rng, Error};

    #[test]
    fn test_zero_sd_is_deterministic() -> anyhow::Result<()> {
        let model = QualityModel::from(vec![(30.0, 0.0), (35.7, 0.0), (2.2, 0.0)]);
        let mut rng = create_rng(Some(42));
        assert_eq!(sample_qualities(&model, &mut rng)?, vec![30, 35, 2]);
        Ok(())
    }

    #[test]
    fn test_sample_length_matches_model() -> anyhow::Result<()> {
        let model: QualityModel = (0..150).map(|_| (35.0, 3.0)).collect();
        let sampler = QualitySampler::new(&model)?;
        let mut rng = create_rng(Some(42));
        assert_eq!(sampler.sample(&mut rng).len(), 150);
        assert!(sampler.sample_at(149, &mut rng).is_some());
        assert!(sampler.sample_at(150, &mut rng).is_none());
        Ok(())
    }

    #[test]
    fn test_sample_n() -> anyhow::Result<()> {
        let model = QualityModel::from(vec![(30.0, 2.0); 10]);
        let sampler = QualitySampler::new(&model)?;
        let mut rng = create_rng(Some(42));

        let iter = sampler.sample_n(&mut rng, 5);
        assert_eq!(iter.len(), 5);
        let draws: Vec<_> = iter.collect();
        assert_eq!(draws.len(), 5);
        assert!(draws.iter().all(|q| q.len() == 10));

        assert_eq!(sampler.sample_n(&mut rng, 0).count(), 0);
        Ok(())
    }

    #[test]
    fn test_sample_mean_close_to_model() -> anyhow::Result<()> {
        let model = QualityModel::from(vec![(30.0, 2.0)]);
        let sampler = QualitySampler::new(&model)?;
        let mut rng = create_rng(Some(7));

        let n = 10_000;
        let total: i64 = sampler
            .sample_n(&mut rng, n)
            .map(|q| i64::from(q[0]))
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = total as f64 / n as f64;
        // truncation biases the mean down by about half a unit
        assert!((mean - 29.5).abs() < 0.2, "mean was {mean}");
        Ok(())
    }

    #[test]
    fn test_reproducible() -> anyhow::Result<()> {
        let model = QualityModel::from(vec![(30.0, 5.0); 20]);
        let a = sample_qualities(&model, &mut create_rng(Some(11)))?;
        let b = sample_qualities(&model, &mut create_rng(Some(11)))?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_negative_sd_rejected() {
        let model = QualityModel::from(vec![(30.0, 1.0), (30.0, -1.0)]);
        assert!(matches!(
            QualitySampler::new(&model),
            Err(Error::QualityError(QualityError::InvalidDistribution {
                position: 1,
                ..
            }))
        ));
        assert!(sample_qualities(&model, &mut create_rng(Some(42))).is_err());
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        for (mean, sd) in [(30.0, f64::NAN), (30.0, f64::INFINITY), (f64::NAN, 1.0)] {
            let model = QualityModel::from(vec![(mean, sd)]);
            assert!(matches!(
                QualitySampler::new(&model),
                Err(Error::QualityError(QualityError::InvalidDistribution {
                    position: 0,
                    ..
                }))
            ));
        }
    }
}
