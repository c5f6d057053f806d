//! # quality
//!
//! Naive per-position model of base quality.
//!
//! - positions are assumed entirely independent
//! - there is no sense of genomic position
//! - quality is independent of bases or any other feature
//!
//! For each position the model holds the mean and sample standard deviation of the observed
//! quality scores. [`QualityLearner`] builds a model online from a stream of training
//! reads using Welford's algorithm and [`QualitySampler`] draws synthetic quality arrays
//! from it.
//!
//! ## Usage
//!
//! ```rust
//! use htsynth::{create_rng, learn_quality_model, QualitySampler};
//!
//! let training: Vec<Vec<u8>> = vec![
//!     vec![30, 32, 35, 20],
//!     vec![31, 34, 36, 22],
//!     vec![29, 33, 34, 18],
//! ];
//! let model = learn_quality_model(&training).unwrap();
//! assert_eq!(model.read_length(), 4);
//!
//! let sampler = QualitySampler::new(&model).unwrap();
//! let mut rng = create_rng(Some(42));
//! for qualities in sampler.sample_n(&mut rng, 10) {
//!     assert_eq!(qualities.len(), 4);
//! }
//! ```

mod learner;
mod moments;
mod sampler;

pub use learner::{learn_quality_model, QualityLearner};
pub use moments::RunningMoments;
pub use sampler::{sample_qualities, QualitySampler, SampleIter};

/// Per-position (mean, standard deviation) pairs, index-aligned to read position
///
/// Read length is implicit in the number of positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualityModel {
    distributions: Vec<(f64, f64)>,
}
impl QualityModel {
    /// Number of read positions described by the model
    #[must_use]
    pub fn read_length(&self) -> usize {
        self.distributions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }

    /// Mean and standard deviation at `position`
    #[must_use]
    pub fn get(&self, position: usize) -> Option<(f64, f64)> {
        self.distributions.get(position).copied()
    }

    /// Iterates the (mean, sd) pairs in read order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distributions.iter().copied()
    }

    pub fn means(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(|(mean, _)| mean)
    }

    pub fn sds(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(|(_, sd)| sd)
    }
}
impl From<Vec<(f64, f64)>> for QualityModel {
    fn from(distributions: Vec<(f64, f64)>) -> Self {
        Self { distributions }
    }
}
impl FromIterator<(f64, f64)> for QualityModel {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            distributions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_model_accessors() {
        let model = QualityModel::from(vec![(30.0, 1.0), (35.0, 2.0)]);
        assert_eq!(model.read_length(), 2);
        assert!(!model.is_empty());
        assert_eq!(model.get(1), Some((35.0, 2.0)));
        assert_eq!(model.get(2), None);
        assert_eq!(model.means().collect::<Vec<_>>(), vec![30.0, 35.0]);
        assert_eq!(model.sds().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }
}
