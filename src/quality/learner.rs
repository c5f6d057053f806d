use log::debug;

use super::{QualityModel, RunningMoments};
use crate::{error::QualityError, Result};

/// Online learner for per-position quality distributions
///
/// Keeps one [`RunningMoments`] per read position. Read length is fixed by the first
/// observation: later observations that are shorter only update the positions they
/// cover, and values past the learned length are ignored.
#[derive(Debug, Clone)]
pub struct QualityLearner {
    moments: Vec<RunningMoments>,
    observations: u64,
}
impl QualityLearner {
    /// Primes the learner with the first observation
    pub fn new<T: Copy + Into<f64>>(initial_qualities: &[T]) -> Self {
        Self {
            moments: initial_qualities
                .iter()
                .map(|&q| RunningMoments::new(q.into()))
                .collect(),
            observations: 1,
        }
    }

    /// Updates the running moments of every position covered by `qualities`
    pub fn update<T: Copy + Into<f64>>(&mut self, qualities: &[T]) {
        // zip stops at the shorter of the two
        for (moments, &q) in self.moments.iter_mut().zip(qualities) {
            moments.update(q.into());
        }
        self.observations += 1;
    }

    /// Number of observations the learner has seen so far
    #[must_use]
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// Number of positions being learned
    #[must_use]
    pub fn read_length(&self) -> usize {
        self.moments.len()
    }

    /// Returns the quality model learned so far (sample standard deviations)
    pub fn model(&self) -> Result<QualityModel> {
        if self.observations < 2 {
            return Err(QualityError::InsufficientObservations(self.observations).into());
        }
        self.moments
            .iter()
            .map(|m| m.finalize(false))
            .collect::<Result<Vec<_>>>()
            .map(QualityModel::from)
    }

    /// Learns a model from a stream of quality arrays
    ///
    /// The first observation primes the learner and fixes the read length.
    pub fn from_observations<I, Q, T>(observations: I) -> Result<QualityModel>
    where
        I: IntoIterator<Item = Q>,
        Q: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        let mut observations = observations.into_iter();
        let Some(first) = observations.next() else {
            return Err(QualityError::EmptyInput.into());
        };
        let mut learner = Self::new(first.as_ref());
        for qualities in observations {
            learner.update(qualities.as_ref());
        }
        debug!(
            "Learned quality model over {} positions from {} observations",
            learner.read_length(),
            learner.observations()
        );
        learner.model()
    }
}

/// Learns a per-position quality model from a stream of quality arrays
///
/// See [`QualityLearner::from_observations`].
pub fn learn_quality_model<I, Q, T>(observations: I) -> Result<QualityModel>
where
    I: IntoIterator<Item = Q>,
    Q: AsRef<[T]>,
    T: Copy + Into<f64>,
{
    QualityLearner::from_observations(observations)
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::Error;

    #[test]
    fn test_learn_positions() -> anyhow::Result<()> {
        let observations: Vec<Vec<u8>> = vec![
            vec![1, 10, 30],
            vec![2, 10, 32],
            vec![3, 10, 34],
            vec![4, 10, 36],
            vec![5, 10, 38],
        ];
        let model = learn_quality_model(&observations)?;
        assert_eq!(model.read_length(), 3);

        let (mean, sd) = model.get(0).unwrap();
        assert!((mean - 3.0).abs() < 1e-12);
        assert!((sd - 2.5f64.sqrt()).abs() < 1e-12);

        assert_eq!(model.get(1), Some((10.0, 0.0)));

        let (mean, sd) = model.get(2).unwrap();
        assert!((mean - 34.0).abs() < 1e-12);
        assert!((sd - 10.0f64.sqrt()).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_short_observations_truncate() -> anyhow::Result<()> {
        let mut learner = QualityLearner::new(&[30i32, 30, 30]);
        learner.update(&[32i32]);
        learner.update(&[34i32, 20, 30]);
        assert_eq!(learner.observations(), 3);

        let model = learner.model()?;
        assert_eq!(model.read_length(), 3);
        assert_eq!(model.get(0).map(|(m, _)| m), Some(32.0));
        assert_eq!(model.get(1).map(|(m, _)| m), Some(25.0));
        Ok(())
    }

    #[test]
    fn test_untouched_position_fails_to_finalize() {
        // position 2 never sees a second value
        let observations = vec![vec![30u8, 30, 30], vec![31, 31]];
        assert!(matches!(
            learn_quality_model(observations),
            Err(Error::QualityError(QualityError::InsufficientObservations(1)))
        ));
    }

    #[test]
    fn test_longer_observations_ignored_past_length() -> anyhow::Result<()> {
        let observations = vec![vec![20u8, 20], vec![22, 22, 40, 40]];
        let model = learn_quality_model(observations)?;
        assert_eq!(model.read_length(), 2);
        Ok(())
    }

    #[test]
    fn test_empty_input() {
        let observations: Vec<Vec<u8>> = Vec::new();
        assert!(matches!(
            learn_quality_model(observations),
            Err(Error::QualityError(QualityError::EmptyInput))
        ));
    }

    #[test]
    fn test_single_observation() {
        let observations = vec![vec![30u8, 31, 32]];
        assert!(matches!(
            learn_quality_model(observations),
            Err(Error::QualityError(QualityError::InsufficientObservations(1)))
        ));
    }

    #[test]
    fn test_lazy_stream() -> anyhow::Result<()> {
        let stream = (0..100u8).map(|i| [i % 2 + 30, 40]);
        let model = learn_quality_model(stream)?;
        let (mean, sd) = model.get(0).unwrap();
        assert!((mean - 30.5).abs() < 1e-9);
        assert!(sd > 0.0);
        assert_eq!(model.get(1), Some((40.0, 0.0)));
        Ok(())
    }
}
