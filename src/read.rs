//! Synthetic read assembly
//!
//! Composes the mutation path (variant generation and reconstruction) with the quality path
//! (sampling from a learned [`QualityModel`]) into complete reads. Formatting reads as
//! FASTQ or SAM records is left to the caller.

use log::{debug, trace};
use rand::{rngs::SmallRng, Rng};

use crate::{create_rng, QualityModel, QualitySampler, Result, Sequence, SimulationConfig};

/// Largest Phred quality representable in a SAM/FASTQ quality string
pub const MAX_PHRED: u8 = 93;

/// A simulated read with its qualities and reference origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticRead {
    /// Nucleotide sequence with simulated errors
    pub sequence: String,
    /// Phred quality scores (not offset-encoded), one per base
    pub qualities: Vec<u8>,
    /// Chromosome of origin for reads drawn from a reference segment
    pub chrom: Option<String>,
    /// 0-based reference start for reads drawn from a reference segment
    pub reference_start: Option<u64>,
}
impl SyntheticRead {
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Generates synthetic reads from a sequence
#[derive(Debug, Clone)]
pub struct ReadSimulator {
    config: SimulationConfig,
    sampler: Option<QualitySampler>,
}
impl ReadSimulator {
    /// Creates a simulator without a quality model (all qualities are 0)
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            sampler: None,
        }
    }

    /// Draws read qualities from `model`
    pub fn with_quality_model(mut self, model: &QualityModel) -> Result<Self> {
        self.sampler = Some(QualitySampler::new(model)?);
        Ok(self)
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds a generator from the configured seed
    #[must_use]
    pub fn rng(&self) -> SmallRng {
        create_rng(self.config.seed)
    }

    /// Draws one quality per base of a read of `length` bases
    ///
    /// Positions past the end of the model reuse the last learned distribution.
    #[allow(clippy::cast_sign_loss)]
    fn qualities<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Vec<u8> {
        let Some(sampler) = self.sampler.as_ref().filter(|s| s.read_length() > 0) else {
            return vec![0; length];
        };
        let last = sampler.read_length() - 1;
        (0..length)
            .filter_map(|pos| sampler.sample_at(pos.min(last), rng))
            .map(|q| q.clamp(0, i32::from(MAX_PHRED)) as u8)
            .collect()
    }

    /// Generates a single read from `sequence`
    ///
    /// Event counts are derived from the configured error rates and the sequence length.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        sequence: &Sequence,
        rng: &mut R,
    ) -> Result<SyntheticRead> {
        let events = self.config.error_rates.event_counts(sequence.len());
        trace!("Simulating read with {events:?}");
        let mutated = sequence.mutate(events, rng, self.config.policy)?;
        let qualities = self.qualities(mutated.len(), rng);
        Ok(SyntheticRead {
            sequence: mutated.text().to_string(),
            qualities,
            chrom: sequence.chrom().map(str::to_string),
            reference_start: sequence.reference_start(),
        })
    }

    /// Lazily generates `amount` independent reads from the same sequence
    pub fn emit_reads<'a, R: Rng + ?Sized>(
        &'a self,
        sequence: &'a Sequence,
        rng: &'a mut R,
        amount: usize,
    ) -> impl Iterator<Item = Result<SyntheticRead>> + 'a {
        debug!(
            "Emitting {} reads from a sequence of {} bases",
            amount,
            sequence.len()
        );
        (0..amount).map(move |_| self.generate(sequence, &mut *rng))
    }
}
