//! # htsynth
//!
//! Synthetic high-throughput sequencing data for testing genomics tooling.
//!
//! The crate has two independent paths:
//!
//! - **Mutation**: [`generate_variants`] scatters insertions, deletions and substitutions
//!   across a reference sequence without overlap, and [`apply_variants`] rebuilds the edited
//!   sequence from the resulting edit list in a single pass.
//! - **Quality**: [`learn_quality_model`] learns per-position quality distributions online
//!   from training reads, and [`sample_qualities`] draws synthetic quality arrays from them.
//!
//! [`ReadSimulator`] composes the two into complete [`SyntheticRead`]s.
//!
//! All randomness comes from a generator passed in by the caller, so output is
//! reproducible given a seed (see [`create_rng`]).

mod config;
mod error;
mod nucleotide;
mod policy;
mod quality;
mod read;
mod rng;
mod sequence;
mod variant;

pub use config::{
    ErrorRates, SimulationConfig, SimulationConfigBuilder, DEFAULT_DELETION_RATE,
    DEFAULT_INSERTION_RATE, DEFAULT_SUBSTITUTION_RATE,
};
pub use error::{ConfigError, Error, QualityError, Result, VariantError};
pub use nucleotide::{is_dna, is_nucleotide, BASES};
pub use policy::Policy;
pub use quality::{
    learn_quality_model, sample_qualities, QualityLearner, QualityModel, QualitySampler,
    RunningMoments, SampleIter,
};
pub use read::{ReadSimulator, SyntheticRead, MAX_PHRED};
pub use rng::create_rng;
pub use sequence::{ReferenceSegment, Sequence};
pub use variant::{
    apply_variants, apply_variants_at, apply_variants_with_policy, generate_variants, EventCounts,
    Variant, VariantGenerator, VariantType,
};
