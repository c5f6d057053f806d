/// Custom Result type for htsynth operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the htsynth library, encompassing all possible error cases
/// that can occur while generating variants, reconstructing sequences, or learning and
/// sampling quality models.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors related to variant placement and sequence reconstruction
    VariantError(#[from] VariantError),
    /// Errors that occur while learning or sampling quality models
    QualityError(#[from] QualityError),
    /// Errors in user-provided simulation configuration
    ConfigError(#[from] ConfigError),
    /// UTF-8 encoding/decoding errors
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Errors specific to placing edit events and rebuilding the edited sequence
#[derive(thiserror::Error, Debug)]
pub enum VariantError {
    /// More non-overlapping events were requested than there are slots to place them in
    ///
    /// # Fields
    /// * `events` - The total number of requested events
    /// * `slots` - The number of slots available in the working coordinate space
    #[error("Cannot place {events} events in {slots} available slots")]
    InvalidConfiguration { events: usize, slots: usize },

    /// A working slot mapped outside of the original sequence
    ///
    /// # Fields
    /// * `index` - The offset-adjusted index into the original sequence
    /// * `length` - The length of the original sequence
    #[error("Reference index ({index}) is out of range for sequence of length {length}")]
    IndexOutOfRange { index: isize, length: usize },

    /// Both the reference and alternate content of an edit were empty
    ///
    /// # Arguments
    /// * `usize` - The position of the offending edit
    #[error("Invalid variant at position {0}: both REF and ALT are empty")]
    EmptyVariant(usize),

    /// The raw event vector did not have exactly 3 entries (insertions, deletions, substitutions)
    ///
    /// # Arguments
    /// * `usize` - The number of entries provided
    #[error("Event vector must contain 3 counts (insertions, deletions, substitutions), got {0}")]
    InvalidEventVector(usize),

    /// The reconstructed sequence contains non-ACGT symbols
    ///
    /// # Arguments
    /// * `String` - The offending sequence
    #[error("Invalid nucleotides found in sequence: {0}")]
    InvalidNucleotideSequence(String),

    /// An edit record lies before the start of the segment it is applied to
    ///
    /// # Fields
    /// * `position` - The genomic position of the edit
    /// * `start` - The genomic start of the segment
    #[error("Variant at {position} lies before segment start {start}")]
    PositionBeforeStart { position: usize, start: usize },

    /// A segment start does not fit in the platform's address space
    ///
    /// # Arguments
    /// * `u64` - The segment start
    #[error("Segment start {0} exceeds the addressable range")]
    StartOutOfRange(u64),
}

/// Errors that can occur while learning or sampling per-position quality models
#[derive(thiserror::Error, Debug)]
pub enum QualityError {
    /// Moments were requested before at least two observations were seen
    ///
    /// # Arguments
    /// * `u64` - The number of observations seen so far
    #[error("Insufficient observations to finalise moments: {0} (need at least 2)")]
    InsufficientObservations(u64),

    /// No observations were supplied to the learner
    #[error("No quality observations provided")]
    EmptyInput,

    /// The parameters at a position do not describe a valid normal distribution
    ///
    /// # Fields
    /// * `position` - The read position of the offending distribution
    /// * `mean` - The mean at that position
    /// * `sd` - The standard deviation at that position (must be finite and non-negative)
    #[error("Invalid quality distribution at position {position}: mean {mean}, sd {sd}")]
    InvalidDistribution { position: usize, mean: f64, sd: f64 },
}

/// Errors in simulation configuration values
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// An error rate was outside of `[0, 1]` or not finite
    #[error("Invalid {kind} rate: {rate} (must be within [0, 1])")]
    InvalidRate { kind: &'static str, rate: f64 },

    /// Deletions and substitutions together would consume more bases than a read has
    ///
    /// # Fields
    /// * `deletion` - The deletion rate
    /// * `substitution` - The substitution rate
    #[error("Deletion rate ({deletion}) and substitution rate ({substitution}) sum to more than 1")]
    ExcessiveConsumingRate { deletion: f64, substitution: f64 },
}
