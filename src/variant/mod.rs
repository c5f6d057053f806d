//! # variant
//!
//! Edit records and the two algorithms built on them:
//!
//! - [`VariantGenerator`] scatters a requested number of insertions, deletions and
//!   substitutions across a sequence, emitting one ordered, non-overlapping [`Variant`] per slot.
//! - [`apply_variants`] merges the original sequence with such a list in a single pass.
//!
//! ## Usage
//!
//! ```rust
//! use htsynth::{apply_variants, create_rng, generate_variants, EventCounts};
//!
//! let sequence = "ACTTGGAAGT";
//! let mut rng = create_rng(Some(42));
//!
//! let counts = EventCounts::new(1, 0, 0);
//! let variants = generate_variants(sequence, counts, &mut rng).unwrap();
//! let mutated = apply_variants(sequence, &variants).unwrap();
//! assert_eq!(mutated.len(), 11);
//! ```

mod generator;
mod reconstruct;

pub use generator::{generate_variants, VariantGenerator};
pub use reconstruct::{apply_variants, apply_variants_at, apply_variants_with_policy};

use std::fmt;

use crate::{error::VariantError, Result};

/// Classification of an edit record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantType {
    Insertion,
    Deletion,
    Substitution,
}

/// Atomic description of one position's before/after content
///
/// `position` is a 0-based offset into the original sequence. `reference` is the content
/// consumed from the original and `alternate` the content written in its place. At least
/// one of them is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    position: usize,
    reference: String,
    alternate: String,
}
impl Variant {
    /// Creates a new edit record
    ///
    /// Returns an error if both `reference` and `alternate` are empty.
    pub fn new(
        position: usize,
        reference: impl Into<String>,
        alternate: impl Into<String>,
    ) -> Result<Self> {
        let reference = reference.into();
        let alternate = alternate.into();
        if reference.is_empty() && alternate.is_empty() {
            return Err(VariantError::EmptyVariant(position).into());
        }
        Ok(Self {
            position,
            reference,
            alternate,
        })
    }

    /// Creates a deletion of `reference` at `position`
    pub fn deletion(position: usize, reference: impl Into<String>) -> Result<Self> {
        Self::new(position, reference, "")
    }

    /// Creates an insertion of `alternate` before `position`
    pub fn insertion(position: usize, alternate: impl Into<String>) -> Result<Self> {
        Self::new(position, "", alternate)
    }

    /// Single-base record built by the generator, never empty on either side it fills
    pub(crate) fn from_bases(
        position: usize,
        reference: Option<u8>,
        alternate: Option<u8>,
    ) -> Self {
        let to_string = |b: Option<u8>| b.map(|b| char::from(b).to_string()).unwrap_or_default();
        Self {
            position,
            reference: to_string(reference),
            alternate: to_string(alternate),
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    #[must_use]
    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    #[must_use]
    pub fn ref_len(&self) -> usize {
        self.reference.len()
    }

    #[must_use]
    pub fn alt_len(&self) -> usize {
        self.alternate.len()
    }

    /// Change in sequence length caused by this edit
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn alt_ref_delta(&self) -> isize {
        self.alt_len() as isize - self.ref_len() as isize
    }

    /// Inclusive end position of the consumed reference content
    #[must_use]
    pub fn ref_end(&self) -> usize {
        self.position + self.ref_len().saturating_sub(1)
    }

    #[must_use]
    pub fn variant_type(&self) -> VariantType {
        match (self.reference.is_empty(), self.alternate.is_empty()) {
            (true, _) => VariantType::Insertion,
            (false, true) => VariantType::Deletion,
            (false, false) => VariantType::Substitution,
        }
    }

    #[must_use]
    pub fn is_insertion(&self) -> bool {
        self.variant_type() == VariantType::Insertion
    }

    #[must_use]
    pub fn is_deletion(&self) -> bool {
        self.variant_type() == VariantType::Deletion
    }

    /// True for the no-op records the generator emits for unaffected positions
    #[must_use]
    pub fn is_copy(&self) -> bool {
        self.reference == self.alternate
    }

    /// Returns a copy of this record shifted by `delta` positions
    ///
    /// Returns `None` if the shifted position would be negative.
    #[must_use]
    pub fn offset(&self, delta: isize) -> Option<Self> {
        Some(Self {
            position: self.position.checked_add_signed(delta)?,
            ..self.clone()
        })
    }
}
impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_type() {
            VariantType::Deletion => write!(f, "{}del{}", self.position, self.reference),
            VariantType::Insertion => write!(f, "{}ins{}", self.position, self.alternate),
            VariantType::Substitution => {
                write!(f, "{}{}>{}", self.position, self.reference, self.alternate)
            }
        }
    }
}

/// Requested number of edit events of each kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EventCounts {
    pub insertions: usize,
    pub deletions: usize,
    pub substitutions: usize,
}
impl EventCounts {
    #[must_use]
    pub fn new(insertions: usize, deletions: usize, substitutions: usize) -> Self {
        Self {
            insertions,
            deletions,
            substitutions,
        }
    }

    /// Builds counts from a raw vector indexed `[insertion, deletion, substitution]`
    pub fn from_slice(events: &[usize]) -> Result<Self> {
        match *events {
            [insertions, deletions, substitutions] => {
                Ok(Self::new(insertions, deletions, substitutions))
            }
            _ => Err(VariantError::InvalidEventVector(events.len()).into()),
        }
    }

    /// Total number of events of all kinds
    #[must_use]
    pub fn total(&self) -> usize {
        self.insertions + self.deletions + self.substitutions
    }

    /// Length of a sequence of `ref_length` bases after applying these events
    ///
    /// Returns `None` if there are more deletions than bases.
    #[must_use]
    pub fn alt_length(&self, ref_length: usize) -> Option<usize> {
        (ref_length + self.insertions).checked_sub(self.deletions)
    }
}
