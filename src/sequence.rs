//! Input sequences for mutation
//!
//! A sequence is either a raw nucleotide string or a segment bound to reference
//! coordinates. Both expose their text to the variant generator in the same way.

use rand::Rng;

use crate::{
    apply_variants_at, apply_variants_with_policy, error::VariantError, generate_variants,
    EventCounts, Policy, Result, Variant,
};

/// A stretch of a reference genome
///
/// Coordinates are 0-based, end-exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSegment {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub text: String,
}
impl ReferenceSegment {
    #[must_use]
    pub fn new(chrom: impl Into<String>, start: u64, end: u64, text: impl Into<String>) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
            text: text.into(),
        }
    }

    fn start_index(&self) -> Result<usize> {
        usize::try_from(self.start).map_err(|_| VariantError::StartOutOfRange(self.start).into())
    }

    /// Places the requested events across the segment, in genomic coordinates
    pub fn generate_variants<R: Rng + ?Sized>(
        &self,
        events: EventCounts,
        rng: &mut R,
    ) -> Result<Vec<Variant>> {
        let shift = isize::try_from(self.start)
            .map_err(|_| VariantError::StartOutOfRange(self.start))?;
        generate_variants(&self.text, events, rng)?
            .iter()
            .map(|var| {
                var.offset(shift)
                    .ok_or_else(|| VariantError::StartOutOfRange(self.start).into())
            })
            .collect()
    }

    /// Applies edit records positioned in genomic coordinates to the segment text
    pub fn apply_variants(&self, variants: &[Variant], policy: Policy) -> Result<String> {
        apply_variants_at(self.start_index()?, &self.text, variants, policy)
    }
}

/// A nucleotide sequence, optionally bound to reference coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequence {
    Raw(String),
    Segment(ReferenceSegment),
}
impl Sequence {
    /// The nucleotide text of the sequence
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Raw(text) => text,
            Self::Segment(segment) => &segment.text,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Chromosome name for segments bound to a reference
    #[must_use]
    pub fn chrom(&self) -> Option<&str> {
        match self {
            Self::Raw(_) => None,
            Self::Segment(segment) => Some(&segment.chrom),
        }
    }

    /// Reference start for segments bound to a reference
    #[must_use]
    pub fn reference_start(&self) -> Option<u64> {
        match self {
            Self::Raw(_) => None,
            Self::Segment(segment) => Some(segment.start),
        }
    }

    /// Returns a copy of this sequence with the requested events applied
    ///
    /// Segments keep their reference coordinates; only their text changes.
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        events: EventCounts,
        rng: &mut R,
        policy: Policy,
    ) -> Result<Self> {
        Ok(match self {
            Self::Raw(text) => {
                let variants = generate_variants(text, events, rng)?;
                Self::Raw(apply_variants_with_policy(text, &variants, policy)?)
            }
            Self::Segment(segment) => {
                let variants = segment.generate_variants(events, rng)?;
                Self::Segment(ReferenceSegment {
                    text: segment.apply_variants(&variants, policy)?,
                    ..segment.clone()
                })
            }
        })
    }
}
impl From<String> for Sequence {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}
impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}
impl From<ReferenceSegment> for Sequence {
    fn from(segment: ReferenceSegment) -> Self {
        Self::Segment(segment)
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::create_rng;

    #[test]
    fn test_raw_mutation() -> anyhow::Result<()> {
        let sequence = Sequence::from("ACTTGGAAGT");
        let mut rng = create_rng(Some(42));
        let mutated = sequence.mutate(EventCounts::new(2, 1, 0), &mut rng, Policy::default())?;
        assert!(matches!(mutated, Sequence::Raw(_)));
        assert_eq!(mutated.len(), 11);
        assert_eq!(mutated.chrom(), None);
        Ok(())
    }

    #[test]
    fn test_segment_keeps_coordinates() -> anyhow::Result<()> {
        let segment = ReferenceSegment::new("chr1", 100, 110, "ACTTGGAAGT");
        let sequence = Sequence::from(segment);
        let mut rng = create_rng(Some(42));
        let mutated = sequence.mutate(EventCounts::new(0, 0, 3), &mut rng, Policy::default())?;

        let Sequence::Segment(mutated) = mutated else {
            panic!("expected a segment");
        };
        assert_eq!(mutated.chrom, "chr1");
        assert_eq!((mutated.start, mutated.end), (100, 110));
        assert_eq!(mutated.text.len(), 10);
        assert_ne!(mutated.text, "ACTTGGAAGT");
        Ok(())
    }

    #[test]
    fn test_segment_genomic_edits() -> anyhow::Result<()> {
        let segment = ReferenceSegment::new("chr3", 2000, 2008, "ACGTACAT");
        let variants = vec![
            Variant::new(2001, "C", "T")?,
            Variant::insertion(2003, "GG")?,
            Variant::deletion(2005, "CA")?,
        ];
        assert_eq!(segment.apply_variants(&variants, Policy::default())?, "ATGGGTAT");

        // edits in 0-based text coordinates fall before the segment
        let local = Variant::new(1, "C", "T")?;
        assert!(segment.apply_variants(&[local], Policy::default()).is_err());
        Ok(())
    }

    #[test]
    fn test_segment_variants_in_genomic_coordinates() -> anyhow::Result<()> {
        let segment = ReferenceSegment::new("chr1", 100, 110, "ACTTGGAAGT");
        let mut rng = create_rng(Some(7));
        let variants = segment.generate_variants(EventCounts::new(1, 1, 1), &mut rng)?;
        assert!(variants
            .iter()
            .all(|v| (100..=110).contains(&v.position())));

        let mutated = segment.apply_variants(&variants, Policy::default())?;
        assert_eq!(mutated.len(), 10);
        Ok(())
    }
}
