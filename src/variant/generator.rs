use log::{debug, trace};
use rand::{seq::index, Rng};

use super::{EventCounts, Variant, VariantType};
use crate::{
    error::VariantError,
    nucleotide::{random_base, random_substitute},
    Result,
};

/// Scatters edit events across a sequence without overlap
///
/// The working coordinate space holds one slot per reference base plus one slot per
/// insertion. Event slots are drawn without replacement and assigned to insertions,
/// deletions and substitutions in the order they were drawn.
#[derive(Debug, Clone, Copy)]
pub struct VariantGenerator<'a> {
    sequence: &'a [u8],
    events: EventCounts,
}
impl<'a> VariantGenerator<'a> {
    #[must_use]
    pub fn new(sequence: &'a str, events: EventCounts) -> Self {
        Self {
            sequence: sequence.as_bytes(),
            events,
        }
    }

    /// Number of slots in the working coordinate space
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.sequence.len() + self.events.insertions
    }

    /// Length of the sequence once all events are applied
    pub fn alt_length(&self) -> Result<usize> {
        self.events
            .alt_length(self.sequence.len())
            .ok_or_else(|| self.invalid_configuration())
    }

    fn invalid_configuration(&self) -> crate::Error {
        VariantError::InvalidConfiguration {
            events: self.events.total(),
            slots: self.total_length(),
        }
        .into()
    }

    /// Assigns an event type to every drawn slot, leaving the rest unaffected
    fn assign_slots<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Option<VariantType>> {
        let EventCounts {
            insertions,
            deletions,
            ..
        } = self.events;
        let mut slots = vec![None; self.total_length()];
        let drawn = index::sample(rng, self.total_length(), self.events.total());
        for (order, slot) in drawn.iter().enumerate() {
            slots[slot] = Some(if order < insertions {
                VariantType::Insertion
            } else if order < insertions + deletions {
                VariantType::Deletion
            } else {
                VariantType::Substitution
            });
        }
        slots
    }

    /// Generates one edit record per working slot, ordered by position
    ///
    /// Unaffected positions are emitted as copy records (`reference == alternate`).
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Variant>> {
        let num_events = self.events.total();
        let total_length = self.total_length();
        if num_events > total_length {
            return Err(self.invalid_configuration());
        }
        let alt_length = self.alt_length()?;
        debug!(
            "Placing {} events ({:?}) across {} slots (ref length: {}, alt length: {})",
            num_events,
            self.events,
            total_length,
            self.sequence.len(),
            alt_length
        );

        let slots = self.assign_slots(rng);
        let mut variants = Vec::with_capacity(total_length);
        let mut ref_offset = 0isize;
        for (i, slot) in slots.into_iter().enumerate() {
            // insertions precede the next unconsumed reference base
            let ref_index = i.saturating_add_signed(ref_offset);
            let variant = match slot {
                Some(VariantType::Insertion) => {
                    ref_offset -= 1;
                    Variant::from_bases(ref_index, None, Some(random_base(rng)))
                }
                Some(VariantType::Deletion) => {
                    let base = self.reference_base(i, ref_offset)?;
                    Variant::from_bases(ref_index, Some(base), None)
                }
                Some(VariantType::Substitution) => {
                    let base = self.reference_base(i, ref_offset)?;
                    let alt = random_substitute(base, rng);
                    Variant::from_bases(ref_index, Some(base), Some(alt))
                }
                None => {
                    let base = self.reference_base(i, ref_offset)?;
                    Variant::from_bases(ref_index, Some(base), Some(base))
                }
            };
            if !variant.is_copy() {
                trace!("Slot {i}: {variant}");
            }
            variants.push(variant);
        }
        Ok(variants)
    }

    /// Maps working slot `i` back onto the original sequence
    #[allow(clippy::cast_possible_wrap)]
    fn reference_base(&self, i: usize, ref_offset: isize) -> Result<u8> {
        let index = i as isize + ref_offset;
        usize::try_from(index)
            .ok()
            .and_then(|idx| self.sequence.get(idx).copied())
            .ok_or_else(|| {
                VariantError::IndexOutOfRange {
                    index,
                    length: self.sequence.len(),
                }
                .into()
            })
    }
}

/// Generates an ordered, non-overlapping list of edit records for `sequence`
///
/// See [`VariantGenerator::generate`].
pub fn generate_variants<R: Rng + ?Sized>(
    sequence: &str,
    events: EventCounts,
    rng: &mut R,
) -> Result<Vec<Variant>> {
    VariantGenerator::new(sequence, events).generate(rng)
}
