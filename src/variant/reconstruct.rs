use super::Variant;
use crate::{error::VariantError, Policy, Result};

/// Alter a nucleotide sequence based on a set of edit records
///
/// Invalid nucleotides in the output are rejected, see [`apply_variants_with_policy`].
pub fn apply_variants(original: &str, variants: &[Variant]) -> Result<String> {
    apply_variants_with_policy(original, variants, Policy::default())
}

/// Alter a nucleotide sequence based on a set of edit records with 0-based positions
///
/// See [`apply_variants_at`].
pub fn apply_variants_with_policy(
    original: &str,
    variants: &[Variant],
    policy: Policy,
) -> Result<String> {
    apply_variants_at(0, original, variants, policy)
}

/// Alter a nucleotide sequence whose first base sits at `ref_start`
///
/// Variant positions are in the same coordinate system as `ref_start`, so genomic
/// edit records can be applied directly to a reference segment.
///
/// Assumptions (not re-validated):
/// - variants are sorted by position
/// - variants do not overlap with each other
/// - variants are fully in range of the original sequence
///
/// A variant positioned before `ref_start` is an error. The output is checked against
/// the `ACGT` alphabet according to `policy`.
pub fn apply_variants_at(
    ref_start: usize,
    original: &str,
    variants: &[Variant],
    policy: Policy,
) -> Result<String> {
    let reference = original.as_bytes();
    let delta: isize = variants.iter().map(Variant::alt_ref_delta).sum();
    let mut alt_seq = Vec::with_capacity(reference.len().saturating_add_signed(delta));

    let mut i = 0; // REF seq base offset
    for variant in variants {
        let position = variant.position().checked_sub(ref_start).ok_or(
            VariantError::PositionBeforeStart {
                position: variant.position(),
                start: ref_start,
            },
        )?;

        // Copy REF bases unaffected by variants
        let stop = position.min(reference.len());
        if i < stop {
            alt_seq.extend_from_slice(&reference[i..stop]);
            i = stop;
        }

        // Apply variant and skip its REF bases
        alt_seq.extend_from_slice(variant.alternate().as_bytes());
        i += variant.ref_len();
    }

    // Copy the tail of the reference sequence unaffected by variants
    if i < reference.len() {
        alt_seq.extend_from_slice(&reference[i..]);
    }

    policy.handle(&mut alt_seq)?;
    Ok(std::str::from_utf8(&alt_seq)?.to_string())
}
