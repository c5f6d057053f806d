//! Nucleotide alphabet helpers
//!
//! Small utilities shared by the variant generator and the reconstructor for working
//! with the canonical `ACGT` alphabet.

use rand::Rng;

/// The canonical nucleotide alphabet
pub const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Returns true if the byte is one of the canonical nucleotides
#[must_use]
pub fn is_nucleotide(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T')
}

/// Returns true if every byte of the sequence is a canonical nucleotide
#[must_use]
pub fn is_dna(sequence: &[u8]) -> bool {
    sequence.iter().all(|&b| is_nucleotide(b))
}

/// Draws a nucleotide uniformly at random
pub fn random_base<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    BASES[rng.random_range(0..4)]
}

/// Draws a nucleotide uniformly at random among those different from `base`
///
/// If `base` is not a canonical nucleotide every base is a valid substitute.
pub fn random_substitute<R: Rng + ?Sized>(base: u8, rng: &mut R) -> u8 {
    // For each base, the 3 alternatives
    let alternatives: &[u8] = match base {
        b'A' => b"CGT",
        b'C' => b"AGT",
        b'G' => b"ACT",
        b'T' => b"ACG",
        _ => &BASES,
    };
    alternatives[rng.random_range(0..alternatives.len())]
}
