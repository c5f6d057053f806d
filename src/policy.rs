use crate::{error::VariantError, nucleotide::is_nucleotide, Result};

/// Policy for handling invalid nucleotides in a reconstructed sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Fail with [`VariantError::InvalidNucleotideSequence`]
    #[default]
    BreakOnInvalid,
    /// Silently drop every non-`ACGT` symbol (lossy)
    DropInvalid,
}
impl Policy {
    /// Apply the policy to an assembled sequence buffer
    ///
    /// The buffer is filtered in place when symbols are dropped.
    pub fn handle(&self, sequence: &mut Vec<u8>) -> Result<()> {
        if sequence.iter().all(|&b| is_nucleotide(b)) {
            return Ok(());
        }
        match self {
            Self::BreakOnInvalid => {
                let seq_str = String::from_utf8_lossy(sequence).into_owned();
                Err(VariantError::InvalidNucleotideSequence(seq_str).into())
            }
            Self::DropInvalid => {
                let before = sequence.len();
                sequence.retain(|&b| is_nucleotide(b));
                log::warn!(
                    "Dropped {} invalid symbols from reconstructed sequence",
                    before - sequence.len()
                );
                Ok(())
            }
        }
    }
}
