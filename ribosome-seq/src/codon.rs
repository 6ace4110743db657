//! Codon lookup and RNA sequence translation.
//!
//! The codon table is a 64-slot array indexed by a 2-bit-per-base codon
//! index (A=0, C=1, G=2, U=3). Slots that the table does not define
//! classify as [`CodonOutcome::Invalid`].

use ribosome_core::{RibosomeError, Result};
use tracing::{debug, trace};

use crate::alphabet::{Alphabet, RnaAlphabet};
use crate::amino_acid::AminoAcid;
use crate::protein::Protein;

// ---------------------------------------------------------------------------
// Codon indexing
// ---------------------------------------------------------------------------

/// Convert a 3-base RNA codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = RnaAlphabet::index(codon[0])?;
    let b2 = RnaAlphabet::index(codon[1])?;
    let b3 = RnaAlphabet::index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Convert an index in [0, 64) back to an RNA codon.
fn index_to_codon(idx: usize) -> [u8; 3] {
    let bases = RnaAlphabet::VALID_BYTES;
    [bases[idx >> 4], bases[(idx >> 2) & 3], bases[idx & 3]]
}

// ---------------------------------------------------------------------------
// Lookup outcome
// ---------------------------------------------------------------------------

/// Result of looking up a single codon.
///
/// A stop codon is a control outcome, not a failure, so it gets its own
/// variant instead of sharing the error channel with invalid codons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodonOutcome {
    /// The codon encodes an amino acid.
    Amino(AminoAcid),
    /// The codon is a stop codon (UAA, UAG, UGA).
    Stop,
    /// The codon is not in the table, is not exactly 3 bases, or contains
    /// bytes outside `ACGU`.
    Invalid,
}

impl CodonOutcome {
    /// The encoded amino acid, if any.
    pub fn amino_acid(self) -> Option<AminoAcid> {
        match self {
            CodonOutcome::Amino(aa) => Some(aa),
            _ => None,
        }
    }

    /// Whether this is the stop outcome.
    pub fn is_stop(self) -> bool {
        self == CodonOutcome::Stop
    }

    /// Whether the codon could not be classified.
    pub fn is_invalid(self) -> bool {
        self == CodonOutcome::Invalid
    }
}

// ---------------------------------------------------------------------------
// Standard table
// ---------------------------------------------------------------------------

/// Standard codon table: 14 coding codons and 3 stops; the other 47 slots are invalid.
static STANDARD_TABLE: [CodonOutcome; 64] = {
    use crate::amino_acid::AminoAcid::*;
    use CodonOutcome::{Amino, Stop};

    let mut t = [CodonOutcome::Invalid; 64];
    t[14] = Amino(Methionine); // AUG
    t[63] = Amino(Phenylalanine); // UUU
    t[61] = Amino(Phenylalanine); // UUC
    t[60] = Amino(Leucine); // UUA
    t[62] = Amino(Leucine); // UUG
    t[55] = Amino(Serine); // UCU
    t[53] = Amino(Serine); // UCC
    t[52] = Amino(Serine); // UCA
    t[54] = Amino(Serine); // UCG
    t[51] = Amino(Tyrosine); // UAU
    t[49] = Amino(Tyrosine); // UAC
    t[59] = Amino(Cysteine); // UGU
    t[57] = Amino(Cysteine); // UGC
    t[58] = Amino(Tryptophan); // UGG
    t[48] = Stop; // UAA
    t[50] = Stop; // UAG
    t[56] = Stop; // UGA
    t
};

static STANDARD_STARTS: [bool; 64] = {
    let mut s = [false; 64];
    s[14] = true; // AUG
    s
};

// ---------------------------------------------------------------------------
// Translator
// ---------------------------------------------------------------------------

/// Translates RNA codons and sequences against a fixed codon table.
///
/// The table is immutable process-wide data, so a `Translator` is `Copy`
/// and can be shared between threads freely.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    name: &'static str,
    table: &'static [CodonOutcome; 64],
    starts: &'static [bool; 64],
}

impl Translator {
    /// The standard codon table.
    pub fn standard() -> Self {
        Self {
            name: "Standard",
            table: &STANDARD_TABLE,
            starts: &STANDARD_STARTS,
        }
    }

    /// Human-readable table name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Classify a single codon.
    ///
    /// Anything that is not exactly three bytes from `ACGU` is
    /// [`CodonOutcome::Invalid`], as are valid codons missing from the table.
    pub fn translate_codon(&self, codon: impl AsRef<[u8]>) -> CodonOutcome {
        codon_index(codon.as_ref()).map_or(CodonOutcome::Invalid, |idx| self.table[idx])
    }

    /// Translate an RNA sequence into a protein.
    ///
    /// Reads non-overlapping codons from offset 0 and stops at the first
    /// stop codon; codons after it are never examined. A trailing partial
    /// codon is invalid. Empty input is an error rather than an empty
    /// protein.
    ///
    /// # Errors
    ///
    /// Returns [`RibosomeError::InvalidCodon`] for empty input or for the
    /// first codon that classifies as invalid. No partial protein is
    /// returned.
    pub fn translate_sequence(&self, rna: impl AsRef<[u8]>) -> Result<Protein> {
        let rna = rna.as_ref();
        if rna.is_empty() {
            debug!("refusing to translate empty RNA sequence");
            return Err(RibosomeError::invalid_codon(rna, 0));
        }

        let mut protein = Protein::with_capacity(rna.len() / 3);
        for (i, codon) in rna.chunks(3).enumerate() {
            let position = i * 3;
            match self.translate_codon(codon) {
                CodonOutcome::Amino(aa) => protein.push(aa),
                CodonOutcome::Stop => {
                    trace!(position, residues = protein.len(), "stop codon reached");
                    return Ok(protein);
                }
                CodonOutcome::Invalid => {
                    let err = RibosomeError::invalid_codon(codon, position);
                    debug!(error = %err, "translation aborted");
                    return Err(err);
                }
            }
        }
        Ok(protein)
    }

    /// Check whether a codon is a start codon in this table.
    pub fn is_start(&self, codon: impl AsRef<[u8]>) -> bool {
        codon_index(codon.as_ref()).map_or(false, |idx| self.starts[idx])
    }

    /// Check whether a codon is a stop codon in this table.
    pub fn is_stop(&self, codon: impl AsRef<[u8]>) -> bool {
        self.translate_codon(codon).is_stop()
    }

    /// All stop codons in this table.
    pub fn stop_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.table[i].is_stop())
            .map(index_to_codon)
            .collect()
    }

    /// All start codons in this table.
    pub fn start_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.starts[i])
            .map(index_to_codon)
            .collect()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::standard()
    }
}

// ---------------------------------------------------------------------------
// Free functions (standard table)
// ---------------------------------------------------------------------------

/// Classify a single codon using the standard table.
pub fn translate_codon(codon: impl AsRef<[u8]>) -> CodonOutcome {
    Translator::standard().translate_codon(codon)
}

/// Translate an RNA sequence using the standard table.
///
/// See [`Translator::translate_sequence`].
pub fn translate_sequence(rna: impl AsRef<[u8]>) -> Result<Protein> {
    Translator::standard().translate_sequence(rna)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
