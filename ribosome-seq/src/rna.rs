//! Validated RNA sequences.
//!
//! [`RnaSequence`] checks every byte against [`RnaAlphabet`] on construction,
//! so translation errors on a validated sequence can only come from
//! unmapped codons or a trailing partial codon.

use std::fmt;

use ribosome_core::{RibosomeError, Result, Sequence, Summarizable};

use crate::alphabet::{Alphabet, RnaAlphabet};
use crate::codon;
use crate::protein::Protein;

/// An RNA sequence over `ACGU`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RnaSequence {
    data: Vec<u8>,
}

impl RnaSequence {
    /// Create a validated RNA sequence.
    ///
    /// Input is not case-folded; the first byte outside the alphabet is
    /// reported with its position.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let data = bytes.as_ref();
        if let Some((position, &b)) = data
            .iter()
            .enumerate()
            .find(|&(_, &b)| !RnaAlphabet::is_valid(b))
        {
            return Err(RibosomeError::InvalidBase {
                base: b as char,
                position,
            });
        }
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Translate using the standard codon table.
    pub fn translate(&self) -> Result<Protein> {
        codon::translate_sequence(&self.data)
    }
}

impl AsRef<[u8]> for RnaSequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Sequence for RnaSequence {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Summarizable for RnaSequence {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = String::from_utf8_lossy(&self.data[..preview_len]);
        if self.data.len() > 20 {
            format!("{} sequence ({} nt): {}...", RnaAlphabet::NAME, self.data.len(), preview)
        } else {
            format!("{} sequence ({} nt): {}", RnaAlphabet::NAME, self.data.len(), preview)
        }
    }
}

impl fmt::Debug for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", RnaAlphabet::NAME, String::from_utf8_lossy(&self.data))
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RnaSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RnaSequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::amino_acid::AminoAcid;

    #[test]
    fn sequence_serializes_as_string() {
        let rna = RnaSequence::new("AUGUAA").unwrap();
        assert_eq!(serde_json::to_string(&rna).unwrap(), "\"AUGUAA\"");
    }

    #[test]
    fn deserialize_validates() {
        let rna: RnaSequence = serde_json::from_str("\"UUUUGG\"").unwrap();
        assert_eq!(rna.translate().unwrap().to_string(), "FW");
        assert!(serde_json::from_str::<RnaSequence>("\"AUGT\"").is_err());
    }

    #[test]
    fn protein_serializes_as_names() {
        let protein = RnaSequence::new("AUGUGG").unwrap().translate().unwrap();
        assert_eq!(
            serde_json::to_string(&protein).unwrap(),
            "[\"Methionine\",\"Tryptophan\"]"
        );
        let back: Protein = serde_json::from_str("[\"Methionine\",\"Tryptophan\"]").unwrap();
        assert_eq!(back.as_slice(), &[AminoAcid::Methionine, AminoAcid::Tryptophan]);
    }
}
