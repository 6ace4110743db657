//! The protein produced by translation.

use std::fmt;
use std::ops::Deref;

use ribosome_core::Summarizable;

use crate::amino_acid::AminoAcid;

/// Water lost per peptide bond, in Daltons.
const WATER_WEIGHT: f64 = 18.015;

/// An ordered chain of amino acids.
///
/// Displays as its one-letter codes (e.g. `MFW`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Protein(Vec<AminoAcid>);

impl Protein {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Protein(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, aa: AminoAcid) {
        self.0.push(aa);
    }

    /// The residues as a slice.
    pub fn as_slice(&self) -> &[AminoAcid] {
        &self.0
    }

    /// Full amino acid names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|aa| aa.name())
    }

    /// One-letter code string, e.g. `"MFW"`.
    pub fn to_one_letter(&self) -> String {
        self.0.iter().map(|aa| aa.one_letter() as char).collect()
    }

    /// Estimated molecular weight in Daltons.
    ///
    /// Sum of residue weights minus one water per peptide bond. Returns 0.0
    /// for an empty protein.
    pub fn molecular_weight(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.0.iter().map(|aa| aa.weight()).sum();
        sum - (self.0.len() as f64 - 1.0) * WATER_WEIGHT
    }
}

impl Deref for Protein {
    type Target = [AminoAcid];

    fn deref(&self) -> &[AminoAcid] {
        &self.0
    }
}

impl AsRef<[AminoAcid]> for Protein {
    fn as_ref(&self) -> &[AminoAcid] {
        &self.0
    }
}

impl From<Protein> for Vec<AminoAcid> {
    fn from(protein: Protein) -> Self {
        protein.0
    }
}

impl From<Vec<AminoAcid>> for Protein {
    fn from(residues: Vec<AminoAcid>) -> Self {
        Protein(residues)
    }
}

impl FromIterator<AminoAcid> for Protein {
    fn from_iter<T: IntoIterator<Item = AminoAcid>>(iter: T) -> Self {
        Protein(iter.into_iter().collect())
    }
}

impl IntoIterator for Protein {
    type Item = AminoAcid;
    type IntoIter = std::vec::IntoIter<AminoAcid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Protein {
    type Item = &'a AminoAcid;
    type IntoIter = std::slice::Iter<'a, AminoAcid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_one_letter())
    }
}

impl Summarizable for Protein {
    fn summary(&self) -> String {
        let preview: String = self.names().take(3).collect::<Vec<_>>().join("-");
        if self.0.len() > 3 {
            format!("Protein ({} aa): {}-...", self.0.len(), preview)
        } else {
            format!("Protein ({} aa): {}", self.0.len(), preview)
        }
    }
}
