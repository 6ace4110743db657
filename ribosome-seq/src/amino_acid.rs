//! The amino acids reachable from the standard codon table.

use std::fmt;
use std::str::FromStr;

use ribosome_core::RibosomeError;

/// An amino acid encoded by at least one codon in the codon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AminoAcid {
    Methionine,
    Phenylalanine,
    Leucine,
    Serine,
    Tyrosine,
    Cysteine,
    Tryptophan,
}

impl AminoAcid {
    /// Every variant, in declaration order.
    pub const ALL: [AminoAcid; 7] = [
        AminoAcid::Methionine,
        AminoAcid::Phenylalanine,
        AminoAcid::Leucine,
        AminoAcid::Serine,
        AminoAcid::Tyrosine,
        AminoAcid::Cysteine,
        AminoAcid::Tryptophan,
    ];

    /// Full name, e.g. `"Methionine"`.
    pub const fn name(self) -> &'static str {
        match self {
            AminoAcid::Methionine => "Methionine",
            AminoAcid::Phenylalanine => "Phenylalanine",
            AminoAcid::Leucine => "Leucine",
            AminoAcid::Serine => "Serine",
            AminoAcid::Tyrosine => "Tyrosine",
            AminoAcid::Cysteine => "Cysteine",
            AminoAcid::Tryptophan => "Tryptophan",
        }
    }

    /// IUPAC three-letter code, e.g. `"Met"`.
    pub const fn three_letter(self) -> &'static str {
        match self {
            AminoAcid::Methionine => "Met",
            AminoAcid::Phenylalanine => "Phe",
            AminoAcid::Leucine => "Leu",
            AminoAcid::Serine => "Ser",
            AminoAcid::Tyrosine => "Tyr",
            AminoAcid::Cysteine => "Cys",
            AminoAcid::Tryptophan => "Trp",
        }
    }

    /// IUPAC one-letter code, e.g. `b'M'`.
    pub const fn one_letter(self) -> u8 {
        match self {
            AminoAcid::Methionine => b'M',
            AminoAcid::Phenylalanine => b'F',
            AminoAcid::Leucine => b'L',
            AminoAcid::Serine => b'S',
            AminoAcid::Tyrosine => b'Y',
            AminoAcid::Cysteine => b'C',
            AminoAcid::Tryptophan => b'W',
        }
    }

    /// Average molecular weight of the free amino acid, in Daltons.
    pub const fn weight(self) -> f64 {
        match self {
            AminoAcid::Methionine => 149.21,
            AminoAcid::Phenylalanine => 165.19,
            AminoAcid::Leucine => 131.17,
            AminoAcid::Serine => 105.09,
            AminoAcid::Tyrosine => 181.19,
            AminoAcid::Cysteine => 121.16,
            AminoAcid::Tryptophan => 204.23,
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AminoAcid {
    type Err = RibosomeError;

    /// Parse a full name, three-letter code, or one-letter code (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AminoAcid::ALL
            .into_iter()
            .find(|aa| {
                s.eq_ignore_ascii_case(aa.name())
                    || s.eq_ignore_ascii_case(aa.three_letter())
                    || (s.len() == 1 && s.as_bytes()[0].eq_ignore_ascii_case(&aa.one_letter()))
            })
            .ok_or_else(|| RibosomeError::Parse(format!("unknown amino acid '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_full_name() {
        assert_eq!(AminoAcid::Methionine.to_string(), "Methionine");
        assert_eq!(AminoAcid::Tryptophan.to_string(), "Tryptophan");
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in AminoAcid::ALL.iter().enumerate() {
            for b in &AminoAcid::ALL[i + 1..] {
                assert_ne!(a.one_letter(), b.one_letter());
                assert_ne!(a.three_letter(), b.three_letter());
            }
        }
    }

    #[test]
    fn parse_accepts_all_spellings() {
        assert_eq!("Serine".parse::<AminoAcid>().unwrap(), AminoAcid::Serine);
        assert_eq!("serine".parse::<AminoAcid>().unwrap(), AminoAcid::Serine);
        assert_eq!("TYR".parse::<AminoAcid>().unwrap(), AminoAcid::Tyrosine);
        assert_eq!("c".parse::<AminoAcid>().unwrap(), AminoAcid::Cysteine);
        assert_eq!(" Leu ".parse::<AminoAcid>().unwrap(), AminoAcid::Leucine);
    }

    #[test]
    fn parse_round_trips_display() {
        for aa in AminoAcid::ALL {
            assert_eq!(aa.to_string().parse::<AminoAcid>().unwrap(), aa);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!("Glycine".parse::<AminoAcid>(), Err(RibosomeError::Parse(_))));
        assert!("".parse::<AminoAcid>().is_err());
        assert!("X".parse::<AminoAcid>().is_err());
    }
}
