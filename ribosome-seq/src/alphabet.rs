//! Alphabet definitions for RNA validation and codon indexing.

/// Trait for nucleotide alphabets.
///
/// `VALID_BYTES` fixes both the accepted bytes and their index order, so the
/// position of a base in `VALID_BYTES` is its 2-bit code in a codon index.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "RNA").
    const NAME: &'static str;

    /// The set of valid bytes, in index order.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte is a member of the alphabet.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }

    /// Index of a byte within the alphabet, if valid.
    fn index(b: u8) -> Option<usize> {
        Self::VALID_BYTES.iter().position(|&v| v == b)
    }
}

/// Unambiguous RNA alphabet: `ACGU`. Case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGU";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rna_accepts_all_bases() {
        for &b in b"ACGU" {
            assert!(RnaAlphabet::is_valid(b), "RNA should accept {}", b as char);
        }
    }

    #[test]
    fn rna_rejects_t_and_lowercase() {
        assert!(!RnaAlphabet::is_valid(b'T'));
        assert!(!RnaAlphabet::is_valid(b'a'));
        assert!(!RnaAlphabet::is_valid(b'N'));
    }

    #[test]
    fn index_order() {
        assert_eq!(RnaAlphabet::index(b'A'), Some(0));
        assert_eq!(RnaAlphabet::index(b'C'), Some(1));
        assert_eq!(RnaAlphabet::index(b'G'), Some(2));
        assert_eq!(RnaAlphabet::index(b'U'), Some(3));
        assert_eq!(RnaAlphabet::index(b'X'), None);
    }
}
