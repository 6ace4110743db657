//! Core trait definitions shared by the ribosome crates.

/// A biological sequence backed by raw bytes.
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in bases.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw(&'static [u8]);

    impl Sequence for Raw {
        fn as_bytes(&self) -> &[u8] {
            self.0
        }
    }

    #[test]
    fn default_len_and_is_empty() {
        assert_eq!(Raw(b"AUG").len(), 3);
        assert!(!Raw(b"AUG").is_empty());
        assert!(Raw(b"").is_empty());
    }
}
