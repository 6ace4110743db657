//! RNA to protein translation with the standard codon table.
//!
//! - **Codon lookup**: [`translate_codon`] classifies a codon as an amino
//!   acid, a stop, or invalid ([`CodonOutcome`])
//! - **Sequence translation**: [`translate_sequence`] reads codons until the
//!   first stop and returns a [`Protein`]
//! - **Translator**: [`Translator`] bundles both with start/stop queries
//! - **Validated RNA**: [`RnaSequence`] rejects bytes outside `ACGU`
//!
//! # Example
//!
//! ```
//! use ribosome_seq::{translate_codon, translate_sequence, AminoAcid, CodonOutcome};
//!
//! assert_eq!(translate_codon("UGG"), CodonOutcome::Amino(AminoAcid::Tryptophan));
//! assert_eq!(translate_codon("UAA"), CodonOutcome::Stop);
//! assert_eq!(translate_codon("GGG"), CodonOutcome::Invalid);
//!
//! // Translation stops at UAA; UGG after it is never read.
//! let protein = translate_sequence("AUGUUUUAAUGG").unwrap();
//! let names: Vec<_> = protein.names().collect();
//! assert_eq!(names, ["Methionine", "Phenylalanine"]);
//! assert_eq!(protein.to_string(), "MF");
//!
//! // A trailing partial codon fails the whole call.
//! assert!(translate_sequence("AUGA").is_err());
//! ```

pub mod alphabet;
pub mod amino_acid;
pub mod codon;
pub mod protein;
pub mod rna;

pub use alphabet::{Alphabet, RnaAlphabet};
pub use amino_acid::AminoAcid;
pub use codon::{translate_codon, translate_sequence, CodonOutcome, Translator};
pub use protein::Protein;
pub use rna::RnaSequence;

pub use ribosome_core::{Result, RibosomeError};
