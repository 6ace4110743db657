//! Shared primitives for the ribosome crates.
//!
//! - **Error types**: [`RibosomeError`] and [`Result`] for structured error handling
//! - **Traits**: [`Sequence`] and [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{RibosomeError, Result};
pub use traits::*;
