//! Engine consistency errors.
//!
//! Every variant signals a broken internal invariant rather than bad input.

use bouquetforge_core::{BouquetForgeError, SizeClass, Species};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A debit asked for more flowers than the pool holds.
    #[error("cannot take {requested} of '{species}': only {available} available")]
    Overdraw {
        species: Species,
        requested: usize,
        available: usize,
    },

    /// A design cache would go negative.
    #[error("design {design} cache for {what} would drop below zero")]
    CacheUnderflow { design: char, what: String },

    /// A design cache no longer matches the pool it subscribes to.
    #[error("design {design} caches {cached} for {what}, pool holds {actual}")]
    CacheDrift {
        design: char,
        what: String,
        cached: usize,
        actual: usize,
    },

    /// Assembly was requested for a design that cannot be satisfied.
    #[error("design {0} is not eligible for assembly")]
    NotEligible(char),

    /// The pool ran out of filler despite eligibility.
    #[error("design {design} is short {missing} filler flowers")]
    FillerShortfall { design: char, missing: usize },

    /// A design was registered with a pool of another size class.
    #[error("design {design} of size {design_size} cannot join the {pool_size} pool")]
    SizeMismatch {
        design: char,
        design_size: SizeClass,
        pool_size: SizeClass,
    },
}

impl From<EngineError> for BouquetForgeError {
    fn from(err: EngineError) -> Self {
        BouquetForgeError::Engine(err.to_string())
    }
}
