//! Error types for BouquetForge

use thiserror::Error;

/// Error raised when a design or flower line does not match the wire grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty line")]
    Empty,

    #[error("invalid design name '{0}': expected an uppercase letter")]
    DesignName(char),

    #[error("invalid size class '{0}': expected 'S' or 'L'")]
    SizeClass(char),

    #[error("missing size class")]
    MissingSize,

    #[error("invalid species '{0}': expected a lowercase letter")]
    Species(char),

    #[error("missing bouquet total")]
    MissingTotal,

    #[error("unexpected character '{found}' at offset {position}")]
    Unexpected { found: char, position: usize },

    #[error("count '{0}' is out of range")]
    Count(String),

    #[error("total {total} is smaller than the {required} required flowers")]
    TotalTooSmall { total: usize, required: usize },

    #[error("trailing input '{0}'")]
    Trailing(String),
}

/// Main error type for BouquetForge operations
#[derive(Debug, Error)]
pub enum BouquetForgeError {
    /// Malformed input line; the run cannot continue.
    #[error("Parse error on line {line} ('{text}'): {source}")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseError,
    },

    /// Error in assembly configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine consistency failure (should not occur in normal operation)
    #[error("Engine error: {0}")]
    Engine(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for BouquetForge operations
pub type Result<T> = std::result::Result<T, BouquetForgeError>;
