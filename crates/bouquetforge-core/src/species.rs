//! Species and size class identifiers.

use std::fmt;

use crate::error::ParseError;

/// A flower kind, written as a single lowercase letter on the wire.
///
/// Ordering is lexicographic and only matters for canonical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species(char);

impl Species {
    /// Creates a species from its wire token.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Species` if `token` is not a lowercase ASCII letter.
    pub fn new(token: char) -> Result<Self, ParseError> {
        if token.is_ascii_lowercase() {
            Ok(Self(token))
        } else {
            Err(ParseError::Species(token))
        }
    }

    /// Returns the wire token.
    pub fn token(self) -> char {
        self.0
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Size attribute shared by flowers and designs.
///
/// Pools are fully partitioned by size class: a flower of one class never
/// contributes to a design of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeClass {
    Small,
    Large,
}

impl SizeClass {
    /// Parses the single-letter wire token (`S` or `L`).
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'S' => Some(Self::Small),
            'L' => Some(Self::Large),
            _ => None,
        }
    }

    /// Returns the single-letter wire token.
    pub fn token(self) -> char {
        match self {
            Self::Small => 'S',
            Self::Large => 'L',
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
