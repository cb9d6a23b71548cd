//! A single flower arrival.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::species::{SizeClass, Species};

/// One flower from the input stream, e.g. `aS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flower {
    pub species: Species,
    pub size: SizeClass,
}

impl Flower {
    pub fn new(species: Species, size: SizeClass) -> Self {
        Self { species, size }
    }
}

impl FromStr for Flower {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let mut chars = line.chars();

        let species = match chars.next() {
            Some(c) => Species::new(c)?,
            None => return Err(ParseError::Empty),
        };
        let size = match chars.next() {
            Some(c) => SizeClass::from_token(c).ok_or(ParseError::SizeClass(c))?,
            None => return Err(ParseError::MissingSize),
        };

        let rest = chars.as_str();
        if !rest.is_empty() {
            return Err(ParseError::Trailing(rest.to_string()));
        }
        Ok(Self { species, size })
    }
}

impl fmt::Display for Flower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.species, self.size)
    }
}
