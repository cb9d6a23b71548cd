//! Bouquet design specifications and the design-line grammar.
//!
//! A design line reads `<name><size>(<count><species>)*<total>`, for example
//! `DS3a2b5`: design `D`, small, three `a` and two `b`, five flowers in total.
//! Species tokens are never digits, so the final numeric run is always the total.

use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use crate::error::ParseError;
use crate::species::{SizeClass, Species};

/// An immutable bouquet composition request.
///
/// Design names are not unique; two designs sharing a name are independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignSpec {
    name: char,
    size: SizeClass,
    required: BTreeMap<Species, usize>,
    total: usize,
}

impl DesignSpec {
    /// Creates a design, validating that the total covers every required flower.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::DesignName` for a non-uppercase name and
    /// `ParseError::TotalTooSmall` when `total` is below the required sum.
    pub fn new(
        name: char,
        size: SizeClass,
        required: BTreeMap<Species, usize>,
        total: usize,
    ) -> Result<Self, ParseError> {
        if !name.is_ascii_uppercase() {
            return Err(ParseError::DesignName(name));
        }
        let required_sum: usize = required.values().sum();
        if total < required_sum {
            return Err(ParseError::TotalTooSmall {
                total,
                required: required_sum,
            });
        }
        Ok(Self {
            name,
            size,
            required,
            total,
        })
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn size(&self) -> SizeClass {
        self.size
    }

    /// Returns the required composition, species ascending.
    pub fn required(&self) -> &BTreeMap<Species, usize> {
        &self.required
    }

    /// Returns how many of `species` the design strictly requires.
    pub fn required_count(&self, species: Species) -> Option<usize> {
        self.required.get(&species).copied()
    }

    /// Returns true if `species` is named in the required composition.
    pub fn requires(&self, species: Species) -> bool {
        self.required.contains_key(&species)
    }

    /// Returns the total bouquet size.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of flowers beyond the required composition.
    pub fn filler_count(&self) -> usize {
        self.total - self.required.values().sum::<usize>()
    }
}

impl FromStr for DesignSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().char_indices().peekable();

        let name = match chars.next() {
            Some((_, c)) if c.is_ascii_uppercase() => c,
            Some((_, c)) => return Err(ParseError::DesignName(c)),
            None => return Err(ParseError::Empty),
        };
        let size = match chars.next() {
            Some((_, c)) => SizeClass::from_token(c).ok_or(ParseError::SizeClass(c))?,
            None => return Err(ParseError::MissingSize),
        };

        let mut required = BTreeMap::new();
        loop {
            let digits = take_digits(&mut chars);
            if digits.is_empty() {
                return match chars.next() {
                    Some((position, found)) => Err(ParseError::Unexpected { found, position }),
                    None => Err(ParseError::MissingTotal),
                };
            }
            let count = parse_count(&digits)?;

            match chars.next() {
                None => return DesignSpec::new(name, size, required, count),
                Some((_, c)) if c.is_ascii_lowercase() => {
                    // A repeated species keeps its last count.
                    required.insert(Species::new(c)?, count);
                }
                Some((position, found)) => {
                    return Err(ParseError::Unexpected { found, position });
                }
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut digits = String::new();
    while let Some((_, c)) = chars.next_if(|(_, c)| c.is_ascii_digit()) {
        digits.push(c);
    }
    digits
}

fn parse_count(digits: &str) -> Result<usize, ParseError> {
    digits
        .parse::<usize>()
        .map_err(|_| ParseError::Count(digits.to_string()))
}
