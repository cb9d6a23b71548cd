//! Assembled bouquets and their output format.

use std::collections::BTreeMap;
use std::fmt;

use crate::species::{SizeClass, Species};

/// A bouquet assembled for one design.
///
/// Counts are kept per species in ascending order, so the `Display` output
/// depends only on content, never on the order flowers were added.
///
/// # Example
///
/// ```
/// use bouquetforge_core::{Bouquet, SizeClass, Species};
///
/// let mut bouquet = Bouquet::new('D', SizeClass::Small);
/// bouquet.add(Species::new('b').unwrap(), 2);
/// bouquet.add(Species::new('a').unwrap(), 3);
///
/// assert_eq!(bouquet.to_string(), "DS3a2b");
/// assert_eq!(bouquet.total(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bouquet {
    design: char,
    size: SizeClass,
    flowers: BTreeMap<Species, usize>,
}

impl Bouquet {
    pub fn new(design: char, size: SizeClass) -> Self {
        Self {
            design,
            size,
            flowers: BTreeMap::new(),
        }
    }

    pub fn design(&self) -> char {
        self.design
    }

    pub fn size(&self) -> SizeClass {
        self.size
    }

    /// Adds `quantity` flowers of `species`. Zero quantities are ignored.
    pub fn add(&mut self, species: Species, quantity: usize) {
        if quantity > 0 {
            *self.flowers.entry(species).or_insert(0) += quantity;
        }
    }

    /// Returns the count of `species` in the bouquet.
    pub fn count(&self, species: Species) -> usize {
        self.flowers.get(&species).copied().unwrap_or(0)
    }

    /// Returns the total number of flowers.
    pub fn total(&self) -> usize {
        self.flowers.values().sum()
    }

    /// Iterates `(species, count)` pairs, species ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Species, usize)> + '_ {
        self.flowers.iter().map(|(&species, &count)| (species, count))
    }
}

impl fmt::Display for Bouquet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.design, self.size)?;
        for (species, count) in &self.flowers {
            write!(f, "{}{}", count, species)?;
        }
        Ok(())
    }
}
