//! Authoritative flower counts for one pool.

use std::collections::{BTreeMap, BTreeSet};

use bouquetforge_core::Species;

use crate::error::EngineError;

/// Multiset of available, unallocated flowers.
///
/// Species iterate in ascending order, which keeps seeded filler draws
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stock {
    counts: BTreeMap<Species, usize>,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one flower of `species`.
    pub fn credit(&mut self, species: Species) {
        *self.counts.entry(species).or_insert(0) += 1;
    }

    /// Removes `quantity` flowers of `species`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Overdraw` if fewer than `quantity` are available;
    /// the stock is left unchanged in that case.
    pub fn debit(&mut self, species: Species, quantity: usize) -> Result<(), EngineError> {
        if quantity == 0 {
            return Ok(());
        }
        let available = self.available(species);
        if available < quantity {
            return Err(EngineError::Overdraw {
                species,
                requested: quantity,
                available,
            });
        }
        if available == quantity {
            self.counts.remove(&species);
        } else {
            self.counts.insert(species, available - quantity);
        }
        Ok(())
    }

    /// Returns the available count of `species`.
    pub fn available(&self, species: Species) -> usize {
        self.counts.get(&species).copied().unwrap_or(0)
    }

    /// Returns the number of flowers in the stock.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(species, count)` pairs with a non-zero count.
    pub fn iter(&self) -> impl Iterator<Item = (Species, usize)> + '_ {
        self.counts.iter().map(|(&species, &count)| (species, count))
    }

    /// Expands the stock into one entry per available unit, skipping `excluded`.
    pub fn population(&self, excluded: &BTreeSet<Species>) -> Vec<Species> {
        self.iter()
            .filter(|(species, _)| !excluded.contains(species))
            .flat_map(|(species, count)| std::iter::repeat(species).take(count))
            .collect()
    }
}
