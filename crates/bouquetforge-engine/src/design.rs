//! A bouquet design subscribed to a flower pool.

use std::collections::{BTreeMap, BTreeSet};

use bouquetforge_core::{Bouquet, DesignSpec, ParseError, SizeClass, Species};
use rand::Rng;
use tracing::debug;

use crate::error::EngineError;
use crate::filler::draw_filler;
use crate::listener::PoolListener;
use crate::stock::Stock;

/// One requested bouquet composition and its view of pool availability.
///
/// The design caches, for each required species, the pool's count of that
/// species, plus a single filler count covering every other species. The
/// cache is only ever updated through [`PoolListener`] notifications.
///
/// A design has two observable states. It becomes eligible on a credit that
/// satisfies [`is_eligible`](Self::is_eligible) and drops back once the
/// debits of its own assembly are applied. It may fire any number of times.
#[derive(Debug, Clone)]
pub struct BouquetDesign {
    spec: DesignSpec,
    available: BTreeMap<Species, usize>,
    available_filler: usize,
}

impl BouquetDesign {
    /// Creates a design with empty caches.
    pub fn new(spec: DesignSpec) -> Self {
        let available = spec.required().keys().map(|&species| (species, 0)).collect();
        Self {
            spec,
            available,
            available_filler: 0,
        }
    }

    /// Parses one design line into a design with empty caches.
    pub fn from_specification(line: &str) -> Result<Self, ParseError> {
        Ok(Self::new(line.parse()?))
    }

    pub fn spec(&self) -> &DesignSpec {
        &self.spec
    }

    pub fn name(&self) -> char {
        self.spec.name()
    }

    pub fn size(&self) -> SizeClass {
        self.spec.size()
    }

    /// Returns the cached count of `species`, or `None` if it is not required.
    pub fn available(&self, species: Species) -> Option<usize> {
        self.available.get(&species).copied()
    }

    /// Returns the cached count of all non-required species.
    pub fn available_filler(&self) -> usize {
        self.available_filler
    }

    /// Replaces the cache with the current contents of `stock`.
    pub(crate) fn sync_with(&mut self, stock: &Stock) {
        self.available_filler = 0;
        for count in self.available.values_mut() {
            *count = 0;
        }
        for (species, count) in stock.iter() {
            match self.available.get_mut(&species) {
                Some(cached) => *cached = count,
                None => self.available_filler += count,
            }
        }
    }

    /// Checks whether the cached availability covers a full bouquet.
    ///
    /// Every required species must meet its count; only then is the total of
    /// cached required flowers plus filler compared against the bouquet size.
    pub fn is_eligible(&self) -> bool {
        let mut total = self.available_filler;
        for (&species, &need) in self.spec.required() {
            let cached = self.available.get(&species).copied().unwrap_or(0);
            if cached < need {
                return false;
            }
            total += cached;
        }
        total >= self.spec.total()
    }

    /// Debits a bouquet's worth of flowers from `stock`.
    ///
    /// Required flowers are taken first, exactly as specified. Remaining
    /// slots are filled by two-phase sampling that avoids `contested`
    /// species while uncontested surplus lasts.
    ///
    /// Draws run against a scratch copy of `stock`, committed only once the
    /// bouquet is complete; on error `stock` is left as it was.
    ///
    /// The design's own cache is untouched; the owning pool broadcasts the
    /// resulting debits to every subscriber, this design included.
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        stock: &mut Stock,
        contested: &BTreeSet<Species>,
        rng: &mut R,
    ) -> Result<Bouquet, EngineError> {
        if !self.is_eligible() {
            return Err(EngineError::NotEligible(self.name()));
        }

        let mut scratch = stock.clone();
        let mut bouquet = Bouquet::new(self.name(), self.size());
        for (&species, &quantity) in self.spec.required() {
            scratch.debit(species, quantity)?;
            bouquet.add(species, quantity);
        }

        let filler = self.spec.filler_count();
        if filler > 0 {
            let missing = draw_filler(&mut scratch, contested, filler, rng, &mut bouquet)?;
            if missing > 0 {
                return Err(EngineError::FillerShortfall {
                    design: self.name(),
                    missing,
                });
            }
        }
        *stock = scratch;

        debug!(
            event = "bouquet_assembled",
            design = %self.name(),
            size = %self.size(),
            bouquet = %bouquet,
        );
        Ok(bouquet)
    }

    /// Formats `bouquet` as an output line.
    pub fn format(&self, bouquet: &Bouquet) -> String {
        bouquet.to_string()
    }
}

impl PoolListener for BouquetDesign {
    fn on_credit(&mut self, species: Species) -> bool {
        match self.available.get_mut(&species) {
            Some(count) => *count += 1,
            None => self.available_filler += 1,
        }
        self.is_eligible()
    }

    fn on_debit(&mut self, species: Species, quantity: usize) -> Result<(), EngineError> {
        let design = self.spec.name();
        match self.available.get_mut(&species) {
            Some(count) => {
                *count = count
                    .checked_sub(quantity)
                    .ok_or_else(|| EngineError::CacheUnderflow {
                        design,
                        what: species.to_string(),
                    })?;
            }
            None => {
                self.available_filler = self
                    .available_filler
                    .checked_sub(quantity)
                    .ok_or_else(|| EngineError::CacheUnderflow {
                        design,
                        what: "filler".to_string(),
                    })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "design_tests.rs"]
mod tests;
