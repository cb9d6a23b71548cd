//! Flower pool for one size class.

use std::collections::BTreeSet;

use bouquetforge_core::{Bouquet, SizeClass, Species};
use rand::Rng;
use tracing::debug;

use crate::design::BouquetDesign;
use crate::error::EngineError;
use crate::listener::PoolListener;
use crate::stock::Stock;

/// The authoritative stock of one size class and the designs watching it.
///
/// Every mutation is fanned out to the registered designs in registration
/// order. Registration order is also the tie-break when several designs
/// become eligible on the same arrival: the first one wins the flower.
#[derive(Debug, Clone)]
pub struct FlowerPool {
    size: SizeClass,
    stock: Stock,
    contested: BTreeSet<Species>,
    designs: Vec<BouquetDesign>,
}

impl FlowerPool {
    pub fn new(size: SizeClass) -> Self {
        Self {
            size,
            stock: Stock::new(),
            contested: BTreeSet::new(),
            designs: Vec::new(),
        }
    }

    pub fn size(&self) -> SizeClass {
        self.size
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// Species required by at least one registered design.
    pub fn contested(&self) -> &BTreeSet<Species> {
        &self.contested
    }

    pub fn designs(&self) -> &[BouquetDesign] {
        &self.designs
    }

    /// Appends `design` to the subscribers and marks its required species
    /// as contested.
    ///
    /// A design joining a pool that already holds flowers starts from the
    /// current stock.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SizeMismatch` if the design is of another size class.
    pub fn register_design(&mut self, mut design: BouquetDesign) -> Result<(), EngineError> {
        if design.size() != self.size {
            return Err(EngineError::SizeMismatch {
                design: design.name(),
                design_size: design.size(),
                pool_size: self.size,
            });
        }
        if !self.stock.is_empty() {
            design.sync_with(&self.stock);
        }
        self.contested
            .extend(design.spec().required().keys().copied());

        debug!(
            event = "design_registered",
            design = %design.name(),
            size = %self.size,
            required = design.spec().required().len(),
            total = design.spec().total(),
        );
        self.designs.push(design);
        Ok(())
    }

    /// Adds one flower and assembles at most one bouquet.
    ///
    /// Every design is credited in registration order. The first design that
    /// reports eligibility assembles against the stock, and the removed
    /// flowers are then broadcast as debits to every design. Designs are not
    /// re-checked after the debits; they get another chance on the next credit.
    pub fn credit<R: Rng + ?Sized>(
        &mut self,
        species: Species,
        rng: &mut R,
    ) -> Result<Option<Bouquet>, EngineError> {
        self.stock.credit(species);

        let mut winner = None;
        for (index, design) in self.designs.iter_mut().enumerate() {
            if design.on_credit(species) && winner.is_none() {
                winner = Some(index);
            }
        }

        let Some(index) = winner else {
            return Ok(None);
        };
        let bouquet = self.designs[index].assemble(&mut self.stock, &self.contested, rng)?;
        for (species, quantity) in bouquet.iter() {
            self.broadcast_debit(species, quantity)?;
        }
        Ok(Some(bouquet))
    }

    /// Removes `quantity` flowers of `species` and notifies every design.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Overdraw` if the stock holds fewer flowers.
    pub fn debit(&mut self, species: Species, quantity: usize) -> Result<(), EngineError> {
        self.stock.debit(species, quantity)?;
        self.broadcast_debit(species, quantity)
    }

    fn broadcast_debit(&mut self, species: Species, quantity: usize) -> Result<(), EngineError> {
        for design in &mut self.designs {
            design.on_debit(species, quantity)?;
        }
        Ok(())
    }

    /// Checks every design cache against the stock.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::CacheDrift` for the first mismatch found.
    pub fn verify(&self) -> Result<(), EngineError> {
        for design in &self.designs {
            let mut required_total = 0;
            for &species in design.spec().required().keys() {
                let cached = design.available(species).unwrap_or(0);
                let actual = self.stock.available(species);
                if cached != actual {
                    return Err(EngineError::CacheDrift {
                        design: design.name(),
                        what: species.to_string(),
                        cached,
                        actual,
                    });
                }
                required_total += actual;
            }
            let actual = self.stock.total() - required_total;
            if design.available_filler() != actual {
                return Err(EngineError::CacheDrift {
                    design: design.name(),
                    what: "filler".to_string(),
                    cached: design.available_filler(),
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
