//! Assembly context owning every pool.

use std::collections::BTreeMap;

use bouquetforge_config::{AssemblyConfig, EnvironmentMode};
use bouquetforge_core::{Bouquet, DesignSpec, Flower, SizeClass};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::design::BouquetDesign;
use crate::error::EngineError;
use crate::pool::FlowerPool;
use crate::stats::AssemblyStats;

/// Top-level engine state, built once and driven by the input stream.
///
/// Pools are keyed by size class and created on first use, so a flower for a
/// size class without designs is simply stocked in a fresh pool.
///
/// # Example
///
/// ```
/// use bouquetforge_engine::Assembler;
///
/// let mut assembler = Assembler::with_seed(42);
/// assembler.register("AS1a3".parse().unwrap()).unwrap();
///
/// assert!(assembler.accept("aS".parse().unwrap()).unwrap().is_none());
/// assert!(assembler.accept("bS".parse().unwrap()).unwrap().is_none());
/// let bouquet = assembler.accept("cS".parse().unwrap()).unwrap().unwrap();
/// assert_eq!(bouquet.to_string(), "AS1a1b1c");
/// ```
#[derive(Debug)]
pub struct Assembler {
    pools: BTreeMap<SizeClass, FlowerPool>,
    rng: StdRng,
    mode: EnvironmentMode,
    stats: AssemblyStats,
}

impl Assembler {
    /// Creates an assembler from configuration.
    pub fn new(config: &AssemblyConfig) -> Self {
        let rng = match config.effective_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(rng, config.environment_mode)
    }

    /// Creates a reproducible assembler.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), EnvironmentMode::Reproducible)
    }

    fn with_rng(rng: StdRng, mode: EnvironmentMode) -> Self {
        let mut stats = AssemblyStats::default();
        stats.start();
        Self {
            pools: BTreeMap::new(),
            rng,
            mode,
            stats,
        }
    }

    pub fn environment_mode(&self) -> EnvironmentMode {
        self.mode
    }

    pub fn stats(&self) -> &AssemblyStats {
        &self.stats
    }

    /// Returns the pool of `size`, if any design or flower has used it.
    pub fn pool(&self, size: SizeClass) -> Option<&FlowerPool> {
        self.pools.get(&size)
    }

    /// Registers a design with the pool of its size class.
    pub fn register(&mut self, spec: DesignSpec) -> Result<(), EngineError> {
        let size = spec.size();
        self.pools
            .entry(size)
            .or_insert_with(|| FlowerPool::new(size))
            .register_design(BouquetDesign::new(spec))?;
        self.stats.record_design();
        Ok(())
    }

    /// Processes one arrival end to end, returning the bouquet it completed.
    pub fn accept(&mut self, flower: Flower) -> Result<Option<Bouquet>, EngineError> {
        self.stats.record_flower();
        let pool = self
            .pools
            .entry(flower.size)
            .or_insert_with(|| FlowerPool::new(flower.size));

        let bouquet = pool.credit(flower.species, &mut self.rng)?;
        if self.mode.is_asserted() {
            pool.verify()?;
        }
        if let Some(bouquet) = &bouquet {
            self.stats.record_bouquet(bouquet);
        }
        Ok(bouquet)
    }

    /// Checks every pool's design caches against its stock.
    pub fn verify(&self) -> Result<(), EngineError> {
        self.pools.values().try_for_each(FlowerPool::verify)
    }

    /// Logs the end-of-run summary.
    pub fn log_summary(&self) {
        let pending: usize = self.pools.values().map(|p| p.stock().total()).sum();
        info!(
            event = "assembly_end",
            designs = self.stats.designs_registered,
            flowers = self.stats.flowers_received,
            bouquets = self.stats.bouquets_assembled,
            consumed = self.stats.flowers_consumed,
            pending = pending as u64,
            duration_ms = self.stats.elapsed().as_millis() as u64,
        );
    }
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;
