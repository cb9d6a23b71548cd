//! Assembly run statistics.

use std::time::{Duration, Instant};

use bouquetforge_core::Bouquet;

/// Aggregate metrics for one pass over the flower stream.
///
/// # Example
///
/// ```
/// use bouquetforge_core::{Bouquet, SizeClass, Species};
/// use bouquetforge_engine::AssemblyStats;
///
/// let mut stats = AssemblyStats::default();
/// stats.start();
/// stats.record_flower();
/// stats.record_flower();
///
/// let mut bouquet = Bouquet::new('A', SizeClass::Small);
/// bouquet.add(Species::new('a').unwrap(), 2);
/// stats.record_bouquet(&bouquet);
///
/// assert_eq!(stats.flowers_received, 2);
/// assert_eq!(stats.bouquets_assembled, 1);
/// assert_eq!(stats.flowers_consumed, 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct AssemblyStats {
    start_time: Option<Instant>,
    /// Designs registered across all pools.
    pub designs_registered: u64,
    /// Flowers accepted from the stream.
    pub flowers_received: u64,
    /// Bouquets emitted.
    pub bouquets_assembled: u64,
    /// Flowers removed from the pools by assembly.
    pub flowers_consumed: u64,
}

impl AssemblyStats {
    /// Marks the start of the run.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_design(&mut self) {
        self.designs_registered += 1;
    }

    pub fn record_flower(&mut self) {
        self.flowers_received += 1;
    }

    pub fn record_bouquet(&mut self, bouquet: &Bouquet) {
        self.bouquets_assembled += 1;
        self.flowers_consumed += bouquet.total() as u64;
    }

    /// Returns the number of flowers still waiting in the pools.
    pub fn flowers_pending(&self) -> u64 {
        self.flowers_received - self.flowers_consumed
    }
}
