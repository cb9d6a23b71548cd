//! Two-phase biased filler selection.
//!
//! Filler flowers are drawn uniformly without replacement, one entry per
//! available unit, so species are picked in proportion to their surplus.
//!
//! 1. The first phase samples only species no design of the pool requires,
//!    leaving contested species for the designs that depend on them.
//! 2. If that supply runs out, the second phase samples from every species
//!    left in the pool.

use std::collections::BTreeSet;

use bouquetforge_core::{Bouquet, Species};
use rand::seq::index;
use rand::Rng;
use tracing::trace;

use crate::error::EngineError;
use crate::stock::Stock;

/// Which species a filler phase may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillerPhase {
    /// Only species outside the contested set.
    Uncontested,
    /// Every species in the pool.
    Open,
}

impl FillerPhase {
    pub const ORDER: [FillerPhase; 2] = [FillerPhase::Uncontested, FillerPhase::Open];

    fn name(self) -> &'static str {
        match self {
            Self::Uncontested => "uncontested",
            Self::Open => "open",
        }
    }
}

/// Draws up to `quantity` filler flowers from `stock` into `bouquet`.
///
/// Each drawn unit is debited from `stock` immediately. Returns how many
/// flowers could not be drawn, which is zero whenever the stock held at
/// least `quantity` flowers.
pub fn draw_filler<R: Rng + ?Sized>(
    stock: &mut Stock,
    contested: &BTreeSet<Species>,
    quantity: usize,
    rng: &mut R,
    bouquet: &mut Bouquet,
) -> Result<usize, EngineError> {
    let open = BTreeSet::new();
    let mut remaining = quantity;

    for phase in FillerPhase::ORDER {
        if remaining == 0 {
            break;
        }
        let excluded = match phase {
            FillerPhase::Uncontested => contested,
            FillerPhase::Open => &open,
        };
        let population = stock.population(excluded);
        let amount = remaining.min(population.len());

        for i in index::sample(&mut *rng, population.len(), amount) {
            let species = population[i];
            stock.debit(species, 1)?;
            bouquet.add(species, 1);
        }
        remaining -= amount;

        trace!(
            event = "filler_phase",
            phase = phase.name(),
            drawn = amount,
            remaining,
        );
    }

    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use bouquetforge_core::SizeClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::test_utils::{species, stock_of};

    fn contested(tokens: &str) -> BTreeSet<Species> {
        tokens.chars().map(species).collect()
    }

    #[test]
    fn test_uncontested_species_drawn_first() {
        let mut stock = stock_of("aaaabc");
        let mut bouquet = Bouquet::new('A', SizeClass::Small);
        let mut rng = StdRng::seed_from_u64(1);

        let missing = draw_filler(&mut stock, &contested("a"), 2, &mut rng, &mut bouquet).unwrap();

        assert_eq!(missing, 0);
        assert_eq!(bouquet.to_string(), "AS1b1c");
        assert_eq!(stock.available(species('a')), 4);
        assert_eq!(stock.total(), 4);
    }

    #[test]
    fn test_falls_back_to_contested_species() {
        let mut stock = stock_of("aaab");
        let mut bouquet = Bouquet::new('A', SizeClass::Small);
        let mut rng = StdRng::seed_from_u64(2);

        let missing = draw_filler(&mut stock, &contested("a"), 3, &mut rng, &mut bouquet).unwrap();

        assert_eq!(missing, 0);
        assert_eq!(bouquet.count(species('b')), 1);
        assert_eq!(bouquet.count(species('a')), 2);
        assert_eq!(stock.available(species('a')), 1);
    }

    #[test]
    fn test_reports_shortfall() {
        let mut stock = stock_of("ab");
        let mut bouquet = Bouquet::new('A', SizeClass::Small);
        let mut rng = StdRng::seed_from_u64(3);

        let missing = draw_filler(&mut stock, &BTreeSet::new(), 5, &mut rng, &mut bouquet).unwrap();

        assert_eq!(missing, 3);
        assert_eq!(bouquet.total(), 2);
        assert!(stock.is_empty());
    }

    #[test]
    fn test_draws_stay_within_stock() {
        for seed in 0..50 {
            let mut stock = stock_of("aabbbccd");
            let mut bouquet = Bouquet::new('A', SizeClass::Large);
            let mut rng = StdRng::seed_from_u64(seed);

            draw_filler(&mut stock, &contested("d"), 5, &mut rng, &mut bouquet).unwrap();

            assert_eq!(bouquet.total(), 5);
            assert_eq!(stock.total(), 3);
            assert_eq!(bouquet.count(species('d')), 0);
            assert!(bouquet.count(species('a')) <= 2);
            assert!(bouquet.count(species('b')) <= 3);
        }
    }
}
