//! Tests for design caches, eligibility and assembly.

use std::collections::BTreeSet;

use bouquetforge_core::ParseError;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::test_utils::{design, species, stock_of};

fn credit_all(design: &mut BouquetDesign, tokens: &str) -> Vec<bool> {
    tokens.chars().map(|t| design.on_credit(species(t))).collect()
}

#[test]
fn test_credit_splits_required_and_filler() {
    let mut design = design("AS2a1b5");
    credit_all(&mut design, "aabcd");

    assert_eq!(design.available(species('a')), Some(2));
    assert_eq!(design.available(species('b')), Some(1));
    assert_eq!(design.available(species('c')), None);
    assert_eq!(design.available_filler(), 2);
}

#[test]
fn test_single_required_scenario() {
    let mut design = design("AS1a3");
    assert_eq!(credit_all(&mut design, "abc"), vec![false, false, true]);
}

#[test]
fn test_required_shortfall_blocks_eligibility() {
    let mut design = design("AS2a3");
    // Plenty of total supply, but only one `a`.
    assert_eq!(credit_all(&mut design, "abcde"), vec![false; 5]);
    assert!(design.on_credit(species('a')));
}

#[test]
fn test_surplus_required_counts_toward_total() {
    let mut design = design("AS1a3");
    assert_eq!(credit_all(&mut design, "aaa"), vec![false, false, true]);
}

#[test]
fn test_filler_only_design_gates_on_pool_total() {
    let mut design = design("FS3");
    assert_eq!(credit_all(&mut design, "xyz"), vec![false, false, true]);
}

#[test]
fn test_zero_total_design_is_always_eligible() {
    let design = design("ZS0");
    assert!(design.is_eligible());
}

#[test]
fn test_debit_mirrors_credit() {
    let mut design = design("AS1a2");
    credit_all(&mut design, "abb");

    design.on_debit(species('a'), 1).unwrap();
    design.on_debit(species('b'), 2).unwrap();

    assert_eq!(design.available(species('a')), Some(0));
    assert_eq!(design.available_filler(), 0);
    assert!(!design.is_eligible());
}

#[test]
fn test_debit_underflow_is_reported() {
    let mut design = design("AS1a2");
    design.on_credit(species('b'));

    assert_eq!(
        design.on_debit(species('a'), 1),
        Err(EngineError::CacheUnderflow {
            design: 'A',
            what: "a".to_string()
        })
    );
    assert!(matches!(
        design.on_debit(species('b'), 2),
        Err(EngineError::CacheUnderflow { .. })
    ));
}

#[test]
fn test_assemble_takes_required_then_uncontested_filler() {
    let mut design = design("AS1a3");
    credit_all(&mut design, "abc");
    let mut stock = stock_of("abc");
    let contested: BTreeSet<_> = [species('a')].into_iter().collect();
    let mut rng = StdRng::seed_from_u64(0);

    let bouquet = design.assemble(&mut stock, &contested, &mut rng).unwrap();

    assert_eq!(design.format(&bouquet), "AS1a1b1c");
    assert!(stock.is_empty());
}

#[test]
fn test_assemble_without_filler_is_deterministic() {
    let mut design = design("DS3a2b5");
    credit_all(&mut design, "aabbbac");
    let mut stock = stock_of("aabbbac");
    let mut rng = StdRng::seed_from_u64(0);

    let bouquet = design
        .assemble(&mut stock, &BTreeSet::new(), &mut rng)
        .unwrap();

    assert_eq!(bouquet.to_string(), "DS3a2b");
    assert_eq!(stock.available(species('b')), 1);
    assert_eq!(stock.available(species('c')), 1);
}

#[test]
fn test_assemble_conserves_total_size() {
    for seed in 0..20 {
        let mut design = design("AL1a6");
        let tokens = "abcabcdd";
        credit_all(&mut design, tokens);
        let mut stock = stock_of(tokens);
        let contested: BTreeSet<_> = [species('a'), species('d')].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(seed);

        let bouquet = design.assemble(&mut stock, &contested, &mut rng).unwrap();

        assert_eq!(bouquet.total(), 6);
        assert_eq!(stock.total(), 2);
        assert!(bouquet.count(species('a')) >= 1);
    }
}

#[test]
fn test_assemble_rejects_ineligible_design() {
    let design = design("AS1a3");
    let mut stock = stock_of("a");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        design.assemble(&mut stock, &BTreeSet::new(), &mut rng),
        Err(EngineError::NotEligible('A'))
    );
    assert_eq!(stock.total(), 1);
}

#[test]
fn test_filler_shortfall_leaves_stock_untouched() {
    // The cache claims three flowers; the stock only holds two.
    let mut design = design("AS3");
    credit_all(&mut design, "abc");
    let mut stock = stock_of("ab");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        design.assemble(&mut stock, &BTreeSet::new(), &mut rng),
        Err(EngineError::FillerShortfall {
            design: 'A',
            missing: 1
        })
    );
    assert_eq!(stock, stock_of("ab"));
}

#[test]
fn test_required_overdraw_leaves_stock_untouched() {
    let mut design = design("AS2a1b4");
    credit_all(&mut design, "aabb");
    let mut stock = stock_of("ab");
    let mut rng = StdRng::seed_from_u64(0);

    assert!(matches!(
        design.assemble(&mut stock, &BTreeSet::new(), &mut rng),
        Err(EngineError::Overdraw { .. })
    ));
    assert_eq!(stock, stock_of("ab"));
}

#[test]
fn test_sync_with_stock() {
    let mut design = design("AS2a4");
    design.sync_with(&stock_of("aabbc"));

    assert_eq!(design.available(species('a')), Some(2));
    assert_eq!(design.available_filler(), 3);
    assert!(design.is_eligible());
}

#[test]
fn test_from_specification_propagates_parse_errors() {
    assert_eq!(
        BouquetDesign::from_specification("aS1a1").unwrap_err(),
        ParseError::DesignName('a')
    );
}
