//! Shared fixtures for engine tests.

use bouquetforge_core::{DesignSpec, Species};

use crate::design::BouquetDesign;
use crate::stock::Stock;

pub fn species(token: char) -> Species {
    Species::new(token).unwrap()
}

pub fn spec(line: &str) -> DesignSpec {
    line.parse().unwrap()
}

pub fn design(line: &str) -> BouquetDesign {
    BouquetDesign::from_specification(line).unwrap()
}

/// Builds a stock holding one flower per character of `tokens`.
pub fn stock_of(tokens: &str) -> Stock {
    let mut stock = Stock::new();
    for token in tokens.chars() {
        stock.credit(species(token));
    }
    stock
}
