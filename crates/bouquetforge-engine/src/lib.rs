//! BouquetForge Assembly Engine
//!
//! This crate provides the streaming allocation engine:
//! - `Stock`: authoritative per-species counts of one pool
//! - `PoolListener`: credit/debit notifications fanned out by a pool
//! - `BouquetDesign`: per-design availability cache, eligibility and assembly
//! - Two-phase biased filler sampling
//! - `FlowerPool`: one size class, its subscribers and contested species
//! - `Assembler`: the context that owns every pool and the filler RNG
//! - `AssemblyStats` for run metrics

pub mod assembler;
pub mod design;
pub mod error;
pub mod filler;
pub mod listener;
pub mod pool;
pub mod stats;
pub mod stock;

#[cfg(test)]
mod test_utils;

pub use assembler::Assembler;
pub use design::BouquetDesign;
pub use error::EngineError;
pub use listener::PoolListener;
pub use pool::FlowerPool;
pub use stats::AssemblyStats;
pub use stock::Stock;
