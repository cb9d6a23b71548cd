//! BouquetForge - streaming bouquet assembly
//!
//! Designs are registered up front, then flowers arrive one at a time. Each
//! arrival is credited to the pool of its size class, and the first design
//! the arrival completes assembles a bouquet from the shared pool.
//!
//! # Quick Start
//!
//! ```
//! use bouquetforge::prelude::*;
//!
//! let input = "AS1a3\n\naS\nbS\ncS\n";
//! let mut output = Vec::new();
//! let mut assembler = Assembler::with_seed(0);
//!
//! run_stream(input.as_bytes(), &mut output, &mut assembler).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "AS1a1b1c\n");
//! ```

#[cfg(feature = "console")]
pub mod console;
pub mod stream;

pub use bouquetforge_config::{AssemblyConfig, ConfigError, EnvironmentMode};
pub use bouquetforge_core::{
    Bouquet, BouquetForgeError, DesignSpec, Flower, ParseError, Result, SizeClass, Species,
};
pub use bouquetforge_engine::{
    Assembler, AssemblyStats, BouquetDesign, EngineError, FlowerPool, PoolListener, Stock,
};
pub use stream::run_stream;

pub mod prelude {
    pub use crate::stream::run_stream;
    pub use bouquetforge_config::{AssemblyConfig, EnvironmentMode};
    pub use bouquetforge_core::{Bouquet, BouquetForgeError, DesignSpec, Flower, SizeClass, Species};
    pub use bouquetforge_engine::Assembler;
}
