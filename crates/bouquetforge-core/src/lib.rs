//! BouquetForge Core - Domain types for streaming bouquet assembly
//!
//! This crate provides the fundamental building blocks shared by the engine:
//! - `Species` and `SizeClass` for describing flowers
//! - `DesignSpec` for a requested bouquet composition
//! - `Flower` for a single arrival on the input stream
//! - `Bouquet` for an assembled result and its output format
//! - Parse and top-level error types

pub mod bouquet;
pub mod design;
pub mod error;
pub mod flower;
pub mod species;


pub use bouquet::Bouquet;
pub use design::DesignSpec;
pub use error::{BouquetForgeError, ParseError, Result};
pub use flower::Flower;
pub use species::{SizeClass, Species};
