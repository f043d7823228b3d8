//! # Tessera Configuration Library
//!
//! Type-safe configuration for tessera card boards: grid policy, gaps, title band,
//! modal sizing and animation cadence.
//!
//! ## Features
//!
//! - Multi-format support (TOML, JSON, YAML)
//! - Serde defaults for every option, so partial files are valid
//! - Validation of the recognized option ranges
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tessera_config::ConfigLoader;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::load_from_file("board.toml")?;
//!     println!("{} columns", config.columns);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod loader;

pub use config::*;
pub use error::*;
pub use loader::*;
