pub mod config;
pub mod engines;
pub mod error;
pub mod seed;
pub mod types;

pub use error::{GasimError, Result};
