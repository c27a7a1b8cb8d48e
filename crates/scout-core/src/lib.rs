pub mod backend;
pub mod config;
pub mod provider;
pub mod query;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

pub use scout_types::*;
