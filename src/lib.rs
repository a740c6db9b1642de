pub use crate::errors::HarnessError;

pub mod cli;
pub mod config;
pub mod errors;
pub mod harness;
