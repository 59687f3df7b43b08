//! Library side of the `catalog-validator` binary.

pub mod config;
pub mod logging;
pub mod runner;
