//! Configuration module - settings loading and logging bootstrap

pub mod logging;
pub mod settings;

pub use settings::*;
