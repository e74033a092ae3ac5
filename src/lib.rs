// src/lib.rs

#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod error;
pub mod file;
pub mod names;
pub mod runner;

pub use error::{Result, RunError};
pub use runner::{run, RunSummary};
