//! Shared utilities for the console core

pub mod error;
pub mod logging;

pub use error::{ConsoleError, Result};
