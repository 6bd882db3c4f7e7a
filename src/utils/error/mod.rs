//! Error handling for the console core
//!
//! This module defines all error types used throughout the crate.

pub mod error;

pub use error::{ConsoleError, Result};
