//! Typed client for the remote administration API
//!
//! Thin data-fetching layer: every console feature talks to the API through
//! these methods. Authentication is ambient via the shared token store.

mod auth;
mod client;
mod dashboard;
mod permissions;
mod projects;
mod scans;
pub mod types;
mod users;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use types::*;
