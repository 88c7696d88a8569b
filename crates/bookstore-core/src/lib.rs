//! Ambient plumbing shared by the bookstore crates: configuration,
//! database sessions and tracing setup.

pub mod config;
pub mod session;
pub mod tracing;
