//! Domain types shared across the bookstore crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never depend on sea-orm here.

pub mod association;
pub mod include;
pub mod stars;
