//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod bounds;
pub mod error;

pub use bounds::{LEGENDARY_QUALITY, QUALITY_CAP, QUALITY_FLOOR, clamp_quality};
pub use error::{DomainError, DomainResult};
