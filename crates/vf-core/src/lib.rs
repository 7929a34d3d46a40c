//! vf-core: Shared types and utilities for VitalForge
//!
//! This crate provides the foundational types used across all VitalForge crates.

mod error;
mod percent;

pub use error::*;
pub use percent::*;
