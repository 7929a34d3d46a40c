//! VitalForge Vitals
//!
//! Bounded value types for game entities:
//! - Meters: clamped quantities (health, mana, stamina) with
//!   depletion/refill hooks and remainder reporting
//! - Lives: clamped attempt counters with maximum capping
//!
//! ## Usage
//!
//! ```rust
//! use vf_vitals::Meter;
//!
//! let mut health = Meter::new(100).unwrap();
//! health.on_depleted(|| println!("entity down"));
//!
//! // 120 damage against 100 health: 20 could not be applied.
//! let overkill = health.decrease(120).unwrap();
//! assert_eq!(overkill, 20);
//! assert!(health.is_depleted());
//! ```

pub mod lives;
pub mod meter;

pub use lives::Lives;
pub use meter::Meter;
