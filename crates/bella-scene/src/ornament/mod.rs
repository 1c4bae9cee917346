//! Decorative animated spheres
//!
//! An [`Ornament`] is an oscillator, not a physics body: its position is a
//! pure function of an accumulated phase. A [`Plate`] is a small group of
//! garnish spheres spinning together.

mod floating;
mod plate;

pub use floating::{Drift, Material, Ornament, OrnamentParams};
pub use plate::{Garnish, Plate, PlateParams};
