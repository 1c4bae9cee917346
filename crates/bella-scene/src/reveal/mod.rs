//! Scroll-triggered reveal transitions
//!
//! A reveal fades a content block in and slides it up into place the first
//! time it intersects the viewport. It never reverts afterwards.

mod easing;
mod state;

pub use easing::{ease_out_cubic, EASE_OUT_CUBIC_CSS};
pub use state::{RevealPhase, RevealState};

/// Opacity before the first intersection
pub const INITIAL_OPACITY: f32 = 0.0;

/// Downward offset (CSS pixels) before the first intersection
pub const INITIAL_OFFSET_PX: f32 = 40.0;

/// Reveal transition duration in milliseconds
pub const REVEAL_DURATION_MS: u32 = 600;
