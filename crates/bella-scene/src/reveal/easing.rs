//! Reveal easing curve

/// Ease-out cubic: fast start, gentle settle
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// CSS timing function that tracks [`ease_out_cubic`]
pub const EASE_OUT_CUBIC_CSS: &str = "cubic-bezier(0.33, 1, 0.68, 1)";
