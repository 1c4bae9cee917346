//! Fire-once reveal state machine

use super::{ease_out_cubic, INITIAL_OFFSET_PX, INITIAL_OPACITY, REVEAL_DURATION_MS};

/// When (if ever) the reveal was triggered
#[derive(Clone, Copy, Debug, PartialEq)]
enum Trigger {
    Pending,
    At(f64),
    Immediate,
}

/// Coarse phase of a reveal at a point in time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet intersected
    Hidden,
    /// Triggered, still inside the caller-supplied delay
    Delayed,
    /// Transition in progress
    Animating,
    /// Fully visible, resting position
    Revealed,
}

/// Reveal state for one wrapped content block
///
/// Each wrapper owns its own state; nothing is shared between instances.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealState {
    delay_ms: u32,
    trigger: Trigger,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RevealState {
    /// Create a hidden reveal with a start delay
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            trigger: Trigger::Pending,
        }
    }

    /// Delay between intersection and the start of the transition
    #[inline]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Feed an intersection observation.
    ///
    /// Returns `true` only for the observation that triggers the reveal.
    /// Later observations, intersecting or not, are ignored.
    pub fn observe(&mut self, intersecting: bool, now_ms: f64) -> bool {
        if !intersecting || self.is_triggered() {
            return false;
        }
        self.trigger = Trigger::At(now_ms);
        true
    }

    /// Skip the transition and show the content immediately.
    ///
    /// Used when intersection detection is unavailable.
    pub fn force_visible(&mut self) {
        self.trigger = Trigger::Immediate;
    }

    /// Whether the reveal has fired
    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.trigger != Trigger::Pending
    }

    /// Whether the content was forced visible without a transition
    #[inline]
    pub fn is_forced(&self) -> bool {
        self.trigger == Trigger::Immediate
    }

    /// Raw progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        match self.trigger {
            Trigger::Pending => 0.0,
            Trigger::Immediate => 1.0,
            Trigger::At(start) => {
                let elapsed = (now_ms - start - self.delay_ms as f64) as f32;
                (elapsed / REVEAL_DURATION_MS as f32).clamp(0.0, 1.0)
            }
        }
    }

    /// Eased progress
    #[inline]
    pub fn eased_progress(&self, now_ms: f64) -> f32 {
        ease_out_cubic(self.progress(now_ms))
    }

    /// Phase at `now_ms`
    pub fn phase(&self, now_ms: f64) -> RevealPhase {
        match self.trigger {
            Trigger::Pending => RevealPhase::Hidden,
            Trigger::Immediate => RevealPhase::Revealed,
            Trigger::At(start) => {
                if now_ms < start + self.delay_ms as f64 {
                    RevealPhase::Delayed
                } else if self.progress(now_ms) < 1.0 {
                    RevealPhase::Animating
                } else {
                    RevealPhase::Revealed
                }
            }
        }
    }

    /// Whether the transition has finished
    #[inline]
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.phase(now_ms) == RevealPhase::Revealed
    }

    /// Rendered opacity at `now_ms`
    pub fn opacity(&self, now_ms: f64) -> f32 {
        let t = self.eased_progress(now_ms);
        INITIAL_OPACITY + (1.0 - INITIAL_OPACITY) * t
    }

    /// Rendered downward offset (CSS pixels) at `now_ms`
    pub fn offset_px(&self, now_ms: f64) -> f32 {
        INITIAL_OFFSET_PX * (1.0 - self.eased_progress(now_ms))
    }

    /// Opacity the content is heading towards
    #[inline]
    pub fn target_opacity(&self) -> f32 {
        if self.is_triggered() {
            1.0
        } else {
            INITIAL_OPACITY
        }
    }

    /// Offset the content is heading towards
    #[inline]
    pub fn target_offset_px(&self) -> f32 {
        if self.is_triggered() {
            0.0
        } else {
            INITIAL_OFFSET_PX
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_before_intersection() {
        let reveal = RevealState::new(0);
        assert_eq!(reveal.phase(1_000.0), RevealPhase::Hidden);
        assert!((reveal.opacity(1_000.0) - INITIAL_OPACITY).abs() < 0.001);
        assert!(reveal.opacity(1_000.0) < 1.0);
        assert!((reveal.offset_px(1_000.0) - INITIAL_OFFSET_PX).abs() < 0.001);
    }

    #[test]
    fn test_non_intersecting_observation_does_not_trigger() {
        let mut reveal = RevealState::new(0);
        assert!(!reveal.observe(false, 10.0));
        assert!(!reveal.is_triggered());
    }

    #[test]
    fn test_fires_once() {
        let mut reveal = RevealState::new(0);
        assert!(reveal.observe(true, 100.0));

        // Toggle in and out of view several times
        assert!(!reveal.observe(false, 200.0));
        assert!(!reveal.observe(true, 300.0));
        assert!(!reveal.observe(false, 400.0));

        // Still timed from the first hit
        let end = 100.0 + REVEAL_DURATION_MS as f64;
        assert!((reveal.opacity(end) - 1.0).abs() < 0.001);
        assert!(reveal.offset_px(end).abs() < 0.001);
        assert!(reveal.is_settled(end));
    }

    #[test]
    fn test_delay_holds_initial_state() {
        let mut reveal = RevealState::new(200);
        reveal.observe(true, 0.0);

        assert_eq!(reveal.phase(100.0), RevealPhase::Delayed);
        assert!((reveal.opacity(100.0) - INITIAL_OPACITY).abs() < 0.001);

        assert_eq!(reveal.phase(300.0), RevealPhase::Animating);
        let mid = reveal.opacity(300.0);
        assert!(mid > INITIAL_OPACITY && mid < 1.0);

        assert_eq!(reveal.phase(200.0 + REVEAL_DURATION_MS as f64), RevealPhase::Revealed);
    }

    #[test]
    fn test_opacity_monotonic_after_trigger() {
        let mut reveal = RevealState::new(0);
        reveal.observe(true, 0.0);
        let mut prev = reveal.opacity(0.0);
        for step in 1..=12 {
            let o = reveal.opacity(step as f64 * 50.0);
            assert!(o >= prev);
            prev = o;
        }
    }

    #[test]
    fn test_force_visible_fails_open() {
        let mut reveal = RevealState::new(500);
        assert!(!reveal.is_forced());
        reveal.force_visible();
        assert!(reveal.is_forced());
        assert!((reveal.opacity(0.0) - 1.0).abs() < 0.001);
        assert_eq!(reveal.phase(0.0), RevealPhase::Revealed);
        // A later intersection does not restart anything
        assert!(!reveal.observe(true, 10.0));
    }

    #[test]
    fn test_targets() {
        let mut reveal = RevealState::new(0);
        assert!((reveal.target_opacity() - INITIAL_OPACITY).abs() < 0.001);
        reveal.observe(true, 0.0);
        assert!((reveal.target_opacity() - 1.0).abs() < 0.001);
        assert!(reveal.target_offset_px().abs() < 0.001);
    }
}
