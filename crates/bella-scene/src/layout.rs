//! Viewport classification for responsive layouts
//!
//! Sections pick between a wide and a compact arrangement depending on the
//! window width. Two thresholds are in use: [`Breakpoint::Sm`] (640px) and
//! [`Breakpoint::Md`] (768px).

use serde::{Deserialize, Serialize};

/// Width threshold below which a component switches to its compact layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// 640px
    Sm,
    /// 768px
    Md,
}

impl Breakpoint {
    /// Threshold in CSS pixels
    #[inline]
    pub const fn px(self) -> f64 {
        match self {
            Breakpoint::Sm => 640.0,
            Breakpoint::Md => 768.0,
        }
    }

    /// Whether `width` falls below this breakpoint
    #[inline]
    pub fn is_compact(self, width: f64) -> bool {
        width < self.px()
    }
}

/// Layout mode chosen for a component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Wide,
    Compact,
}

impl LayoutMode {
    /// Pick a value for this layout
    #[inline]
    pub fn pick<T>(self, wide: T, compact: T) -> T {
        match self {
            LayoutMode::Wide => wide,
            LayoutMode::Compact => compact,
        }
    }
}

/// Snapshot of the browser viewport
///
/// Read once per resize/scroll event by the root observer and handed down to
/// components; nothing reads the window directly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Window inner width in CSS pixels
    pub width: f64,
    /// Vertical scroll offset in CSS pixels
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            scroll_y: 0.0,
        }
    }
}

impl Viewport {
    /// Create a viewport snapshot
    pub fn new(width: f64, scroll_y: f64) -> Self {
        Self { width, scroll_y }
    }

    /// Return a copy with a new width
    #[inline]
    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    /// Return a copy with a new scroll offset
    #[inline]
    pub fn with_scroll(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }

    /// Whether the width is below the given breakpoint
    #[inline]
    pub fn is_compact(&self, breakpoint: Breakpoint) -> bool {
        breakpoint.is_compact(self.width)
    }

    /// Layout mode for the given breakpoint
    #[inline]
    pub fn layout(&self, breakpoint: Breakpoint) -> LayoutMode {
        if self.is_compact(breakpoint) {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    /// Whether the page has scrolled past `threshold` pixels
    #[inline]
    pub fn is_scrolled(&self, threshold: f64) -> bool {
        self.scroll_y > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundaries() {
        for bp in [Breakpoint::Sm, Breakpoint::Md] {
            let t = bp.px();
            assert!(!bp.is_compact(t), "{:?} at threshold should be wide", bp);
            assert!(bp.is_compact(t - 1.0), "{:?} below threshold should be compact", bp);
        }
    }

    #[test]
    fn test_breakpoint_values() {
        assert!((Breakpoint::Sm.px() - 640.0).abs() < 0.001);
        assert!((Breakpoint::Md.px() - 768.0).abs() < 0.001);
    }

    #[test]
    fn test_viewport_layout() {
        let vp = Viewport::new(700.0, 0.0);
        assert_eq!(vp.layout(Breakpoint::Sm), LayoutMode::Wide);
        assert_eq!(vp.layout(Breakpoint::Md), LayoutMode::Compact);
    }

    #[test]
    fn test_viewport_resize_reclassifies() {
        let vp = Viewport::new(1024.0, 0.0);
        assert!(!vp.is_compact(Breakpoint::Md));

        let vp = vp.with_width(400.0);
        assert!(vp.is_compact(Breakpoint::Md));
        assert!(vp.is_compact(Breakpoint::Sm));
    }

    #[test]
    fn test_viewport_scrolled() {
        let vp = Viewport::new(1024.0, 50.0);
        assert!(!vp.is_scrolled(50.0));
        assert!(vp.with_scroll(51.0).is_scrolled(50.0));
    }

    #[test]
    fn test_layout_pick() {
        assert_eq!(LayoutMode::Wide.pick(1.6, 0.9), 1.6);
        assert_eq!(LayoutMode::Compact.pick(1.6, 0.9), 0.9);
    }

    #[test]
    fn test_breakpoint_serialize() {
        let s = serde_json::to_string(&Breakpoint::Md).unwrap();
        assert_eq!(s, "\"md\"");
        let bp: Breakpoint = serde_json::from_str("\"sm\"").unwrap();
        assert_eq!(bp, Breakpoint::Sm);
    }
}
