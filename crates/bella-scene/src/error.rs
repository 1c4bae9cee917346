//! Renderer errors

use thiserror::Error;

/// Failure to bring up or drive a decorative canvas
///
/// None of these are fatal to the page: the layer renders nothing instead.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("canvas renderer is only available on wasm32 targets")]
    UnsupportedTarget,

    #[error("failed to create surface: {0}")]
    Surface(String),

    #[error("no suitable GPU adapter")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    Device(String),

    #[error("surface lost or outdated, frame skipped")]
    FrameSkipped,

    #[error("out of GPU memory")]
    OutOfMemory,
}

impl RenderError {
    /// Whether the renderer can keep going after this error
    pub fn is_transient(&self) -> bool {
        matches!(self, RenderError::FrameSkipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(RenderError::NoAdapter.to_string(), "no suitable GPU adapter");
        assert_eq!(
            RenderError::Device("lost".into()).to_string(),
            "failed to create device: lost"
        );
    }

    #[test]
    fn test_render_error_transience() {
        assert!(RenderError::FrameSkipped.is_transient());
        assert!(!RenderError::OutOfMemory.is_transient());
        assert!(!RenderError::UnsupportedTarget.is_transient());
    }
}
