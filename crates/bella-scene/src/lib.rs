//! Scene core for the Bella Vista site
//!
//! Everything the page animates, kept free of the DOM so it can be tested
//! natively:
//!
//! - [`layout`]: viewport width classification against the two breakpoints
//! - [`reveal`]: the fire-once scroll reveal state machine and its easing
//! - [`ornament`]: floating sphere oscillators and the rotating plate
//! - [`scene`]: camera, lights and the per-layer [`SceneState`]
//! - [`presets`]: the scene each page section draws
//! - [`menu`]: the dish table
//! - [`config`]: site-wide settings
//!
//! The `wasm` feature adds [`render::SceneRenderer`], a wgpu renderer that
//! draws a [`SceneState`] into a canvas.
//!
//! ## Example
//!
//! ```rust
//! use bella_scene::{presets::SectionId, SceneState, Viewport};
//!
//! let viewport = Viewport::new(400.0, 0.0);
//! let mut scene = SceneState::new(SectionId::Hero.scene_for(&viewport));
//! scene.tick(1.0 / 60.0);
//! assert_eq!(scene.instances().len(), 4);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod math;
pub mod menu;
pub mod ornament;
pub mod presets;
pub mod render;
pub mod reveal;
pub mod scene;

// Re-export main types
pub use color::Color;
pub use config::SiteConfig;
pub use error::RenderError;
pub use layout::{Breakpoint, LayoutMode, Viewport};
pub use math::{Mat4, Vec3};
pub use menu::{Dish, DISHES};
pub use ornament::{Drift, Material, Ornament, OrnamentParams, Plate, PlateParams};
pub use presets::SectionId;
pub use reveal::{RevealPhase, RevealState};
pub use scene::{CameraSpec, DrawInstance, Light, Lighting, SceneSpec, SceneState};
