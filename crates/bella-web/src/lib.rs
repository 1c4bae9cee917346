//! Bella Vista single-page site
//!
//! A Yew app with one section per page anchor. Every decorated section owns
//! an [`components::OrnamentCanvas`] with its own scene and animation loop;
//! the only shared inputs are the read-only viewport and site config
//! contexts provided at the root.
//!
//! ## Module Structure
//!
//! - `app` - root component and the site config context
//! - `viewport` - window width / scroll observer exposed as a context
//! - `components` - `Reveal` and `OrnamentCanvas`
//! - `sections` - navbar, hero, about, menu, contact, footer

// =============================================================================
// Module declarations
// =============================================================================

mod app;
pub mod components;
pub mod sections;
mod viewport;

// =============================================================================
// Public re-exports
// =============================================================================

pub use app::{use_site_config, App, SiteConfigProvider};
pub use viewport::{use_viewport, ViewportProvider};

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Install the panic hook and log subscriber, then mount [`App`] on `<body>`
pub fn run() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(level).build(),
    );

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting site");
    yew::Renderer::<App>::new().render();
}
