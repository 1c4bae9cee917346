mod ornament_canvas;
mod reveal;

pub use ornament_canvas::OrnamentCanvas;
pub use reveal::{reveal_style, Reveal};
