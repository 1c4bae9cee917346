//! Decorative 3-D layer behind a section
//!
//! Each mounted layer owns one [`SceneState`], one [`SceneRenderer`] and one
//! animation-frame loop. Nothing is shared between layers.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use bella_scene::render::SceneRenderer;
use bella_scene::{RenderError, SceneState, SectionId};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::app::use_site_config;
use crate::viewport::use_viewport;

/// Longest step fed to the oscillators, in seconds.
///
/// Browsers pause animation frames in background tabs; without a cap the
/// first frame back would jump every ornament.
const MAX_FRAME_DELTA: f32 = 0.1;

/// Upper bound on the canvas backing-store scale
const MAX_PIXEL_RATIO: f64 = 1.5;

/// Seconds between two frame timestamps (milliseconds), capped
fn frame_delta(previous_ms: Option<f64>, now_ms: f64) -> f32 {
    match previous_ms {
        Some(prev) => (((now_ms - prev) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DELTA),
        None => 0.0,
    }
}

/// Backing-store size for a canvas laid out at `css_width` x `css_height`
fn backing_size(css_width: i32, css_height: i32, pixel_ratio: f64) -> (u32, u32) {
    let ratio = pixel_ratio.clamp(1.0, MAX_PIXEL_RATIO);
    let scale = |v: i32| ((v.max(1) as f64) * ratio).round() as u32;
    (scale(css_width), scale(css_height))
}

/// Whether the layer should be in the DOM at all
///
/// A disabled or failed layer renders nothing; the section content above it
/// is unaffected.
fn layer_visible(enabled: bool, failed: bool) -> bool {
    enabled && !failed
}

/// Users asking for reduced motion get one still frame instead of a loop
fn prefers_reduced_motion() -> bool {
    gloo::utils::window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Match the canvas backing store to its CSS box
fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let ratio = gloo::utils::window().device_pixel_ratio();
    let (width, height) = backing_size(canvas.client_width(), canvas.client_height(), ratio);
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    (width, height)
}

/// Mutable state of one mounted layer
struct Layer {
    section: SectionId,
    scene: SceneState,
    renderer: Option<SceneRenderer>,
    canvas: Option<HtmlCanvasElement>,
    last_frame_ms: Option<f64>,
    frame: Option<AnimationFrame>,
    animate: bool,
}

impl Layer {
    fn new(section: SectionId, scene: SceneState, animate: bool) -> Self {
        Self {
            section,
            scene,
            renderer: None,
            canvas: None,
            last_frame_ms: None,
            frame: None,
            animate,
        }
    }

    /// Whether a frame loop is queued
    fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    /// Advance the scene and draw it
    fn step(&mut self, now_ms: f64) {
        let delta = frame_delta(self.last_frame_ms, now_ms);
        self.last_frame_ms = Some(now_ms);
        self.scene.tick(delta);

        let (Some(renderer), Some(canvas)) = (self.renderer.as_mut(), self.canvas.as_ref()) else {
            return;
        };
        let (width, height) = fit_canvas(canvas);
        renderer.resize(width, height);
        let result = renderer.render(&self.scene);
        self.handle_result(result);
    }

    /// Draw one still frame with every sphere at rest
    fn draw_at_rest(&mut self) {
        let (Some(renderer), Some(canvas)) = (self.renderer.as_mut(), self.canvas.as_ref()) else {
            return;
        };
        let (width, height) = fit_canvas(canvas);
        renderer.resize(width, height);
        let result = renderer.render_at_rest(&self.scene);
        self.handle_result(result);
    }

    fn handle_result(&mut self, result: Result<(), RenderError>) {
        match result {
            Ok(()) => {}
            Err(err) if err.is_transient() => {
                tracing::debug!(section = ?self.section, error = %err, "frame skipped");
            }
            Err(err) => {
                tracing::warn!(section = ?self.section, error = %err, "ornament layer stopped");
                self.renderer = None;
            }
        }
    }

    /// Stop the loop and release the GPU resources
    fn shut_down(&mut self) {
        tracing::debug!(section = ?self.section, running = self.is_running(), "ornament layer shut down");
        self.frame = None;
        self.renderer = None;
        self.canvas = None;
    }
}

/// Queue the next frame; the loop ends once the layer is dropped or stopped
fn schedule_frame(layer: &Rc<RefCell<Layer>>) {
    let weak: Weak<RefCell<Layer>> = Rc::downgrade(layer);
    let frame = request_animation_frame(move |now_ms| {
        let Some(layer) = weak.upgrade() else {
            return;
        };
        let running = {
            let mut layer = layer.borrow_mut();
            layer.step(now_ms);
            layer.renderer.is_some()
        };
        if running {
            schedule_frame(&layer);
        }
    });
    layer.borrow_mut().frame = Some(frame);
}

#[derive(Properties, PartialEq)]
pub struct OrnamentCanvasProps {
    pub section: SectionId,
}

/// Floating spheres for one section, drawn behind its content
#[function_component(OrnamentCanvas)]
pub fn ornament_canvas(props: &OrnamentCanvasProps) -> Html {
    let config = use_site_config();
    let viewport = use_viewport();
    let section = props.section;
    let layout = section.layout(&viewport);
    let spec = section.scene(layout);
    let layer_opacity = section.layer_opacity(&viewport);

    let canvas_ref = use_node_ref();
    let failed = use_state_eq(|| false);
    let layer = use_mut_ref(|| Layer::new(section, SceneState::new(spec), !prefers_reduced_motion()));

    // A new layout swaps the scene in place; the loop keeps running
    {
        let layer = layer.clone();
        use_effect_with(layout, move |layout| {
            let mut layer = layer.borrow_mut();
            layer.scene.retarget(section.scene(*layout));
            if !layer.animate {
                layer.draw_at_rest();
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let layer = layer.clone();
        let failed = failed.clone();
        let enabled = config.ornaments_enabled;
        use_effect_with(enabled, move |_| {
            let mounted = Rc::new(Cell::new(true));

            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>().filter(|_| enabled) {
                fit_canvas(&canvas);
                let layer = layer.clone();
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = SceneRenderer::new(canvas.clone()).await;
                    if !mounted.get() {
                        return;
                    }
                    match result {
                        Ok(renderer) => {
                            tracing::debug!(?section, "ornament layer started");
                            let animate = {
                                let mut layer = layer.borrow_mut();
                                layer.renderer = Some(renderer);
                                layer.canvas = Some(canvas);
                                layer.animate
                            };
                            if animate {
                                schedule_frame(&layer);
                            } else {
                                layer.borrow_mut().draw_at_rest();
                            }
                        }
                        Err(err) => {
                            tracing::warn!(?section, error = %err, "ornament layer unavailable");
                            failed.set(true);
                        }
                    }
                });
            }

            move || {
                mounted.set(false);
                layer.borrow_mut().shut_down();
            }
        });
    }

    if !layer_visible(config.ornaments_enabled, *failed) {
        return html! {};
    }

    html! {
        <div
            class="ornament-layer"
            aria-hidden="true"
            style={format!("opacity: {}; pointer-events: none;", layer_opacity)}
        >
            <canvas ref={canvas_ref} class="ornament-canvas" />
        </div>
    }
}
