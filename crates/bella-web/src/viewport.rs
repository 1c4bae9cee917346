//! Root-level window observer
//!
//! One pair of `resize` / `scroll` listeners for the whole app. Sections read
//! the latest [`Viewport`] through [`use_viewport`] instead of touching
//! `window` themselves.

use bella_scene::Viewport;
use gloo::events::EventListener;
use yew::prelude::*;

/// Snapshot the window's width and vertical scroll offset
fn read_viewport() -> Viewport {
    let window = gloo::utils::window();
    let fallback = Viewport::default();
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(fallback.width);
    let scroll_y = window.scroll_y().unwrap_or(fallback.scroll_y);
    Viewport::new(width, scroll_y)
}

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Tracks the window for the lifetime of the app
#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let viewport = use_state_eq(read_viewport);

    {
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let window = gloo::utils::window();
            let on_resize = {
                let viewport = viewport.clone();
                EventListener::new(&window, "resize", move |_| viewport.set(read_viewport()))
            };
            let on_scroll = EventListener::new(&window, "scroll", move |_| {
                viewport.set(read_viewport())
            });
            tracing::debug!("viewport listeners attached");

            move || {
                drop(on_resize);
                drop(on_scroll);
            }
        });
    }

    html! {
        <ContextProvider<Viewport> context={*viewport}>
            { props.children.clone() }
        </ContextProvider<Viewport>>
    }
}

/// Latest viewport, or the default desktop viewport outside a provider
#[hook]
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>().unwrap_or_default()
}
