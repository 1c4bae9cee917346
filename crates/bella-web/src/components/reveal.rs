//! Scroll-triggered reveal wrapper

use bella_scene::reveal::{EASE_OUT_CUBIC_CSS, REVEAL_DURATION_MS};
use bella_scene::RevealState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible to trigger
const REVEAL_THRESHOLD: f64 = 0.15;

/// Inline style for a reveal in `state`.
///
/// The browser runs the transition; the state only decides where it is
/// heading and whether to animate at all.
pub fn reveal_style(state: &RevealState) -> String {
    let transition = if state.is_forced() {
        "none".to_string()
    } else {
        format!(
            "opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms",
            d = REVEAL_DURATION_MS,
            e = EASE_OUT_CUBIC_CSS,
            delay = state.delay_ms(),
        )
    };
    format!(
        "opacity: {}; transform: translateY({}px); transition: {};",
        state.target_opacity(),
        state.target_offset_px(),
        transition
    )
}

/// Observer that disconnects when dropped
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn intersection_observer_supported() -> bool {
    js_sys::Reflect::has(&gloo::utils::window(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

/// Watch `element` until it first intersects, then commit the reveal
fn observe_once(
    element: &web_sys::Element,
    state: UseStateHandle<RevealState>,
) -> Option<RevealObserver> {
    if !intersection_observer_supported() {
        return None;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            let mut next = (*state).clone();
            if next.observe(intersecting, js_sys::Date::now()) {
                state.set(next);
                observer.disconnect();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Extra wait between intersection and the transition start
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Fades and slides its children in the first time they scroll into view
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state(|| RevealState::new(props.delay_ms));

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let element = node.cast::<web_sys::Element>();
            let observer = element
                .as_ref()
                .and_then(|el| observe_once(el, state.clone()));

            if observer.is_none() {
                tracing::warn!("intersection observer unavailable, revealing immediately");
                let mut visible = (*state).clone();
                visible.force_visible();
                state.set(visible);
            }

            move || drop(observer)
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone())}
            style={reveal_style(&state)}
        >
            { props.children.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_style() {
        let style = reveal_style(&RevealState::new(140));
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translateY(40px)"));
        assert!(style.contains("600ms"));
        assert!(style.contains("140ms"));
    }

    #[test]
    fn test_triggered_style() {
        let mut state = RevealState::new(0);
        state.observe(true, 1000.0);
        let style = reveal_style(&state);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("translateY(0px)"));
        assert!(style.contains(EASE_OUT_CUBIC_CSS));
    }

    #[test]
    fn test_forced_style_skips_transition() {
        let mut state = RevealState::new(300);
        state.force_visible();
        let style = reveal_style(&state);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("transition: none;"));
    }
}
