use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::motion::{Hover, Reveal as RevealMotion};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub motion: RevealMotion,
    #[prop_or_default]
    pub hover: Option<Hover>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(
    element: &Element,
    once: bool,
    visible: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                visible.set(true);
                if once {
                    observer.unobserve(&entry.target());
                }
            } else if !once {
                visible.set(false);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    init.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

/// Inline styles for the revealing wrapper and, with a hover effect, the
/// inner layer that carries it. The hover layer takes its transition from
/// the stylesheet.
fn layer_styles(
    motion: &RevealMotion,
    hover: Option<Hover>,
    visible: bool,
) -> (String, Option<String>) {
    (motion.style(visible), hover.map(|hover| hover.to_css_vars()))
}

/// Plays `motion` the first time the wrapped block enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.setter();
        use_effect_with_deps(
            move |once| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, *once, visible.clone()));
                if observer.is_none() {
                    // No observer support: play the entrance after the first
                    // paint. The inline transition already carries the delay.
                    Timeout::new(0, move || visible.set(true)).forget();
                }
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            props.motion.once,
        );
    }

    let (style, hover_style) = layer_styles(&props.motion, props.hover, *visible);

    match hover_style {
        Some(hover_style) => html! {
            <div ref={node} class="reveal" style={style}>
                <div class={classes!("hoverable", props.class.clone())} style={hover_style}>
                    { for props.children.iter() }
                </div>
            </div>
        },
        None => html! {
            <div ref={node} class={classes!("reveal", props.class.clone())} style={style}>
                { for props.children.iter() }
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_layer_has_no_entrance_timing() {
        let motion = RevealMotion::fade_up().staggered(3, 100);
        let (reveal, hover) = layer_styles(&motion, Some(Hover::grow(1.05)), true);

        assert!(reveal.contains("800ms ease-out 300ms"));
        assert!(!reveal.contains("--hover"));

        let hover = hover.expect("hover layer");
        assert_eq!(hover, Hover::grow(1.05).to_css_vars());
        assert!(!hover.contains("transition"));
    }

    #[test]
    fn entrance_delay_is_applied_once() {
        let motion = RevealMotion::fade_in().with_delay(500);
        let (reveal, hover) = layer_styles(&motion, None, true);

        assert_eq!(reveal.matches("500ms").count(), 2);
        assert_eq!(hover, None);
    }
}
