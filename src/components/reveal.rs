use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_effect_once;

/// Fraction of the element that must be inside the viewport before it fires.
const REVEAL_THRESHOLD: f64 = 0.15;
/// Shrinks the effective viewport bottom so elements reveal slightly after
/// entering, not at the exact edge.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -60px 0px";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that starts hidden/offset and transitions to its visible state
/// the first time it intersects the viewport. One-shot: the element is
/// unobserved as soon as it fires, so later scrolling never re-triggers it.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_once(move || {
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
            if let Some(element) = node.cast::<Element>() {
                let on_intersect = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if entry.is_intersecting() {
                                visible.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                options.set_root_margin(REVEAL_ROOT_MARGIN);

                match IntersectionObserver::new_with_options(
                    on_intersect.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => {
                        observer.observe(&element);
                        cleanup = Box::new(move || {
                            observer.disconnect();
                            drop(on_intersect);
                        });
                    }
                    Err(err) => {
                        log::warn!("reveal observer unavailable: {err:?}");
                    }
                }
            }
            cleanup
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then(|| "visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
