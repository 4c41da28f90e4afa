use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::timing;

/// Counters wait until half the element is on screen before starting.
const COUNTER_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: AttrValue,
    /// Rendered after the number, e.g. "+" on "140+".
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Animated statistic. Counts from zero to `target` over 1.5 s with a cubic
/// ease-out once the element is at least half visible, then stays put.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let value = use_state(|| 0u32);
    let target = props.target;

    {
        let node = node.clone();
        let setter = value.setter();
        use_effect_once(move || {
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
            if let Some(element) = node.cast::<Element>() {
                let started = Cell::new(false);
                let frozen = setter.clone();
                let on_intersect = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if entry.is_intersecting() && !started.replace(true) {
                                animate(setter.clone(), target);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(COUNTER_THRESHOLD));

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
                        // Counter still renders, frozen at its target.
                        log::warn!("counter observer unavailable: {err:?}");
                        frozen.set(target);
                    }
                }
            }
            cleanup
        });
    }

    html! {
        <div class="stat" ref={node}>
            <span class="stat-number">{ *value }{ props.suffix.clone() }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}

/// Re-renders the counter on every animation frame until the duration is up,
/// finishing exactly on the target.
fn animate(setter: UseStateSetter<u32>, target: u32) {
    let Some(window) = web_sys::window() else {
        setter.set(target);
        return;
    };
    let Some(performance) = window.performance() else {
        setter.set(target);
        return;
    };

    let start = performance.now();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_handle = tick.clone();
    let raf_window = window.clone();
    let fallback = setter.clone();

    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let elapsed = now - start;
        setter.set(timing::counter_value(target, elapsed, timing::COUNTER_DURATION_MS));
        if elapsed < timing::COUNTER_DURATION_MS {
            if let Some(tick) = tick_handle.borrow().as_ref() {
                if raf_window
                    .request_animation_frame(tick.as_ref().unchecked_ref())
                    .is_err()
                {
                    setter.set(target);
                }
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(tick) = tick.borrow().as_ref() {
        if window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .is_err()
        {
            fallback.set(target);
        }
    };
}
