use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlVideoElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::catalog::Film;
use crate::{config, dom, timing};

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    /// The film currently playing; `None` renders the overlay closed.
    pub film: Option<Film>,
    pub on_close: Callback<()>,
}

/// Full-screen modal video viewer.
///
/// Opening loads and plays the film, locks page scroll, and shows its
/// caption. Closing (background click, close control, or Escape while open)
/// hides the overlay, pauses playback, and clears the media source 350 ms
/// later so the close transition finishes before buffering is cut off.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let video_ref = use_node_ref();
    // Retains the last caption so text doesn't blank out mid-fade on close.
    let shown = use_state(|| None::<Film>);

    {
        let video_ref = video_ref.clone();
        let shown = shown.clone();
        use_effect_with_deps(
            move |film: &Option<Film>| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if let (Some(film), Some(video)) =
                    (film.as_ref(), video_ref.cast::<HtmlVideoElement>())
                {
                    log::debug!("lightbox opening: {}", film.title);
                    shown.set(Some(film.clone()));
                    video.set_src(&config::media_url(&film.src));
                    dom::lock_scroll();
                    // Autoplay may be blocked; the user still has controls.
                    if let Ok(promise) = video.play() {
                        spawn_local(async move {
                            let _ = JsFuture::from(promise).await;
                        });
                    }
                    cleanup = Box::new(move || {
                        let _ = video.pause();
                        dom::unlock_scroll();
                        Timeout::new(timing::LIGHTBOX_UNLOAD_MS, move || {
                            video.set_src("");
                        })
                        .forget();
                    });
                }
                cleanup
            },
            props.film.clone(),
        );
    }

    // Escape closes, but only while open: the listener exists only then.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                            if event.key() == "Escape" {
                                on_close.emit(());
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);
                        if document
                            .add_event_listener_with_callback(
                                "keydown",
                                on_keydown.as_ref().unchecked_ref(),
                            )
                            .is_ok()
                        {
                            cleanup = Box::new(move || {
                                let _ = document.remove_event_listener_with_callback(
                                    "keydown",
                                    on_keydown.as_ref().unchecked_ref(),
                                );
                            });
                        }
                    }
                }
                cleanup
            },
            props.film.is_some(),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let caption = shown.as_ref();
    html! {
        <div class={classes!("lightbox", props.film.is_some().then(|| "active"))}>
            <div class="lightbox-bg" onclick={close.clone()}></div>
            <figure class="lightbox-frame">
                <video ref={video_ref} class="lightbox-video" controls=true playsinline=true />
                <figcaption>
                    <h3 class="lightbox-title">
                        { caption.map(|f| f.title.clone()).unwrap_or_default() }
                    </h3>
                    <p class="lightbox-director">
                        { caption.map(Film::director_credit).unwrap_or_default() }
                    </p>
                </figcaption>
            </figure>
            <button class="lightbox-close" aria-label="Close" onclick={close}>
                { "\u{2715}" }
            </button>
        </div>
    }
}
