use std::cell::Cell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement, HtmlImageElement, HtmlMediaElement, HtmlVideoElement};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::catalog::Film;
use crate::{config, dom, timing};

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub films: Vec<Film>,
    pub on_open: Callback<Film>,
}

/// Grid of film cells. Activating a cell hands its film to the page, which
/// opens it in the lightbox.
#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    html! {
        <div class="work-grid">
            {
                for props.films.iter().enumerate().map(|(index, film)| html! {
                    <VideoCell
                        key={film.title.clone()}
                        film={film.clone()}
                        index={index}
                        on_open={props.on_open.clone()}
                    />
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCellProps {
    pub film: Film,
    pub index: usize,
    pub on_open: Callback<Film>,
}

/// One cell of the work grid.
///
/// The poster fades in on a diagonal stagger anchored to page load, so the
/// wave reads the same no matter which images arrive first. An optional
/// muted preview clip sits over the poster and is parked on a representative
/// frame once its metadata shows up.
#[function_component(VideoCell)]
pub fn video_cell(props: &VideoCellProps) -> Html {
    let cell_ref = use_node_ref();
    let img_ref = use_node_ref();
    let video_ref = use_node_ref();

    {
        let cell_ref = cell_ref.clone();
        let img_ref = img_ref.clone();
        let index = props.index;
        use_effect_once(move || {
            if let (Some(img), Some(cell)) = (
                img_ref.cast::<HtmlImageElement>(),
                cell_ref.cast::<HtmlElement>(),
            ) {
                let deadline = timing::stagger_deadline(dom::page_load_anchor(), index);
                let ready = Cell::new(false);
                let mark_ready = {
                    let img = img.clone();
                    move || {
                        if ready.replace(true) {
                            return;
                        }
                        let remaining = timing::remaining_delay(deadline, dom::now_ms()).round();
                        let _ = img
                            .style()
                            .set_property("transition-delay", &format!("{remaining}ms"));
                        let _ = cell.class_list().add_1("thumb-ready");
                        // Reset the delay once the fade is done so hover
                        // responds instantly.
                        let img = img.clone();
                        Timeout::new(remaining as u32 + timing::FADE_RESET_MS, move || {
                            let _ = img.style().set_property("transition-delay", "0ms");
                        })
                        .forget();
                    }
                };

                if img.complete() {
                    // Cached images never fire load again.
                    mark_ready();
                } else {
                    let on_settled = Closure::wrap(Box::new(mark_ready) as Box<dyn FnMut()>);
                    let options = AddEventListenerOptions::new();
                    options.set_once(true);
                    // A broken image unblocks the cell the same as a loaded one.
                    for event in ["load", "error"] {
                        let _ = img.add_event_listener_with_callback_and_add_event_listener_options(
                            event,
                            on_settled.as_ref().unchecked_ref(),
                            &options,
                        );
                    }
                    on_settled.forget();
                }
            }
            || ()
        });
    }

    {
        let video_ref = video_ref.clone();
        let seek_override = props.film.preview_seek;
        use_effect_once(move || {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_muted(true);
                let apply_seek = {
                    let video = video.clone();
                    move || {
                        video.set_current_time(timing::seek_target(seek_override, video.duration()));
                    }
                };

                if video.ready_state() >= HtmlMediaElement::HAVE_METADATA {
                    apply_seek();
                } else {
                    let on_metadata =
                        Closure::wrap(Box::new(apply_seek.clone()) as Box<dyn FnMut()>);
                    let options = AddEventListenerOptions::new();
                    options.set_once(true);
                    let _ = video.add_event_listener_with_callback_and_add_event_listener_options(
                        "loadedmetadata",
                        on_metadata.as_ref().unchecked_ref(),
                        &options,
                    );
                    on_metadata.forget();
                }

                // Some players snap the playhead back to zero after the first
                // seek; retry once a beat later.
                let retried = Cell::new(false);
                let on_seeked = {
                    let video = video.clone();
                    let apply_seek = apply_seek;
                    Closure::wrap(Box::new(move || {
                        if video.current_time() < timing::SEEK_EPSILON_SECS
                            && !retried.replace(true)
                        {
                            Timeout::new(timing::SEEK_RETRY_MS, apply_seek.clone()).forget();
                        }
                    }) as Box<dyn FnMut()>)
                };
                let _ = video
                    .add_event_listener_with_callback("seeked", on_seeked.as_ref().unchecked_ref());
                on_seeked.forget();

                // Last chance for metadata that arrives very late.
                Timeout::new(timing::SEEK_FALLBACK_MS, move || {
                    let duration = video.duration();
                    if video.current_time() < timing::SEEK_EPSILON_SECS
                        && duration.is_finite()
                        && duration > 0.0
                    {
                        video.set_current_time(timing::seek_target(seek_override, duration));
                    }
                })
                .forget();
            }
            || ()
        });
    }

    let onclick = {
        let on_open = props.on_open.clone();
        let film = props.film.clone();
        Callback::from(move |_| on_open.emit(film.clone()))
    };

    let film = &props.film;
    html! {
        <article class="video-cell" ref={cell_ref} {onclick}>
            <div class="thumb-frame">
                <img
                    ref={img_ref}
                    class="thumb-img"
                    src={config::media_url(&film.thumb)}
                    alt={film.title.clone()}
                />
                {
                    if let Some(preview) = &film.preview {
                        html! {
                            <video
                                ref={video_ref}
                                class="thumb-video"
                                preload="metadata"
                                src={config::media_url(preview)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <span class="cell-play" aria-hidden="true">{ "\u{25B6}" }</span>
            </div>
            <div class="cell-meta">
                <h3 class="cell-title">{ &film.title }</h3>
                <p class="cell-sub">
                    { film.director_credit() }
                    {
                        if let Some(year) = film.year {
                            html! { <span class="cell-year">{ year }</span> }
                        } else {
                            html! {}
                        }
                    }
                </p>
            </div>
        </article>
    }
}
