use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{self, Film};
use crate::components::lightbox::Lightbox;
use crate::components::reveal::Reveal;
use crate::components::stat_counter::StatCounter;
use crate::components::video_grid::VideoGrid;
use crate::{config, Route};

/// Cells shown on the homepage before the full-archive link takes over.
const FEATURED_COUNT: usize = 8;

#[function_component(Home)]
pub fn home() -> Html {
    let films = use_state(catalog::films);
    let lightbox = use_state(|| None::<Film>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_open = {
        let lightbox = lightbox.clone();
        Callback::from(move |film: Film| lightbox.set(Some(film)))
    };
    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };

    let featured: Vec<Film> = films.iter().take(FEATURED_COUNT).cloned().collect();

    html! {
        <div class="page home">
            <header class="hero">
                <div class="hero-inner">
                    <h1 class="hero-title">{ config::SITE_NAME }</h1>
                    <p class="hero-sub">{ config::SITE_TAGLINE }</p>
                    <span class="hero-scroll-hint" aria-hidden="true">{ "\u{2193}" }</span>
                </div>
            </header>

            <section class="work">
                <Reveal class={classes!("section-head")}>
                    <h2>{ "Selected Work" }</h2>
                    <p>{ "Narrative, documentary and commercial pieces." }</p>
                </Reveal>
                <VideoGrid films={featured} on_open={on_open} />
                <Reveal class={classes!("work-more")}>
                    <Link<Route> to={Route::Work} classes="work-more-link">
                        { "Full archive" }
                    </Link<Route>>
                </Reveal>
            </section>

            <section class="stats">
                <Reveal class={classes!("stats-strip")}>
                    <StatCounter target={140} label="Projects delivered" suffix="+" />
                    <StatCounter target={12} label="Festival selections" />
                    <StatCounter target={9} label="Years behind the camera" />
                </Reveal>
            </section>

            <Lightbox film={(*lightbox).clone()} on_close={on_close} />
        </div>
    }
}
