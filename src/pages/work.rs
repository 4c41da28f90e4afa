use yew::prelude::*;

use crate::catalog::{self, Film};
use crate::components::lightbox::Lightbox;
use crate::components::reveal::Reveal;
use crate::components::video_grid::VideoGrid;

#[function_component(Work)]
pub fn work() -> Html {
    let films = use_state(catalog::films);
    let lightbox = use_state(|| None::<Film>);

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

    html! {
        <div class="page work-page">
            <section class="work">
                <Reveal class={classes!("section-head")}>
                    <h2>{ "Work" }</h2>
                    <p>{ "The full archive, newest first." }</p>
                </Reveal>
                <VideoGrid films={(*films).clone()} on_open={on_open} />
            </section>

            <Lightbox film={(*lightbox).clone()} on_close={on_close} />
        </div>
    }
}
