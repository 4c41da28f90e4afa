use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::stat_counter::StatCounter;
use crate::config;

#[function_component(About)]
pub fn about() -> Html {
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

    html! {
        <div class="page about">
            <section class="about-copy">
                <Reveal class={classes!("section-head")}>
                    <h2>{ "About" }</h2>
                </Reveal>
                <Reveal>
                    <p>
                        { "Mara Venn is a cinematographer and editor working between \
                           Oslo and Berlin. Her work moves between narrative shorts, \
                           observational documentary and the occasional brand film \
                           that lets the footage breathe." }
                    </p>
                </Reveal>
                <Reveal>
                    <p>
                        { "She shoots on whatever the story asks for and cuts \
                           everything herself. Recent films have screened at festivals \
                           across Europe and North America." }
                    </p>
                </Reveal>
            </section>

            <section class="stats">
                <Reveal class={classes!("stats-strip")}>
                    <StatCounter target={140} label="Projects delivered" suffix="+" />
                    <StatCounter target={12} label="Festival selections" />
                    <StatCounter target={26} label="Directors collaborated with" />
                </Reveal>
            </section>

            <section class="contact">
                <Reveal class={classes!("contact-inner")}>
                    <h2>{ "Get in touch" }</h2>
                    <a class="contact-link" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        { config::CONTACT_EMAIL }
                    </a>
                </Reveal>
            </section>
        </div>
    }
}
