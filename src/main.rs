use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod dom;
mod timing;

mod components {
    pub mod lightbox;
    pub mod reveal;
    pub mod stat_counter;
    pub mod video_grid;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod work;
}

use pages::{about::About, home::Home, work::Work};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
    #[at("/about")]
    About,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();
    // The scroll indicator only runs where a hero banner sits under the nav.
    let has_hero = matches!(route, Some(Route::Home));

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |has_hero: &bool| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if !*has_hero {
                    is_scrolled.set(false);
                } else if let Some(window) = web_sys::window() {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(offset > timing::NAV_SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        cleanup = Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        });
                    }
                }
                cleanup
            },
            has_hero,
        );
    }

    // Page scroll stays locked for exactly as long as the overlay is open.
    {
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                if open {
                    dom::lock_scroll();
                }
                move || {
                    if open {
                        dom::unlock_scroll();
                    }
                }
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!(
            "top-nav",
            (*is_scrolled).then(|| "scrolled"),
            (!has_hero).then(|| "solid"),
        )}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::SITE_NAME }
                </Link<Route>>

                <button
                    class={classes!("nav-toggle", (*menu_open).then(|| "active"))}
                    aria-label="Menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", (*menu_open).then(|| "active"))}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            { "Home" }
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Work} classes="nav-link">
                            { "Work" }
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            { "About" }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ STYLE_SHEET }</style>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <footer class="site-footer">
                <span>{ format!("\u{00A9} 2026 {}", config::SITE_NAME) }</span>
            </footer>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Stagger deadlines are anchored to startup, not to individual mounts.
    let _ = dom::page_load_anchor();

    info!("Starting portfolio frontend");
    yew::Renderer::<App>::new().render();
}

const STYLE_SHEET: &str = r##"
* { margin: 0; padding: 0; box-sizing: border-box; }

:root {
    --bg: #0d0d0f;
    --surface: #17171a;
    --text: #ececec;
    --text-dim: #9a9aa2;
    --accent: #d8c7a3;
}

html { scroll-behavior: smooth; }

body {
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
}

main { min-height: 100vh; }

h1, h2, h3 { font-weight: 600; letter-spacing: 0.01em; }

/* --- Reveal on scroll --- */
.reveal {
    opacity: 0;
    transform: translateY(28px);
    transition: opacity 0.7s ease, transform 0.7s ease;
}
.reveal.visible {
    opacity: 1;
    transform: none;
}

/* --- Nav --- */
.top-nav {
    position: fixed;
    top: 0; left: 0; right: 0;
    z-index: 100;
    background: transparent;
    transition: background 0.3s ease, box-shadow 0.3s ease;
}
.top-nav.scrolled,
.top-nav.solid {
    background: rgba(13, 13, 15, 0.92);
    backdrop-filter: blur(8px);
    box-shadow: 0 1px 0 rgba(255, 255, 255, 0.06);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1.1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    color: var(--text);
    text-decoration: none;
    font-weight: 700;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    font-size: 0.95rem;
}
.nav-links { display: flex; gap: 2rem; }
.nav-link {
    color: var(--text-dim);
    text-decoration: none;
    font-size: 0.9rem;
    letter-spacing: 0.06em;
    text-transform: uppercase;
    transition: color 0.2s ease;
}
.nav-link:hover { color: var(--text); }

.nav-toggle {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 6px;
    z-index: 102;
}
.nav-toggle span {
    width: 24px;
    height: 2px;
    background: var(--text);
    transition: transform 0.3s ease, opacity 0.3s ease;
}
.nav-toggle.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.nav-toggle.active span:nth-child(2) { opacity: 0; }
.nav-toggle.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

@media (max-width: 720px) {
    .nav-toggle { display: flex; }
    .nav-links {
        position: fixed;
        inset: 0;
        background: rgba(13, 13, 15, 0.97);
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 2.5rem;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
        z-index: 101;
    }
    .nav-links.active {
        opacity: 1;
        pointer-events: auto;
    }
    .nav-links .nav-link { font-size: 1.3rem; }
}

/* --- Hero --- */
.hero {
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: radial-gradient(ellipse at 50% 40%, #1d1d22 0%, var(--bg) 70%);
    position: relative;
}
.hero-inner { text-align: center; }
.hero-title {
    font-size: clamp(2.4rem, 7vw, 5rem);
    text-transform: uppercase;
    letter-spacing: 0.18em;
}
.hero-sub {
    color: var(--text-dim);
    margin-top: 0.8rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    font-size: 0.85rem;
}
.hero-scroll-hint {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    transform: translateX(-50%);
    color: var(--text-dim);
    animation: hint-bob 2s ease-in-out infinite;
}
@keyframes hint-bob {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, 8px); }
}

/* --- Sections --- */
section { padding: 5rem 1.5rem; max-width: 1200px; margin: 0 auto; }
.section-head h2 {
    font-size: 1.8rem;
    text-transform: uppercase;
    letter-spacing: 0.12em;
}
.section-head p { color: var(--text-dim); margin-top: 0.4rem; }
.work-page .work { padding-top: 8rem; }

/* --- Work grid --- */
.work-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.2rem;
    margin-top: 2.5rem;
}
@media (max-width: 1000px) { .work-grid { grid-template-columns: repeat(2, 1fr); } }
@media (max-width: 560px)  { .work-grid { grid-template-columns: 1fr; } }

.video-cell { cursor: pointer; }
.thumb-frame {
    position: relative;
    aspect-ratio: 16 / 9;
    overflow: hidden;
    border-radius: 4px;
    background: var(--surface);
}
.thumb-img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0;
    transform: translateY(14px) scale(1.03);
    transition: opacity 0.9s ease, transform 0.9s ease;
}
.video-cell.thumb-ready .thumb-img {
    opacity: 1;
    transform: none;
}
.thumb-video {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0;
    transition: opacity 0.4s ease;
    pointer-events: none;
}
.video-cell:hover .thumb-video { opacity: 1; }
.cell-play {
    position: absolute;
    right: 0.8rem;
    bottom: 0.8rem;
    color: rgba(255, 255, 255, 0.8);
    font-size: 0.8rem;
    opacity: 0;
    transition: opacity 0.3s ease;
}
.video-cell:hover .cell-play { opacity: 1; }
.cell-meta { padding: 0.8rem 0.2rem; }
.cell-title { font-size: 1rem; }
.cell-sub {
    color: var(--text-dim);
    font-size: 0.85rem;
    display: flex;
    justify-content: space-between;
}
.work-more { margin-top: 3rem; text-align: center; }
.work-more-link {
    color: var(--accent);
    text-decoration: none;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    font-size: 0.9rem;
}

/* --- Lightbox --- */
.lightbox {
    position: fixed;
    inset: 0;
    z-index: 200;
    display: flex;
    align-items: center;
    justify-content: center;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.35s ease;
}
.lightbox.active {
    opacity: 1;
    pointer-events: auto;
}
.lightbox-bg {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.88);
}
.lightbox-frame {
    position: relative;
    width: min(1000px, 92vw);
    z-index: 1;
}
.lightbox-video {
    width: 100%;
    aspect-ratio: 16 / 9;
    background: #000;
    border-radius: 4px;
}
.lightbox-frame figcaption {
    display: flex;
    justify-content: space-between;
    margin-top: 0.8rem;
}
.lightbox-title { font-size: 1.1rem; }
.lightbox-director { color: var(--text-dim); font-size: 0.9rem; }
.lightbox-close {
    position: absolute;
    top: 1.2rem;
    right: 1.5rem;
    z-index: 2;
    background: none;
    border: none;
    color: var(--text);
    font-size: 1.4rem;
    cursor: pointer;
    opacity: 0.7;
    transition: opacity 0.2s ease;
}
.lightbox-close:hover { opacity: 1; }

/* --- Stats --- */
.stats-strip {
    display: flex;
    justify-content: space-around;
    gap: 2rem;
    flex-wrap: wrap;
    border-top: 1px solid rgba(255, 255, 255, 0.07);
    padding-top: 3rem;
}
.stat { text-align: center; }
.stat-number {
    display: block;
    font-size: 2.6rem;
    font-weight: 700;
    color: var(--accent);
}
.stat-label {
    color: var(--text-dim);
    font-size: 0.85rem;
    letter-spacing: 0.08em;
    text-transform: uppercase;
}

/* --- About / contact --- */
.about-copy { padding-top: 8rem; max-width: 720px; }
.about-copy p { color: var(--text-dim); margin-top: 1.4rem; font-size: 1.05rem; }
.contact-inner { text-align: center; }
.contact-link {
    color: var(--accent);
    font-size: 1.2rem;
    text-decoration: none;
}

/* --- Footer --- */
.site-footer {
    text-align: center;
    padding: 2.5rem 0;
    color: var(--text-dim);
    font-size: 0.8rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}
"##;
