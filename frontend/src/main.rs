use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod components {
    pub mod background;
    pub mod cursor;
    pub mod footer;
    pub mod preloader;
    pub mod reveal;
    pub mod theme_toggle;
}
mod pages {
    pub mod community;
    pub mod home;
    pub mod not_found;
    pub mod resources;
    pub mod testimonials;
}

use imphnen_site::config;
use imphnen_site::content::SiteContent;
use imphnen_site::theme::{use_theme, ThemeProvider};

use components::theme_toggle::ThemeToggle;
use pages::{
    home::{Home, SITE_CSS},
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let theme = use_theme().theme;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(scroll_y > config::NAV_SCROLLED_THRESHOLD_PX);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
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

    let Some(content) = content else {
        return html! {};
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(31, 41, 55, 0.2);
                        transition: box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled { box-shadow: 0 4px 20px rgba(0, 0, 0, 0.15); }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo { text-decoration: none; }
                    .nav-links { display: flex; gap: 1rem; }
                    .nav-link {
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.375rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        color: var(--fg);
                    }
                    .nav-link:hover { background: rgba(55, 65, 81, 0.2); }
                    .nav-actions { display: flex; align-items: center; gap: 0.5rem; }
                    .nav-discord {
                        padding: 0.375rem 0.75rem;
                        border: 2px solid var(--fg);
                        border-radius: 0.375rem;
                        font-size: 0.875rem;
                        text-decoration: none;
                        color: var(--fg);
                    }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span { display: block; width: 22px; height: 2px; margin: 4px 0; background: var(--fg); }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-discord { display: none; }
                        .nav-links { display: none; }
                        .nav-links.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 4rem;
                            left: 0;
                            right: 0;
                            padding: 1rem 1.5rem;
                            background: var(--card-bg);
                            backdrop-filter: blur(12px);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="brand-mark">{&content.brand.name}</span>
                </a>

                <nav class={menu_class}>
                    { for content.nav.iter().map(|link| html! {
                        <a href={link.href()} class="nav-link" onclick={close_menu.clone()}>
                            {&link.icon}{" "}{&link.label}
                        </a>
                    }) }
                </nav>

                <div class="nav-actions">
                    <ThemeToggle />
                    <a
                        href={content.links.discord.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={classes!("nav-discord", theme.pick("nav-discord-dark", "nav-discord-light"))}
                    >
                        {"🎧 "}{&content.hero.secondary_cta}
                    </a>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}


#[function_component]
fn Shell() -> Html {
    let theme = use_theme().theme;

    html! {
        <div class={classes!("site", theme.name())}>
            <style>{SITE_CSS}</style>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </div>
    }
}


#[function_component]
fn App() -> Html {
    let content = use_memo(
        |_| match SiteContent::load() {
            Ok(content) => Some(Rc::new(content)),
            Err(e) => {
                error!("Failed to load site content: {}", e);
                None
            }
        },
        (),
    );

    match &*content {
        Some(content) => html! {
            <ContextProvider<Rc<SiteContent>> context={content.clone()}>
                <ThemeProvider>
                    <Shell />
                </ThemeProvider>
            </ContextProvider<Rc<SiteContent>>>
        },
        // Never show half-rendered statistics
        None => html! {
            <div class="content-error">
                <p>{"Konten gagal dimuat. Coba muat ulang halaman."}</p>
            </div>
        },
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
