use gloo_timers::callback::Timeout;
use yew::prelude::*;

use imphnen_site::config;
use imphnen_site::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub brand: String,
}

/// Full-screen brand splash that fades out shortly after mount.
#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let theme = use_theme().theme;
    let hidden = use_state(|| false);

    {
        let hidden = hidden.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::PRELOADER_MS, move || hidden.set(true));
                // dropping the Timeout clears it if we unmount first
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class={classes!("preloader", theme.pick("preloader-dark", "preloader-light"), (*hidden).then(|| "preloader-hidden"))}>
            <style>
                {r#"
                    .preloader {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: opacity 0.6s ease, visibility 0.6s ease;
                    }
                    .preloader-dark { background: #000; color: #fff; }
                    .preloader-light { background: #fff; color: #000; }
                    .preloader-hidden { opacity: 0; visibility: hidden; pointer-events: none; }
                    .preloader-brand {
                        font-size: 2rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        animation: preloader-pulse 1s ease-in-out infinite;
                    }
                    @keyframes preloader-pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.3; }
                    }
                "#}
            </style>
            <span class="preloader-brand">{&props.brand}</span>
        </div>
    }
}
