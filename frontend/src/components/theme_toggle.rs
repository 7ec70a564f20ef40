use yew::prelude::*;

use imphnen_site::theme::use_theme;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let ctx = use_theme();
    let theme = ctx.theme;

    let onclick = {
        let toggle = ctx.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    // sun offers the way out of dark mode, moon the way back in
    let (icon, rotation) = if theme.is_dark() { ("☀", 0) } else { ("☾", 180) };

    html! {
        <button
            class={classes!("theme-toggle", theme.pick("theme-toggle-dark", "theme-toggle-light"))}
            onclick={onclick}
            aria-label="Toggle theme"
        >
            <style>
                {r#"
                    .theme-toggle {
                        width: 36px;
                        height: 36px;
                        border-radius: 9999px;
                        border: 2px solid;
                        background: transparent;
                        cursor: pointer;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.2s ease, color 0.2s ease;
                    }
                    .theme-toggle-dark { border-color: rgba(255,255,255,0.5); color: #fff; }
                    .theme-toggle-dark:hover { background: #fff; color: #000; }
                    .theme-toggle-light { border-color: rgba(0,0,0,0.5); color: #000; }
                    .theme-toggle-light:hover { background: #000; color: #fff; }
                    .theme-toggle-icon {
                        display: inline-block;
                        transition: transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                    }
                "#}
            </style>
            <span class="theme-toggle-icon" style={format!("transform: rotate({}deg);", rotation)}>
                {icon}
            </span>
            <span class="sr-only">{"Toggle theme"}</span>
        </button>
    }
}
