use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use imphnen_site::theme::use_theme;

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let theme = use_theme().theme;
    let position = use_state(|| None::<(i32, i32)>);

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set(Some((e.client_x(), e.client_y())));
        });
    }

    // Nothing to draw until the pointer has moved (touch devices never do)
    let Some((x, y)) = *position else {
        return html! {};
    };

    html! {
        <>
            <style>
                {r#"
                    .custom-cursor {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 16px;
                        height: 16px;
                        margin: -8px 0 0 -8px;
                        border-radius: 9999px;
                        pointer-events: none;
                        z-index: 90;
                        mix-blend-mode: difference;
                        transition: transform 0.08s linear;
                    }
                    .custom-cursor-dark { background: #fff; }
                    .custom-cursor-light { background: #000; }
                    @media (hover: none) {
                        .custom-cursor { display: none; }
                    }
                "#}
            </style>
            <div
                class={classes!("custom-cursor", theme.pick("custom-cursor-dark", "custom-cursor-light"))}
                style={format!("transform: translate({}px, {}px);", x, y)}
            />
        </>
    }
}
