use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        gap: 1rem;
                    }
                    .not-found h1 { font-size: 4rem; margin: 0; }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p class="muted">{"Halaman ini gak ada. Mungkin lagi ngoding sambil rebahan."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-outline">
                <span class="btn-label">{"Balik ke Beranda"}</span>
                <span class="btn-fill" />
            </Link<Route>>
        </section>
    }
}
