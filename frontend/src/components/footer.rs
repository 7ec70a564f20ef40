use yew::prelude::*;

use imphnen_site::content::{Brand, Footer as FooterContent, Links};
use imphnen_site::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
    pub links: Links,
    pub footer: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let theme = use_theme().theme;
    let FooterProps { brand, links, footer } = props;

    let socials = [
        ("f", "Facebook", &links.facebook),
        ("ig", "Instagram", &links.instagram),
        ("x", "Twitter", &links.twitter),
        ("gh", "GitHub", &links.github),
    ];

    html! {
        <footer class={classes!("site-footer", theme.pick("footer-dark", "footer-light"))}>
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        z-index: 10;
                        padding: 3rem 1.5rem;
                        border-top: 1px solid var(--border);
                    }
                    .footer-dark { --border: #1f2937; --muted: #9ca3af; color: #fff; }
                    .footer-light { --border: #e5e7eb; --muted: #4b5563; color: #000; }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2.5rem;
                    }
                    .footer-grid h3 { font-weight: 600; margin-bottom: 1rem; }
                    .footer-grid ul { list-style: none; padding: 0; margin: 0; }
                    .footer-grid li { margin-bottom: 0.5rem; }
                    .footer-long-name { font-size: 0.75rem; font-weight: 600; margin: 0.5rem 0 0; }
                    .footer-muted { color: var(--muted); font-size: 0.875rem; }
                    .footer-muted a { color: inherit; text-decoration: none; }
                    .footer-muted a:hover, .footer-socials a:hover { color: #a855f7; }
                    .footer-socials { display: flex; gap: 1rem; margin-top: 1rem; }
                    .footer-socials a {
                        color: var(--muted);
                        text-decoration: none;
                        font-weight: 700;
                        transition: color 0.2s ease;
                    }
                    .newsletter { display: flex; gap: 0.5rem; }
                    .newsletter input {
                        flex: 1;
                        background: transparent;
                        border: 1px solid var(--border);
                        border-radius: 0.375rem;
                        padding: 0.5rem 0.75rem;
                        color: inherit;
                    }
                    .newsletter button {
                        border: none;
                        border-radius: 0.375rem;
                        padding: 0 0.75rem;
                        cursor: pointer;
                    }
                    .footer-dark .newsletter button { background: #fff; color: #000; }
                    .footer-light .newsletter button { background: #000; color: #fff; }
                    .footer-bottom {
                        max-width: 80rem;
                        margin: 2.5rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid var(--border);
                        text-align: center;
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <span class="brand-mark" title={brand.long_name.clone()}>{&brand.name}</span>
                    <p class="footer-long-name">{&brand.long_name}</p>
                    <p class="footer-muted">{&brand.tagline}</p>
                    <div class="footer-socials">
                        { for socials.iter().map(|(glyph, name, href)| html! {
                            <a href={(*href).clone()} aria-label={*name}>
                                {*glyph}
                                <span class="sr-only">{*name}</span>
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h3>{&footer.quick_nav_title}</h3>
                    <ul class="footer-muted">
                        { for footer.quick_nav.iter().map(|link| html! {
                            <li><a href={link.href()}>{&link.label}</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{&footer.languages_title}</h3>
                    <ul class="footer-muted">
                        { for footer.languages.iter().map(|line| html! { <li>{line}</li> }) }
                    </ul>
                </div>

                <div>
                    <h3>{&footer.newsletter_title}</h3>
                    <p class="footer-muted">{&footer.newsletter_blurb}</p>
                    // Decorative only, nothing is submitted
                    <div class="newsletter">
                        <input type="email" placeholder="Email kamu" />
                        <button type="button" aria-label="Daftar">{"➤"}</button>
                    </div>
                </div>
            </div>

            <div class="footer-bottom footer-muted">
                <p>{&footer.copyright}</p>
            </div>
        </footer>
    }
}
