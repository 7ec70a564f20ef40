use yew::prelude::*;

use imphnen_site::content::Testimonials;

use crate::components::reveal::Reveal;
use crate::pages::home::section_heading;

const MAX_STARS: u8 = 5;

/// Filled/empty flags for a star row; ratings above five fill every star.
pub fn star_row(rating: u8) -> [bool; MAX_STARS as usize] {
    let mut stars = [false; MAX_STARS as usize];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = (i as u8) < rating.min(MAX_STARS);
    }
    stars
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsSectionProps {
    pub testimonials: Testimonials,
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &TestimonialsSectionProps) -> Html {
    let testimonials = &props.testimonials;

    html! {
        <section id="testimonials" class="section">
            <style>
                {r#"
                    .testimonial-quote { font-size: 1.125rem; font-style: italic; max-width: 42rem; margin: 1.5rem auto 0; }
                    .testimonial-avatar {
                        width: 48px;
                        height: 48px;
                        border-radius: 9999px;
                        overflow: hidden;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        background: var(--soft);
                    }
                    .testimonial-avatar img { width: 100%; height: 100%; object-fit: cover; }
                    .testimonial-role { font-size: 0.875rem; margin: 0; }
                    .stars { display: flex; gap: 0.125rem; margin-bottom: 1rem; }
                    .star { color: #9ca3af; }
                    .star.filled { color: #eab308; }
                    .testimonial-text { font-size: 0.875rem; font-style: italic; }
                "#}
            </style>
            { section_heading(&testimonials.heading) }
            <Reveal delay_ms={300}>
                <p class="testimonial-quote muted">{&testimonials.quote}</p>
            </Reveal>

            <div class="card-grid three" style="margin-top: 3rem;">
                { for testimonials.items.iter().enumerate().map(|(index, t)| html! {
                    <Reveal delay_ms={100 * index as u32}>
                        <div class="card">
                            <div class="card-header">
                                <span class="testimonial-avatar" title={t.initial()}>
                                    <img src={t.avatar.clone()} loading="lazy" alt={t.name.clone()} />
                                </span>
                                <div>
                                    <h3>{&t.name}</h3>
                                    <p class="testimonial-role muted">{&t.role}</p>
                                </div>
                            </div>
                            <div class="stars" aria-label={format!("{} dari 5", t.rating)}>
                                { for star_row(t.rating).iter().map(|&filled| html! {
                                    <span class={classes!("star", filled.then(|| "filled"))}>{"★"}</span>
                                }) }
                            </div>
                            <p class="testimonial-text">{&t.text}</p>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_row_fills_rating_count() {
        assert_eq!(star_row(4), [true, true, true, true, false]);
        assert_eq!(star_row(0), [false; 5]);
    }

    #[test]
    fn star_row_caps_at_five() {
        assert_eq!(star_row(9), [true; 5]);
    }
}
