use std::rc::Rc;

use log::info;
use yew::prelude::*;

use imphnen_site::content::{CallToAction, Course, Features, Hero, Links, SectionHeading, SiteContent, StatValue};
use imphnen_site::count_up::hook::use_count_up;
use imphnen_site::format::stat_badge;

use crate::components::background::GridBackground;
use crate::components::cursor::CustomCursor;
use crate::components::footer::Footer;
use crate::components::preloader::Preloader;
use crate::components::reveal::Reveal;
use crate::pages::community::CommunitySection;
use crate::pages::resources::ResourcesSection;
use crate::pages::testimonials::TestimonialsSection;

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<SiteContent>>();

    use_effect_with_deps(
        move |_| {
            info!("Home mounted");
            || ()
        },
        (),
    );

    let Some(content) = content else {
        return html! {};
    };

    html! {
        <>
            <CustomCursor />
            <Preloader brand={content.brand.name.clone()} />
            <GridBackground />
            <main class="site-content">
                <HeroSection hero={content.hero.clone()} links={content.links.clone()} />
                <FeaturesSection features={content.features.clone()} />
                <CommunitySection community={content.community.clone()} />
                <ResourcesSection resources={content.resources.clone()} />
                <CourseSection course={content.course.clone()} links={content.links.clone()} />
                <TestimonialsSection testimonials={content.testimonials.clone()} />
                <CtaSection cta={content.cta.clone()} links={content.links.clone()} />
            </main>
            <Footer
                brand={content.brand.clone()}
                links={content.links.clone()}
                footer={content.footer.clone()}
            />
        </>
    }
}

pub fn section_heading(heading: &SectionHeading) -> Html {
    html! {
        <div class="section-heading">
            <Reveal delay_ms={100}>
                <span class="eyebrow">{&heading.eyebrow}</span>
            </Reveal>
            <Reveal delay_ms={200}>
                <h2>{&heading.title}</h2>
            </Reveal>
            <Reveal delay_ms={300}>
                <div class="heading-rule" />
            </Reveal>
        </div>
    }
}

/// Link that opens one of the community's outbound pages in a new tab.
pub fn outbound(href: &str, class: Classes, label: Html) -> Html {
    html! {
        <a href={href.to_string()} target="_blank" rel="noopener noreferrer" class={class}>
            <span class="btn-label">{label}</span>
            <span class="btn-fill" />
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct CountBadgeProps {
    target: i64,
}

#[function_component(CountBadge)]
fn count_badge(props: &CountBadgeProps) -> Html {
    let value = use_count_up(props.target);
    html! { <span class="stat-value">{stat_badge(value)}</span> }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    hero: Hero,
    links: Links,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroProps) -> Html {
    let HeroProps { hero, links } = props;

    html! {
        <section class="hero">
            <div class="hero-inner">
                <Reveal delay_ms={300}>
                    <span class="hero-badge">
                        <span class="pulse-dot" />
                        {&hero.badge}
                    </span>
                </Reveal>
                <Reveal delay_ms={400}>
                    <h1>
                        <span class="headline-top">{&hero.headline_top}</span>
                        <span class="headline-bottom">{&hero.headline_bottom}</span>
                    </h1>
                </Reveal>
                <Reveal delay_ms={500}>
                    <p class="hero-subtitle">{&hero.subtitle}</p>
                </Reveal>
                <Reveal delay_ms={600} class="hero-stats">
                    { for hero.stats.iter().map(|stat| html! {
                        <div class="stat-pill">
                            <span class="stat-icon">{&stat.icon}</span>
                            {
                                match &stat.value {
                                    StatValue::Count(target) => html! { <CountBadge target={*target} /> },
                                    StatValue::Text(text) => html! { <span class="stat-value">{text}</span> },
                                }
                            }
                            <span class="stat-label">{&stat.label}</span>
                        </div>
                    }) }
                </Reveal>
                <Reveal delay_ms={700} class="hero-ctas">
                    { outbound(&links.facebook_group, classes!("btn", "btn-outline"), html! {
                        <>{&hero.primary_cta}{" →"}</>
                    }) }
                    { outbound(&links.discord, classes!("btn", "btn-outline", "btn-soft"), html! {
                        <>{"🎧 "}{&hero.secondary_cta}</>
                    }) }
                </Reveal>
            </div>

            <div class="floating-icons" aria-hidden="true">
                <span class="float float-1">{"</>"}</span>
                <span class="float float-2">{">_"}</span>
                <span class="float float-3">{"🗄"}</span>
                <span class="float float-4">{"🌐"}</span>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FeaturesProps {
    features: Features,
}

#[function_component(FeaturesSection)]
fn features_section(props: &FeaturesProps) -> Html {
    let features = &props.features;
    html! {
        <section id="features" class="section">
            { section_heading(&features.heading) }
            <div class="card-grid three">
                { for features.items.iter().enumerate().map(|(index, feature)| html! {
                    <Reveal delay_ms={100 * index as u32}>
                        <div class="card feature-card">
                            <div class="card-header">
                                <span class="icon-box">{&feature.icon}</span>
                                <h3>{&feature.title}</h3>
                            </div>
                            <p class="muted">{&feature.description}</p>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CourseProps {
    course: Course,
    links: Links,
}

#[function_component(CourseSection)]
fn course_section(props: &CourseProps) -> Html {
    let CourseProps { course, links } = props;
    html! {
        <section class="section course">
            <div class="split">
                <div>
                    <Reveal delay_ms={100}><span class="eyebrow">{&course.eyebrow}</span></Reveal>
                    <Reveal delay_ms={200}><h2>{&course.title}</h2></Reveal>
                    <Reveal delay_ms={300}><p class="muted lead">{&course.subtitle}</p></Reveal>
                    <Reveal delay_ms={400} class="tag-row">
                        { for course.technologies.iter().map(|tech| html! {
                            <span class="tag">{tech}</span>
                        }) }
                    </Reveal>
                    <Reveal delay_ms={500} class="hero-ctas left">
                        { outbound(&links.discord, classes!("btn", "btn-solid"), html! {
                            <>{&course.primary_cta}{" →"}</>
                        }) }
                        { outbound(&links.facebook_group, classes!("btn", "btn-outline"), html! {
                            <>{&course.secondary_cta}{" ›"}</>
                        }) }
                    </Reveal>
                </div>
                <Reveal class="card course-image">
                    <img src={course.image.clone()} loading="lazy" alt="Web Development Course" />
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CtaProps {
    cta: CallToAction,
    links: Links,
}

#[function_component(CtaSection)]
fn cta_section(props: &CtaProps) -> Html {
    let CtaProps { cta, links } = props;
    html! {
        <section class="section cta">
            <div class="cta-glow" />
            <div class="card cta-card">
                <Reveal><h2>{&cta.title}</h2></Reveal>
                <Reveal delay_ms={100} class="cta-tiles">
                    { for cta.tiles.iter().map(|tile| html! {
                        <div class="cta-tile">
                            <div class="cta-value">{&tile.value}</div>
                            <p class="muted">{&tile.label}</p>
                            <p class="note">{&tile.note}</p>
                        </div>
                    }) }
                </Reveal>
                <Reveal delay_ms={200} class="hero-ctas">
                    { outbound(&links.discord, classes!("btn", "btn-solid"), html! {
                        <>{"🎧 "}{&cta.discord_label}</>
                    }) }
                    { outbound(&links.facebook_group, classes!("btn", "btn-outline"), html! {
                        <>{"📘 "}{&cta.facebook_label}</>
                    }) }
                </Reveal>
            </div>
        </section>
    }
}

pub const SITE_CSS: &str = r#"
    .site {
        min-height: 100vh;
        overflow-x: hidden;
        user-select: none;
        font-family: 'Manrope', system-ui, sans-serif;
    }
    .site.dark {
        --fg: #fff;
        --muted: #9ca3af;
        --card-bg: rgba(0, 0, 0, 0.5);
        --border: #1f2937;
        --soft: rgba(255, 255, 255, 0.1);
        color: var(--fg);
    }
    .site.light {
        --fg: #000;
        --muted: #4b5563;
        --card-bg: rgba(255, 255, 255, 0.5);
        --border: #e5e7eb;
        --soft: rgba(0, 0, 0, 0.1);
        color: var(--fg);
    }
    .site-content { position: relative; z-index: 10; }
    .muted { color: var(--muted); }
    .brand-mark {
        display: inline-block;
        padding: 0 0.5rem;
        font-size: 1.25rem;
        font-weight: 600;
    }
    .site.dark .brand-mark { background: #fff; color: #000; }
    .site.light .brand-mark { background: #000; color: #fff; }

    .reveal {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .reveal.revealed { opacity: 1; transform: none; }

    .section { position: relative; padding: 5rem 1.5rem; max-width: 80rem; margin: 0 auto; }
    .section-heading { text-align: center; margin-bottom: 4rem; }
    .section-heading h2, .split h2, .cta-card h2 {
        font-size: clamp(1.875rem, 4vw, 3rem);
        font-weight: 700;
        margin: 0 0 1rem;
    }
    .eyebrow {
        display: inline-block;
        padding: 0.25rem 1rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 500;
        margin-bottom: 1rem;
        background: var(--soft);
    }
    .heading-rule {
        width: 5rem;
        height: 4px;
        margin: 0 auto;
        border-radius: 9999px;
        background: linear-gradient(to right, #a855f7, #ec4899);
    }

    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 6rem 1rem 3rem;
        position: relative;
    }
    .hero-inner { text-align: center; max-width: 56rem; }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.25rem 1rem;
        border: 2px solid var(--soft);
        border-radius: 9999px;
        font-size: 0.875rem;
        margin-bottom: 1rem;
    }
    .pulse-dot {
        width: 8px;
        height: 8px;
        border-radius: 9999px;
        background: #22c55e;
        box-shadow: 0 0 0 0 rgba(74, 222, 128, 0.75);
        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    @keyframes ping {
        75%, 100% { box-shadow: 0 0 0 8px rgba(74, 222, 128, 0); }
    }
    .hero h1 { font-size: clamp(1.875rem, 7vw, 4.5rem); font-weight: 700; letter-spacing: -0.025em; }
    .headline-top, .headline-bottom { display: block; }
    .headline-bottom {
        margin-top: 0.5rem;
        background: linear-gradient(to right, #a855f7, var(--fg), #ec4899);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-subtitle { font-size: clamp(1rem, 2.5vw, 1.5rem); font-style: italic; color: var(--muted); max-width: 42rem; margin: 1.5rem auto; }
    .hero-stats { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-top: 2rem; }
    .stat-pill { display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: 0.5rem; background: var(--soft); }
    .stat-value { font-weight: 700; font-variant-numeric: tabular-nums; }
    .stat-label { color: var(--muted); }
    .hero-ctas { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-top: 2rem; }
    .hero-ctas.left { justify-content: flex-start; }

    .btn {
        position: relative;
        overflow: hidden;
        display: inline-flex;
        align-items: center;
        padding: 1rem 1.5rem;
        border: 2px solid var(--fg);
        border-radius: 0.375rem;
        font-weight: 600;
        text-decoration: none;
        color: var(--fg);
        background: transparent;
    }
    .btn-soft { border-color: var(--muted); }
    .btn-label { position: relative; z-index: 1; transition: color 0.3s ease; }
    .btn-fill {
        position: absolute;
        inset: 0;
        background: var(--fg);
        transform: translateY(100%);
        transition: transform 0.3s ease;
    }
    .btn:hover .btn-fill { transform: translateY(0); }
    .site.dark .btn:hover .btn-label { color: #000; }
    .site.light .btn:hover .btn-label { color: #fff; }
    .btn-solid { background: var(--fg); }
    .site.dark .btn-solid .btn-label { color: #000; }
    .site.light .btn-solid .btn-label { color: #fff; }
    .btn-solid .btn-fill { background: linear-gradient(to right, #a855f7, #ec4899); }

    .floating-icons { position: absolute; inset: 0; overflow: hidden; pointer-events: none; z-index: -1; }
    .float { position: absolute; font-size: 2.5rem; opacity: 0.2; animation: float 3s ease-in-out infinite; }
    .float-1 { top: 20%; left: 10%; color: #a855f7; }
    .float-2 { top: 30%; right: 15%; color: #3b82f6; animation-delay: 0.5s; }
    .float-3 { bottom: 25%; left: 20%; animation-delay: 1s; }
    .float-4 { bottom: 20%; right: 10%; animation-delay: 1.5s; }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }

    .card-grid { display: grid; gap: 2rem; }
    .card-grid.three { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
    .card-grid.two { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
    .card {
        height: 100%;
        padding: 1.5rem;
        border: 1px solid var(--border);
        border-radius: 0.75rem;
        background: var(--card-bg);
        backdrop-filter: blur(24px);
        transition: border-color 0.3s ease;
        box-sizing: border-box;
    }
    .card:hover { border-color: var(--muted); }
    .card-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
    .card-header h3 { font-size: 1.25rem; margin: 0; }
    .icon-box { padding: 0.75rem; border-radius: 0.5rem; background: var(--soft); font-size: 1.25rem; }

    .split { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 2.5rem; align-items: center; }
    .lead { font-size: 1.25rem; }
    .tag-row { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1.5rem 0; }
    .tag { padding: 0.25rem 0.75rem; border: 1px solid var(--border); border-radius: 9999px; font-size: 0.75rem; }
    .course-image img { width: 100%; border-radius: 0.5rem; }

    .cta-glow { position: absolute; inset: 0; background: linear-gradient(to right, rgba(88, 28, 135, 0.3), rgba(131, 24, 67, 0.3)); }
    .site.light .cta-glow { background: linear-gradient(to right, #f3e8ff, #fce7f3); }
    .cta-card { position: relative; text-align: center; padding: 3rem; border-width: 2px; border-radius: 1rem; }
    .cta-tiles { display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 1.5rem; margin: 2rem 0; }
    .cta-value { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }
    .note { font-size: 0.75rem; font-style: italic; }
"#;
