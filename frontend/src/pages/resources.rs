use yew::prelude::*;

use imphnen_site::content::{Article, Challenge, Resources, SharingSession, Video};

use crate::components::reveal::Reveal;
use crate::pages::home::section_heading;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResourceTab {
    #[default]
    Videos,
    Articles,
    Challenges,
    Sessions,
}

impl ResourceTab {
    pub const ALL: [ResourceTab; 4] = [
        ResourceTab::Videos,
        ResourceTab::Articles,
        ResourceTab::Challenges,
        ResourceTab::Sessions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResourceTab::Videos => "Video",
            ResourceTab::Articles => "Artikel",
            ResourceTab::Challenges => "Tantangan",
            ResourceTab::Sessions => "Sharing",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ResourceTab::Videos => "🎬",
            ResourceTab::Articles => "📄",
            ResourceTab::Challenges => "⚡",
            ResourceTab::Sessions => "👥",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ResourcesSectionProps {
    pub resources: Resources,
}

#[function_component(ResourcesSection)]
pub fn resources_section(props: &ResourcesSectionProps) -> Html {
    let resources = &props.resources;
    let active = use_state(ResourceTab::default);

    let panel = match *active {
        ResourceTab::Videos => video_panel(&resources.videos),
        ResourceTab::Articles => article_panel(&resources.articles),
        ResourceTab::Challenges => challenge_panel(&resources.challenges),
        ResourceTab::Sessions => session_panel(&resources.sessions),
    };

    html! {
        <section id="resources" class="section">
            <style>
                {r#"
                    .tab-list {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 0.25rem;
                        padding: 0.25rem;
                        margin-bottom: 2rem;
                        border-radius: 0.5rem;
                        background: var(--soft);
                    }
                    .tab-trigger {
                        padding: 0.5rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: transparent;
                        color: var(--fg);
                        cursor: pointer;
                        font-weight: 500;
                    }
                    .site.dark .tab-trigger.active { background: #fff; color: #000; }
                    .site.light .tab-trigger.active { background: #000; color: #fff; }
                    .video-card { padding: 0; overflow: hidden; }
                    .video-thumb { position: relative; aspect-ratio: 16 / 9; overflow: hidden; }
                    .video-thumb img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s ease; }
                    .video-card:hover .video-thumb img { transform: scale(1.05); }
                    .video-play {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 3rem;
                        color: #fff;
                        background: rgba(0, 0, 0, 0.5);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .video-card:hover .video-play { opacity: 1; }
                    .video-duration {
                        position: absolute;
                        right: 0.5rem;
                        bottom: 0.5rem;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                        font-size: 0.75rem;
                        color: #fff;
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .video-body { padding: 1rem; }
                    .video-body h3, .resource-title { font-size: 1.125rem; font-weight: 700; margin: 0 0 0.5rem; }
                    .byline { font-size: 0.75rem; margin: 0; }
                    .challenge-head, .challenge-foot { display: flex; justify-content: space-between; align-items: center; }
                    .level { padding: 0.125rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; color: #fff; }
                    .level-beginner { background: #22c55e; }
                    .level-intermediate { background: #eab308; }
                    .level-advanced { background: #ef4444; }
                    .session-card { display: flex; flex-wrap: wrap; gap: 1.5rem; }
                    .session-card .speaker-photo { flex: 0 0 25%; min-width: 140px; aspect-ratio: 1; border-radius: 0.5rem; overflow: hidden; }
                    .session-card .speaker-photo img { width: 100%; height: 100%; object-fit: cover; }
                    .session-body { flex: 1; min-width: 240px; }
                    .speaker { display: flex; align-items: center; gap: 0.5rem; }
                    .avatar {
                        width: 24px;
                        height: 24px;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.75rem;
                        background: var(--soft);
                    }
                "#}
            </style>
            { section_heading(&resources.heading) }

            <div class="tab-list" role="tablist">
                { for ResourceTab::ALL.iter().map(|&tab| {
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(tab))
                    };
                    html! {
                        <button
                            role="tab"
                            class={classes!("tab-trigger", (*active == tab).then(|| "active"))}
                            aria-selected={(*active == tab).to_string()}
                            onclick={onclick}
                        >
                            {tab.icon()}{" "}{tab.label()}
                        </button>
                    }
                }) }
            </div>

            <div role="tabpanel">
                { panel }
            </div>
        </section>
    }
}

fn video_panel(videos: &[Video]) -> Html {
    html! {
        <div class="card-grid three">
            { for videos.iter().enumerate().map(|(index, video)| html! {
                <Reveal delay_ms={100 * index as u32}>
                    <div class="card video-card">
                        <div class="video-thumb">
                            <img src={video.thumbnail.clone()} loading="lazy" alt={video.title.clone()} />
                            <div class="video-play">{"▶"}</div>
                            <div class="video-duration">{&video.duration}</div>
                        </div>
                        <div class="video-body">
                            <h3>{&video.title}</h3>
                            <p class="muted">{&video.description}</p>
                        </div>
                    </div>
                </Reveal>
            }) }
        </div>
    }
}

fn article_panel(articles: &[Article]) -> Html {
    html! {
        <div class="card-grid two">
            { for articles.iter().enumerate().map(|(index, article)| html! {
                <Reveal delay_ms={100 * index as u32}>
                    <div class="card">
                        <div class="card-header">
                            <span class="icon-box">{&article.icon}</span>
                            <div>
                                <h3 class="resource-title">{&article.title}</h3>
                                <p class="byline muted">{format!("{} • {}", article.author, article.date)}</p>
                            </div>
                        </div>
                        <p class="muted">{&article.description}</p>
                        <div class="tag-row">
                            { for article.tags.iter().map(|tag| html! { <span class="tag">{tag}</span> }) }
                        </div>
                    </div>
                </Reveal>
            }) }
        </div>
    }
}

fn challenge_panel(challenges: &[Challenge]) -> Html {
    html! {
        <div class="card-grid two">
            { for challenges.iter().enumerate().map(|(index, challenge)| html! {
                <Reveal delay_ms={100 * index as u32}>
                    <div class="card">
                        <div class="challenge-head">
                            <h3 class="resource-title">{&challenge.title}</h3>
                            <span class={classes!("level", challenge.level.badge_class())}>
                                {challenge.level.label()}
                            </span>
                        </div>
                        <p class="muted">{&challenge.description}</p>
                        <div class="challenge-foot">
                            <span class="muted">{"🕒 "}{&challenge.estimate}</span>
                            <button type="button" class="tag">{"Mulai Tantangan"}</button>
                        </div>
                    </div>
                </Reveal>
            }) }
        </div>
    }
}

fn session_panel(sessions: &[SharingSession]) -> Html {
    html! {
        <div class="card-grid">
            { for sessions.iter().enumerate().map(|(index, session)| {
                let initial: String = session.speaker.chars().take(1).collect();
                html! {
                    <Reveal delay_ms={100 * index as u32}>
                        <div class="card session-card">
                            <div class="speaker-photo">
                                <img src={session.speaker_image.clone()} loading="lazy" alt={session.speaker.clone()} />
                            </div>
                            <div class="session-body">
                                <h3 class="resource-title">{&session.title}</h3>
                                <div class="tag-row">
                                    <span class="tag">{&session.date}</span>
                                    <span class="tag">{&session.time}</span>
                                </div>
                                <p class="muted">{&session.description}</p>
                                <div class="speaker">
                                    <span class="avatar">{initial}</span>
                                    <span>{&session.speaker}</span>
                                    <span class="muted">{&session.role}</span>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn videos_tab_is_selected_first() {
        assert_eq!(ResourceTab::default(), ResourceTab::Videos);
        assert_eq!(ResourceTab::ALL[0], ResourceTab::default());
    }

    #[test]
    fn every_tab_has_a_label() {
        let labels: Vec<_> = ResourceTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Video", "Artikel", "Tantangan", "Sharing"]);
    }
}
