use std::time::Duration;

use yew::prelude::*;

use imphnen_site::config;
use imphnen_site::content::{Community, CommunityStat};
use imphnen_site::count_up::hook::use_count_up_with;
use imphnen_site::format::stat_badge;

use crate::components::reveal::Reveal;
use crate::pages::home::section_heading;

#[derive(Properties, PartialEq)]
pub struct CommunitySectionProps {
    pub community: Community,
}

#[function_component(CommunitySection)]
pub fn community_section(props: &CommunitySectionProps) -> Html {
    let community = &props.community;

    html! {
        <section id="community" class="section community">
            <style>
                {r#"
                    .community-glow {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        background: linear-gradient(to bottom right, rgba(88, 28, 135, 0.2), transparent);
                    }
                    .site.light .community-glow { background: linear-gradient(to bottom right, #f3e8ff, transparent); }
                    .channel-list { display: flex; flex-direction: column; gap: 1.5rem; }
                    .channel-card h3 { font-size: 1.25rem; font-weight: 700; margin: 0; }
                    .accent-blue { background: rgba(59, 130, 246, 0.2); color: #3b82f6; }
                    .accent-pink { background: rgba(236, 72, 153, 0.2); color: #ec4899; }
                    .accent-indigo { background: rgba(99, 102, 241, 0.2); color: #6366f1; }
                    .accent-green { background: rgba(34, 197, 94, 0.2); color: #22c55e; }
                    .accent-yellow { background: rgba(234, 179, 8, 0.2); color: #eab308; }
                    .stats-card h3 { font-size: 1.5rem; font-weight: 700; margin: 0 0 1.5rem; }
                    .stat-row { margin-bottom: 1.5rem; }
                    .stat-row-head { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }
                    .stat-row-label { display: flex; align-items: center; gap: 0.5rem; }
                    .progress {
                        width: 100%;
                        height: 10px;
                        border-radius: 9999px;
                        background: rgba(55, 65, 81, 0.2);
                        overflow: hidden;
                    }
                    .progress-fill {
                        height: 100%;
                        width: 0;
                        border-radius: 9999px;
                        transition: width 1s ease-out;
                    }
                    .revealed .progress-fill { width: var(--fill); }
                    .fill-blue { background: #3b82f6; }
                    .fill-green { background: #22c55e; }
                    .fill-yellow { background: #eab308; }
                    .fill-pink { background: #ec4899; }
                    .stats-footnote { padding-top: 1rem; font-size: 0.875rem; font-style: italic; text-align: center; }
                "#}
            </style>
            <div class="community-glow" />
            { section_heading(&community.heading) }

            <div class="split">
                <div class="channel-list">
                    { for community.channels.iter().enumerate().map(|(index, channel)| html! {
                        <Reveal delay_ms={100 * index as u32}>
                            <div class="card channel-card">
                                <div class="card-header">
                                    <span class={classes!("icon-box", format!("accent-{}", channel.accent))}>
                                        {&channel.icon}
                                    </span>
                                    <h3>{&channel.name}</h3>
                                </div>
                                <p class="muted">{&channel.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>

                <Reveal class="card stats-card">
                    <h3>{&community.stats_title}</h3>
                    { for community.stats.iter().enumerate().map(|(index, stat)| html! {
                        <StatRow stat={stat.clone()} delay_ms={200 * (index as u32 + 1)} />
                    }) }
                    <p class="stats-footnote muted">{&community.stats_footnote}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StatRowProps {
    stat: CommunityStat,
    delay_ms: u32,
}

#[function_component(StatRow)]
fn stat_row(props: &StatRowProps) -> Html {
    let stat = &props.stat;
    let value = use_count_up_with(
        stat.target,
        Duration::from_millis(config::COUNT_UP_DURATION_MS),
        stat.easing,
    );

    html! {
        <div class="stat-row">
            <div class="stat-row-head">
                <span class="stat-row-label">
                    <span>{&stat.icon}</span>
                    {&stat.label}
                </span>
                <span class="stat-value">{stat_badge(value)}</span>
            </div>
            <div class="progress">
                <div
                    class={classes!("progress-fill", format!("fill-{}", stat.accent))}
                    style={format!("--fill: {}%; transition-delay: {}ms;", stat.percent.min(100), props.delay_ms)}
                />
            </div>
        </div>
    }
}
