use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use imphnen_site::count_up::clock::{Clock, PerformanceClock};
use imphnen_site::count_up::scheduler::{IntervalScheduler, Scheduler, TickOutcome};
use imphnen_site::motion::{grid_offset, Spring, SpringConfig};
use imphnen_site::theme::use_theme;

struct GridMotion {
    x: Spring,
    y: Spring,
    last_ms: Option<f64>,
}

/// Fixed grid behind the page that drifts toward the pointer.
#[function_component(GridBackground)]
pub fn grid_background() -> Html {
    let theme = use_theme().theme;
    let offset = use_state(|| (0.0f64, 0.0f64));
    let motion = use_mut_ref(|| GridMotion {
        x: Spring::new(SpringConfig::grid(), 0.0),
        y: Spring::new(SpringConfig::grid(), 0.0),
        last_ms: None,
    });

    {
        let motion = motion.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let Some(window) = window() else { return };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let mut motion = motion.borrow_mut();
            motion.x.set_target(grid_offset(e.client_x() as f64, width));
            motion.y.set_target(grid_offset(e.client_y() as f64, height));
        });
    }

    {
        let offset = offset.clone();
        let motion: Rc<RefCell<GridMotion>> = motion.clone();
        use_effect_with_deps(
            move |_| {
                let clock = PerformanceClock;
                let task = IntervalScheduler::default().schedule_repeating(Box::new(move || {
                    let now = clock.now_ms();
                    let mut m = motion.borrow_mut();
                    let dt = m.last_ms.map(|last| (now - last) / 1000.0).unwrap_or(0.0);
                    m.last_ms = Some(now);
                    if m.x.is_settled(0.01) && m.y.is_settled(0.01) {
                        return TickOutcome::Continue;
                    }
                    m.x.step(dt);
                    m.y.step(dt);
                    offset.set((m.x.position(), m.y.position()));
                    TickOutcome::Continue
                }));
                move || drop(task)
            },
            (),
        );
    }

    let line = theme.pick("rgba(255, 255, 255, 0.1)", "rgba(0, 0, 0, 0.1)");
    let (dx, dy) = *offset;

    html! {
        <div class="grid-background">
            <style>
                {r#"
                    .grid-background {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .grid-background > div {
                        position: absolute;
                        inset: 0;
                    }
                    .grid-lines {
                        inset: -40px !important;
                        background-size: clamp(20px, 4vw, 40px) clamp(20px, 4vw, 40px);
                        will-change: transform;
                    }
                    .grid-base-dark { background: #000; }
                    .grid-base-light { background: #fff; }
                    .grid-fade-dark { background: linear-gradient(to top, #000, transparent 60%); }
                    .grid-fade-light { background: linear-gradient(to top, #fff, transparent 60%); }
                "#}
            </style>
            <div class={theme.pick("grid-base-dark", "grid-base-light")} />
            <div
                class="grid-lines"
                style={format!(
                    "background-image: linear-gradient(to right, {line} 1px, transparent 1px), linear-gradient(to bottom, {line} 1px, transparent 1px); transform: translate({dx:.2}px, {dy:.2}px);",
                    line = line,
                    dx = dx,
                    dy = dy,
                )}
            />
            <div class={theme.pick("grid-fade-dark", "grid-fade-light")} />
        </div>
    }
}
