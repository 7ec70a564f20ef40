use std::time::Duration;

use log::warn;
use yew::prelude::*;

use super::animator::CountUpAnimator;
use super::easing::Easing;
use crate::config;

/// Counts from zero to `target` over the default duration.
///
/// Returns `None` when the target can't be animated, so the caller can show a
/// fallback instead of a frozen number.
#[hook]
pub fn use_count_up(target: i64) -> Option<u64> {
    use_count_up_with(
        target,
        Duration::from_millis(config::COUNT_UP_DURATION_MS),
        Easing::Linear,
    )
}

/// What to show before the first tick. An invalid target never shows a
/// number, not even for one frame.
fn initial_value(target: i64) -> Option<u64> {
    (target >= 0).then_some(0)
}

#[hook]
pub fn use_count_up_with(target: i64, duration: Duration, easing: Easing) -> Option<u64> {
    let value = use_state(|| initial_value(target));

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(target, duration, easing)| {
                let setter = value.setter();
                let session = CountUpAnimator::browser()
                    .with_easing(*easing)
                    .start_observed(*target, *duration, {
                        let setter = setter.clone();
                        move |current| setter.set(Some(current))
                    });

                let session = match session {
                    Ok(session) => {
                        setter.set(Some(session.current_value()));
                        Some(session)
                    }
                    Err(e) => {
                        warn!("count-up for {} not started: {}", target, e);
                        setter.set(None);
                        None
                    }
                };

                // unmount or a new target discards the session
                move || drop(session)
            },
            (target, duration, easing),
        );
    }

    *value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_target_starts_without_a_number() {
        assert_eq!(initial_value(-1), None);
        assert_eq!(initial_value(0), Some(0));
        assert_eq!(initial_value(169_000), Some(0));
    }
}
