use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::debug;

use super::clock::{Clock, PerformanceClock};
use super::easing::Easing;
use super::scheduler::{IntervalScheduler, ScheduledTask, Scheduler, TickOutcome};
use super::session::{AnimatorError, CountUpSession, SessionStatus};

/// Starts count-up sessions on an injected clock and scheduler.
///
/// The animator itself holds no per-session state; every session it starts
/// owns its own scheduled task, so sessions never observe each other.
#[derive(Clone)]
pub struct CountUpAnimator {
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn Scheduler>,
    easing: Easing,
}

impl CountUpAnimator {
    pub fn new(clock: impl Clock + 'static, scheduler: impl Scheduler + 'static) -> Self {
        Self {
            clock: Rc::new(clock),
            scheduler: Rc::new(scheduler),
            easing: Easing::default(),
        }
    }

    pub fn browser() -> Self {
        Self::new(PerformanceClock, IntervalScheduler::default())
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&self, target: i64, duration: Duration) -> Result<SessionHandle, AnimatorError> {
        self.spawn(target, duration, None)
    }

    /// Like [`start`](Self::start), calling `observer` with each new value a
    /// tick produces.
    pub fn start_observed(
        &self,
        target: i64,
        duration: Duration,
        observer: impl Fn(u64) + 'static,
    ) -> Result<SessionHandle, AnimatorError> {
        self.spawn(target, duration, Some(Box::new(observer)))
    }

    fn spawn(
        &self,
        target: i64,
        duration: Duration,
        observer: Option<Box<dyn Fn(u64)>>,
    ) -> Result<SessionHandle, AnimatorError> {
        let mut session = CountUpSession::new(target, duration, self.easing)?;
        session.begin(self.clock.now_ms());
        debug!("count-up to {} over {:?} started", session.target(), duration);

        let running = session.status() == SessionStatus::Running;
        let session = Rc::new(RefCell::new(session));

        let task = if running {
            let clock = self.clock.clone();
            let ticked = session.clone();
            Some(self.scheduler.schedule_repeating(Box::new(move || {
                let (before, after, outcome) = {
                    let mut session = ticked.borrow_mut();
                    let before = session.current();
                    let outcome = session.tick(clock.now_ms());
                    (before, session.current(), outcome)
                };
                if after != before {
                    if let Some(observer) = &observer {
                        observer(after);
                    }
                }
                outcome
            })))
        } else {
            None
        };

        Ok(SessionHandle {
            session,
            task: RefCell::new(task),
        })
    }
}

/// Owner of one running count-up. Dropping the handle stops its updates.
pub struct SessionHandle {
    session: Rc<RefCell<CountUpSession>>,
    task: RefCell<Option<ScheduledTask>>,
}

impl SessionHandle {
    pub fn current_value(&self) -> u64 {
        self.session.borrow().current()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.borrow().status()
    }

    pub fn cancel(&self) {
        self.session.borrow_mut().cancel();
        let task = self.task.borrow_mut().take();
        if let Some(task) = task {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count_up::clock::ManualClock;
    use crate::count_up::scheduler::ManualScheduler;
    use std::cell::Cell;

    fn rig() -> (ManualClock, ManualScheduler, CountUpAnimator) {
        let clock = ManualClock::new();
        let scheduler = ManualScheduler::new();
        let animator = CountUpAnimator::new(clock.clone(), scheduler.clone());
        (clock, scheduler, animator)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn members_badge_reaches_target_on_schedule() {
        let (clock, scheduler, animator) = rig();
        let handle = animator.start(169_000, ms(2000)).unwrap();
        assert_eq!(handle.current_value(), 0);
        assert_eq!(handle.status(), SessionStatus::Running);

        clock.advance(1000.0);
        scheduler.run_tick();
        assert_eq!(handle.current_value(), 84_500);

        clock.advance(1000.0);
        scheduler.run_tick();
        assert_eq!(handle.current_value(), 169_000);
        assert_eq!(handle.status(), SessionStatus::Completed);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancel_freezes_last_computed_value() {
        let (clock, scheduler, animator) = rig();
        let handle = animator.start(100, ms(500)).unwrap();

        clock.advance(100.0);
        scheduler.run_tick();
        assert_eq!(handle.current_value(), 20);

        clock.advance(100.0);
        handle.cancel();
        clock.advance(1000.0);
        scheduler.run_ticks(5);

        assert_eq!(handle.current_value(), 20);
        assert_eq!(handle.status(), SessionStatus::Cancelled);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let (clock, scheduler, animator) = rig();
        let handle = animator.start(100, ms(500)).unwrap();
        clock.advance(250.0);
        scheduler.run_tick();

        handle.cancel();
        let once = (handle.current_value(), handle.status());
        handle.cancel();
        assert_eq!((handle.current_value(), handle.status()), once);
    }

    #[test]
    fn cancel_after_completion_is_a_no_op() {
        let (clock, scheduler, animator) = rig();
        let handle = animator.start(30, ms(100)).unwrap();
        clock.advance(150.0);
        scheduler.run_tick();

        handle.cancel();
        assert_eq!(handle.status(), SessionStatus::Completed);
        assert_eq!(handle.current_value(), 30);
    }

    #[test]
    fn zero_target_completes_immediately() {
        let (_clock, scheduler, animator) = rig();
        let handle = animator.start(0, ms(1000)).unwrap();
        assert_eq!(handle.status(), SessionStatus::Completed);
        assert_eq!(handle.current_value(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn invalid_arguments_create_no_session() {
        let (_clock, scheduler, animator) = rig();
        assert!(matches!(
            animator.start(-1, ms(1000)),
            Err(AnimatorError::InvalidArgument { name: "target", .. })
        ));
        assert!(matches!(
            animator.start(5, Duration::ZERO),
            Err(AnimatorError::InvalidArgument { name: "duration", .. })
        ));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn duration_shorter_than_a_tick_completes_on_first_tick() {
        let (clock, scheduler, animator) = rig();
        let handle = animator.start(50, ms(1)).unwrap();
        clock.advance(16.0);
        scheduler.run_tick();
        assert_eq!(handle.current_value(), 50);
        assert_eq!(handle.status(), SessionStatus::Completed);
    }

    #[test]
    fn value_never_decreases_even_with_a_jittery_clock() {
        let (clock, scheduler, animator) = rig();
        let animator = animator.with_easing(Easing::EaseInOutCubic);
        let handle = animator.start(10_000, ms(800)).unwrap();

        let steps = [16.0, 16.0, -40.0, 33.0, 5.0, -2.0, 120.0, 16.0, 400.0, -300.0, 600.0];
        let mut last = handle.current_value();
        for step in steps {
            clock.advance(step);
            scheduler.run_tick();
            let now = handle.current_value();
            assert!(now >= last, "went from {} to {}", last, now);
            last = now;
        }
        assert_eq!(handle.current_value(), 10_000);
        assert_eq!(handle.status(), SessionStatus::Completed);
    }

    #[test]
    fn concurrent_sessions_match_isolated_runs() {
        fn trace(handles: &[&SessionHandle], clock: &ManualClock, scheduler: &ManualScheduler) -> Vec<Vec<u64>> {
            let mut out = vec![Vec::new(); handles.len()];
            for _ in 0..40 {
                clock.advance(16.0);
                scheduler.run_tick();
                for (i, h) in handles.iter().enumerate() {
                    out[i].push(h.current_value());
                }
            }
            out
        }

        let (clock, scheduler, animator) = rig();
        let a = animator.start(169_000, ms(500)).unwrap();
        let b = animator.start(50, ms(300)).unwrap();
        let together = trace(&[&a, &b], &clock, &scheduler);

        let (clock, scheduler, animator) = rig();
        let a = animator.start(169_000, ms(500)).unwrap();
        let alone_a = trace(&[&a], &clock, &scheduler);

        let (clock, scheduler, animator) = rig();
        let b = animator.start(50, ms(300)).unwrap();
        let alone_b = trace(&[&b], &clock, &scheduler);

        assert_eq!(together[0], alone_a[0]);
        assert_eq!(together[1], alone_b[0]);
    }

    #[test]
    fn cancelling_one_session_leaves_others_running() {
        let (clock, scheduler, animator) = rig();
        let a = animator.start(100, ms(100)).unwrap();
        let b = animator.start(100, ms(100)).unwrap();

        clock.advance(50.0);
        scheduler.run_tick();
        a.cancel();
        clock.advance(50.0);
        scheduler.run_tick();

        assert_eq!(a.current_value(), 50);
        assert_eq!(b.current_value(), 100);
        assert_eq!(b.status(), SessionStatus::Completed);
    }

    #[test]
    fn observer_sees_each_change_and_the_final_value() {
        let (clock, scheduler, animator) = rig();
        let seen: Rc<RefCell<Vec<u64>>> = Rc::default();
        let sink = seen.clone();
        let _handle = animator
            .start_observed(10, ms(100), move |v| sink.borrow_mut().push(v))
            .unwrap();

        for _ in 0..4 {
            clock.advance(30.0);
            scheduler.run_tick();
        }
        clock.advance(5.0);
        scheduler.run_tick();

        assert_eq!(*seen.borrow(), vec![3, 6, 9, 10]);
    }

    #[test]
    fn observer_can_cancel_its_own_session() {
        let (clock, scheduler, animator) = rig();
        let slot: Rc<RefCell<Option<SessionHandle>>> = Rc::default();
        let calls = Rc::new(Cell::new(0));

        let slot_clone = slot.clone();
        let calls_clone = calls.clone();
        let handle = animator
            .start_observed(100, ms(100), move |_| {
                calls_clone.set(calls_clone.get() + 1);
                if let Some(handle) = slot_clone.borrow().as_ref() {
                    handle.cancel();
                }
            })
            .unwrap();
        *slot.borrow_mut() = Some(handle);

        for _ in 0..5 {
            clock.advance(10.0);
            scheduler.run_tick();
        }

        let slot = slot.borrow();
        let handle = slot.as_ref().unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(handle.current_value(), 10);
        assert_eq!(handle.status(), SessionStatus::Cancelled);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_the_handle_unregisters_the_session() {
        let (clock, scheduler, animator) = rig();
        let handle = animator.start(100, ms(1000)).unwrap();
        assert_eq!(scheduler.pending(), 1);
        drop(handle);
        clock.advance(10.0);
        scheduler.run_tick();
        assert_eq!(scheduler.pending(), 0);
    }
}
