use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashSet;
use std::rc::Rc;
#[cfg(test)]
use std::rc::Weak;

use gloo_timers::callback::Interval;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Done,
}

pub type TickFn = Box<dyn FnMut() -> TickOutcome>;

/// Registration with a [`Scheduler`]. Cancelling or dropping it unregisters
/// the callback; no tick runs afterwards.
#[must_use = "dropping a ScheduledTask unregisters it"]
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.release();
    }
}

/// Periodic tick source. Tasks are independent: registering or removing one
/// never shifts the timing of another.
pub trait Scheduler {
    fn schedule_repeating(&self, tick: TickFn) -> ScheduledTask;
}

/// Browser scheduler: one `setInterval` per task.
#[derive(Clone, Copy, Debug)]
pub struct IntervalScheduler {
    period_ms: u32,
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self {
            period_ms: config::TICK_INTERVAL_MS,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&self, mut tick: TickFn) -> ScheduledTask {
        // shared slot so the interval can clear itself from its own callback
        let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let handle_clone = handle.clone();

        let interval = Interval::new(self.period_ms, move || {
            if handle_clone.borrow().is_none() {
                return;
            }
            if tick() == TickOutcome::Done {
                if let Some(interval) = handle_clone.borrow_mut().take() {
                    drop(interval);
                }
            }
        });
        *handle.borrow_mut() = Some(interval);

        ScheduledTask::new(move || {
            if let Some(interval) = handle.borrow_mut().take() {
                drop(interval);
            }
        })
    }
}

/// Test scheduler: nothing happens until [`ManualScheduler::run_tick`].
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualTasks>>,
}

#[cfg(test)]
#[derive(Default)]
struct ManualTasks {
    next_id: u64,
    live: Vec<(u64, TickFn)>,
    // ids of the batch run_tick has checked out
    running: HashSet<u64>,
    // ids from that batch cancelled while checked out
    cancelled: HashSet<u64>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires every registered task once, in registration order.
    pub fn run_tick(&self) {
        let batch = {
            let mut inner = self.inner.borrow_mut();
            let batch = std::mem::take(&mut inner.live);
            inner.running = batch.iter().map(|(id, _)| *id).collect();
            batch
        };
        let mut kept = Vec::with_capacity(batch.len());

        for (id, mut tick) in batch {
            if self.inner.borrow_mut().cancelled.remove(&id) {
                continue;
            }
            let outcome = tick();
            if self.inner.borrow_mut().cancelled.remove(&id) {
                continue;
            }
            if outcome == TickOutcome::Continue {
                kept.push((id, tick));
            }
        }

        let mut inner = self.inner.borrow_mut();
        kept.retain(|(id, _)| !inner.cancelled.contains(id));
        inner.running.clear();
        inner.cancelled.clear();
        let added = std::mem::take(&mut inner.live);
        inner.live = kept;
        inner.live.extend(added);
    }

    pub fn run_ticks(&self, count: usize) {
        for _ in 0..count {
            self.run_tick();
        }
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().live.len()
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, tick: TickFn) -> ScheduledTask {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.live.push((id, tick));
            id
        };

        let weak: Weak<RefCell<ManualTasks>> = Rc::downgrade(&self.inner);
        ScheduledTask::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut inner = inner.borrow_mut();
            let before = inner.live.len();
            inner.live.retain(|(task_id, _)| *task_id != id);
            if inner.live.len() == before && inner.running.contains(&id) {
                inner.cancelled.insert(id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        (count.clone(), count)
    }

    #[test]
    fn task_runs_until_done() {
        let scheduler = ManualScheduler::new();
        let (count, seen) = counter();
        let _task = scheduler.schedule_repeating(Box::new(move || {
            count.set(count.get() + 1);
            if count.get() == 3 {
                TickOutcome::Done
            } else {
                TickOutcome::Continue
            }
        }));

        scheduler.run_ticks(10);
        assert_eq!(seen.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_the_task_unregisters_it() {
        let scheduler = ManualScheduler::new();
        let (count, seen) = counter();
        let task = scheduler.schedule_repeating(Box::new(move || {
            count.set(count.get() + 1);
            TickOutcome::Continue
        }));

        scheduler.run_tick();
        drop(task);
        scheduler.run_ticks(5);
        assert_eq!(seen.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn task_cancelled_from_inside_a_tick_stops() {
        let scheduler = ManualScheduler::new();
        let slot: Rc<RefCell<Option<ScheduledTask>>> = Rc::new(RefCell::new(None));
        let (count, seen) = counter();

        let slot_clone = slot.clone();
        let task = scheduler.schedule_repeating(Box::new(move || {
            count.set(count.get() + 1);
            if let Some(task) = slot_clone.borrow_mut().take() {
                task.cancel();
            }
            TickOutcome::Continue
        }));
        *slot.borrow_mut() = Some(task);

        scheduler.run_ticks(4);
        assert_eq!(seen.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn later_task_can_cancel_an_earlier_one_in_the_same_tick() {
        let scheduler = ManualScheduler::new();
        let (count, seen) = counter();
        let first = scheduler.schedule_repeating(Box::new(move || {
            count.set(count.get() + 1);
            TickOutcome::Continue
        }));

        let slot = Rc::new(RefCell::new(Some(first)));
        let slot_clone = slot.clone();
        let _second = scheduler.schedule_repeating(Box::new(move || {
            if let Some(task) = slot_clone.borrow_mut().take() {
                task.cancel();
            }
            TickOutcome::Continue
        }));

        scheduler.run_ticks(3);
        assert_eq!(seen.get(), 1);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn finished_tasks_leave_no_bookkeeping_behind() {
        let scheduler = ManualScheduler::new();
        let tasks: Vec<_> = (0..3)
            .map(|_| scheduler.schedule_repeating(Box::new(|| TickOutcome::Done)))
            .collect();

        scheduler.run_tick();
        drop(tasks);

        let inner = scheduler.inner.borrow();
        assert!(inner.live.is_empty());
        assert!(inner.running.is_empty());
        assert!(inner.cancelled.is_empty());
    }

    #[test]
    fn tasks_registered_mid_tick_start_next_tick() {
        let scheduler = ManualScheduler::new();
        let (count, seen) = counter();
        let spawned: Rc<RefCell<Vec<ScheduledTask>>> = Rc::default();

        let inner_scheduler = scheduler.clone();
        let spawned_clone = spawned.clone();
        let _outer = scheduler.schedule_repeating(Box::new(move || {
            let count = count.clone();
            let task = inner_scheduler.schedule_repeating(Box::new(move || {
                count.set(count.get() + 1);
                TickOutcome::Done
            }));
            spawned_clone.borrow_mut().push(task);
            TickOutcome::Done
        }));

        scheduler.run_tick();
        assert_eq!(seen.get(), 0);
        assert_eq!(scheduler.pending(), 1);
        scheduler.run_tick();
        assert_eq!(seen.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }
}
