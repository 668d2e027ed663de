//! Step/animate/reset state machine over a loaded weight sequence.
//!
//! The animator owns the cursor and the handle of its single outstanding
//! timer task. It never draws anything itself: every method reports whether
//! the cursor moved and the caller redraws the boundary from
//! [`Animator::current`].

use std::time::Duration;

use log::{debug, trace};

use crate::weights::WeightTriple;

/// Identifies one recurring timer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// Provider of recurring timer tasks.
///
/// A started task fires ticks carrying its [`TaskId`] every `interval` until
/// cancelled. How ticks travel back to [`Animator::tick`] is up to the
/// driver.
pub trait Scheduler {
    /// Starts a recurring task.
    fn start(&mut self, interval: Duration) -> TaskId;

    /// Cancels `task`. Cancelling an unknown or finished task is a no-op.
    fn cancel(&mut self, task: TaskId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No sequence loaded.
    Empty,
    /// Sequence loaded, timer idle.
    Ready,
    /// A timer task is advancing the cursor.
    Running,
}

#[derive(Debug, Default)]
pub struct Animator {
    steps: Vec<WeightTriple>,
    /// `None` is the baseline, before the first step.
    cursor: Option<usize>,
    timer: Option<TaskId>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.steps.is_empty(), self.timer) {
            (true, _) => Phase::Empty,
            (false, None) => Phase::Ready,
            (false, Some(_)) => Phase::Running,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[WeightTriple] {
        &self.steps
    }

    /// The outstanding timer task, if running.
    pub fn timer(&self) -> Option<TaskId> {
        self.timer
    }

    /// Weights at the cursor, `None` at the baseline.
    pub fn current(&self) -> Option<&WeightTriple> {
        self.cursor.and_then(|i| self.steps.get(i))
    }

    /// Replaces the sequence and rewinds to the baseline.
    ///
    /// Any running timer is cancelled first. An empty sequence leaves the
    /// animator [`Phase::Empty`].
    pub fn load<S: Scheduler>(&mut self, steps: Vec<WeightTriple>, scheduler: &mut S) {
        self.stop(scheduler);
        self.steps = steps;
        self.cursor = None;
    }

    /// Advances the cursor by one.
    ///
    /// # Returns
    /// Whether the cursor moved, `false` when empty or already at the last step.
    pub fn step(&mut self) -> bool {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next >= self.steps.len() {
            return false;
        }

        self.cursor = Some(next);
        true
    }

    /// Pauses when running, starts a timer at `interval` when ready.
    ///
    /// # Returns
    /// The phase after toggling. Toggling while empty does nothing.
    pub fn toggle<S: Scheduler>(&mut self, interval: Duration, scheduler: &mut S) -> Phase {
        match self.phase() {
            Phase::Empty => {}
            Phase::Running => self.stop(scheduler),
            Phase::Ready => {
                let task = scheduler.start(interval);
                debug!(task = task.0, interval_ms = interval.as_millis() as u64; "animation started");
                self.timer = Some(task);
            }
        }

        self.phase()
    }

    /// Handles one timer tick.
    ///
    /// Ticks from any task other than the outstanding one are ignored. The
    /// timer is cancelled once the last step is reached.
    ///
    /// # Returns
    /// Whether the cursor moved.
    pub fn tick<S: Scheduler>(&mut self, task: TaskId, scheduler: &mut S) -> bool {
        if self.timer != Some(task) {
            trace!(task = task.0; "ignoring stale tick");
            return false;
        }

        let moved = self.step();
        if self.at_end() {
            self.stop(scheduler);
        }

        moved
    }

    /// Stops the timer and rewinds to the baseline.
    ///
    /// # Returns
    /// `false` when no sequence is loaded.
    pub fn reset<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        if self.steps.is_empty() {
            return false;
        }

        self.stop(scheduler);
        self.cursor = None;
        true
    }

    /// Cancels the outstanding timer, if any, keeping the cursor.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(task) = self.timer.take() {
            scheduler.cancel(task);
            debug!(task = task.0; "animation stopped");
        }
    }

    fn at_end(&self) -> bool {
        self.cursor.map_or(self.steps.is_empty(), |i| i + 1 >= self.steps.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct ManualScheduler {
        next: u64,
        active: Vec<TaskId>,
        started: usize,
    }

    impl Scheduler for ManualScheduler {
        fn start(&mut self, _interval: Duration) -> TaskId {
            self.next += 1;
            self.started += 1;
            let task = TaskId(self.next);
            self.active.push(task);
            task
        }

        fn cancel(&mut self, task: TaskId) {
            self.active.retain(|t| *t != task);
        }
    }

    const TICK: Duration = Duration::from_millis(300);

    fn seq(n: usize) -> Vec<WeightTriple> {
        (0..n)
            .map(|i| WeightTriple {
                w0: i as f64,
                w1: 1.0,
                w2: 1.0,
            })
            .collect()
    }

    fn loaded(n: usize, sched: &mut ManualScheduler) -> Animator {
        let mut anim = Animator::new();
        anim.load(seq(n), sched);
        anim
    }

    #[test]
    fn starts_empty() {
        let mut sched = ManualScheduler::default();
        let mut anim = Animator::new();

        assert_eq!(anim.phase(), Phase::Empty);
        assert!(!anim.step());
        assert_eq!(anim.toggle(TICK, &mut sched), Phase::Empty);
        assert!(!anim.reset(&mut sched));
        assert_eq!(sched.started, 0);
        assert!(anim.current().is_none());
    }

    #[test]
    fn step_walks_to_end() {
        let mut sched = ManualScheduler::default();
        let mut anim = loaded(3, &mut sched);
        assert_eq!(anim.phase(), Phase::Ready);
        assert_eq!(anim.cursor(), None);

        for expected in 0..3 {
            assert!(anim.step());
            assert_eq!(anim.cursor(), Some(expected));
        }

        assert!(!anim.step());
        assert_eq!(anim.cursor(), Some(2));
        assert_eq!(anim.current().unwrap().w0, 2.0);
    }

    #[test]
    fn load_empty_is_empty_phase() {
        let mut sched = ManualScheduler::default();
        let mut anim = loaded(2, &mut sched);
        anim.step();

        anim.load(Vec::new(), &mut sched);
        assert_eq!(anim.phase(), Phase::Empty);
        assert_eq!(anim.cursor(), None);
    }

    #[test]
    fn toggle_twice_pauses_without_moving() {
        let mut sched = ManualScheduler::default();
        let mut anim = loaded(3, &mut sched);

        assert_eq!(anim.toggle(TICK, &mut sched), Phase::Running);
        assert_eq!(sched.active.len(), 1);

        assert_eq!(anim.toggle(TICK, &mut sched), Phase::Ready);
        assert!(sched.active.is_empty());
        assert_eq!(anim.cursor(), None);
        assert!(anim.timer().is_none());
    }

    #[test]
    fn ticks_advance_and_stop_at_end() {
        let mut sched = ManualScheduler::default();
        let mut anim = loaded(3, &mut sched);
        anim.toggle(TICK, &mut sched);
        let task = anim.timer().unwrap();

        assert!(anim.tick(task, &mut sched));
        assert!(anim.tick(task, &mut sched));
        assert_eq!(anim.phase(), Phase::Running);

        assert!(anim.tick(task, &mut sched));
        assert_eq!(anim.cursor(), Some(2));
        assert_eq!(anim.phase(), Phase::Ready);
        assert!(sched.active.is_empty());

        // late tick from the cancelled task
        assert!(!anim.tick(task, &mut sched));
        assert_eq!(anim.cursor(), Some(2));
    }

    #[test]
    fn pause_keeps_cursor_and_resume_continues() {
        let mut sched = ManualScheduler::default();
        let mut anim = loaded(4, &mut sched);

        anim.toggle(TICK, &mut sched);
        let first = anim.timer().unwrap();
        anim.tick(first, &mut sched);
        anim.toggle(TICK, &mut sched);
        assert_eq!(anim.cursor(), Some(0));

        anim.toggle(TICK, &mut sched);
        let second = anim.timer().unwrap();
        assert_ne!(first, second);

        assert!(!anim.tick(first, &mut sched));
        assert!(anim.tick(second, &mut sched));
        assert_eq!(anim.cursor(), Some(1));
        assert_eq!(sched.active, vec![second]);
    }

    #[test]
    fn animate_from_last_step_stops_on_first_tick() {
        let mut sched = ManualScheduler::default();
        let mut anim = loaded(1, &mut sched);
        anim.step();

        anim.toggle(TICK, &mut sched);
        let task = anim.timer().unwrap();
        assert!(!anim.tick(task, &mut sched));
        assert_eq!(anim.phase(), Phase::Ready);
        assert!(sched.active.is_empty());
    }

    #[test]
    fn reload_cancels_running_timer() {
        let mut sched = ManualScheduler::default();
        let mut anim = loaded(3, &mut sched);
        anim.toggle(TICK, &mut sched);
        anim.tick(anim.timer().unwrap(), &mut sched);

        anim.load(seq(5), &mut sched);
        assert_eq!(anim.phase(), Phase::Ready);
        assert_eq!(anim.cursor(), None);
        assert!(sched.active.is_empty());
    }

    #[test]
    fn reset_from_running() {
        let mut sched = ManualScheduler::default();
        let mut anim = loaded(3, &mut sched);
        anim.step();
        anim.step();
        anim.toggle(TICK, &mut sched);

        assert!(anim.reset(&mut sched));
        assert_eq!(anim.cursor(), None);
        assert_eq!(anim.phase(), Phase::Ready);
        assert!(sched.active.is_empty());
        assert!(anim.current().is_none());
    }
}
