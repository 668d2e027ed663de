use std::time::Duration;

use boundary_core::{Scheduler, TaskId};
use tokio::{
    runtime::Handle,
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

/// Runs animation timers as tokio tasks.
///
/// Each task sends its [`TaskId`] down `ticks` once per interval. The UI loop
/// drains the channel and feeds the ids back into the session, so all state
/// changes stay on the UI thread. At most one task is alive at a time.
pub struct TokioScheduler {
    handle: Handle,
    ticks: UnboundedSender<TaskId>,
    next_id: u64,
    active: Option<(TaskId, JoinHandle<()>)>,
}

impl TokioScheduler {
    /// Creates a new `TokioScheduler`.
    ///
    /// # Args
    /// * `handle` - The runtime the timer tasks are spawned on.
    /// * `ticks` - The sending end of the tick channel.
    pub fn new(handle: Handle, ticks: UnboundedSender<TaskId>) -> Self {
        Self {
            handle,
            ticks,
            next_id: 0,
            active: None,
        }
    }

    fn abort_active(&mut self) {
        if let Some((_, task)) = self.active.take() {
            task.abort();
        }
    }
}

impl Scheduler for TokioScheduler {
    fn start(&mut self, interval: Duration) -> TaskId {
        self.abort_active();

        self.next_id += 1;
        let id = TaskId(self.next_id);
        let ticks = self.ticks.clone();

        let task = self.handle.spawn(async move {
            let mut timer = time::interval_at(Instant::now() + interval, interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                timer.tick().await;
                if ticks.send(id).is_err() {
                    break;
                }
            }
        });

        self.active = Some((id, task));
        id
    }

    fn cancel(&mut self, task: TaskId) {
        if self.active.as_ref().is_some_and(|(id, _)| *id == task) {
            self.abort_active();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.abort_active();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    const TICK: Duration = Duration::from_millis(10);

    fn drain(rx: &mut mpsc::UnboundedReceiver<TaskId>) -> Vec<TaskId> {
        let mut ids = Vec::new();
        while let Ok(id) = rx.try_recv() {
            ids.push(id);
        }
        ids
    }

    #[tokio::test]
    async fn ticks_until_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(Handle::current(), tx);

        let id = scheduler.start(TICK);
        let first = time::timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
        assert_eq!(first, Some(id));

        scheduler.cancel(id);
        time::sleep(TICK * 3).await;
        drain(&mut rx);

        time::sleep(TICK * 5).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn restart_replaces_previous_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(Handle::current(), tx);

        let first = scheduler.start(TICK);
        let second = scheduler.start(TICK);
        assert_ne!(first, second);

        time::sleep(TICK * 6).await;
        let ids = drain(&mut rx);
        assert!(!ids.is_empty());
        assert!(ids.iter().all(|id| *id == second));
    }

    #[tokio::test]
    async fn cancelling_unknown_task_keeps_active_one() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(Handle::current(), tx);

        let id = scheduler.start(TICK);
        scheduler.cancel(TaskId(id.0 + 100));

        let got = time::timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
        assert_eq!(got, Some(id));
    }
}
