use std::{collections::HashMap, time::Duration};

use flume::Sender;
use tokio::{
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::event::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    AutoScroll,
    Playback,
}

/// Owns background tasks by key. Replacing or dropping a task aborts it.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<TaskKey, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, key: TaskKey, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key, task) {
            handle.abort();
        }
    }

    pub fn abort(&mut self, key: TaskKey) {
        if let Some(handle) = self.tasks.remove(&key) {
            handle.abort();
        }
    }

    pub fn is_active(&self, key: TaskKey) -> bool {
        self.tasks.get(&key).is_some_and(|h| !h.is_finished())
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Emits `make(instant)` every `period`, starting one period from now, until
/// aborted or the receiver goes away.
pub fn spawn_ticker<F>(period: Duration, tx: Sender<Event>, make: F) -> JoinHandle<()>
where
    F: Fn(std::time::Instant) -> Event + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let at = interval.tick().await;
            if tx.send_async(make(at.into_std())).await.is_err() {
                break;
            }
        }
    })
}
