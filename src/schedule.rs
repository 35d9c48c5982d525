//! Deferred task queue for post-render work.
//!
//! Widgets occasionally need to run something after the host has finished
//! its current render pass: moving focus into a menu that only mounts under
//! focus-triggered rendering, or re-checking where focus landed after a
//! blur. Each task can be canceled if the widget is torn down before the
//! drain happens.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

struct ScheduledTask {
    canceled: Arc<AtomicBool>,
    run: Box<dyn FnOnce()>,
}

/// Handle to a single deferred task.
///
/// Dropping the handle does not cancel the task; call [`DeferredHandle::cancel`].
#[derive(Debug, Clone)]
pub struct DeferredHandle {
    canceled: Arc<AtomicBool>,
}

impl DeferredHandle {
    /// Cancel the task. A canceled task is skipped when the queue drains.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    /// Check whether the task was canceled.
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}

/// Fire-once task queue shared between a widget and its host loop.
///
/// The host calls [`TaskQueue::run_pending`] once per loop turn, after
/// rendering. Tasks scheduled while draining run on the next drain.
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Arc<Mutex<Vec<ScheduledTask>>>,
}

impl TaskQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task to run on the next drain.
    pub fn defer(&self, f: impl FnOnce() + 'static) -> DeferredHandle {
        let canceled = Arc::new(AtomicBool::new(false));
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.push(ScheduledTask {
                canceled: Arc::clone(&canceled),
                run: Box::new(f),
            });
        }
        DeferredHandle { canceled }
    }

    /// Run every pending task that was not canceled.
    pub fn run_pending(&self) {
        let drained = match self.tasks.lock() {
            Ok(mut tasks) => std::mem::take(&mut *tasks),
            Err(_) => return,
        };
        for task in drained {
            if !task.canceled.load(Ordering::SeqCst) {
                (task.run)();
            }
        }
    }

    /// Cancel and drop every pending task.
    pub fn cancel_all(&self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for task in tasks.iter() {
                task.canceled.store(true, Ordering::SeqCst);
            }
            tasks.clear();
        }
    }

    /// Check whether any task is pending.
    pub fn is_empty(&self) -> bool {
        self.tasks.lock().map(|tasks| tasks.is_empty()).unwrap_or(true)
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.tasks.lock().map(|tasks| tasks.len()).unwrap_or(0);
        f.debug_struct("TaskQueue").field("pending", &len).finish()
    }
}
