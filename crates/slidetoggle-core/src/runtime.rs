use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::task::{Context, Poll, Waker};
use std::thread::ThreadId;

use smallvec::SmallVec;

use crate::platform::{Clock, RuntimeScheduler};

/// Lifecycle phase of the host that owns a runtime.
///
/// Async tasks only make progress while the host is [`Lifecycle::Resumed`];
/// they stay parked while paused and are dropped for good once the host is
/// destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Resumed,
    Paused,
    Destroyed,
}

impl Lifecycle {
    pub fn is_resumed(self) -> bool {
        matches!(self, Lifecycle::Resumed)
    }

    pub fn is_destroyed(self) -> bool {
        matches!(self, Lifecycle::Destroyed)
    }
}

type UiTask = Box<dyn FnOnce() + 'static>;
type UiFuture = Pin<Box<dyn Future<Output = ()> + 'static>>;

struct TaskEntry {
    id: u64,
    future: UiFuture,
}

struct DelayedEntry {
    id: u64,
    due_nanos: u64,
    task: UiTask,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    clock: Arc<dyn Clock>,
    lifecycle: Cell<Lifecycle>,
    local_tasks: RefCell<VecDeque<UiTask>>,
    tasks: RefCell<SmallVec<[TaskEntry; 2]>>,
    delayed: RefCell<SmallVec<[DelayedEntry; 4]>>,
    // Ids cancelled while their future was checked out for polling.
    cancelled_while_polling: RefCell<SmallVec<[u64; 2]>>,
    polling: Cell<bool>,
    next_task_id: Cell<u64>,
    task_waker: Waker,
    ui_thread_id: ThreadId,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>, clock: Arc<dyn Clock>) -> Self {
        let task_waker = RuntimeTaskWaker {
            scheduler: scheduler.clone(),
        }
        .into_waker();
        Self {
            scheduler,
            clock,
            lifecycle: Cell::new(Lifecycle::Created),
            local_tasks: RefCell::new(VecDeque::new()),
            tasks: RefCell::new(SmallVec::new()),
            delayed: RefCell::new(SmallVec::new()),
            cancelled_while_polling: RefCell::new(SmallVec::new()),
            polling: Cell::new(false),
            next_task_id: Cell::new(1),
            task_waker,
            ui_thread_id: std::thread::current().id(),
        }
    }

    fn schedule(&self) {
        self.scheduler.schedule_frame();
    }

    fn next_id(&self) -> u64 {
        let id = self.next_task_id.get();
        self.next_task_id.set(id + 1);
        id
    }

    fn is_destroyed(&self) -> bool {
        self.lifecycle.get().is_destroyed()
    }

    /// Queues a closure on the UI thread's local queue.
    ///
    /// The closure may capture `Rc`/`RefCell` values because it never leaves
    /// the runtime thread.
    fn enqueue_ui_task(&self, task: UiTask) {
        if self.is_destroyed() {
            log::trace!("dropping UI task posted after destroy");
            return;
        }
        self.local_tasks.borrow_mut().push_back(task);
        self.schedule();
    }

    fn spawn_ui_task(&self, future: UiFuture) -> Option<u64> {
        if self.is_destroyed() {
            return None;
        }
        let id = self.next_id();
        self.tasks.borrow_mut().push(TaskEntry { id, future });
        self.schedule();
        Some(id)
    }

    fn post_delayed(&self, delay_millis: u64, task: UiTask) -> Option<u64> {
        if self.is_destroyed() {
            return None;
        }
        let id = self.next_id();
        let due_nanos = self
            .clock
            .now_nanos()
            .saturating_add(delay_millis.saturating_mul(1_000_000));
        self.delayed.borrow_mut().push(DelayedEntry {
            id,
            due_nanos,
            task,
        });
        self.schedule();
        Some(id)
    }

    fn cancel_task(&self, id: u64) {
        // Removed entries are dropped after the borrow ends: dropping a future
        // may run arbitrary destructors that call back into the runtime.
        let removed_future = {
            let mut tasks = self.tasks.borrow_mut();
            tasks
                .iter()
                .position(|entry| entry.id == id)
                .map(|index| tasks.remove(index))
        };
        let removed_delayed = {
            let mut delayed = self.delayed.borrow_mut();
            delayed
                .iter()
                .position(|entry| entry.id == id)
                .map(|index| delayed.remove(index))
        };
        if removed_future.is_none() && removed_delayed.is_none() && self.polling.get() {
            self.cancelled_while_polling.borrow_mut().push(id);
        }
        drop(removed_future);
        drop(removed_delayed);
    }

    fn poll_async_tasks(&self) -> bool {
        let mut cx = Context::from_waker(&self.task_waker);
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        if tasks.is_empty() {
            return false;
        }
        self.polling.set(true);
        let mut pending: SmallVec<[TaskEntry; 2]> = SmallVec::with_capacity(tasks.len());
        let mut made_progress = false;
        for mut entry in tasks.into_iter() {
            if self.is_destroyed() || self.was_cancelled_while_polling(entry.id) {
                continue;
            }
            match entry.future.as_mut().poll(&mut cx) {
                Poll::Ready(()) => {
                    made_progress = true;
                }
                Poll::Pending => {
                    pending.push(entry);
                }
            }
        }
        self.polling.set(false);
        let cancelled = std::mem::take(&mut *self.cancelled_while_polling.borrow_mut());
        pending.retain(|entry| !cancelled.contains(&entry.id));
        if self.is_destroyed() {
            drop(pending);
        } else if !pending.is_empty() {
            self.tasks.borrow_mut().extend(pending);
        }
        made_progress
    }

    fn was_cancelled_while_polling(&self, id: u64) -> bool {
        self.cancelled_while_polling.borrow().contains(&id)
    }

    fn run_due_delayed(&self) -> bool {
        let now = self.clock.now_nanos();
        let mut due: SmallVec<[DelayedEntry; 4]> = {
            let mut delayed = self.delayed.borrow_mut();
            let mut due = SmallVec::new();
            let mut index = 0;
            while index < delayed.len() {
                if delayed[index].due_nanos <= now {
                    due.push(delayed.remove(index));
                } else {
                    index += 1;
                }
            }
            due
        };
        if due.is_empty() {
            return false;
        }
        due.sort_by_key(|entry| (entry.due_nanos, entry.id));
        for entry in due {
            if self.is_destroyed() {
                break;
            }
            (entry.task)();
        }
        true
    }

    fn drain_ui(&self) {
        loop {
            if self.is_destroyed() {
                return;
            }
            let mut executed = false;

            loop {
                let task = self.local_tasks.borrow_mut().pop_front();
                match task {
                    Some(task) => {
                        executed = true;
                        task();
                    }
                    None => break,
                }
            }

            if self.run_due_delayed() {
                executed = true;
            }

            if self.lifecycle.get().is_resumed() && self.poll_async_tasks() {
                executed = true;
            }

            if !executed {
                break;
            }
        }
    }

    fn set_lifecycle(&self, next: Lifecycle) {
        let current = self.lifecycle.get();
        if current == next {
            return;
        }
        if current.is_destroyed() {
            log::warn!("ignoring lifecycle change to {next:?}: runtime already destroyed");
            return;
        }
        log::trace!("runtime lifecycle {current:?} -> {next:?}");
        self.lifecycle.set(next);
        match next {
            Lifecycle::Resumed => self.schedule(),
            Lifecycle::Destroyed => self.teardown(),
            Lifecycle::Created | Lifecycle::Paused => {}
        }
    }

    fn teardown(&self) {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        let delayed = std::mem::take(&mut *self.delayed.borrow_mut());
        let local = std::mem::take(&mut *self.local_tasks.borrow_mut());
        log::debug!(
            "runtime destroyed; abandoning {} task(s), {} delayed, {} queued",
            tasks.len(),
            delayed.len(),
            local.len()
        );
        drop(tasks);
        drop(delayed);
        drop(local);
    }

    fn next_delayed_due_nanos(&self) -> Option<u64> {
        self.delayed
            .borrow()
            .iter()
            .map(|entry| entry.due_nanos)
            .min()
    }

    fn has_pending_ui(&self) -> bool {
        if self.is_destroyed() {
            return false;
        }
        if !self.local_tasks.borrow().is_empty() {
            return true;
        }
        let now = self.clock.now_nanos();
        self.delayed
            .borrow()
            .iter()
            .any(|entry| entry.due_nanos <= now)
    }
}

struct RuntimeTaskWaker {
    scheduler: Arc<dyn RuntimeScheduler>,
}

impl RuntimeTaskWaker {
    fn into_waker(self) -> Waker {
        futures_task::waker(Arc::new(self))
    }
}

impl futures_task::ArcWake for RuntimeTaskWaker {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        arc_self.scheduler.schedule_frame();
    }
}

/// Owner of the runtime state. Dropping it abandons every queued task.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler, clock)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
            ui_thread_id: self.inner.ui_thread_id,
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.inner.teardown();
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
    ui_thread_id: ThreadId,
}

pub struct TaskHandle {
    id: u64,
    runtime: RuntimeHandle,
}

impl RuntimeHandle {
    pub fn is_alive(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| !inner.is_destroyed())
            .unwrap_or(false)
    }

    pub fn schedule(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.schedule();
        }
    }

    /// Schedules work that must run on the runtime thread.
    ///
    /// The closure executes when the runtime next drains its local queue, so
    /// it may capture `Rc`/`RefCell` values.
    pub fn enqueue_ui_task(&self, task: impl FnOnce() + 'static) {
        if let Some(inner) = self.inner.upgrade() {
            inner.enqueue_ui_task(Box::new(task));
        }
    }

    /// Spawns a future that is polled on the UI thread while the host is
    /// resumed. Returns `None` once the runtime is gone or destroyed.
    pub fn spawn_ui<F>(&self, fut: F) -> Option<TaskHandle>
    where
        F: Future<Output = ()> + 'static,
    {
        self.inner.upgrade().and_then(|inner| {
            inner.spawn_ui_task(Box::pin(fut)).map(|id| TaskHandle {
                id,
                runtime: self.clone(),
            })
        })
    }

    /// Runs `task` on the UI thread once `delay_millis` have elapsed on the
    /// runtime clock.
    pub fn post_delayed(
        &self,
        delay_millis: u64,
        task: impl FnOnce() + 'static,
    ) -> Option<TaskHandle> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .post_delayed(delay_millis, Box::new(task))
                .map(|id| TaskHandle {
                    id,
                    runtime: self.clone(),
                })
        })
    }

    pub fn cancel_task(&self, id: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_task(id);
        }
    }

    pub fn drain_ui(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_ui();
        }
    }

    pub fn has_pending_ui(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_pending_ui())
            .unwrap_or(false)
    }

    pub fn active_task_count(&self) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.tasks.borrow().len())
            .unwrap_or(0)
    }

    pub fn next_delayed_due_nanos(&self) -> Option<u64> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.next_delayed_due_nanos())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.inner
            .upgrade()
            .map(|inner| inner.lifecycle.get())
            .unwrap_or(Lifecycle::Destroyed)
    }

    pub fn set_lifecycle(&self, lifecycle: Lifecycle) {
        if let Some(inner) = self.inner.upgrade() {
            inner.set_lifecycle(lifecycle);
        }
    }

    pub fn clock(&self) -> Option<Arc<dyn Clock>> {
        self.inner.upgrade().map(|inner| inner.clock.clone())
    }

    pub fn assert_ui_thread(&self) {
        debug_assert_eq!(
            std::thread::current().id(),
            self.ui_thread_id,
            "toggle state touched off the runtime's UI thread"
        );
    }
}

impl TaskHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(self) {
        self.runtime.cancel_task(self.id);
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
