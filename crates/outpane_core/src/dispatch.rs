//! Single-threaded FIFO of deferred tasks.
//!
//! Tasks run on the thread that drains the queue, after the code that posted
//! them has returned. There is no cancellation: a posted task always runs
//! once the owner drains the queue.

use std::collections::VecDeque;
use std::fmt;

/// A deferred unit of work operating on `T`.
pub type Task<T> = Box<dyn FnOnce(&mut T)>;

/// Queue of tasks waiting for the next dispatch cycle.
pub struct DispatchQueue<T> {
    tasks: VecDeque<Task<T>>,
}

impl<T> Default for DispatchQueue<T> {
    fn default() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }
}

impl<T> fmt::Debug for DispatchQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

impl<T> DispatchQueue<T> {
    /// Queue `task` to run on the next drain.
    pub fn post(&mut self, task: impl FnOnce(&mut T) + 'static) {
        self.tasks.push_back(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove every queued task, oldest first.
    ///
    /// Tasks posted while the returned batch runs land in this queue and wait
    /// for the following cycle.
    pub fn take_batch(&mut self) -> VecDeque<Task<T>> {
        std::mem::take(&mut self.tasks)
    }
}
