//! Scheduled-task ownership
//!
//! Deferred visual steps (staggered fades, delayed removals, trailing throttle
//! calls) are represented by handles whose `Drop` cancels the pending work, as
//! `gloo_timers::callback::Timeout` does. A [`TaskScope`] owns those handles so
//! a controller can cancel everything it scheduled in one call on teardown.

/// Owns cancellable task handles
#[derive(Debug)]
pub struct TaskScope<H> {
    tasks: Vec<H>,
    closed: bool,
}

impl<H> TaskScope<H> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            closed: false,
        }
    }

    /// Take ownership of `handle`.
    ///
    /// Once the scope is closed new handles are dropped (cancelled) at once.
    /// Returns `false` in that case.
    pub fn push(&mut self, handle: H) -> bool {
        if self.closed {
            drop(handle);
            return false;
        }
        self.tasks.push(handle);
        true
    }

    /// Forget handles whose work has already run. Returns how many were released.
    pub fn release_finished(&mut self, mut finished: impl FnMut(&H) -> bool) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|h| !finished(h));
        before - self.tasks.len()
    }

    /// Cancel every pending task. The scope stays usable.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    /// Cancel everything and refuse further work
    pub fn close(&mut self) -> usize {
        self.closed = true;
        self.cancel_all()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<H> Default for TaskScope<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for `ms` milliseconds on the current runtime
#[cfg(not(feature = "ssr"))]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Wait for `ms` milliseconds on the current runtime
#[cfg(feature = "ssr")]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle {
        cancelled: Rc<Cell<u32>>,
        done: bool,
    }

    impl Handle {
        fn new(cancelled: &Rc<Cell<u32>>) -> Self {
            Self {
                cancelled: cancelled.clone(),
                done: false,
            }
        }

        fn finished(cancelled: &Rc<Cell<u32>>) -> Self {
            Self {
                cancelled: cancelled.clone(),
                done: true,
            }
        }
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    #[test]
    fn test_cancel_all_drops_every_handle() {
        let cancelled = Rc::new(Cell::new(0));
        let mut scope = TaskScope::new();
        for _ in 0..4 {
            scope.push(Handle::new(&cancelled));
        }
        assert_eq!(scope.len(), 4);
        assert_eq!(scope.cancel_all(), 4);
        assert_eq!(cancelled.get(), 4);
        assert!(scope.is_empty());
    }

    #[test]
    fn test_closed_scope_rejects_new_tasks() {
        let cancelled = Rc::new(Cell::new(0));
        let mut scope = TaskScope::new();
        scope.push(Handle::new(&cancelled));
        assert_eq!(scope.close(), 1);

        assert!(!scope.push(Handle::new(&cancelled)));
        assert_eq!(cancelled.get(), 2);
        assert!(scope.is_closed());
        assert!(scope.is_empty());
    }

    #[test]
    fn test_release_finished_keeps_pending() {
        let cancelled = Rc::new(Cell::new(0));
        let mut scope = TaskScope::new();
        scope.push(Handle::finished(&cancelled));
        scope.push(Handle::new(&cancelled));
        scope.push(Handle::finished(&cancelled));

        assert_eq!(scope.release_finished(|h| h.done), 2);
        assert_eq!(scope.len(), 1);
        assert_eq!(cancelled.get(), 2);
    }

    #[test]
    fn test_dropping_scope_cancels() {
        let cancelled = Rc::new(Cell::new(0));
        {
            let mut scope = TaskScope::new();
            scope.push(Handle::new(&cancelled));
            scope.push(Handle::new(&cancelled));
        }
        assert_eq!(cancelled.get(), 2);
    }
}
