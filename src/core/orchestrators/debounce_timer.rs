use std::time::Duration;

use futures::future::{AbortHandle, Abortable, BoxFuture, FutureExt};

/// Single-slot cancellable timer. Scheduling again cancels the pending tick,
/// and dropping the timer cancels it too.
pub struct DebounceTimer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns a future that resolves to `true` once the delay elapses, or to
    /// `false` as soon as the tick is cancelled.
    pub fn schedule(&mut self) -> BoxFuture<'static, bool> {
        self.cancel();

        let (abort_handle, registration) = AbortHandle::new_pair();
        self.pending = Some(abort_handle);

        let delay = self.delay;
        let tick = Abortable::new(
            async move { tokio::time::sleep(delay).await },
            registration,
        );
        async move { tick.await.is_ok() }.boxed()
    }

    pub fn cancel(&mut self) {
        if let Some(abort_handle) = self.pending.take() {
            log::debug!("[DEBOUNCE] Cancelling pending tick");
            abort_handle.abort();
        }
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tick_fires_after_delay() {
        let mut timer = DebounceTimer::new(Duration::from_millis(500));
        let started = tokio::time::Instant::now();

        let fired = timer.schedule().await;

        assert!(fired);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_cancels_previous_tick() {
        let mut timer = DebounceTimer::new(Duration::from_millis(500));

        let first = timer.schedule();
        let second = timer.schedule();

        let (first_fired, second_fired) = futures::join!(first, second);

        assert!(!first_fired);
        assert!(second_fired);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_tick() {
        let mut timer = DebounceTimer::new(Duration::from_millis(500));
        let tick = timer.schedule();

        drop(timer);

        assert!(!tick.await);
    }

    #[test]
    fn test_cancel_without_pending_tick_is_noop() {
        let mut timer = DebounceTimer::new(Duration::from_millis(10));

        timer.cancel();
        timer.cancel();

        assert!(timer.pending.is_none());
    }
}
