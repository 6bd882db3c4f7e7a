//! Timer scheduling capability
//!
//! The session manager never talks to the clock directly; it schedules
//! callbacks through this trait and cancels them by handle. Production uses
//! the Tokio runtime, tests drive a manual scheduler with no real sleeps.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Callback invoked when a timer fires
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a scheduled timer, cancellable by reference
pub trait TimerHandle: Send + Sync {
    /// Cancel the timer; a fired or already-cancelled timer is a no-op
    fn cancel(&self);
}

/// Deadline-based callback scheduling
pub trait Scheduler: Send + Sync {
    /// Run `callback` no earlier than `delay` from now
    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Box<dyn TimerHandle>;
}

/// Scheduler backed by the Tokio runtime
#[derive(Debug, Default)]
pub struct TokioScheduler;

struct TokioTimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle for TokioTimerHandle {
    fn cancel(&self) {
        self.task.abort();
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Box<dyn TimerHandle> {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Box::new(TokioTimerHandle { task })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let scheduler = TokioScheduler;
        let _handle = scheduler.schedule_after(
            Duration::from_secs(5),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );

        tokio::time::advance(Duration::from_secs(4)).await;
        tokio::task::yield_now().await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let scheduler = TokioScheduler;
        let handle = scheduler.schedule_after(
            Duration::from_secs(5),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );
        handle.cancel();

        tokio::time::advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
