//! Cancellable recurring tick source.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// Handle to a spawned task that emits one tick per period.
///
/// The first tick arrives one full period after spawning. Dropping the
/// handle (or calling [`Ticker::cancel`]) aborts the task, so no tick can
/// outlive its owner.
#[derive(Debug)]
pub struct Ticker {
    ticks: mpsc::Receiver<()>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawns the tick task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn(period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(1);
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { ticks, task }
    }

    /// Waits for the next tick. Returns `None` once the ticker is cancelled.
    pub async fn tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }

    /// Stops the tick task and discards any tick not yet consumed.
    pub fn cancel(&mut self) {
        self.task.abort();
        self.ticks.close();
        while self.ticks.try_recv().is_ok() {}
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::spawn(Duration::from_secs(1));

        for expected in 1..=3 {
            assert_eq!(ticker.tick().await, Some(()));
            assert_eq!(start.elapsed(), Duration::from_secs(expected));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_ticker_yields_nothing() {
        let mut ticker = Ticker::spawn(Duration::from_millis(10));
        assert_eq!(ticker.tick().await, Some(()));

        ticker.cancel();
        tokio::time::advance(Duration::from_millis(100)).await;

        assert_eq!(ticker.tick().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let ticker = Ticker::spawn(Duration::from_millis(10));
        let task = ticker.task.abort_handle();

        drop(ticker);
        for _ in 0..10 {
            if task.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert!(task.is_finished());
    }
}
