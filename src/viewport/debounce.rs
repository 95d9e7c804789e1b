use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};

/// Calls `on_settle` once per burst of notifications, after `window` has
/// passed without a new one. Returns when the notification source closes; a
/// burst still pending at that point is delivered first.
pub(crate) async fn debounced<F>(
    mut events: broadcast::Receiver<()>,
    window: Duration,
    mut on_settle: F,
) where
    F: FnMut(),
{
    loop {
        match events.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => {}
            Err(RecvError::Closed) => return,
        }
        let closed = quiesce(&mut events, window).await;
        on_settle();
        if closed {
            return;
        }
    }
}

/// Waits until `window` elapses with no notification. Returns `true` if the
/// source closed instead.
async fn quiesce(events: &mut broadcast::Receiver<()>, window: Duration) -> bool {
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(()) | Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return true,
            },
            () = tokio::time::sleep(window) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const WINDOW: Duration = Duration::from_millis(200);

    fn spawn_counter(
        rx: broadcast::Receiver<()>,
    ) -> (Arc<AtomicUsize>, tokio::task::JoinHandle<()>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let task = tokio::spawn(debounced(rx, WINDOW, move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }));
        (count, task)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_one() {
        let (tx, rx) = broadcast::channel(16);
        let (count, _task) = spawn_counter(rx);

        for _ in 0..3 {
            tx.send(()).unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_fire_separately() {
        let (tx, rx) = broadcast::channel(16);
        let (count, _task) = spawn_counter(rx);

        tx.send(()).unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        tx.send(()).unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_flushes_pending_burst() {
        let (tx, rx) = broadcast::channel(16);
        let (count, task) = spawn_counter(rx);

        tx.send(()).unwrap();
        drop(tx);
        task.await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
