use std::future::Future;
use std::time::Duration;

use crate::latest::LatestGate;
use crate::timer::sleep;

/// Quiet period the search box waits for before fetching.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Runs only the last action scheduled within a burst.
///
/// Each [`call`](Debouncer::call) supersedes the previous one immediately, then
/// waits out the delay. When the wait ends the action runs only if nothing was
/// scheduled in the meantime.
#[derive(Clone, Debug, PartialEq)]
pub struct Debouncer {
    delay: Duration,
    gate: LatestGate,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            gate: LatestGate::new(),
        }
    }

    /// Schedule `action`. The returned future resolves to `None` when a later
    /// call superseded this one before the delay elapsed.
    pub fn call<F, Fut>(&self, action: F) -> impl Future<Output = Option<Fut::Output>>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let ticket = self.gate.issue();
        let delay = self.delay;
        async move {
            sleep(delay).await;
            if !ticket.is_current() {
                return None;
            }
            Some(action().await)
        }
    }

    /// Drop whatever is pending.
    pub fn cancel(&self) {
        self.gate.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_only_last_action() {
        let debouncer = Debouncer::default();
        let fired: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for i in 0..10 {
            let term = format!("term-{i}");
            let fired = fired.clone();
            handles.push(tokio::spawn(debouncer.call(move || async move {
                fired.lock().unwrap().push(term);
            })));
            tokio::time::sleep(Duration::from_millis(29)).await;
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(*fired.lock().unwrap(), vec!["term-9".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_all_run() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let first = debouncer.call(|| async { 1 }).await;
        let second = debouncer.call(|| async { 2 }).await;
        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let debouncer = Debouncer::default();
        let pending = tokio::spawn(debouncer.call(|| async { "late" }));
        debouncer.cancel();
        assert_eq!(pending.await.unwrap(), None);
    }
}
