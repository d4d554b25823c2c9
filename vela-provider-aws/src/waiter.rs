//! Waiter - Bounded-retry status polling
//!
//! Remote resources converge asynchronously and expose no event stream,
//! so lifecycle operations poll: refresh the remote status, test it
//! against a pending set and a target set, sleep, repeat. The loop ends in
//! one of four distinguishable ways: the target state was reached, an
//! unexpected state or refresh error surfaced, the wall-clock budget ran
//! out, or the caller canceled the wait.
//!
//! The waiter assigns no meaning to state labels beyond membership in the
//! two sets each call site declares, and never mutates the remote
//! resource.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;
use tokio::time::{Instant, sleep};
use vela_core::provider::{BoxFuture, ProviderError, ProviderResult};

/// Default tick between polls; expensive status calls override this with
/// coarser intervals
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default wall-clock budget; every call site is expected to supply its own
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// One observation of remote status
#[derive(Debug, Clone, PartialEq)]
pub enum Refresh<T> {
    /// The resource exists and reports a state label
    Found { object: T, status: String },
    /// The resource does not (yet) exist. Tolerated for a configured
    /// number of consecutive observations after create, where reads are
    /// eventually consistent.
    NotFound,
}

/// Single-shot status check supplied by the call site
pub type RefreshFn<T> = Box<dyn Fn() -> BoxFuture<'static, ProviderResult<Refresh<T>>> + Send + Sync>;

/// Why a wait ended without reaching the target state
#[derive(Debug, Error)]
pub enum WaitError {
    /// The budget elapsed while the resource was still in a pending state.
    /// The resource may still be converging; the caller decides whether
    /// that is fatal.
    #[error("timed out after {timeout:?} waiting for target state (last observed: {last_state:?})")]
    Timeout {
        last_state: Option<String>,
        timeout: Duration,
    },

    /// The resource reported a state in neither the pending nor the target
    /// set. Polling further would never succeed.
    #[error("unexpected state {state:?}, wanted one of {target:?}")]
    UnexpectedState {
        state: String,
        pending: Vec<String>,
        target: Vec<String>,
    },

    /// More consecutive not-found observations than the tolerance allows
    #[error("resource not found after {checks} consecutive status checks")]
    NotFound { checks: u32 },

    /// The caller's cancellation future completed
    #[error("wait was canceled")]
    Canceled,

    /// The refresh function failed
    #[error("refreshing status failed: {0}")]
    Refresh(#[source] ProviderError),
}

impl WaitError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitError::Timeout { .. })
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, WaitError::Canceled)
    }
}

impl From<WaitError> for ProviderError {
    fn from(err: WaitError) -> Self {
        match err {
            WaitError::Refresh(cause) => cause,
            other => ProviderError::new(other.to_string()),
        }
    }
}

/// A configured wait for a resource to reach a target state.
///
/// `pending` lists the states that mean "keep polling"; an empty pending
/// set means any non-target state is still pending. A state in neither
/// set fails the wait immediately.
pub struct StateWaiter<T> {
    refresh: RefreshFn<T>,
    pending: Vec<String>,
    target: Vec<String>,
    timeout: Duration,
    interval: Duration,
    not_found_checks: u32,
}

impl<T> StateWaiter<T> {
    pub fn new(refresh: RefreshFn<T>) -> Self {
        Self {
            refresh,
            pending: Vec::new(),
            target: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_POLL_INTERVAL,
            not_found_checks: 0,
        }
    }

    pub fn pending<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn target<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Tolerate up to `checks` consecutive not-found observations before
    /// failing the wait
    pub fn not_found_checks(mut self, checks: u32) -> Self {
        self.not_found_checks = checks;
        self
    }

    /// Poll until the target set is reached, the budget elapses, or a
    /// fatal condition surfaces
    pub async fn wait(self) -> Result<T, WaitError> {
        self.run().await
    }

    /// Like [`StateWaiter::wait`], aborting with [`WaitError::Canceled`]
    /// as soon as `cancel` completes
    pub async fn wait_with_cancel(self, cancel: impl Future<Output = ()>) -> Result<T, WaitError> {
        tokio::select! {
            result = self.run() => result,
            () = cancel => Err(WaitError::Canceled),
        }
    }

    async fn run(self) -> Result<T, WaitError> {
        let deadline = Instant::now() + self.timeout;
        let mut consecutive_not_found = 0u32;
        let mut last_state: Option<String> = None;

        loop {
            match (self.refresh)().await.map_err(WaitError::Refresh)? {
                Refresh::Found { object, status } => {
                    consecutive_not_found = 0;
                    if self.target.iter().any(|t| *t == status) {
                        return Ok(object);
                    }
                    if !self.pending.is_empty() && !self.pending.iter().any(|p| *p == status) {
                        return Err(WaitError::UnexpectedState {
                            state: status,
                            pending: self.pending,
                            target: self.target,
                        });
                    }
                    debug!("still pending in state {:?}, target {:?}", status, self.target);
                    last_state = Some(status);
                }
                Refresh::NotFound => {
                    consecutive_not_found += 1;
                    if consecutive_not_found > self.not_found_checks {
                        return Err(WaitError::NotFound {
                            checks: consecutive_not_found,
                        });
                    }
                    warn!(
                        "resource not found yet, tolerating ({}/{})",
                        consecutive_not_found, self.not_found_checks
                    );
                }
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(WaitError::Timeout {
                    last_state,
                    timeout: self.timeout,
                });
            }
            sleep(self.interval.min(deadline - now)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Refresh function that serves scripted observations, repeating the
    /// last one forever
    fn scripted(
        script: Vec<ProviderResult<Refresh<&'static str>>>,
    ) -> (RefreshFn<&'static str>, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let script = Arc::new(script);
        let refresh: RefreshFn<&'static str> = Box::new(move || {
            let index = counter.fetch_add(1, Ordering::SeqCst) as usize;
            let script = script.clone();
            Box::pin(async move {
                let step = script.get(index.min(script.len() - 1)).unwrap();
                match step {
                    Ok(r) => Ok(r.clone()),
                    Err(e) => Err(ProviderError::new(e.message.clone())),
                }
            })
        });
        (refresh, calls)
    }

    fn found(object: &'static str, status: &str) -> ProviderResult<Refresh<&'static str>> {
        Ok(Refresh::Found {
            object,
            status: status.to_string(),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_target_returns_without_sleeping() {
        let (refresh, calls) = scripted(vec![found("svc", "ACTIVE")]);
        let start = Instant::now();

        let result = StateWaiter::new(refresh)
            .pending(["CREATING"])
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(60))
            .wait()
            .await;

        assert_eq!(result.unwrap(), "svc");
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn pending_then_target_succeeds() {
        let (refresh, _) = scripted(vec![
            found("svc", "CREATING"),
            found("svc", "CREATING"),
            found("svc", "ACTIVE"),
        ]);

        let result = StateWaiter::new(refresh)
            .pending(["CREATING"])
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(60))
            .interval(Duration::from_secs(1))
            .wait()
            .await;

        assert_eq!(result.unwrap(), "svc");
    }

    #[tokio::test(start_paused = true)]
    async fn always_pending_times_out_at_the_budget_and_no_sooner() {
        let (refresh, _) = scripted(vec![found("svc", "CREATING")]);
        let start = Instant::now();

        let err = StateWaiter::new(refresh)
            .pending(["CREATING"])
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(5))
            .interval(Duration::from_secs(1))
            .wait()
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(start.elapsed(), Duration::from_secs(5));
        match err {
            WaitError::Timeout { last_state, .. } => {
                assert_eq!(last_state.as_deref(), Some("CREATING"));
            }
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unexpected_state_fails_fast() {
        let (refresh, calls) = scripted(vec![
            found("svc", "CREATING"),
            found("svc", "CREATE_FAILED"),
        ]);
        let start = Instant::now();

        let err = StateWaiter::new(refresh)
            .pending(["CREATING"])
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(600))
            .interval(Duration::from_secs(1))
            .wait()
            .await
            .unwrap_err();

        match err {
            WaitError::UnexpectedState { state, .. } => assert_eq!(state, "CREATE_FAILED"),
            other => panic!("expected unexpected-state, got {:?}", other),
        }
        // Failed on the second tick, long before the timeout
        assert_eq!(start.elapsed(), Duration::from_secs(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_pending_set_treats_any_state_as_pending() {
        let (refresh, _) = scripted(vec![
            found("svc", "SOME_INTERMEDIATE_STATE"),
            found("svc", "ACTIVE"),
        ]);

        let result = StateWaiter::new(refresh)
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(60))
            .interval(Duration::from_secs(1))
            .wait()
            .await;

        assert_eq!(result.unwrap(), "svc");
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_within_tolerance_then_target_succeeds() {
        let (refresh, _) = scripted(vec![
            Ok(Refresh::NotFound),
            Ok(Refresh::NotFound),
            found("svc", "ACTIVE"),
        ]);

        let result = StateWaiter::new(refresh)
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(60))
            .interval(Duration::from_secs(1))
            .not_found_checks(3)
            .wait()
            .await;

        assert_eq!(result.unwrap(), "svc");
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_beyond_tolerance_fails() {
        let (refresh, _) = scripted(vec![Ok(Refresh::NotFound)]);

        let err = StateWaiter::new(refresh)
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(60))
            .interval(Duration::from_secs(1))
            .not_found_checks(2)
            .wait()
            .await
            .unwrap_err();

        match err {
            WaitError::NotFound { checks } => assert_eq!(checks, 3),
            other => panic!("expected not-found, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_is_fatal_by_default() {
        let (refresh, calls) = scripted(vec![Ok(Refresh::NotFound)]);

        let err = StateWaiter::new(refresh)
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(60))
            .wait()
            .await
            .unwrap_err();

        assert!(matches!(err, WaitError::NotFound { checks: 1 }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_error_propagates_immediately() {
        let (refresh, _) = scripted(vec![Err(ProviderError::new("throttled"))]);

        let err = StateWaiter::new(refresh)
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(60))
            .wait()
            .await
            .unwrap_err();

        match err {
            WaitError::Refresh(cause) => assert_eq!(cause.message, "throttled"),
            other => panic!("expected refresh error, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_is_distinct_from_timeout() {
        let (refresh, _) = scripted(vec![found("svc", "CREATING")]);

        let err = StateWaiter::new(refresh)
            .pending(["CREATING"])
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(600))
            .interval(Duration::from_secs(1))
            .wait_with_cancel(sleep(Duration::from_secs(3)))
            .await
            .unwrap_err();

        assert!(err.is_canceled());
        assert!(!err.is_timeout());
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_counter_resets_on_found() {
        // Two not-founds, a pending observation, then two more not-founds:
        // the run never exceeds the tolerance of 2 because the counter is
        // consecutive, then the target lands.
        let (refresh, _) = scripted(vec![
            Ok(Refresh::NotFound),
            Ok(Refresh::NotFound),
            found("svc", "CREATING"),
            Ok(Refresh::NotFound),
            Ok(Refresh::NotFound),
            found("svc", "ACTIVE"),
        ]);

        let result = StateWaiter::new(refresh)
            .pending(["CREATING"])
            .target(["ACTIVE"])
            .timeout(Duration::from_secs(60))
            .interval(Duration::from_secs(1))
            .not_found_checks(2)
            .wait()
            .await;

        assert_eq!(result.unwrap(), "svc");
    }

    #[test]
    fn wait_error_converts_to_provider_error() {
        let err = WaitError::Timeout {
            last_state: Some("CREATING".to_string()),
            timeout: Duration::from_secs(5),
        };
        let provider_err: ProviderError = err.into();
        assert!(provider_err.message.contains("timed out"));

        let err = WaitError::Refresh(ProviderError::new("throttled"));
        let provider_err: ProviderError = err.into();
        assert_eq!(provider_err.message, "throttled");
    }
}
