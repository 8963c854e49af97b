//! Single-flight token refresh
//!
//! When several requests fail with 401 at the same time only one of them may
//! call the refresh endpoint; the rest wait for that call and reuse its
//! outcome. The pending call is held as a [`Shared`] future in a mutex-guarded
//! slot: the first caller creates it, later callers clone it, and whoever
//! finishes first clears the slot so the next 401 starts a fresh cycle.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::{BoxFuture, FutureExt, Shared};
use jobmatch_domain::TokenPair;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a refresh attempt failed
///
/// `Clone` because one failure is delivered to every waiting caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RefreshError {
    /// No refresh token was stored when the 401 arrived
    #[error("No refresh token available")]
    MissingRefreshToken,

    /// The refresh endpoint answered with an error status or `success: false`
    #[error("Token refresh rejected: {message}")]
    Rejected { status: Option<u16>, message: String },

    /// The refresh endpoint could not be reached
    #[error("Token refresh request failed: {0}")]
    Transport(String),

    /// The new pair could not be persisted
    #[error("Failed to persist refreshed tokens: {0}")]
    Storage(String),
}

type SharedRefresh = Shared<BoxFuture<'static, Result<TokenPair, RefreshError>>>;

/// Deduplicates concurrent token refreshes
#[derive(Default)]
pub struct RefreshCoordinator {
    in_flight: Mutex<Option<(u64, SharedRefresh)>>,
    next_id: AtomicU64,
    started: AtomicU64,
}

impl RefreshCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a refresh is currently pending.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.lock().is_some()
    }

    /// Number of refresh calls started over the coordinator's lifetime.
    pub fn refreshes_started(&self) -> u64 {
        self.started.load(Ordering::Relaxed)
    }

    /// Join the in-flight refresh, or start one with `start` if none is
    /// pending.
    ///
    /// `start` is only invoked when this caller creates the refresh. The
    /// future it returns must persist the new pair before resolving, so that
    /// every waiter observes the stored tokens once it wakes.
    pub async fn refresh<F, Fut>(&self, start: F) -> Result<TokenPair, RefreshError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<TokenPair, RefreshError>> + Send + 'static,
    {
        let (id, pending) = {
            let mut slot = self.in_flight.lock();
            match slot.as_ref() {
                Some((id, pending)) => {
                    debug!(refresh_id = id, "Joining in-flight token refresh");
                    (*id, pending.clone())
                }
                None => {
                    let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                    self.started.fetch_add(1, Ordering::Relaxed);
                    info!(refresh_id = id, "Starting token refresh");
                    let pending = start().boxed().shared();
                    *slot = Some((id, pending.clone()));
                    (id, pending)
                }
            }
        };

        let result = pending.await;

        {
            let mut slot = self.in_flight.lock();
            if slot.as_ref().is_some_and(|(current, _)| *current == id) {
                *slot = None;
            }
        }

        if let Err(e) = &result {
            warn!(refresh_id = id, error = %e, "Token refresh failed");
        }
        result
    }
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCoordinator")
            .field("refreshing", &self.is_refreshing())
            .field("started", &self.refreshes_started())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn concurrent_callers_share_one_refresh() {
        let coordinator = Arc::new(RefreshCoordinator::new());
        let calls = Arc::new(AtomicU64::new(0));

        let mut handles = Vec::new();
        for _ in 0..5 {
            let coordinator = Arc::clone(&coordinator);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                coordinator
                    .refresh(move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(100)).await;
                        Ok(TokenPair::new("fresh", "next"))
                    })
                    .await
            }));
        }

        for handle in handles {
            let tokens = handle.await.unwrap().unwrap();
            assert_eq!(tokens.access_token, "fresh");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(coordinator.refreshes_started(), 1);
        assert!(!coordinator.is_refreshing());
    }

    #[tokio::test]
    async fn failure_is_delivered_to_every_waiter() {
        let coordinator = Arc::new(RefreshCoordinator::new());
        let first = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move {
                coordinator
                    .refresh(|| async {
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Err(RefreshError::Rejected {
                            status: Some(401),
                            message: "Invalid refresh token".into(),
                        })
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = coordinator
            .refresh(|| async { Ok(TokenPair::new("should", "not-run")) })
            .await;

        assert!(matches!(second, Err(RefreshError::Rejected { status: Some(401), .. })));
        assert_eq!(first.await.unwrap(), second);
        assert_eq!(coordinator.refreshes_started(), 1);
    }

    #[tokio::test]
    async fn completed_refresh_allows_a_new_cycle() {
        let coordinator = RefreshCoordinator::new();
        let first = coordinator.refresh(|| async { Ok(TokenPair::new("a1", "r1")) }).await;
        let second = coordinator.refresh(|| async { Ok(TokenPair::new("a2", "r2")) }).await;

        assert_eq!(first.unwrap().access_token, "a1");
        assert_eq!(second.unwrap().access_token, "a2");
        assert_eq!(coordinator.refreshes_started(), 2);
    }
}
