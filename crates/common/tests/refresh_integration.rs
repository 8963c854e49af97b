//! Integration tests for the refresh coordinator
//!
//! Drives the coordinator together with a session store, the way the API
//! client does: the refresh future persists the new pair before resolving.

#![cfg(feature = "runtime")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use jobmatch_common::{MemoryCredentialStore, RefreshCoordinator, RefreshError, SessionStore};
use jobmatch_domain::TokenPair;

/// Validates that every waiter observes the persisted pair once the shared
/// refresh resolves.
#[tokio::test(flavor = "multi_thread")]
async fn test_waiters_see_persisted_tokens() {
    let backend = MemoryCredentialStore::with_tokens("expired", "refresh-1");
    let session = SessionStore::new(Arc::new(backend));
    let coordinator = Arc::new(RefreshCoordinator::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let waiters = (0..8).map(|_| {
        let coordinator = Arc::clone(&coordinator);
        let session = session.clone();
        let calls = Arc::clone(&calls);
        async move {
            let persist = session.clone();
            coordinator
                .refresh(move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    let tokens = TokenPair::new("fresh", "refresh-2");
                    persist
                        .store_tokens(&tokens)
                        .await
                        .map_err(|e| RefreshError::Storage(e.to_string()))?;
                    Ok::<_, RefreshError>(tokens)
                })
                .await
                .expect("refresh should succeed");
            session.access_token().await
        }
    });

    let seen = join_all(waiters).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(seen.iter().all(|token| token.as_deref() == Some("fresh")));
    assert_eq!(session.refresh_token().await.as_deref(), Some("refresh-2"));
}

/// Validates that a failed refresh leaves the slot empty so a later caller
/// can try again.
#[tokio::test(flavor = "multi_thread")]
async fn test_failed_refresh_does_not_stick() {
    let coordinator = RefreshCoordinator::new();

    let first = coordinator.refresh(|| async { Err(RefreshError::MissingRefreshToken) }).await;
    assert_eq!(first, Err(RefreshError::MissingRefreshToken));
    assert!(!coordinator.is_refreshing());

    let second = coordinator.refresh(|| async { Ok(TokenPair::new("a", "r")) }).await;
    assert!(second.is_ok());
    assert_eq!(coordinator.refreshes_started(), 2);
}
