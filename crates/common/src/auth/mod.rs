//! Credential state and token refresh
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  SessionStore    │  Typed access to the three credential entries
//! └────────┬─────────┘
//!          │
//!          └──► CredentialStore   (keychain, file or memory backend)
//!
//! ┌──────────────────┐
//! │RefreshCoordinator│  At most one refresh in flight; concurrent callers
//! └──────────────────┘  await the same result
//! ```
//!
//! The coordinator does not know how a refresh is performed. The API client
//! hands it a future that calls `POST /auth/refresh` and persists the new
//! pair; every caller that hits a 401 while that future is pending awaits it
//! instead of starting another.

pub mod refresh;
pub mod session;
pub mod traits;

pub use refresh::{RefreshCoordinator, RefreshError};
pub use session::SessionStore;
pub use traits::{CredentialStore, StorageKey};
