//! Session-scoped profile persistence

mod memory;
mod postgres;

pub use memory::{DEFAULT_SESSION_TTL, MemoryProfileStore};
pub use postgres::{PgProfileStore, create_pool};

use async_trait::async_trait;
use healthai_core::Profile;

use crate::error::AppError;

/// Storage boundary for patient profiles, keyed by session ID.
///
/// A session without a stored record reads as `Profile::default()`.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Store the default profile if the session has none, then return the stored one
    async fn initialize(&self, session: &str) -> Result<Profile, AppError>;

    async fn get(&self, session: &str) -> Result<Profile, AppError>;

    /// Replace the session's profile wholesale
    async fn update(&self, session: &str, profile: Profile) -> Result<Profile, AppError>;

    /// Backend reachability, for `/health`
    async fn ping(&self) -> Result<(), AppError>;

    fn backend(&self) -> &'static str;
}
