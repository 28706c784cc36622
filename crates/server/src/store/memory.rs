use async_trait::async_trait;
use healthai_core::Profile;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use super::ProfileStore;
use crate::error::AppError;

/// Idle time after which an in-memory session is dropped
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct Entry {
    profile: Profile,
    touched: Instant,
}

/// In-process store; sessions idle longer than the TTL are forgotten
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, Entry>>,
    idle_ttl: Duration,
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_SESSION_TTL)
    }
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    /// Stored sessions, expired ones included until the next write sweeps them
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    fn live(&self, entry: &Entry) -> bool {
        entry.touched.elapsed() < self.idle_ttl
    }

    /// Drop idle sessions; runs under the write lock on every write
    fn sweep(&self, profiles: &mut HashMap<String, Entry>) {
        let before = profiles.len();
        profiles.retain(|_, entry| self.live(entry));
        let evicted = before - profiles.len();
        if evicted > 0 {
            tracing::debug!(evicted, "Evicted idle sessions");
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn initialize(&self, session: &str) -> Result<Profile, AppError> {
        let mut profiles = self.profiles.write().await;
        self.sweep(&mut profiles);
        let entry = profiles.entry(session.to_string()).or_insert_with(|| Entry {
            profile: Profile::default(),
            touched: Instant::now(),
        });
        entry.touched = Instant::now();
        Ok(entry.profile.clone())
    }

    async fn get(&self, session: &str) -> Result<Profile, AppError> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .get(session)
            .filter(|entry| self.live(entry))
            .map(|entry| entry.profile.clone())
            .unwrap_or_default())
    }

    async fn update(&self, session: &str, profile: Profile) -> Result<Profile, AppError> {
        let mut profiles = self.profiles.write().await;
        self.sweep(&mut profiles);
        profiles.insert(
            session.to_string(),
            Entry {
                profile: profile.clone(),
                touched: Instant::now(),
            },
        );
        Ok(profile)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
