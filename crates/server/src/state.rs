//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use crate::ai::{ClaudeClient, CompletionClient, UnconfiguredClient};
use crate::config::Config;
use crate::error::AppError;
use crate::store::{MemoryProfileStore, PgProfileStore, ProfileStore, create_pool};

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub completion: Arc<dyn CompletionClient>,
    /// False when `completion` is the unconfigured stand-in
    pub completion_configured: bool,
}

impl AppState {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        completion: Option<Arc<dyn CompletionClient>>,
    ) -> Self {
        let completion_configured = completion.is_some();
        Self {
            profiles,
            completion: completion.unwrap_or_else(|| Arc::new(UnconfiguredClient)),
            completion_configured,
        }
    }

    /// Build the production state: PostgreSQL or in-memory profiles, Claude
    /// completions when a key is configured
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        let profiles: Arc<dyn ProfileStore> = match &config.database_url {
            Some(url) => {
                let pool = create_pool(url)
                    .map_err(|e| AppError::Internal(format!("Failed to create pool: {}", e)))?;
                let store = PgProfileStore::new(pool);
                store.migrate().await?;
                Arc::new(store)
            }
            None => Arc::new(MemoryProfileStore::with_idle_ttl(Duration::from_secs(
                config.session_ttl_secs,
            ))),
        };

        let completion = config.anthropic_api_key.as_ref().map(|key| {
            Arc::new(ClaudeClient::new(
                key.clone(),
                config.anthropic_model.clone(),
                config.anthropic_max_tokens,
            )) as Arc<dyn CompletionClient>
        });

        Ok(Self::new(profiles, completion))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("profiles", &self.profiles.backend())
            .field("completion_configured", &self.completion_configured)
            .finish()
    }
}
