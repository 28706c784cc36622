//! Health Analytics: AI summary of the sample week

use healthai_core::{HealthData, prompt};

use super::client::{CompletionClient, complete_prompt};
use crate::error::AppError;

/// Summarize `data` with a fixed prompt; there is no user input to guard
pub async fn generate_health_insights(
    client: &dyn CompletionClient,
    data: &HealthData,
) -> Result<String, AppError> {
    let prompt = prompt::health_insights(data)
        .map_err(|e| AppError::Internal(format!("Failed to serialize health data: {}", e)))?;
    let insights = complete_prompt(client, &prompt).await?;
    Ok(insights)
}
