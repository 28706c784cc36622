//! Patient Chat: free-text health questions

use healthai_core::{PatientQuestion, prompt};

use super::client::{CompletionClient, complete_prompt};
use crate::error::AppError;

/// Answer a patient's question with the raw completion text
pub async fn answer_patient_query(
    client: &dyn CompletionClient,
    query: &PatientQuestion,
) -> Result<String, AppError> {
    query.validate()?;
    let answer = complete_prompt(client, &prompt::patient_chat(query)).await?;
    Ok(answer)
}
