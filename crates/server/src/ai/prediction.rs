//! Disease Prediction from reported symptoms

use healthai_core::{SymptomReport, prompt};

use super::client::{CompletionClient, complete_prompt};
use crate::error::AppError;

pub async fn predict_disease(
    client: &dyn CompletionClient,
    report: &SymptomReport,
) -> Result<String, AppError> {
    report.validate()?;
    let prediction = complete_prompt(client, &prompt::disease_prediction(report)).await?;
    Ok(prediction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::ScriptedClient;
    use healthai_core::Gender;

    #[tokio::test]
    async fn empty_symptoms_are_rejected_locally() {
        let client = ScriptedClient::replying("unused");
        let report = SymptomReport::new("\t", 30, Gender::Male);
        assert!(predict_disease(&client, &report).await.is_err());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn prompt_carries_age_and_gender() {
        let client = ScriptedClient::replying("Possibly influenza.");
        let report = SymptomReport::new("fever, aches", 67, Gender::Other);
        let prediction = predict_disease(&client, &report).await.unwrap();

        assert_eq!(prediction, "Possibly influenza.");
        let sent = client.last_prompt().unwrap();
        assert!(sent.contains("age 67, gender Other"));
        assert!(sent.contains("fever, aches"));
    }
}
