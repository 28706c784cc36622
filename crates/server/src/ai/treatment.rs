//! Treatment Plan generation

use healthai_core::{TreatmentRequest, prompt};

use super::client::{CompletionClient, complete_prompt};
use crate::error::AppError;

pub async fn generate_treatment_plan(
    client: &dyn CompletionClient,
    request: &TreatmentRequest,
) -> Result<String, AppError> {
    request.validate()?;
    let plan = complete_prompt(client, &prompt::treatment_plan(request)).await?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::ScriptedClient;
    use healthai_core::{CompletionError, Gender};

    fn request(condition: &str) -> TreatmentRequest {
        TreatmentRequest {
            condition: condition.to_string(),
            age: 45,
            gender: Gender::Female,
            allergies: "sulfa".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_condition_is_a_warning() {
        let client = ScriptedClient::replying("unused");
        let err = generate_treatment_plan(&client, &request(""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Warning(msg) if msg.contains("condition")));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn allergies_reach_the_prompt() {
        let client = ScriptedClient::replying("1. Metformin");
        let plan = generate_treatment_plan(&client, &request("type 2 diabetes"))
            .await
            .unwrap();
        assert_eq!(plan, "1. Metformin");
        assert!(client.last_prompt().unwrap().contains("Known allergies: sulfa"));
    }

    #[tokio::test]
    async fn api_error_propagates() {
        let client = ScriptedClient::failing(CompletionError::Api {
            status: 500,
            message: "overloaded".into(),
        });
        let err = generate_treatment_plan(&client, &request("asthma"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Completion(CompletionError::Api { status: 500, .. })));
    }
}
