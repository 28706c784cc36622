//! Prompt construction for the completion-backed pages.
//!
//! Builders assume the query already passed `validate`; they only trim and
//! concatenate.

use crate::profile::Gender;
use crate::query::{PatientQuestion, SymptomReport, TreatmentRequest};
use crate::sample::HealthData;

pub const CHAT_SYSTEM_PROMPT: &str = r#"You are a friendly healthcare assistant. Answer the patient's question clearly and in plain language.

Give general health information only. Recommend seeing a healthcare professional whenever symptoms sound serious, persistent, or urgent."#;

pub const PREDICTION_SYSTEM_PROMPT: &str = r#"You are a medical assistant that suggests possible conditions from reported symptoms.

List the most likely conditions with a short explanation for each, suggest sensible next steps, and say clearly that this is not a diagnosis."#;

pub const TREATMENT_SYSTEM_PROMPT: &str = r#"You are a medical assistant that drafts treatment plans for review by a clinician.

Structure the plan as: medications (avoiding the patient's allergies), lifestyle changes, follow-up care. Keep it concise and practical."#;

pub const INSIGHTS_SYSTEM_PROMPT: &str = r#"You are a health data analyst. Summarize weekly patient metrics for a clinician.

Point out trends, values outside normal ranges, and concrete recommendations. Use short bullet points."#;

/// A system prompt paired with the user message sent to the completion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
}

fn gender_clause(gender: Gender) -> String {
    if gender.is_unspecified() {
        String::new()
    } else {
        format!(", gender {}", gender)
    }
}

pub fn patient_chat(query: &PatientQuestion) -> Prompt {
    Prompt {
        system: CHAT_SYSTEM_PROMPT,
        user: query.question.trim().to_string(),
    }
}

pub fn disease_prediction(report: &SymptomReport) -> Prompt {
    Prompt {
        system: PREDICTION_SYSTEM_PROMPT,
        user: format!(
            "Patient details: age {}{}.\nSymptoms: {}\n\nWhat conditions could explain these symptoms?",
            report.age,
            gender_clause(report.gender),
            report.symptoms.trim()
        ),
    }
}

pub fn treatment_plan(request: &TreatmentRequest) -> Prompt {
    let allergies = match request.allergies.trim() {
        "" => "none reported",
        listed => listed,
    };
    Prompt {
        system: TREATMENT_SYSTEM_PROMPT,
        user: format!(
            "Diagnosed condition: {}\nPatient details: age {}{}.\nKnown allergies: {}\n\nGenerate a personalized treatment plan.",
            request.condition.trim(),
            request.age,
            gender_clause(request.gender),
            allergies
        ),
    }
}

pub fn health_insights(data: &HealthData) -> Result<Prompt, serde_json::Error> {
    let metrics = serde_json::to_string_pretty(data)?;
    Ok(Prompt {
        system: INSIGHTS_SYSTEM_PROMPT,
        user: format!(
            "Here are one week of health metrics for a patient:\n{}\n\nProvide health insights.",
            metrics
        ),
    })
}
