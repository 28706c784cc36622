//! Per-page user input.
//!
//! Each query has one required free-text field. `validate` rejects it when
//! it is empty or whitespace only, which is the only check made before the
//! input is handed to the completion service.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::profile::Gender;

/// Age the prediction form starts with
pub const DEFAULT_PREDICTION_AGE: u32 = 30;

fn default_prediction_age() -> u32 {
    DEFAULT_PREDICTION_AGE
}

/// Return the trimmed value, or an error naming the field when nothing is left
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(InputError::Empty { field })
    } else {
        Ok(trimmed)
    }
}

/// Patient Chat input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientQuestion {
    #[serde(default)]
    pub question: String,
}

impl PatientQuestion {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        require("a question", &self.question).map(|_| ())
    }
}

/// Disease Prediction input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomReport {
    #[serde(default)]
    pub symptoms: String,
    #[serde(default = "default_prediction_age")]
    pub age: u32,
    #[serde(default)]
    pub gender: Gender,
}

impl SymptomReport {
    pub fn new(symptoms: impl Into<String>, age: u32, gender: Gender) -> Self {
        Self {
            symptoms: symptoms.into(),
            age,
            gender,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        require("symptoms", &self.symptoms).map(|_| ())
    }
}

/// Treatment Plan input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatmentRequest {
    pub condition: String,
    pub age: u32,
    pub gender: Gender,
    /// Comma-separated, free text
    pub allergies: String,
}

impl TreatmentRequest {
    pub fn validate(&self) -> Result<(), InputError> {
        require("a condition", &self.condition).map(|_| ())
    }
}
