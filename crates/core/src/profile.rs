use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as offered by the dashboard select boxes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Unspecified => "",
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parse a stored value; anything unrecognized reads back as unspecified
    pub fn from_stored(value: &str) -> Self {
        match value {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            "Other" => Gender::Other,
            _ => Gender::Unspecified,
        }
    }

    pub fn is_unspecified(self) -> bool {
        self == Gender::Unspecified
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat per-session patient record.
///
/// All fields default, so a partial JSON body still yields a complete
/// profile and reads never hit an unset field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub allergies: String,
    pub contact: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        allergies: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            allergies: allergies.into(),
            contact: contact.into(),
        }
    }
}
