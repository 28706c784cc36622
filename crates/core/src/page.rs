use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownPage;

/// Dashboard pages, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    PatientChat,
    DiseasePrediction,
    TreatmentPlans,
    HealthAnalytics,
    PatientProfile,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::PatientChat,
        Page::DiseasePrediction,
        Page::TreatmentPlans,
        Page::HealthAnalytics,
        Page::PatientProfile,
    ];

    /// URL segment under `/api`
    pub fn slug(self) -> &'static str {
        match self {
            Page::PatientChat => "chat",
            Page::DiseasePrediction => "predict",
            Page::TreatmentPlans => "treatment",
            Page::HealthAnalytics => "insights",
            Page::PatientProfile => "profile",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::PatientChat => "Patient Chat",
            Page::DiseasePrediction => "Disease Prediction",
            Page::TreatmentPlans => "Treatment Plans",
            Page::HealthAnalytics => "Health Analytics",
            Page::PatientProfile => "Patient Profile",
        }
    }

    /// Label of the page's single action button
    pub fn action(self) -> &'static str {
        match self {
            Page::PatientChat => "Ask",
            Page::DiseasePrediction => "Predict Disease",
            Page::TreatmentPlans => "Generate Plan",
            Page::HealthAnalytics => "Generate AI Insights",
            Page::PatientProfile => "Update Profile",
        }
    }

    pub fn path(self) -> String {
        format!("/api/{}", self.slug())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Sidebar entry served by `GET /api/pages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageDescriptor {
    pub slug: String,
    pub title: String,
    pub action: String,
    pub path: String,
}

impl From<Page> for PageDescriptor {
    fn from(page: Page) -> Self {
        Self {
            slug: page.slug().to_string(),
            title: page.title().to_string(),
            action: page.action().to_string(),
            path: page.path(),
        }
    }
}

/// The full sidebar, in display order
pub fn catalog() -> Vec<PageDescriptor> {
    Page::ALL.into_iter().map(PageDescriptor::from).collect()
}
