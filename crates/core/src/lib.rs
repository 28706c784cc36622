//! healthai-core: Domain types for the HealthAI dashboard
//!
//! Pages and their dispatch metadata, page queries with their input guards,
//! prompt builders, the patient profile record, the sample health week,
//! and the error and notice types shared with the server.

pub mod error;
pub mod notice;
pub mod page;
pub mod profile;
pub mod prompt;
pub mod query;
pub mod sample;

pub use error::{CompletionError, InputError, UnknownPage};
pub use notice::{Notice, Severity};
pub use page::{Page, PageDescriptor};
pub use profile::{Gender, Profile};
pub use prompt::Prompt;
pub use query::{PatientQuestion, SymptomReport, TreatmentRequest};
pub use sample::{DailyMetrics, HealthData, sample_health_data};
