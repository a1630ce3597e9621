//! API Wire Types
//!
//! Shared request/response records exchanged with the analysis service.

/// Patient record as returned by the patient endpoints
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
}

/// A completed or queued analysis run
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Analysis {
    pub id: String,
    /// Creation time as a Unix timestamp in milliseconds
    pub created_at: i64,
}

/// Patient together with every analysis recorded for them
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct PatientReport {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub analyses: Vec<Analysis>,
}

/// Identifier handed back when a report submission is accepted
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct CreatedAnalysis {
    pub id: String,
}

/// Signed-in user credentials
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub email: String,
}
