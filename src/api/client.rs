//! HTTP API Client
//!
//! Functions for communicating with the RenoGraph analysis service.

use gloo_net::http::Request;

use crate::api::types::{CreatedAnalysis, Patient, PatientReport, Session};
use crate::report::{PatientChoice, ReportDraft};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8090/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("renograph_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Request/Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct PatientListResponse {
    pub patients: Vec<Patient>,
}

#[derive(Debug, serde::Deserialize)]
pub struct PatientAnalysesResponse {
    pub patients: Vec<PatientReport>,
}

/// Body of a report submission
#[derive(Debug, serde::Serialize)]
pub struct CreateAnalysisRequest {
    pub patient: PatientChoice,
    pub diuretic_minutes: u32,
    pub image: ImagePayload,
}

/// DICOM series carried inline as base64
#[derive(Debug, serde::Serialize)]
pub struct ImagePayload {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

// ============ API Functions ============

/// Fetch all registered patients
pub async fn fetch_patients() -> Result<Vec<Patient>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/patients", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    let result: PatientListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.patients)
}

/// Fetch all patients together with their analysis history
pub async fn fetch_patients_with_analyses() -> Result<Vec<PatientReport>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/patients/analyses", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    let result: PatientAnalysesResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.patients)
}

/// Submit a validated report for analysis
///
/// The session token is passed through unchanged in the `Authorization`
/// header; the analysis service owns the token format.
pub async fn create_analysis(draft: &ReportDraft, token: &str) -> Result<CreatedAnalysis, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/analysis", api_base))
        .header("Authorization", token)
        .json(&build_create_request(draft))
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Report submission failed".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Exchange credentials for a session
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    #[derive(serde::Serialize)]
    struct SignInRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/login", api_base))
        .json(&SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Invalid email or password".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Assemble the wire request for a report submission
fn build_create_request(draft: &ReportDraft) -> CreateAnalysisRequest {
    CreateAnalysisRequest {
        patient: draft.patient.clone(),
        diuretic_minutes: draft.diuretic_minutes,
        image: ImagePayload {
            file_name: draft.image.file_name.clone(),
            content: base64_encode(&draft.image.bytes),
        },
    }
}

/// Simple base64 encoding for binary data
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    for chunk in data.chunks(3) {
        let b0 = chunk[0] as usize;
        let b1 = chunk.get(1).copied().unwrap_or(0) as usize;
        let b2 = chunk.get(2).copied().unwrap_or(0) as usize;

        out.push(ALPHABET[b0 >> 2] as char);
        out.push(ALPHABET[((b0 & 0x03) << 4) | (b1 >> 4)] as char);
        out.push(if chunk.len() > 1 {
            ALPHABET[((b1 & 0x0f) << 2) | (b2 >> 6)] as char
        } else {
            '='
        });
        out.push(if chunk.len() > 2 {
            ALPHABET[b2 & 0x3f] as char
        } else {
            '='
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Attachment;

    fn draft_for(patient: PatientChoice) -> ReportDraft {
        ReportDraft {
            patient,
            image: Attachment {
                file_name: "series.dcm".to_string(),
                bytes: b"hello".to_vec(),
            },
            diuretic_minutes: 20,
        }
    }

    #[test]
    fn test_create_request_for_existing_patient() {
        let request = build_create_request(&draft_for(PatientChoice::Existing {
            id: "p-7".to_string(),
        }));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["patient"]["kind"], "existing");
        assert_eq!(json["patient"]["id"], "p-7");
        assert_eq!(json["diuretic_minutes"], 20);
        assert_eq!(json["image"]["file_name"], "series.dcm");
        assert_eq!(json["image"]["content"], "aGVsbG8=");
    }

    #[test]
    fn test_create_request_omits_missing_email() {
        let request = build_create_request(&draft_for(PatientChoice::New {
            name: "Kari Nordmann".to_string(),
            email: None,
        }));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["patient"]["kind"], "new");
        assert_eq!(json["patient"]["name"], "Kari Nordmann");
        assert!(json["patient"].get("email").is_none());
    }

    #[test]
    fn test_create_request_keeps_provided_email() {
        let request = build_create_request(&draft_for(PatientChoice::New {
            name: "Kari Nordmann".to_string(),
            email: Some("kari@clinic.no".to_string()),
        }));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["patient"]["email"], "kari@clinic.no");
    }

    #[test]
    fn test_created_analysis_parses_id() {
        let created: CreatedAnalysis = serde_json::from_str(r#"{"id":"42"}"#).unwrap();
        assert_eq!(created.id, "42");
    }

    #[test]
    fn test_patient_analyses_response_parses_groups() {
        let body = r#"{
            "patients": [
                {"id": "p1", "name": "Ola Hansen", "analyses": [{"id": "a1", "created_at": 1710201600000}]},
                {"id": "p2", "name": "Kari Berg", "analyses": [{"id": "a2", "created_at": 1710288000000}]}
            ]
        }"#;

        let parsed: PatientAnalysesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.patients.len(), 2);
        assert_eq!(parsed.patients[0].analyses.len(), 1);
        assert_eq!(parsed.patients[1].analyses[0].id, "a2");
    }

    #[test]
    fn test_patient_without_analyses_defaults_to_empty() {
        let parsed: PatientReport =
            serde_json::from_str(r#"{"id": "p3", "name": "Nils Moe"}"#).unwrap();
        assert!(parsed.analyses.is_empty());
    }

    #[test]
    fn test_base64_encode_padding() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_encode(b"f"), "Zg==");
        assert_eq!(base64_encode(b"fo"), "Zm8=");
        assert_eq!(base64_encode(b"foo"), "Zm9v");
        assert_eq!(base64_encode(b"hello"), "aGVsbG8=");
    }
}
