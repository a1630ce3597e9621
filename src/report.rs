//! Report Drafts
//!
//! Raw form state, the validation rules, and the validated draft that gets
//! submitted to the analysis service. Everything here is pure so the rules
//! can be tested off the browser.

/// Minimum length of a new patient's name, after trimming
pub const MIN_PATIENT_NAME_LEN: usize = 2;

/// A DICOM series chosen in the file picker, already read to bytes
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Who the report is about
///
/// Exactly one of the two applies; the validator rejects drafts that fill
/// in both or neither.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatientChoice {
    Existing {
        id: String,
    },
    New {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
}

/// A fully validated report, ready for submission
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDraft {
    pub patient: PatientChoice,
    pub image: Attachment,
    pub diuretic_minutes: u32,
}

/// Raw form state exactly as the inputs hold it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftFields {
    pub patient_id: String,
    pub patient_name: String,
    pub email: String,
    pub attachment: Option<Attachment>,
    pub diuretic: String,
}

/// Field-level validation messages, `None` where a field passed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub patient: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub diuretic: Option<String>,
}

impl FieldErrors {
    /// True when validation recorded no problems
    pub fn is_empty(&self) -> bool {
        self.patient.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.image.is_none()
            && self.diuretic.is_none()
    }
}

/// Check a draft against the submission rules
///
/// Returns the validated draft, or every field message at once so the form
/// can show them together.
pub fn validate(fields: &DraftFields) -> Result<ReportDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let patient_id = fields.patient_id.trim();
    let patient_name = fields.patient_name.trim();
    let email = fields.email.trim();

    let patient = if !patient_id.is_empty() && !patient_name.is_empty() {
        errors.patient =
            Some("Select an existing patient or register a new one, not both".to_string());
        None
    } else if !patient_id.is_empty() {
        Some(PatientChoice::Existing {
            id: patient_id.to_string(),
        })
    } else if !patient_name.is_empty() {
        validate_new_patient(patient_name, email, &mut errors)
    } else {
        errors.patient = Some("Select an existing patient or register a new one".to_string());
        None
    };

    if fields.attachment.is_none() {
        errors.image = Some("A DICOM image series is required".to_string());
    }

    let diuretic_minutes = match parse_diuretic(&fields.diuretic) {
        Ok(minutes) => Some(minutes),
        Err(message) => {
            errors.diuretic = Some(message);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // No recorded errors means every piece resolved
    match (patient, fields.attachment.clone(), diuretic_minutes) {
        (Some(patient), Some(image), Some(minutes)) => Ok(ReportDraft {
            patient,
            image,
            diuretic_minutes: minutes,
        }),
        _ => Err(errors),
    }
}

fn validate_new_patient(
    name: &str,
    email: &str,
    errors: &mut FieldErrors,
) -> Option<PatientChoice> {
    let mut ok = true;

    if name.chars().count() < MIN_PATIENT_NAME_LEN {
        errors.name = Some("Name must be at least 2 characters".to_string());
        ok = false;
    }

    let email_value = if email.is_empty() {
        None
    } else if looks_like_email(email) {
        Some(email.to_string())
    } else {
        errors.email = Some("Enter a valid email address".to_string());
        ok = false;
        None
    };

    if ok {
        Some(PatientChoice::New {
            name: name.to_string(),
            email: email_value,
        })
    } else {
        None
    }
}

fn parse_diuretic(raw: &str) -> Result<u32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Diuretic injection time is required".to_string());
    }
    match trimmed.parse::<u32>() {
        Ok(0) => Err("Diuretic injection time must be a positive number".to_string()),
        Ok(minutes) => Ok(minutes),
        Err(_) => Err("Diuretic injection time must be a whole number of minutes".to_string()),
    }
}

/// Structural email check: `local@domain` with a dotted domain
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let (local, domain) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment() -> Attachment {
        Attachment {
            file_name: "renogram.dcm".to_string(),
            bytes: vec![0x44, 0x49, 0x43, 0x4d],
        }
    }

    fn valid_existing() -> DraftFields {
        DraftFields {
            patient_id: "p-42".to_string(),
            attachment: Some(attachment()),
            diuretic: "20".to_string(),
            ..Default::default()
        }
    }

    fn valid_new() -> DraftFields {
        DraftFields {
            patient_name: "Kari Nordmann".to_string(),
            email: "kari@clinic.no".to_string(),
            attachment: Some(attachment()),
            diuretic: "20".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_existing_patient_draft_passes() {
        let draft = validate(&valid_existing()).unwrap();
        assert_eq!(
            draft.patient,
            PatientChoice::Existing {
                id: "p-42".to_string()
            }
        );
        assert_eq!(draft.diuretic_minutes, 20);
        assert_eq!(draft.image.file_name, "renogram.dcm");
    }

    #[test]
    fn test_new_patient_draft_passes() {
        let draft = validate(&valid_new()).unwrap();
        assert_eq!(
            draft.patient,
            PatientChoice::New {
                name: "Kari Nordmann".to_string(),
                email: Some("kari@clinic.no".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_email_maps_to_none() {
        let mut fields = valid_new();
        fields.email = String::new();

        let draft = validate(&fields).unwrap();
        assert_eq!(
            draft.patient,
            PatientChoice::New {
                name: "Kari Nordmann".to_string(),
                email: None,
            }
        );
    }

    #[test]
    fn test_neither_patient_mode_is_rejected() {
        let fields = DraftFields {
            attachment: Some(attachment()),
            diuretic: "20".to_string(),
            ..Default::default()
        };

        let errors = validate(&fields).unwrap_err();
        assert!(errors.patient.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_both_patient_modes_are_rejected() {
        let mut fields = valid_existing();
        fields.patient_name = "Kari Nordmann".to_string();

        let errors = validate(&fields).unwrap_err();
        assert!(errors.patient.is_some());
    }

    #[test]
    fn test_short_name_is_rejected() {
        let mut fields = valid_new();
        fields.patient_name = "K".to_string();

        let errors = validate(&fields).unwrap_err();
        assert_eq!(
            errors.name.as_deref(),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for bad in ["kari", "kari@", "@clinic.no", "kari@clinic", "kari @clinic.no", "kari@.no", "kari@clinic..no"] {
            let mut fields = valid_new();
            fields.email = bad.to_string();

            let errors = validate(&fields).unwrap_err();
            assert!(errors.email.is_some(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_missing_image_is_rejected() {
        let mut fields = valid_existing();
        fields.attachment = None;

        let errors = validate(&fields).unwrap_err();
        assert_eq!(
            errors.image.as_deref(),
            Some("A DICOM image series is required")
        );
    }

    #[test]
    fn test_diuretic_time_rules() {
        let cases = [
            ("", "Diuretic injection time is required"),
            ("abc", "Diuretic injection time must be a whole number of minutes"),
            ("2.5", "Diuretic injection time must be a whole number of minutes"),
            ("-5", "Diuretic injection time must be a whole number of minutes"),
            ("0", "Diuretic injection time must be a positive number"),
        ];

        for (input, expected) in cases {
            let mut fields = valid_existing();
            fields.diuretic = input.to_string();

            let errors = validate(&fields).unwrap_err();
            assert_eq!(errors.diuretic.as_deref(), Some(expected), "input {:?}", input);
        }
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let errors = validate(&DraftFields::default()).unwrap_err();
        assert!(errors.patient.is_some());
        assert!(errors.image.is_some());
        assert!(errors.diuretic.is_some());
    }

    #[test]
    fn test_whitespace_only_fields_count_as_empty() {
        let mut fields = valid_existing();
        fields.patient_id = "   ".to_string();

        let errors = validate(&fields).unwrap_err();
        assert!(errors.patient.is_some());
    }

    #[test]
    fn test_patient_choice_serializes_tagged() {
        let existing = serde_json::to_value(PatientChoice::Existing {
            id: "p-1".to_string(),
        })
        .unwrap();
        assert_eq!(existing["kind"], "existing");

        let new = serde_json::to_value(PatientChoice::New {
            name: "Ola Hansen".to_string(),
            email: None,
        })
        .unwrap();
        assert_eq!(new["kind"], "new");
        assert!(new.get("email").is_none());
    }
}
