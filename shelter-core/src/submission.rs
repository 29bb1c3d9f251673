use crate::records::{ReportKind, ReportStatus};
use crate::service::{DataService, ServiceError};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The whole submission form as one record: the field strings exactly as
/// typed, the optional photo, and the in-flight flag that guards against a
/// double click on submit.
#[derive(Clone, Debug)]
pub struct ReportForm {
    pub kind: ReportKind,
    pub pet_name: String,
    pub species: String,
    pub description: String,
    pub location: String,
    pub last_seen: String,
    pub contact: String,
    pub image: Option<ImageAttachment>,
    submitting: bool,
}

impl ReportForm {
    pub fn new() -> Self {
        Self {
            kind: ReportKind::Lost,
            pet_name: String::new(),
            species: String::new(),
            description: String::new(),
            location: String::new(),
            last_seen: String::new(),
            contact: String::new(),
            image: None,
            submitting: false,
        }
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Claims the form for one submission. Returns false while a previous
    /// submission is still in flight, in which case nothing is issued.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn draft(&self) -> ReportDraft {
        ReportDraft {
            kind: self.kind,
            pet_name: self.pet_name.clone(),
            species: self.species.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            last_seen: self.last_seen.clone(),
            contact: self.contact.clone(),
            image: self.image.clone(),
        }
    }

    /// Releases the form. A successful submission resets every field to the
    /// initial empty lost-pet state; a failed one keeps the visitor's input.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            *self = Self::new();
        } else {
            self.submitting = false;
        }
    }
}

impl Default for ReportForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the form handed to the async workflow.
#[derive(Clone, Debug)]
pub struct ReportDraft {
    pub kind: ReportKind,
    pub pet_name: String,
    pub species: String,
    pub description: String,
    pub location: String,
    pub last_seen: String,
    pub contact: String,
    pub image: Option<ImageAttachment>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("required field missing: {0}")]
    MissingField(&'static str),
    #[error("not a valid last-seen date: {0}")]
    BadDate(String),
}

impl ReportDraft {
    /// Required fields per the form contract. The pet name is never
    /// required, for either report kind.
    pub fn validate(&self) -> Result<NaiveDate, DraftError> {
        let required = [
            ("species", &self.species),
            ("location", &self.location),
            ("last_seen", &self.last_seen),
            ("contact", &self.contact),
            ("description", &self.description),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(name));
            }
        }
        self.last_seen
            .parse::<NaiveDate>()
            .map_err(|_| DraftError::BadDate(self.last_seen.clone()))
    }
}

/// Storage key for an uploaded photo: random token plus the original
/// extension, namespaced under reports/.
pub fn storage_key(file_name: &str) -> String {
    let token = Uuid::new_v4();
    match file_name.rsplit('.').next() {
        Some(ext) if !ext.is_empty() => format!("reports/{token}.{ext}"),
        _ => format!("reports/{token}"),
    }
}

/// Insert payload for the reports collection. `id` and `created_at` are
/// assigned by the service.
#[derive(Clone, Debug, Serialize)]
pub struct NewReport {
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub pet_name: Option<String>,
    pub species: String,
    pub description: String,
    pub location: String,
    pub last_seen: NaiveDate,
    pub contact: String,
    pub image_url: Option<String>,
    pub status: ReportStatus,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("report is incomplete: {0}")]
    Invalid(#[from] DraftError),
    #[error("image upload failed: {0}")]
    Upload(ServiceError),
    #[error("report insert failed: {0}")]
    Insert(ServiceError),
}

/// Validates the draft, uploads the photo when one is attached, then inserts
/// the report. The upload must complete before the insert is issued; an
/// upload failure aborts the whole submission.
pub async fn submit<S: DataService>(service: &S, draft: &ReportDraft) -> Result<(), SubmitError> {
    let last_seen = draft.validate()?;

    let mut image_url = None;
    if let Some(image) = &draft.image {
        let key = storage_key(&image.file_name);
        let url = service
            .upload(&key, &image.content_type, &image.bytes)
            .await
            .map_err(SubmitError::Upload)?;
        image_url = Some(url);
    }

    let report = NewReport {
        kind: draft.kind,
        pet_name: match draft.pet_name.trim() {
            "" => None,
            name => Some(name.to_string()),
        },
        species: draft.species.clone(),
        description: draft.description.clone(),
        location: draft.location.clone(),
        last_seen,
        contact: draft.contact.clone(),
        image_url,
        status: ReportStatus::Open,
    };

    service.insert_report(&report).await.map_err(SubmitError::Insert)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ReportForm {
        let mut form = ReportForm::new();
        form.species = "Dog".into();
        form.description = "brown terrier, red collar".into();
        form.location = "Elm Street".into();
        form.last_seen = "2026-08-01".into();
        form.contact = "555-0100".into();
        form
    }

    #[test]
    fn begin_submit_rejects_while_in_flight() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.submitting());
    }

    #[test]
    fn finish_submit_resets_only_on_success() {
        let mut form = filled_form();
        form.pet_name = "Rex".into();
        form.image = Some(ImageAttachment {
            file_name: "rex.png".into(),
            content_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        });

        assert!(form.begin_submit());
        form.finish_submit(false);
        assert!(!form.submitting());
        assert_eq!(form.pet_name, "Rex");
        assert!(form.image.is_some());

        assert!(form.begin_submit());
        form.finish_submit(true);
        assert!(!form.submitting());
        assert_eq!(form.kind, ReportKind::Lost);
        assert!(form.pet_name.is_empty());
        assert!(form.species.is_empty());
        assert!(form.image.is_none());
    }

    #[test]
    fn validate_names_the_first_missing_field() {
        let mut form = filled_form();
        form.species.clear();
        assert_eq!(form.draft().validate(), Err(DraftError::MissingField("species")));

        let mut form = filled_form();
        form.contact = "   ".into();
        assert_eq!(form.draft().validate(), Err(DraftError::MissingField("contact")));
    }

    #[test]
    fn validate_rejects_unparseable_dates() {
        let mut form = filled_form();
        form.last_seen = "yesterday".into();
        assert_eq!(form.draft().validate(), Err(DraftError::BadDate("yesterday".into())));
    }

    #[test]
    fn validate_never_requires_pet_name() {
        let mut form = filled_form();
        form.kind = ReportKind::Lost;
        form.pet_name.clear();
        assert!(form.draft().validate().is_ok());
    }

    #[test]
    fn storage_key_keeps_extension_and_stays_unique() {
        let a = storage_key("rex.png");
        let b = storage_key("rex.png");
        assert!(a.starts_with("reports/"));
        assert!(a.ends_with(".png"));
        assert_ne!(a, b);

        assert!(storage_key("archive.tar.gz").ends_with(".gz"));
    }

    #[test]
    fn new_report_serializes_type_and_status_columns() {
        let report = NewReport {
            kind: ReportKind::Stray,
            pet_name: None,
            species: "Cat".into(),
            description: "grey tabby".into(),
            location: "Riverside Park".into(),
            last_seen: NaiveDate::from_ymd_opt(2026, 8, 1).expect("date"),
            contact: "555-0101".into(),
            image_url: None,
            status: ReportStatus::Open,
        };
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json["type"], "stray");
        assert_eq!(json["status"], "open");
        assert_eq!(json["last_seen"], "2026-08-01");
        assert_eq!(json["pet_name"], serde_json::Value::Null);
    }
}
