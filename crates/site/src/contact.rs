//! Contact forms: field validation and simulated submission.
//!
//! The contact page offers three tabbed forms: appointment booking, a
//! general consultation, and an emergency report. Validation is reported
//! per field so the front end can attach each message to its input.
//! Submission is simulated (there is no backend); a successful submission
//! yields a per-kind confirmation receipt.

use chrono::NaiveDate;
use vetcare_core::{Email, Phone};

/// The three contact form tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Appointment,
    Consultation,
    Emergency,
}

impl FormKind {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Appointment => "Appointment",
            Self::Consultation => "Consultation",
            Self::Emergency => "Emergency",
        }
    }
}

/// A validation failure attached to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name the message belongs to.
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

/// All validation failures for a form submission.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// The individual field errors.
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }
}

/// Minimum length for free-text messages.
const MIN_MESSAGE_LENGTH: usize = 10;

// =============================================================================
// Field Validators
// =============================================================================

fn check_required(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError {
            field,
            message: "This field is required".to_owned(),
        });
        return false;
    }
    true
}

fn check_email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if !value.trim().is_empty() && Email::parse(value.trim()).is_err() {
        errors.push(FieldError {
            field,
            message: "Please enter a valid email address".to_owned(),
        });
    }
}

fn check_phone(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if !value.trim().is_empty() && Phone::parse(value.trim()).is_err() {
        errors.push(FieldError {
            field,
            message: "Please enter a valid phone number".to_owned(),
        });
    }
}

fn check_date(errors: &mut Vec<FieldError>, field: &'static str, value: &str, today: NaiveDate) {
    if value.trim().is_empty() {
        return;
    }
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) if date < today => errors.push(FieldError {
            field,
            message: "The date cannot be before today".to_owned(),
        }),
        Ok(_) => {}
        Err(_) => errors.push(FieldError {
            field,
            message: "Please enter a valid date (YYYY-MM-DD)".to_owned(),
        }),
    }
}

fn check_message(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() < MIN_MESSAGE_LENGTH {
        errors.push(FieldError {
            field,
            message: format!("The message must be at least {MIN_MESSAGE_LENGTH} characters"),
        });
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Appointment booking form.
#[derive(Debug, Clone, Default)]
pub struct AppointmentRequest {
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub pet_name: String,
    /// Requested service, free-form.
    pub service: Option<String>,
    /// Requested date, `YYYY-MM-DD`.
    pub date: String,
    pub notes: Option<String>,
}

impl AppointmentRequest {
    /// Validate every field, collecting all failures.
    ///
    /// `today` is supplied by the caller so the not-in-the-past rule stays
    /// deterministic under test.
    ///
    /// # Errors
    ///
    /// Returns every failed field with its message.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        check_required(&mut errors, "owner_name", &self.owner_name);
        if check_required(&mut errors, "email", &self.email) {
            check_email(&mut errors, "email", &self.email);
        }
        if check_required(&mut errors, "phone", &self.phone) {
            check_phone(&mut errors, "phone", &self.phone);
        }
        check_required(&mut errors, "pet_name", &self.pet_name);
        if check_required(&mut errors, "date", &self.date) {
            check_date(&mut errors, "date", &self.date, today);
        }
        if let Some(notes) = &self.notes {
            check_message(&mut errors, "notes", notes);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// General consultation form.
#[derive(Debug, Clone, Default)]
pub struct ConsultationRequest {
    pub owner_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ConsultationRequest {
    /// Validate every field, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns every failed field with its message.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        check_required(&mut errors, "owner_name", &self.owner_name);
        if check_required(&mut errors, "email", &self.email) {
            check_email(&mut errors, "email", &self.email);
        }
        if let Some(phone) = &self.phone {
            check_phone(&mut errors, "phone", phone);
        }
        if check_required(&mut errors, "message", &self.message) {
            check_message(&mut errors, "message", &self.message);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// Emergency report form.
#[derive(Debug, Clone, Default)]
pub struct EmergencyRequest {
    pub owner_name: String,
    pub phone: String,
    pub pet_name: String,
    pub description: String,
}

impl EmergencyRequest {
    /// Validate every field, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns every failed field with its message.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        check_required(&mut errors, "owner_name", &self.owner_name);
        if check_required(&mut errors, "phone", &self.phone) {
            check_phone(&mut errors, "phone", &self.phone);
        }
        check_required(&mut errors, "pet_name", &self.pet_name);
        if check_required(&mut errors, "description", &self.description) {
            check_message(&mut errors, "description", &self.description);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

// =============================================================================
// Simulated Submission
// =============================================================================

/// Confirmation shown after a successful (simulated) submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub kind: FormKind,
    pub title: String,
    pub message: String,
}

/// Validate and submit an appointment request.
///
/// # Errors
///
/// Returns the field errors if validation fails.
pub fn submit_appointment(
    request: &AppointmentRequest,
    today: NaiveDate,
) -> Result<SubmissionReceipt, ValidationErrors> {
    request.validate(today)?;
    tracing::info!(owner = %request.owner_name, pet = %request.pet_name, date = %request.date,
        "appointment request submitted");
    Ok(SubmissionReceipt {
        kind: FormKind::Appointment,
        title: "Appointment Requested!".to_owned(),
        message: "Your appointment request has been received. We will contact \
                  you shortly to confirm the date and time."
            .to_owned(),
    })
}

/// Validate and submit a consultation request.
///
/// # Errors
///
/// Returns the field errors if validation fails.
pub fn submit_consultation(
    request: &ConsultationRequest,
) -> Result<SubmissionReceipt, ValidationErrors> {
    request.validate()?;
    tracing::info!(owner = %request.owner_name, "consultation request submitted");
    Ok(SubmissionReceipt {
        kind: FormKind::Consultation,
        title: "Inquiry Sent!".to_owned(),
        message: "We have received your inquiry. We will reply within 24 hours.".to_owned(),
    })
}

/// Validate and submit an emergency report.
///
/// The receipt repeats the clinic's emergency phone number so the owner
/// can call while waiting.
///
/// # Errors
///
/// Returns the field errors if validation fails.
pub fn submit_emergency(
    request: &EmergencyRequest,
    emergency_phone: &Phone,
) -> Result<SubmissionReceipt, ValidationErrors> {
    request.validate()?;
    tracing::info!(owner = %request.owner_name, pet = %request.pet_name,
        "emergency report submitted");
    Ok(SubmissionReceipt {
        kind: FormKind::Emergency,
        title: "Report Received!".to_owned(),
        message: format!(
            "We have received your emergency report. If you need immediate \
             attention, please call {emergency_phone}."
        ),
    })
}
