//! Contact form commands.

use vetcare_site::config::SiteConfig;
use vetcare_site::contact::{
    AppointmentRequest, ConsultationRequest, EmergencyRequest, SubmissionReceipt,
    ValidationErrors, submit_appointment, submit_consultation, submit_emergency,
};
use vetcare_site::notify::Notification;

/// Submit an appointment request.
#[allow(clippy::too_many_arguments)]
pub fn appointment(
    name: String,
    email: String,
    phone: String,
    pet: String,
    service: Option<String>,
    date: String,
    notes: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = AppointmentRequest {
        owner_name: name,
        email,
        phone,
        pet_name: pet,
        service,
        date,
        notes,
    };

    let today = chrono::Local::now().date_naive();
    report(submit_appointment(&request, today))
}

/// Submit a consultation request.
pub fn consultation(
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = ConsultationRequest {
        owner_name: name,
        email,
        phone,
        message,
    };

    report(submit_consultation(&request))
}

/// Submit an emergency report.
pub fn emergency(
    config: &SiteConfig,
    name: String,
    phone: String,
    pet: String,
    description: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = EmergencyRequest {
        owner_name: name,
        phone,
        pet_name: pet,
        description,
    };

    report(submit_emergency(&request, &config.emergency_phone))
}

/// Print the receipt, or every field error.
fn report(
    result: Result<SubmissionReceipt, ValidationErrors>,
) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(receipt) => {
            println!("{}", receipt.title);
            println!("{}", receipt.message);
            Ok(())
        }
        Err(errors) => {
            for error in errors.fields() {
                println!(
                    "{}",
                    Notification::error(format!("{}: {}", error.field, error.message))
                );
            }
            Err(errors.into())
        }
    }
}
