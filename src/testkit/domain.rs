//! Canonical customer payloads used across tests.

use serde_json::Value;

use crate::domain::customer::CustomerInput;

/// A month-to-month fiber customer, 12 months in, paying 70.0 per month.
pub fn sample_customer() -> CustomerInput {
    CustomerInput {
        gender: "Female".to_string(),
        senior_citizen: 0,
        partner: "Yes".to_string(),
        dependents: "No".to_string(),
        tenure: 12,
        phone_service: "Yes".to_string(),
        multiple_lines: "No".to_string(),
        internet_service: "Fiber optic".to_string(),
        online_security: "No".to_string(),
        online_backup: "Yes".to_string(),
        device_protection: "No".to_string(),
        tech_support: "No".to_string(),
        streaming_tv: "Yes".to_string(),
        streaming_movies: "No".to_string(),
        contract: "Month-to-month".to_string(),
        paperless_billing: "Yes".to_string(),
        payment_method: "Electronic check".to_string(),
        monthly_charges: 70.0,
    }
}

/// [`sample_customer`] as a JSON request body.
pub fn sample_payload() -> Value {
    serde_json::to_value(sample_customer()).unwrap_or(Value::Null)
}

/// [`sample_payload`] with one field removed.
pub fn payload_without(field: &str) -> Value {
    let mut payload = sample_payload();
    if let Some(object) = payload.as_object_mut() {
        object.remove(field);
    }
    payload
}
