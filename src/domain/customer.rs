//! Customer account attributes accepted by the prediction endpoint.
//!
//! [`CustomerInput`] is built only through [`CustomerInput::from_json`], which
//! type-checks every field and collects all failures into a
//! [`ValidationErrors`]. Wire names follow the dataset the model was trained
//! on (`SeniorCitizen`, `MonthlyCharges`, ...), so they are kept verbatim.

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::{FieldError, FieldErrorKind, ValidationErrors};

/// One telecom customer's account and service mix.
///
/// All 18 fields are required. No range checks beyond type are applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerInput {
    pub gender: String,
    #[serde(rename = "SeniorCitizen")]
    pub senior_citizen: i64,
    #[serde(rename = "Partner")]
    pub partner: String,
    #[serde(rename = "Dependents")]
    pub dependents: String,
    pub tenure: i64,
    #[serde(rename = "PhoneService")]
    pub phone_service: String,
    #[serde(rename = "MultipleLines")]
    pub multiple_lines: String,
    #[serde(rename = "InternetService")]
    pub internet_service: String,
    #[serde(rename = "OnlineSecurity")]
    pub online_security: String,
    #[serde(rename = "OnlineBackup")]
    pub online_backup: String,
    #[serde(rename = "DeviceProtection")]
    pub device_protection: String,
    #[serde(rename = "TechSupport")]
    pub tech_support: String,
    #[serde(rename = "StreamingTV")]
    pub streaming_tv: String,
    #[serde(rename = "StreamingMovies")]
    pub streaming_movies: String,
    #[serde(rename = "Contract")]
    pub contract: String,
    #[serde(rename = "PaperlessBilling")]
    pub paperless_billing: String,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: String,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: f64,
}

impl CustomerInput {
    /// Parse and validate a raw request body.
    ///
    /// # Errors
    ///
    /// Returns a `json_invalid` error if the bytes are not JSON, otherwise
    /// whatever [`from_json`](Self::from_json) reports.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationErrors> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| ValidationErrors::body(FieldErrorKind::JsonInvalid))?;
        Self::from_json(&value)
    }

    /// Validate a decoded JSON value.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns every missing or mistyped field. If the value is not an object
    /// a single payload-level error is returned.
    pub fn from_json(value: &Value) -> Result<Self, ValidationErrors> {
        let Some(object) = value.as_object() else {
            return Err(ValidationErrors::body(FieldErrorKind::ObjectType));
        };

        let mut fields = Fields {
            object,
            errors: Vec::new(),
        };

        let input = Self {
            gender: fields.string("gender"),
            senior_citizen: fields.integer("SeniorCitizen"),
            partner: fields.string("Partner"),
            dependents: fields.string("Dependents"),
            tenure: fields.integer("tenure"),
            phone_service: fields.string("PhoneService"),
            multiple_lines: fields.string("MultipleLines"),
            internet_service: fields.string("InternetService"),
            online_security: fields.string("OnlineSecurity"),
            online_backup: fields.string("OnlineBackup"),
            device_protection: fields.string("DeviceProtection"),
            tech_support: fields.string("TechSupport"),
            streaming_tv: fields.string("StreamingTV"),
            streaming_movies: fields.string("StreamingMovies"),
            contract: fields.string("Contract"),
            paperless_billing: fields.string("PaperlessBilling"),
            payment_method: fields.string("PaymentMethod"),
            monthly_charges: fields.float("MonthlyCharges"),
        };

        match ValidationErrors::from_errors(fields.errors) {
            Some(errors) => Err(errors),
            None => Ok(input),
        }
    }
}

/// Field extractor that records failures and yields a placeholder so that
/// validation keeps going past the first bad field.
struct Fields<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    fn lookup(&mut self, name: &'static str) -> Option<&'a Value> {
        let object = self.object;
        match object.get(name) {
            Some(value) => Some(value),
            None => {
                self.errors
                    .push(FieldError::new(name, FieldErrorKind::Missing));
                None
            }
        }
    }

    fn string(&mut self, name: &'static str) -> String {
        let parsed = self.lookup(name).map(|v| v.as_str().map(str::to_owned));
        self.settle(name, parsed, FieldErrorKind::StringType)
    }

    fn integer(&mut self, name: &'static str) -> i64 {
        let parsed = self.lookup(name).map(as_integer);
        self.settle(name, parsed, FieldErrorKind::IntType)
    }

    fn float(&mut self, name: &'static str) -> f64 {
        let parsed = self.lookup(name).map(Value::as_f64);
        self.settle(name, parsed, FieldErrorKind::FloatType)
    }

    /// `None` means the field was missing and already recorded.
    fn settle<T: Default>(
        &mut self,
        name: &'static str,
        parsed: Option<Option<T>>,
        kind: FieldErrorKind,
    ) -> T {
        match parsed {
            Some(Some(value)) => value,
            Some(None) => {
                self.errors.push(FieldError::new(name, kind));
                T::default()
            }
            None => T::default(),
        }
    }
}

/// Accepts JSON integers and floats with no fractional part (`12.0`).
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
