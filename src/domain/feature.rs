//! Model-facing feature row.
//!
//! The model was trained on a table that carries a `TotalCharges` column, so
//! the row adds it on top of the customer's own attributes.

use super::customer::CustomerInput;

/// Categorical columns, in training order.
pub const CATEGORICAL_COLUMNS: [&str; 15] = [
    "gender",
    "Partner",
    "Dependents",
    "PhoneService",
    "MultipleLines",
    "InternetService",
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "StreamingTV",
    "StreamingMovies",
    "Contract",
    "PaperlessBilling",
    "PaymentMethod",
];

/// Numeric columns, in training order.
pub const NUMERIC_COLUMNS: [&str; 4] = ["SeniorCitizen", "tenure", "MonthlyCharges", "TotalCharges"];

/// A single row handed to the model: the customer plus `TotalCharges`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    customer: CustomerInput,
    total_charges: f64,
}

impl FeatureRow {
    /// `TotalCharges` is `MonthlyCharges * tenure`, unrounded.
    #[must_use]
    pub fn new(customer: CustomerInput) -> Self {
        let total_charges = customer.monthly_charges * customer.tenure as f64;
        Self {
            customer,
            total_charges,
        }
    }

    #[must_use]
    pub const fn customer(&self) -> &CustomerInput {
        &self.customer
    }

    #[must_use]
    pub const fn total_charges(&self) -> f64 {
        self.total_charges
    }

    /// Value of a categorical column by its training name.
    #[must_use]
    pub fn categorical(&self, column: &str) -> Option<&str> {
        let c = &self.customer;
        let value = match column {
            "gender" => &c.gender,
            "Partner" => &c.partner,
            "Dependents" => &c.dependents,
            "PhoneService" => &c.phone_service,
            "MultipleLines" => &c.multiple_lines,
            "InternetService" => &c.internet_service,
            "OnlineSecurity" => &c.online_security,
            "OnlineBackup" => &c.online_backup,
            "DeviceProtection" => &c.device_protection,
            "TechSupport" => &c.tech_support,
            "StreamingTV" => &c.streaming_tv,
            "StreamingMovies" => &c.streaming_movies,
            "Contract" => &c.contract,
            "PaperlessBilling" => &c.paperless_billing,
            "PaymentMethod" => &c.payment_method,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Value of a numeric column by its training name.
    #[must_use]
    pub fn numeric(&self, column: &str) -> Option<f64> {
        let c = &self.customer;
        match column {
            "SeniorCitizen" => Some(c.senior_citizen as f64),
            "tenure" => Some(c.tenure as f64),
            "MonthlyCharges" => Some(c.monthly_charges),
            "TotalCharges" => Some(self.total_charges),
            _ => None,
        }
    }
}

impl From<CustomerInput> for FeatureRow {
    fn from(customer: CustomerInput) -> Self {
        Self::new(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::sample_customer;

    #[test]
    fn total_charges_is_exact_product() {
        for (tenure, monthly) in [(12, 70.0), (0, 99.65), (72, 19.95), (1, 0.1), (37, 56.15)] {
            let mut customer = sample_customer();
            customer.tenure = tenure;
            customer.monthly_charges = monthly;

            let row = FeatureRow::new(customer);
            assert_eq!(row.total_charges(), monthly * tenure as f64);
        }
    }

    #[test]
    fn total_charges_is_not_rounded() {
        let mut customer = sample_customer();
        customer.tenure = 3;
        customer.monthly_charges = 0.1;

        let row = FeatureRow::new(customer);
        // 0.1 * 3.0 is not representable as 0.3 in binary.
        assert_eq!(row.total_charges(), 0.30000000000000004);
    }

    #[test]
    fn every_declared_column_resolves() {
        let row = FeatureRow::new(sample_customer());
        for column in CATEGORICAL_COLUMNS {
            assert!(row.categorical(column).is_some(), "{column}");
        }
        for column in NUMERIC_COLUMNS {
            assert!(row.numeric(column).is_some(), "{column}");
        }
    }

    #[test]
    fn lookups_do_not_cross_categories() {
        let row = FeatureRow::new(sample_customer());
        assert_eq!(row.categorical("tenure"), None);
        assert_eq!(row.numeric("Contract"), None);
        assert_eq!(row.numeric("customerID"), None);
    }

    #[test]
    fn numeric_lookup_matches_customer() {
        let row = FeatureRow::new(sample_customer());
        assert_eq!(row.numeric("tenure"), Some(12.0));
        assert_eq!(row.numeric("MonthlyCharges"), Some(70.0));
        assert_eq!(row.numeric("TotalCharges"), Some(840.0));
        assert_eq!(row.categorical("Contract"), Some("Month-to-month"));
    }
}
