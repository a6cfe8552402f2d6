//! Personal details collected by the order form, with field-scoped
//! validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Who ordered, and where the printouts go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactDetails {
    #[validate(length(min = 3, message = "full name is required"))]
    pub full_name: String,

    #[validate(email(message = "please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 10, message = "please enter a valid phone number"))]
    pub phone: String,

    /// E.g. "Building A, Room 101".
    #[validate(length(min = 1, message = "delivery location is required"))]
    pub delivery_location: String,

    /// Special instructions for the operator.
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validation failure for the details form. Reported field by field so the
/// form can annotate each input; never advances the workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("order details failed validation ({} field(s))", .fields.len())]
pub struct DetailsValidationError {
    pub fields: Vec<FieldError>,
}

impl ContactDetails {
    /// Run the form validation rules, collecting every failing field.
    pub fn validated(self) -> Result<Self, DetailsValidationError> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => Err(errors.into()),
        }
    }
}

impl From<validator::ValidationErrors> for DetailsValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        // field_errors() iterates a map; sort for a stable report order
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_details() -> ContactDetails {
        ContactDetails {
            full_name: "Asha Pillai".to_string(),
            email: "asha.pillai@sakec.ac.in".to_string(),
            phone: "9876543210".to_string(),
            delivery_location: "Building A, Room 101".to_string(),
            notes: None,
        }
    }

    #[test]
    fn valid_details_pass() {
        assert!(valid_details().validated().is_ok());
    }

    #[test]
    fn each_bad_field_is_reported() {
        let details = ContactDetails {
            full_name: "Al".to_string(),
            email: "not-an-email".to_string(),
            phone: "12345".to_string(),
            delivery_location: String::new(),
            notes: None,
        };

        let err = details.validated().unwrap_err();
        let fields: Vec<&str> = err.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["delivery_location", "email", "full_name", "phone"]
        );
    }

    #[test]
    fn single_bad_field_leaves_the_rest_untouched() {
        let mut details = valid_details();
        details.phone = "123".to_string();

        let err = details.validated().unwrap_err();
        assert_eq!(err.fields.len(), 1);
        assert_eq!(err.fields[0].field, "phone");
        assert_eq!(err.fields[0].message, "please enter a valid phone number");
    }
}
