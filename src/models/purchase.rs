use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::cpf::strip_cpf;
use crate::utils::validation::{sanitize_input, validate_cpf, validate_email, validate_name};

/// Ticket purchase submitted by the storefront form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PurchaseRequest {
    #[serde(alias = "nome")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_cpf"))]
    pub cpf: Option<String>,
}

impl PurchaseRequest {
    /// An empty CPF field means the buyer chose not to provide one.
    pub fn without_blank_cpf(mut self) -> Self {
        if self.cpf.as_deref().is_some_and(|cpf| cpf.trim().is_empty()) {
            self.cpf = None;
        }
        self
    }
}

/// Guest registration body understood by the ticketing API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestRegistration {
    #[serde(rename = "eventoId")]
    pub event_id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
}

impl GuestRegistration {
    /// Builds the upstream body: free text sanitized, CPF sent digits-only and
    /// omitted when blank.
    pub fn new(event_id: impl Into<String>, request: &PurchaseRequest) -> Self {
        Self {
            event_id: event_id.into(),
            name: sanitize_input(&request.name),
            email: sanitize_input(&request.email),
            cpf: request
                .cpf
                .as_deref()
                .map(strip_cpf)
                .filter(|cpf| !cpf.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(cpf: Option<&str>) -> PurchaseRequest {
        PurchaseRequest {
            name: " João Silva ".into(),
            email: "joao@x.com".into(),
            cpf: cpf.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_purchase() {
        assert!(request(Some("529.982.247-25")).validate().is_ok());
        assert!(request(None).validate().is_ok());
    }

    #[test]
    fn test_blank_cpf_is_absent() {
        let purchase = request(Some("  ")).without_blank_cpf();
        assert_eq!(purchase.cpf, None);
        assert!(purchase.validate().is_ok());
    }

    #[test]
    fn test_invalid_cpf_rejected() {
        let errors = request(Some("111.111.111-11")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cpf"));
    }

    #[test]
    fn test_invalid_name_and_email_rejected() {
        let bad = PurchaseRequest {
            name: "J".into(),
            email: "joao".into(),
            cpf: None,
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_registration_body() {
        let body = GuestRegistration::new("1", &request(Some("529.982.247-25")));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "eventoId": "1",
                "nome": "João Silva",
                "email": "joao@x.com",
                "cpf": "52998224725"
            })
        );
    }

    #[test]
    fn test_registration_omits_missing_cpf() {
        let body = GuestRegistration::new("1", &request(None));
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("cpf").is_none());

        let blank = GuestRegistration::new("1", &request(Some("")));
        assert_eq!(blank.cpf, None);
    }
}
