use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_cpf, validate_email};

/// Guest check by e-mail and/or CPF. At least one of them must be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GuestVerificationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_email"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_cpf"))]
    pub cpf: Option<String>,
}

impl GuestVerificationRequest {
    /// Drops identifiers that are present but blank.
    pub fn without_blanks(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            email: keep(self.email),
            cpf: keep(self.cpf),
        }
    }

    pub fn has_identifier(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.email) || present(&self.cpf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_identifier() {
        assert!(!GuestVerificationRequest::default().has_identifier());
        let blank = GuestVerificationRequest {
            email: Some("  ".into()),
            cpf: None,
        };
        assert!(!blank.has_identifier());
        let email = GuestVerificationRequest {
            email: Some("joao@x.com".into()),
            cpf: None,
        };
        assert!(email.has_identifier());
    }

    #[test]
    fn test_validates_present_fields_only() {
        let cpf_only = GuestVerificationRequest {
            email: None,
            cpf: Some("529.982.247-25".into()),
        };
        assert!(cpf_only.validate().is_ok());

        let bad_email = GuestVerificationRequest {
            email: Some("joao".into()),
            cpf: None,
        };
        assert!(bad_email.validate().is_err());
    }
}
