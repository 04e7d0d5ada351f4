//! Field validators shared by request models and configuration.

use regex::Regex;
use validator::ValidationError;

use crate::utils::cpf::is_valid_cpf;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref NAME_REGEX: Regex = Regex::new(r"^[a-zA-ZÀ-ÿ\s]+$").unwrap();
    static ref HASH_REGEX: Regex = Regex::new(r"^[a-fA-F0-9]{64}$").unwrap();
}

const MIN_NAME_LEN: usize = 2;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Names must have at least two characters and contain only letters
/// (Latin-1 accented letters included) and whitespace.
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.chars().count() >= MIN_NAME_LEN && NAME_REGEX.is_match(trimmed)
}

/// A SHA-256 style hex digest: exactly 64 hexadecimal characters.
pub fn is_valid_hash(hash: &str) -> bool {
    HASH_REGEX.is_match(hash)
}

/// Trims `input` and removes angle brackets.
pub fn sanitize_input(input: &str) -> String {
    input.trim().replace(['<', '>'], "")
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        let mut err = ValidationError::new("name_format");
        err.message = Some("Name must have at least 2 letters and no digits or symbols".into());
        Err(err)
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        let mut err = ValidationError::new("email_format");
        err.message = Some("Invalid email address".into());
        Err(err)
    }
}

pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if is_valid_cpf(cpf) {
        Ok(())
    } else {
        let mut err = ValidationError::new("cpf_invalid");
        err.message = Some("Invalid CPF".into());
        Err(err)
    }
}
