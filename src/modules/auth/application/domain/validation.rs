use email_address::EmailAddress;

use super::token::TOKEN_LENGTH;
use crate::shared::validation::ValidationErrors;

pub const NAME_MAX_BYTES: usize = 500;
pub const PASSWORD_MIN_BYTES: usize = 8;
// bcrypt silently truncates beyond this
pub const PASSWORD_MAX_BYTES: usize = 72;

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_name(errors: &mut ValidationErrors, name: &str) {
    if name.trim().is_empty() {
        errors.add("name", "NAME_REQUIRED", "must be provided");
    } else if name.len() > NAME_MAX_BYTES {
        errors.add(
            "name",
            "NAME_TOO_LONG",
            format!("must not be more than {NAME_MAX_BYTES} bytes long"),
        );
    }
}

pub fn validate_email(errors: &mut ValidationErrors, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.add("email", "INVALID_EMAIL", "must be provided");
    } else if !EmailAddress::is_valid(email) {
        errors.add("email", "INVALID_EMAIL", "must be a valid email address");
    }
}

pub fn validate_password_plaintext(errors: &mut ValidationErrors, password: &str) {
    if password.is_empty() {
        errors.add("password", "PASSWORD_REQUIRED", "must be provided");
    } else if password.len() < PASSWORD_MIN_BYTES {
        errors.add(
            "password",
            "PASSWORD_TOO_SHORT",
            format!("must be at least {PASSWORD_MIN_BYTES} bytes long"),
        );
    } else if password.len() > PASSWORD_MAX_BYTES {
        errors.add(
            "password",
            "PASSWORD_TOO_LONG",
            format!("must not be more than {PASSWORD_MAX_BYTES} bytes long"),
        );
    }
}

pub fn validate_token_plaintext(errors: &mut ValidationErrors, token: &str) {
    if token.is_empty() {
        errors.add("token", "TOKEN_REQUIRED", "must be provided");
    } else if token.len() != TOKEN_LENGTH {
        errors.add(
            "token",
            "INVALID_TOKEN_FORMAT",
            format!("must be {TOKEN_LENGTH} bytes long"),
        );
    }
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    validate_name(&mut errors, name);
    validate_email(&mut errors, email);
    validate_password_plaintext(&mut errors, password);
    errors.into_result()
}

/// Login only checks shape; password policy is not revealed to unauthenticated callers.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    validate_email(&mut errors, email);
    errors.check(
        !password.is_empty(),
        "password",
        "PASSWORD_REQUIRED",
        "must be provided",
    );
    errors.into_result()
}

pub fn validate_activation_token(token: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    validate_token_plaintext(&mut errors, token);
    errors.into_result()
}
