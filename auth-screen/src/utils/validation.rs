//! Validation utilities for user input

use crate::app::{Credentials, ScreenMode};
use crate::core::error::ValidationError;

/// Special characters accepted in passwords. The whole password is
/// restricted to ASCII alphanumerics plus this set.
const PASSWORD_SYMBOLS: &str = "@$!%*?&#";

/// Validate email format: `local-part@domain.tld` with letters, digits and
/// `._%+-` in the local part, and a TLD of at least two letters.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err(ValidationError::InvalidEmailFormat),
    };

    if domain.contains('@') {
        return Err(ValidationError::InvalidEmailFormat);
    }

    if local.is_empty() || !local.chars().all(is_local_char) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    let (host, tld) = match domain.rsplit_once('.') {
        Some(parts) => parts,
        None => return Err(ValidationError::InvalidEmailFormat),
    };

    if host.is_empty() || !host.chars().all(is_domain_char) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(())
}

/// Validate password strength: at least 8 characters with one uppercase
/// letter, one lowercase letter, one digit and one symbol from
/// [`PASSWORD_SYMBOLS`].
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    // Every character must come from the allowed alphabet; spaces and
    // anything outside it fail the strength rule.
    let alphabet_ok = password.chars().all(is_password_char);

    if password.len() < 8
        || !has_uppercase
        || !has_lowercase
        || !has_digit
        || !has_symbol
        || !alphabet_ok
    {
        return Err(ValidationError::WeakPassword);
    }

    Ok(())
}

/// Validate the collected form fields for the given mode, short-circuiting
/// on the first failure.
///
/// Order: empty email, email format, empty password, password strength,
/// then (signup only) confirm-password match. Terms acceptance is collected
/// in state but not validated here.
pub fn validate_credentials(
    credentials: &Credentials,
    mode: ScreenMode,
) -> Result<(), ValidationError> {
    validate_email(&credentials.email)?;
    validate_password(&credentials.password)?;

    if mode == ScreenMode::SignUp && credentials.password != credentials.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}

fn is_password_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c)
}
