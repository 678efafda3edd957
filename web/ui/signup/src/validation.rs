use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SignupConfig;
use crate::error::FieldValidationError;
use crate::model::{FormData, Validity};

// Non-whitespace as browsers define it: U+FEFF counts as space, U+0085 does not.
const NON_SPACE: &str = r"[^\t\n\x0B\f\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// Searched, not anchored: any `x@y.z` run of non-whitespace inside the value passes.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{NON_SPACE}+@{NON_SPACE}+\\.{NON_SPACE}+")).expect("email pattern compiles")
});

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Length in UTF-16 code units, the unit browser inputs report.
pub fn has_minimum_length(password: &str, min_length: usize) -> bool {
    password.encode_utf16().count() >= min_length
}

pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    !confirm_password.is_empty() && confirm_password == password
}

/// Checks every field against its rule. Each field is judged on its own; a
/// failure in one never skips the others.
pub fn validate(form: &FormData, config: &SignupConfig) -> Validity {
    Validity {
        name: is_valid_name(&form.name),
        email: is_valid_email(&form.email),
        password: has_minimum_length(&form.password, config.min_password_length),
        confirm_password: passwords_match(&form.password, &form.confirm_password),
        gender: form.gender.is_some(),
    }
}

pub fn errors(validity: &Validity, config: &SignupConfig) -> Vec<FieldValidationError> {
    validity
        .invalid_fields()
        .map(|field| FieldValidationError {
            field,
            message: config.message(field),
        })
        .collect()
}
