use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Field;

/// Id of the `<script type="application/json">` element a host page may use to
/// override the defaults.
pub const CONFIG_ELEMENT_ID: &str = "signup-config";

/// Replaced with `min_password_length` when a message is shown.
pub const MIN_LENGTH_PLACEHOLDER: &str = "{min}";

pub static DEFAULT_CONFIG: Lazy<SignupConfig> = Lazy::new(SignupConfig::default);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldMessages {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: String,
}

impl Default for FieldMessages {
    fn default() -> Self {
        Self {
            name: "Name is required".to_string(),
            email: "Email is not valid".to_string(),
            password: "Password must be at least {min} characters".to_string(),
            confirm_password: "Passwords do not match".to_string(),
            gender: "Please select your gender".to_string(),
        }
    }
}

impl FieldMessages {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Gender => &self.gender,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupConfig {
    pub title: String,
    pub min_password_length: usize,
    pub messages: FieldMessages,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            title: "Sign up".to_string(),
            min_password_length: 6,
            messages: FieldMessages::default(),
        }
    }
}

impl SignupConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Message shown under `field`, with the configured minimum filled in.
    pub fn message(&self, field: Field) -> String {
        self.messages
            .get(field)
            .replace(MIN_LENGTH_PLACEHOLDER, &self.min_password_length.to_string())
    }

    /// Reads the config element from the current document, falling back to
    /// [`DEFAULT_CONFIG`] when it is absent or malformed.
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match text {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                DEFAULT_CONFIG.clone()
            }),
            None => {
                log::debug!("No #{} element, using default config", CONFIG_ELEMENT_ID);
                DEFAULT_CONFIG.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SignupConfig::from_json(r#"{"minPasswordLength": 8, "messages": {"email": "Bad email"}}"#)
            .unwrap();

        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.messages.get(Field::Email), "Bad email");
        assert_eq!(config.messages.get(Field::Name), "Name is required");
        assert_eq!(config.title, "Sign up");
    }

    #[test]
    fn password_message_follows_minimum_length() {
        assert_eq!(
            SignupConfig::default().message(Field::Password),
            "Password must be at least 6 characters"
        );

        let config = SignupConfig::from_json(r#"{"minPasswordLength": 10}"#).unwrap();
        assert_eq!(config.message(Field::Password), "Password must be at least 10 characters");

        let custom = SignupConfig::from_json(
            r#"{"minPasswordLength": 12, "messages": {"password": "Use {min}+ characters"}}"#,
        )
        .unwrap();
        assert_eq!(custom.message(Field::Password), "Use 12+ characters");
        assert_eq!(custom.message(Field::Email), "Email is not valid");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SignupConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }
}
