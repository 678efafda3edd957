use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies one of the five inputs of the sign-up form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Gender,
}

impl Field {
    /// All fields in the order they appear on the form.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Gender,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Gender => "gender",
        }
    }

    /// Whether the field holds a credential and must stay out of logs and notifications.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two inputs that render masked and carry a visibility toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskedField {
    Password,
    ConfirmPassword,
}

impl From<MaskedField> for Field {
    fn from(field: MaskedField) -> Self {
        match field {
            MaskedField::Password => Field::Password,
            MaskedField::ConfirmPassword => Field::ConfirmPassword,
        }
    }
}

impl TryFrom<Field> for MaskedField {
    type Error = Field;

    fn try_from(field: Field) -> Result<Self, Self::Error> {
        match field {
            Field::Password => Ok(MaskedField::Password),
            Field::ConfirmPassword => Ok(MaskedField::ConfirmPassword),
            other => Err(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_form_keys() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["name", "email", "password", "confirmPassword", "gender"]);
        assert_eq!(
            serde_json::to_string(&Field::ConfirmPassword).unwrap(),
            "\"confirmPassword\""
        );
    }

    #[test]
    fn only_password_fields_are_masked() {
        assert_eq!(MaskedField::try_from(Field::Password), Ok(MaskedField::Password));
        assert_eq!(
            MaskedField::try_from(Field::ConfirmPassword),
            Ok(MaskedField::ConfirmPassword)
        );
        assert_eq!(MaskedField::try_from(Field::Email), Err(Field::Email));
    }

    #[test]
    fn only_credentials_are_secret() {
        let secret: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_secret()).collect();
        assert_eq!(secret, vec![Field::Password, Field::ConfirmPassword]);
    }

    #[test]
    fn gender_parses_lowercase_names_only() {
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert!("".parse::<Gender>().is_err());
        assert!("Male".parse::<Gender>().is_err());
    }
}
