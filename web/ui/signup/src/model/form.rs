use super::field::{Field, Gender, MaskedField};

/// Current values of the sign-up inputs.
///
/// Updates go through [`FormData::with_field`], which hands back a new value so
/// the owning `Mutable` is only ever replaced whole.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: Option<Gender>,
}

impl FormData {
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Password => next.password = value,
            Field::ConfirmPassword => next.confirm_password = value,
            Field::Gender => next.gender = value.parse().ok(),
        }
        next
    }

    /// Text of a field as the inputs display it. An unset gender reads as empty.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Gender => self.gender.map(Gender::as_str).unwrap_or(""),
        }
    }
}

/// One validity flag per field. Everything starts valid so no error shows
/// before the first submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validity {
    pub name: bool,
    pub email: bool,
    pub password: bool,
    pub confirm_password: bool,
    pub gender: bool,
}

impl Default for Validity {
    fn default() -> Self {
        Self::all(true)
    }
}

impl Validity {
    pub fn all(valid: bool) -> Self {
        Self {
            name: valid,
            email: valid,
            password: valid,
            confirm_password: valid,
            gender: valid,
        }
    }

    pub fn is_valid(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
            Field::Gender => self.gender,
        }
    }

    pub fn with(mut self, field: Field, valid: bool) -> Self {
        match field {
            Field::Name => self.name = valid,
            Field::Email => self.email = valid,
            Field::Password => self.password = valid,
            Field::ConfirmPassword => self.confirm_password = valid,
            Field::Gender => self.gender = valid,
        }
        self
    }

    pub fn all_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.is_valid(*field))
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|field| !self.is_valid(*field))
    }
}

/// Whether each masked input currently shows plain text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub password: bool,
    pub confirm_password: bool,
}

impl Visibility {
    pub fn is_shown(&self, field: MaskedField) -> bool {
        match field {
            MaskedField::Password => self.password,
            MaskedField::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn toggled(mut self, field: MaskedField) -> Self {
        match field {
            MaskedField::Password => self.password = !self.password,
            MaskedField::ConfirmPassword => self.confirm_password = !self.confirm_password,
        }
        self
    }
}
