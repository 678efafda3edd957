use std::fmt;
use std::sync::Arc;

use futures_signals::signal::{Mutable, Signal};

use crate::config::SignupConfig;
use crate::error::FieldValidationError;
use crate::model::{Field, FormData, Gender, MaskedField, Validity, Visibility};
use crate::notify::Notifier;
use crate::validation;

pub const FAILURE_MESSAGE: &str = "Registration failed";

/// Account details accepted by a successful submit. Holds no credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub gender: Gender,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registration Successful")?;
        writeln!(f, "Your account information:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        write!(f, "Gender: {}", self.gender)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered(Registration),
    Rejected(Vec<FieldValidationError>),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Registered(_))
    }

    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Registered(registration) => registration.to_string(),
            SubmitOutcome::Rejected(_) => FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Owns the sign-up form state for the lifetime of the page.
pub struct SignupState {
    pub config: Arc<SignupConfig>,
    pub form: Mutable<FormData>,
    pub validity: Mutable<Validity>,
    pub visibility: Mutable<Visibility>,
    notifier: Box<dyn Notifier>,
}

impl SignupState {
    pub fn new(config: Arc<SignupConfig>, notifier: impl Notifier + 'static) -> Arc<Self> {
        Arc::new(Self {
            config,
            form: Mutable::new(FormData::default()),
            validity: Mutable::new(Validity::default()),
            visibility: Mutable::new(Visibility::default()),
            notifier: Box::new(notifier),
        })
    }

    /// Stores a new value and clears the field's error until the next submit,
    /// whether or not the value would pass.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if field.is_secret() {
            log::debug!("Field {} edited ({} chars)", field, value.chars().count());
        } else {
            log::debug!("Field {} set to {:?}", field, value);
        }
        self.form.replace_with(|form| form.with_field(field, value));
        self.validity.set_neq(self.validity.get().with(field, true));
    }

    /// Recomputes every flag from the current values, replacing the previous
    /// set wholesale.
    pub fn validate_all(&self) -> bool {
        let validity = validation::validate(&self.form.lock_ref(), &self.config);
        self.validity.set(validity);
        validity.all_valid()
    }

    pub fn errors(&self) -> Vec<FieldValidationError> {
        validation::errors(&self.validity.get(), &self.config)
    }

    pub fn error_message(&self, field: Field) -> String {
        self.config.message(field)
    }

    pub fn submit(&self) -> SubmitOutcome {
        let valid = self.validate_all();
        let form = self.form.get_cloned();

        let outcome = match form.gender {
            Some(gender) if valid => SubmitOutcome::Registered(Registration {
                name: form.name,
                email: form.email,
                gender,
            }),
            _ => SubmitOutcome::Rejected(self.errors()),
        };

        match &outcome {
            SubmitOutcome::Registered(registration) => {
                log::info!("Registration accepted for {}", registration.email);
            }
            SubmitOutcome::Rejected(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                log::info!("Registration rejected, invalid fields: {:?}", fields);
            }
        }

        self.notifier.notify(&outcome.message());
        outcome
    }

    /// Flips plain-text display of a masked field. Does nothing while the
    /// field shows an error, matching the hidden toggle in the view.
    pub fn toggle_password_visibility(&self, field: MaskedField) -> bool {
        if !self.validity.get().is_valid(field.into()) {
            log::debug!("Ignoring visibility toggle on invalid {}", Field::from(field));
            return false;
        }
        self.visibility.replace_with(|visibility| visibility.toggled(field));
        true
    }

    pub fn is_valid_signal(&self, field: Field) -> impl Signal<Item = bool> {
        self.validity.signal_ref(move |validity| validity.is_valid(field))
    }

    pub fn is_shown_signal(&self, field: MaskedField) -> impl Signal<Item = bool> {
        self.visibility.signal_ref(move |visibility| visibility.is_shown(field))
    }

    pub fn value_signal(&self, field: Field) -> impl Signal<Item = String> {
        self.form.signal_ref(move |form| form.value(field).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Notifier for Recorder {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    fn state() -> (Arc<SignupState>, Recorder) {
        let recorder = Recorder::default();
        (SignupState::new(Arc::new(SignupConfig::default()), recorder.clone()), recorder)
    }

    fn fill(state: &SignupState) {
        state.set_field(Field::Name, "Ann");
        state.set_field(Field::Email, "a@b.co");
        state.set_field(Field::Password, "secret1");
        state.set_field(Field::ConfirmPassword, "secret1");
        state.set_field(Field::Gender, "female");
    }

    #[test]
    fn starts_empty_and_valid() {
        let (state, _) = state();
        assert_eq!(state.form.get_cloned(), FormData::default());
        assert!(state.validity.get().all_valid());
        assert_eq!(state.visibility.get(), Visibility::default());
    }

    #[test]
    fn empty_form_fails_every_field() {
        let (state, _) = state();
        assert!(!state.validate_all());
        assert_eq!(state.validity.get(), Validity::all(false));
        assert_eq!(state.errors().len(), 5);
    }

    #[test]
    fn edit_clears_error_before_revalidation() {
        let (state, _) = state();
        state.validate_all();
        state.set_field(Field::Email, "still-not-an-email");

        assert!(state.validity.get().email);
        assert!(!state.validity.get().name);
    }

    #[test]
    fn successful_submit_never_echoes_the_password() {
        let (state, recorder) = state();
        fill(&state);

        let outcome = state.submit();

        assert!(outcome.is_success());
        let messages = recorder.0.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Name: Ann"));
        assert!(messages[0].contains("Email: a@b.co"));
        assert!(messages[0].contains("Gender: female"));
        assert!(!messages[0].contains("secret1"));
    }

    #[test]
    fn failed_submit_sends_generic_notice() {
        let (state, recorder) = state();
        fill(&state);
        state.set_field(Field::ConfirmPassword, "secret2");

        let outcome = state.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![FieldValidationError {
                field: Field::ConfirmPassword,
                message: "Passwords do not match".to_string(),
            }])
        );
        assert_eq!(*recorder.0.borrow(), vec![FAILURE_MESSAGE.to_string()]);
    }

    #[test]
    fn toggle_is_ignored_while_field_is_invalid() {
        let (state, _) = state();
        assert!(state.toggle_password_visibility(MaskedField::Password));
        assert!(state.visibility.get().password);

        state.validate_all();
        assert!(!state.toggle_password_visibility(MaskedField::Password));
        assert!(state.visibility.get().password);
        assert!(!state.visibility.get().confirm_password);
    }
}
