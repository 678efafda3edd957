mod gender_input;
mod password_input;
mod text_input;

pub use gender_input::GenderInput;
pub use password_input::PasswordInput;
pub use text_input::TextInput;

use std::sync::Arc;

use dominator::{html, Dom, clone};
use futures_signals::signal::{Signal, SignalExt};

use crate::model::Field;
use crate::state::SignupState;

pub(crate) fn error_icon() -> Dom {
    html!("span", {
        .class(["text-error"])
        .children(&mut [
            html!("i", {
                .class(["fa-solid", "fa-circle-info"])
            })
        ])
    })
}

/// Inline message under a field, present only while the field is invalid.
pub(crate) fn error_message(state: &Arc<SignupState>, field: Field) -> impl Signal<Item = Option<Dom>> {
    state.is_valid_signal(field).map(clone!(state => move |valid| {
        if valid {
            None
        } else {
            Some(html!("p", {
                .class(["text-xs", "text-error", "mt-1"])
                .text(&state.error_message(field))
            }))
        }
    }))
}
