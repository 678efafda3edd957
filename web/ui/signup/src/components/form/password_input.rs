use dominator::{html, Dom, clone, events, with_node};
use web_sys::HtmlInputElement;
use std::sync::Arc;
use futures_signals::signal::SignalExt;

use crate::model::{Field, MaskedField};
use crate::state::SignupState;
use super::{error_icon, error_message};

pub struct PasswordInput {
    pub state: Arc<SignupState>,
    pub field: MaskedField,
    pub label: &'static str,
    pub placeholder: &'static str,
}

impl PasswordInput {
    pub fn render(&self) -> Dom {
        let state = self.state.clone();
        let masked = self.field;
        let field = Field::from(masked);

        html!("div", {
            .class(["form-control", "w-full", "mt-2"])
            .children(&mut [
                html!("label", {
                    .class(["label"])
                    .attribute("for", field.as_str())
                    .children(&mut [
                        html!("span", {
                            .class(["label-text"])
                            .text(self.label)
                        })
                    ])
                }),
                html!("div", {
                    .class(["input", "input-bordered", "flex", "items-center", "gap-2", "w-full"])
                    .class_signal("input-error", state.is_valid_signal(field).map(|valid| !valid))
                    .children(&mut [
                        html!("i", {
                            .class(["fa-solid", "fa-lock"])
                        }),
                        html!("input" => HtmlInputElement, {
                            .class(["grow"])
                            .attribute("id", field.as_str())
                            .attribute_signal("type", state.is_shown_signal(masked).map(|shown| {
                                if shown { "text" } else { "password" }
                            }))
                            .attribute("autocomplete", "off")
                            .attribute("placeholder", self.placeholder)
                            .property_signal("value", state.value_signal(field))
                            .with_node!(input => {
                                .event(clone!(state => move |_: events::Input| {
                                    state.set_field(field, input.value());
                                }))
                            })
                        }),
                    ])
                    // The toggle is only offered while the field has no error
                    .child_signal(state.is_valid_signal(field).map(clone!(state => move |valid| {
                        Some(if valid {
                            Self::render_toggle(state.clone(), masked)
                        } else {
                            error_icon()
                        })
                    })))
                }),
            ])
            .child_signal(error_message(&state, field))
        })
    }

    fn render_toggle(state: Arc<SignupState>, masked: MaskedField) -> Dom {
        html!("button", {
            .class(["btn", "btn-ghost", "btn-xs"])
            .attribute("type", "button")
            .children(&mut [
                html!("i", {
                    .class(["fa-solid"])
                    .class_signal("fa-eye", state.is_shown_signal(masked).map(|shown| !shown))
                    .class_signal("fa-eye-slash", state.is_shown_signal(masked))
                })
            ])
            .event(clone!(state => move |_: events::Click| {
                state.toggle_password_visibility(masked);
            }))
        })
    }
}
