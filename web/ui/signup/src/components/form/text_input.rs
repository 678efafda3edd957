use dominator::{html, Dom, clone, events, with_node};
use web_sys::HtmlInputElement;
use std::sync::Arc;
use futures_signals::signal::SignalExt;

use crate::model::Field;
use crate::state::SignupState;
use super::{error_icon, error_message};

pub struct TextInput {
    pub state: Arc<SignupState>,
    pub field: Field,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub icon: &'static str,
}

impl TextInput {
    pub fn render(&self) -> Dom {
        let state = self.state.clone();
        let field = self.field;

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
                            .class(["fa-solid", self.icon])
                        }),
                        html!("input" => HtmlInputElement, {
                            .class(["grow"])
                            .attribute("id", field.as_str())
                            .attribute("type", self.input_type)
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
                    .child_signal(state.is_valid_signal(field).map(|valid| {
                        (!valid).then(error_icon)
                    }))
                }),
            ])
            .child_signal(error_message(&state, field))
        })
    }
}
