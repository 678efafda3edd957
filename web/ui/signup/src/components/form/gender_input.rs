use dominator::{html, Dom, clone, events, with_node};
use web_sys::HtmlInputElement;
use std::sync::Arc;

use crate::model::{Field, Gender};
use crate::state::SignupState;
use super::error_message;

pub struct GenderInput {
    pub state: Arc<SignupState>,
}

impl GenderInput {
    pub fn render(&self) -> Dom {
        let state = self.state.clone();

        html!("div", {
            .class(["form-control", "w-full", "mt-2"])
            .children(&mut [
                html!("p", {
                    .class(["label", "label-text"])
                    .text("Gender")
                }),
                html!("div", {
                    .class(["flex", "gap-4"])
                    .children(Gender::ALL.iter().map(|gender| Self::render_option(state.clone(), *gender)))
                }),
            ])
            .child_signal(error_message(&state, Field::Gender))
        })
    }

    fn render_option(state: Arc<SignupState>, gender: Gender) -> Dom {
        html!("label", {
            .class(["label", "cursor-pointer", "justify-start", "gap-2"])
            .attribute("for", gender.as_str())
            .children(&mut [
                html!("input" => HtmlInputElement, {
                    .class(["radio", "radio-primary", "radio-sm"])
                    .attribute("type", "radio")
                    .attribute("name", Field::Gender.as_str())
                    .attribute("id", gender.as_str())
                    .attribute("value", gender.as_str())
                    .property_signal("checked", state.form.signal_ref(move |form| form.gender == Some(gender)))
                    .with_node!(input => {
                        .event(clone!(state => move |_: events::Change| {
                            state.set_field(Field::Gender, input.value());
                        }))
                    })
                }),
                html!("span", {
                    .class(["label-text"])
                    .text(gender.label())
                })
            ])
        })
    }
}
