use dominator::{html, Dom, clone, EventOptions};
use std::sync::Arc;
use crate::components::events::FormSubmit;
use crate::components::form::{GenderInput, PasswordInput, TextInput};
use crate::model::{Field, MaskedField};
use crate::state::SignupState;

#[derive(Clone)]
pub struct SignupPage {
    state: Arc<SignupState>,
}

impl SignupPage {
    pub fn new(state: Arc<SignupState>) -> Arc<Self> {
        Arc::new(Self { state })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self.state.clone();

        html!("div", {
            .class([
                "min-h-screen",
                "bg-base-200",
                "flex",
                "flex-col"
            ])
            .children(&mut [
                html!("div", {
                    .class([
                        "flex-1",
                        "flex",
                        "flex-col",
                        "items-center",
                        "justify-center",
                        "p-4",
                    ])
                    .children(&mut [
                        html!("div", {
                            .class(["card", "w-full", "max-w-md", "bg-base-100", "shadow-xl"])
                            .children(&mut [
                                html!("div", {
                                    .class(["card-body"])
                                    .children(&mut [
                                        html!("h2", {
                                            .class(["text-2xl", "font-bold", "text-center", "mb-2", "w-full"])
                                            .text(&state.config.title)
                                        }),
                                        self.render_form(),
                                    ])
                                })
                            ])
                        })
                    ])
                })
            ])
        })
    }

    fn render_form(&self) -> Dom {
        let state = self.state.clone();

        html!("form", {
            .attribute("novalidate", "")
            .event_with_options(&EventOptions::preventable(), clone!(state => move |event: FormSubmit| {
                event.prevent_default();
                state.submit();
            }))
            .children(&mut [
                TextInput {
                    state: state.clone(),
                    field: Field::Name,
                    label: "Name",
                    input_type: "text",
                    placeholder: "Name",
                    icon: "fa-circle-user",
                }.render(),
                TextInput {
                    state: state.clone(),
                    field: Field::Email,
                    label: "Email",
                    input_type: "email",
                    placeholder: "Email",
                    icon: "fa-envelope",
                }.render(),
                PasswordInput {
                    state: state.clone(),
                    field: MaskedField::Password,
                    label: "Create Password",
                    placeholder: "Create password",
                }.render(),
                PasswordInput {
                    state: state.clone(),
                    field: MaskedField::ConfirmPassword,
                    label: "Confirm Password",
                    placeholder: "Confirm password",
                }.render(),
                GenderInput {
                    state: state.clone(),
                }.render(),
                html!("button", {
                    .class(["btn", "btn-primary", "w-full", "mt-6"])
                    .attribute("type", "submit")
                    .text("Sign up")
                }),
            ])
        })
    }
}
