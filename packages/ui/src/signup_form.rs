use catalog::UiEvent;
use dioxus::prelude::*;

use crate::signup::{dispatch, use_controller, use_page};

/// The `signup-form` with its `email` input and `activity` selector.
///
/// Both fields are `required`, so the browser blocks empty submissions before
/// the controller sees them.
#[component]
pub fn SignupForm() -> Element {
    let page = use_page();
    let controller = use_controller();
    let (fields, options) = {
        let page = page.read();
        (page.form.clone(), page.options.clone())
    };

    let on_email = {
        let controller = controller.clone();
        move |evt: FormEvent| dispatch(&controller, UiEvent::EmailChanged(evt.value()))
    };
    let on_activity = {
        let controller = controller.clone();
        move |evt: FormEvent| dispatch(&controller, UiEvent::ActivityChanged(evt.value()))
    };
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        dispatch(&controller, UiEvent::Submit);
    };

    rsx! {
        form {
            id: "signup-form",
            onsubmit: on_submit,
            div {
                class: "form-group",
                label { r#for: "email", "Student Email:" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "your-email@mergington.edu",
                    value: "{fields.email}",
                    oninput: on_email,
                }
            }
            div {
                class: "form-group",
                label { r#for: "activity", "Select Activity:" }
                select {
                    id: "activity",
                    name: "activity",
                    required: true,
                    value: "{fields.activity}",
                    onchange: on_activity,
                    for choice in options {
                        option {
                            value: "{choice.value}",
                            selected: choice.value == fields.activity,
                            "{choice.label}"
                        }
                    }
                }
            }
            button { r#type: "submit", "Sign Up" }
        }
    }
}
