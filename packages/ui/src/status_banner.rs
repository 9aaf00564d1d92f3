use dioxus::prelude::*;

use crate::signup::use_page;

/// The single `message` region shared by signup and unregister.
#[component]
pub fn StatusBanner() -> Element {
    let page = use_page();
    let status = page.read().status.clone();

    match status.visible() {
        Some(message) => rsx! {
            div {
                id: "message",
                class: message.kind.class(),
                "{message.text}"
            }
        },
        None => rsx! {
            div { id: "message", class: "hidden" }
        },
    }
}
