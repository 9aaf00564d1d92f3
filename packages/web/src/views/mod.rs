use dioxus::prelude::*;
use ui::views::ActivitiesView;

#[component]
pub fn Activities() -> Element {
    rsx! {
        ActivitiesView {}
    }
}

#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!("Serving activities at /{}", segments.join("/"));
    rsx! {
        ActivitiesView {}
    }
}
