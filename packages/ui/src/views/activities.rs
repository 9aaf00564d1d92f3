use dioxus::prelude::*;

use crate::{ActivityList, SignupForm, StatusBanner};

/// The whole signup page: activity cards on one side, the form on the other.
#[component]
pub fn ActivitiesView() -> Element {
    rsx! {
        header {
            h1 { "Mergington High School" }
            h2 { "Extracurricular Activities" }
        }
        main {
            section {
                id: "activities-container",
                h3 { "Available Activities" }
                ActivityList {}
            }
            section {
                id: "signup-container",
                h3 { "Sign Up for an Activity" }
                SignupForm {}
                StatusBanner {}
            }
        }
        footer {
            p { "© 2023 Mergington High School" }
        }
    }
}
