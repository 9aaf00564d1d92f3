//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::Backend;

mod host;
pub use host::SignalHost;

mod signup;
pub use signup::{dispatch, use_controller, use_page, SignupController, SignupProvider};

mod activity_list;
pub use activity_list::{ActivityEntry, ActivityList};

mod signup_form;
pub use signup_form::SignupForm;

mod status_banner;
pub use status_banner::StatusBanner;

pub mod views;
