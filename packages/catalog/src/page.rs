//! # Page state and the host seam
//!
//! [`Page`] is everything the signup page shows: the list container, the
//! selector options, the form fields and the status region. It is rebuilt from
//! fetched data on every load and owns no other state.
//!
//! [`Host`] is how the controller reaches the environment. The `ui` crate
//! implements it over a Dioxus signal with `window.confirm` and timer tasks;
//! tests implement it over a `RefCell`.

use std::time::Duration;

use crate::config::TimerPolicy;
use crate::status::{StatusRegion, StatusToken};
use crate::view::{reset_activity_select, ListView, SelectOption};

/// Values of the signup form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub list: ListView,
    pub options: Vec<SelectOption>,
    pub form: SignupForm,
    pub status: StatusRegion,
}

impl Default for Page {
    fn default() -> Self {
        let mut options = Vec::new();
        reset_activity_select(&mut options);
        Self {
            list: ListView::Loading,
            options,
            form: SignupForm::default(),
            status: StatusRegion::default(),
        }
    }
}

pub trait Host: Clone {
    fn read<R>(&self, f: impl FnOnce(&Page) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R;
    /// Blocking yes/no prompt.
    fn confirm(&self, prompt: &str) -> bool;
    /// After `after` elapses, call `page.status.expire(token, policy)`.
    fn schedule_hide(&self, token: StatusToken, policy: TimerPolicy, after: Duration);
}
