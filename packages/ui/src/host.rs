//! [`Host`] over a Dioxus signal.

use std::time::Duration;

use catalog::{Host, Page, StatusToken, TimerPolicy};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

/// Page state lives in a signal; prompts use `window.confirm`; hide timers are
/// detached tasks that outlive the component which scheduled them.
#[derive(Clone, Copy)]
pub struct SignalHost {
    page: Signal<Page>,
}

impl SignalHost {
    pub fn new(page: Signal<Page>) -> Self {
        Self { page }
    }
}

impl Host for SignalHost {
    fn read<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
        let page = self.page.peek();
        f(&*page)
    }

    fn update<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        let mut page = self.page;
        let mut guard = page.write();
        f(&mut *guard)
    }

    #[cfg(target_arch = "wasm32")]
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn confirm(&self, prompt: &str) -> bool {
        tracing::warn!("No dialog available, declining: {}", prompt);
        false
    }

    fn schedule_hide(&self, token: StatusToken, policy: TimerPolicy, after: Duration) {
        let mut page = self.page;
        spawn_forever(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(after).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(after).await;

            page.write().status.expire(token, policy);
        });
    }
}
