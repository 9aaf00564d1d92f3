//! Signup page context: the page signal and the controller behind it.

use catalog::{ClientConfig, Controller, Page, UiEvent};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::backend::Backend;
use crate::host::SignalHost;

pub type SignupController = Controller<Backend, SignalHost>;

/// Current page state. Components render from this and never write to it.
pub fn use_page() -> Signal<Page> {
    use_context::<Signal<Page>>()
}

pub fn use_controller() -> SignupController {
    use_context::<SignupController>()
}

/// Hand `event` to the controller on a detached task. The task keeps running
/// when the component that raised the event unmounts.
pub fn dispatch(controller: &SignupController, event: UiEvent) {
    let controller = controller.clone();
    spawn_forever(async move {
        controller.dispatch(event).await;
    });
}

/// Owns the page state and the controller, and loads the catalog on mount.
#[component]
pub fn SignupProvider(
    config: ClientConfig,
    // Built-in catalog instead of the HTTP backend.
    #[props(default = false)]
    demo: bool,
    children: Element,
) -> Element {
    let page = use_signal(Page::default);
    let controller = use_hook(|| {
        let backend = if demo {
            Backend::demo()
        } else {
            Backend::from_config(&config)
        };
        Controller::new(backend, SignalHost::new(page), config.clone())
    });

    use_context_provider(|| page);
    use_context_provider(|| controller.clone());

    let loader = controller.clone();
    let _ = use_resource(move || {
        let controller = loader.clone();
        async move { controller.dispatch(UiEvent::Reload).await }
    });

    rsx! {
        {children}
    }
}
