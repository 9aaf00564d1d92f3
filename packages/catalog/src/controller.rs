//! # Controller: loading, signup and unregister
//!
//! [`Controller`] ties an [`ActivityApi`] to a [`Host`]. The UI never calls the
//! backend itself: every user action arrives as a [`UiEvent`] through
//! [`Controller::dispatch`].
//!
//! | Operation | Request | On success | On failure |
//! |-----------|---------|------------|------------|
//! | [`load_activities`](Controller::load_activities) | `GET /activities` | rebuild cards and selector | list replaced by a static notice |
//! | [`handle_signup`](Controller::handle_signup) | `POST /activities/{a}/signup` | success status, reload, reset form | error status, form kept |
//! | [`handle_unregister`](Controller::handle_unregister) | `DELETE /activities/{a}/unregister` | success status, reload | error status |
//!
//! Signup and unregister always schedule the status region to hide once the
//! configured delay has passed. Nothing is retried.

use tracing::{debug, error, info, warn};

use crate::client::ActivityApi;
use crate::config::ClientConfig;
use crate::page::Host;
use crate::status::{StatusKind, StatusToken};
use crate::view::{
    display_activities, populate_activity_select, reset_activity_select, ListOptions, ListView,
    UiEvent, LOAD_FAILED,
};

pub const SIGNUP_FAILED: &str = "Signup failed";
pub const UNREGISTER_FAILED: &str = "Unregister failed";

/// Text of the confirmation prompt shown before unregistering.
pub fn unregister_prompt(activity: &str, email: &str) -> String {
    format!("Are you sure you want to unregister {email} from {activity}?")
}

#[derive(Clone, Debug)]
pub struct Controller<A, H> {
    api: A,
    host: H,
    config: ClientConfig,
}

impl<A: ActivityApi, H: Host> Controller<A, H> {
    pub fn new(api: A, host: H, config: ClientConfig) -> Self {
        Self { api, host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn list_options(&self) -> ListOptions {
        ListOptions {
            show_remove_controls: self.config.list.show_remove_controls,
        }
    }

    /// Route a UI event to the matching action.
    pub async fn dispatch(&self, event: UiEvent) {
        match event {
            UiEvent::EmailChanged(email) => self.host.update(|page| page.form.email = email),
            UiEvent::ActivityChanged(activity) => {
                self.host.update(|page| page.form.activity = activity)
            }
            UiEvent::Submit => self.handle_signup().await,
            UiEvent::Remove { activity, email } => self.handle_unregister(&activity, &email).await,
            UiEvent::Reload => self.load_activities().await,
        }
    }

    /// Fetch the catalog and rebuild the list and the selector from it.
    pub async fn load_activities(&self) {
        match self.api.list_activities().await {
            Ok(catalog) => {
                debug!("Loaded {} activities", catalog.len());
                let cards = display_activities(&catalog, &self.list_options());
                self.host.update(|page| {
                    page.list = ListView::Ready(cards);
                    reset_activity_select(&mut page.options);
                    populate_activity_select(&mut page.options, &catalog);
                });
            }
            Err(e) => {
                error!("Error loading activities: {}", e);
                self.host
                    .update(|page| page.list = ListView::Failed(LOAD_FAILED.to_string()));
            }
        }
    }

    /// Submit the signup form.
    pub async fn handle_signup(&self) {
        let form = self.host.read(|page| page.form.clone());
        debug!("Signing up {} for {}", form.email, form.activity);

        let token = match self.api.signup(&form.activity, &form.email).await {
            Ok(message) => {
                info!("{}", message);
                let token = self.show(StatusKind::Success, message);
                self.load_activities().await;
                self.host.update(|page| page.form.reset());
                token
            }
            Err(e) => {
                warn!("Signup of {} for {} failed: {}", form.email, form.activity, e);
                self.show(StatusKind::Error, e.user_message(SIGNUP_FAILED))
            }
        };
        self.schedule_hide(token);
    }

    /// Remove `email` from `activity`, after the user confirms.
    pub async fn handle_unregister(&self, activity: &str, email: &str) {
        if self.config.list.confirm_unregister
            && !self.host.confirm(&unregister_prompt(activity, email))
        {
            debug!("Unregister of {} from {} cancelled", email, activity);
            return;
        }

        let token = match self.api.unregister(activity, email).await {
            Ok(message) => {
                info!("{}", message);
                let token = self.show(StatusKind::Success, message);
                self.load_activities().await;
                token
            }
            Err(e) => {
                warn!("Unregister of {} from {} failed: {}", email, activity, e);
                self.show(StatusKind::Error, e.user_message(UNREGISTER_FAILED))
            }
        };
        self.schedule_hide(token);
    }

    fn show(&self, kind: StatusKind, text: String) -> StatusToken {
        self.host.update(|page| page.status.show(kind, text))
    }

    fn schedule_hide(&self, token: StatusToken) {
        self.host
            .schedule_hide(token, self.config.status.timer, self.config.hide_after());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::config::TimerPolicy;
    use crate::memory::{MemoryBackend, RecordedRequest};
    use crate::page::{Page, SignupForm};
    use crate::view::ParticipantsView;

    type Timer = (StatusToken, TimerPolicy, Duration);

    #[derive(Clone)]
    struct RecordingHost {
        page: Rc<RefCell<Page>>,
        answer: Rc<Cell<bool>>,
        prompts: Rc<RefCell<Vec<String>>>,
        timers: Rc<RefCell<Vec<Timer>>>,
    }

    impl RecordingHost {
        fn new() -> Self {
            Self {
                page: Rc::new(RefCell::new(Page::default())),
                answer: Rc::new(Cell::new(true)),
                prompts: Rc::new(RefCell::new(Vec::new())),
                timers: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn page(&self) -> Page {
            self.page.borrow().clone()
        }

        /// Let every pending timer elapse, oldest first.
        fn fire_timers(&self) {
            let timers: Vec<Timer> = self.timers.borrow_mut().drain(..).collect();
            for (token, policy, _) in timers {
                self.page.borrow_mut().status.expire(token, policy);
            }
        }
    }

    impl Host for RecordingHost {
        fn read<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
            f(&self.page.borrow())
        }

        fn update<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
            f(&mut self.page.borrow_mut())
        }

        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer.get()
        }

        fn schedule_hide(&self, token: StatusToken, policy: TimerPolicy, after: Duration) {
            self.timers.borrow_mut().push((token, policy, after));
        }
    }

    fn setup(config: ClientConfig) -> (Controller<MemoryBackend, RecordingHost>, MemoryBackend, RecordingHost) {
        let backend = MemoryBackend::mergington();
        let host = RecordingHost::new();
        let controller = Controller::new(backend.clone(), host.clone(), config);
        (controller, backend, host)
    }

    fn cards(page: &Page) -> &[crate::view::ActivityCard] {
        match &page.list {
            ListView::Ready(cards) => cards,
            other => panic!("expected cards, got {other:?}"),
        }
    }

    async fn fill_form(controller: &Controller<MemoryBackend, RecordingHost>, email: &str, activity: &str) {
        controller.dispatch(UiEvent::EmailChanged(email.to_string())).await;
        controller
            .dispatch(UiEvent::ActivityChanged(activity.to_string()))
            .await;
    }

    #[tokio::test]
    async fn test_load_renders_cards_and_options() {
        let (controller, backend, host) = setup(ClientConfig::default());

        controller.load_activities().await;

        let page = host.page();
        let cards = cards(&page);
        assert_eq!(cards.len(), 9);
        assert_eq!(cards[0].name, "Chess Club");
        assert_eq!(cards[0].capacity, "2/12");

        // Placeholder plus one option per activity.
        assert_eq!(page.options.len(), 10);
        assert_eq!(page.options[1].value, "Chess Club");
        assert_eq!(backend.requests(), vec![RecordedRequest::List]);
    }

    #[tokio::test]
    async fn test_reload_is_idempotent() {
        let (controller, _, host) = setup(ClientConfig::default());

        controller.load_activities().await;
        let first = host.page();
        controller.dispatch(UiEvent::Reload).await;

        assert_eq!(host.page(), first);
    }

    #[tokio::test]
    async fn test_load_failure_shows_notice() {
        let (controller, backend, host) = setup(ClientConfig::default());
        backend.set_offline(true);

        controller.load_activities().await;

        assert_eq!(host.page().list, ListView::Failed(LOAD_FAILED.to_string()));
        assert!(host.timers.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_signup_success_reloads_and_resets_form() {
        let (controller, backend, host) = setup(ClientConfig::default());
        controller.load_activities().await;
        fill_form(&controller, "a@b.com", "Chess Club").await;

        controller.dispatch(UiEvent::Submit).await;

        let page = host.page();
        let status = page.status.visible().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.text, "Signed up a@b.com for Chess Club");
        assert_eq!(page.form, SignupForm::default());
        assert_eq!(cards(&page)[0].capacity, "3/12");

        assert_eq!(
            backend.requests()[1..],
            [
                RecordedRequest::Signup {
                    activity: "Chess Club".to_string(),
                    email: "a@b.com".to_string(),
                },
                RecordedRequest::List,
            ]
        );
    }

    #[tokio::test]
    async fn test_signup_failure_keeps_form() {
        let (controller, backend, host) = setup(ClientConfig::default());
        controller.load_activities().await;
        fill_form(&controller, "michael@mergington.edu", "Chess Club").await;

        controller.handle_signup().await;

        let page = host.page();
        let status = page.status.visible().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Student is already signed up");
        assert_eq!(page.form.email, "michael@mergington.edu");
        assert_eq!(page.form.activity, "Chess Club");
        // No reload after a rejected signup.
        assert_eq!(backend.requests().len(), 2);
        assert_eq!(host.timers.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_signup_transport_failure_uses_fallback() {
        let (controller, backend, host) = setup(ClientConfig::default());
        controller.load_activities().await;
        fill_form(&controller, "a@b.com", "Chess Club").await;
        backend.set_offline(true);

        controller.handle_signup().await;

        let page = host.page();
        assert_eq!(page.status.visible().unwrap().text, SIGNUP_FAILED);
        // The list keeps what it showed before.
        assert_eq!(cards(&page).len(), 9);
    }

    #[tokio::test]
    async fn test_unregister_declined_does_nothing() {
        let (controller, backend, host) = setup(ClientConfig::default());
        controller.load_activities().await;
        let before = host.page();
        host.answer.set(false);

        controller
            .dispatch(UiEvent::Remove {
                activity: "Chess Club".to_string(),
                email: "michael@mergington.edu".to_string(),
            })
            .await;

        assert_eq!(
            host.prompts.borrow().as_slice(),
            ["Are you sure you want to unregister michael@mergington.edu from Chess Club?"]
        );
        assert_eq!(backend.requests(), vec![RecordedRequest::List]);
        assert_eq!(host.page(), before);
        assert!(host.timers.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_unregister_confirmed_removes_participant() {
        let (controller, _, host) = setup(ClientConfig::default());
        controller.load_activities().await;

        controller
            .handle_unregister("Chess Club", "michael@mergington.edu")
            .await;

        let page = host.page();
        assert_eq!(
            page.status.visible().unwrap().text,
            "Unregistered michael@mergington.edu from Chess Club"
        );
        let ParticipantsView::List(rows) = &cards(&page)[0].participants else {
            panic!("expected participant rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email, "daniel@mergington.edu");
    }

    #[tokio::test]
    async fn test_unregister_without_prompt_when_disabled() {
        let mut config = ClientConfig::default();
        config.list.confirm_unregister = false;
        let (controller, _, host) = setup(config);
        host.answer.set(false);

        controller
            .handle_unregister("Chess Club", "michael@mergington.edu")
            .await;

        assert!(host.prompts.borrow().is_empty());
        assert_eq!(host.page().status.visible().unwrap().kind, StatusKind::Success);
    }

    #[tokio::test]
    async fn test_unregister_failure_shows_detail() {
        let (controller, _, host) = setup(ClientConfig::default());

        controller.handle_unregister("Knitting", "a@b.com").await;

        let status = host.page().status.visible().cloned().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Activity not found");
    }

    #[tokio::test]
    async fn test_status_hides_after_configured_delay() {
        let (controller, _, host) = setup(ClientConfig::default());
        fill_form(&controller, "a@b.com", "Chess Club").await;

        controller.handle_signup().await;

        assert_eq!(host.timers.borrow()[0].2, Duration::from_millis(5000));
        assert!(host.page().status.is_visible());
        host.fire_timers();
        assert!(!host.page().status.is_visible());
    }

    #[tokio::test]
    async fn test_newer_message_outlives_older_timer() {
        let (controller, _, host) = setup(ClientConfig::default());
        fill_form(&controller, "a@b.com", "Chess Club").await;
        controller.handle_signup().await;
        controller.handle_unregister("Knitting", "a@b.com").await;

        // Only the first timer elapses.
        let first = host.timers.borrow_mut().remove(0);
        host.page.borrow_mut().status.expire(first.0, first.1);

        assert_eq!(host.page().status.visible().unwrap().text, "Activity not found");
    }

    #[tokio::test]
    async fn test_independent_timers_match_legacy_behaviour() {
        let config = ClientConfig::default().with_timer_policy(TimerPolicy::Independent);
        let (controller, _, host) = setup(config);
        fill_form(&controller, "a@b.com", "Chess Club").await;
        controller.handle_signup().await;
        controller.handle_unregister("Knitting", "a@b.com").await;

        let first = host.timers.borrow_mut().remove(0);
        host.page.borrow_mut().status.expire(first.0, first.1);

        assert!(!host.page().status.is_visible());
    }
}
