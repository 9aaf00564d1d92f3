//! Transient success/error message shown under the signup form.

use crate::config::TimerPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS classes of the status region.
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "message success",
            StatusKind::Error => "message error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Identifies the message a hide timer was started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusToken(u64);

/// The single status region. A new message always replaces the previous one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusRegion {
    message: Option<StatusMessage>,
    hidden: bool,
    latest: u64,
}

impl StatusRegion {
    /// Show `text` and return the token its hide timer must carry.
    pub fn show(&mut self, kind: StatusKind, text: impl Into<String>) -> StatusToken {
        self.latest += 1;
        self.message = Some(StatusMessage {
            kind,
            text: text.into(),
        });
        self.hidden = false;
        StatusToken(self.latest)
    }

    /// A hide timer fired. Returns whether the region was hidden.
    pub fn expire(&mut self, token: StatusToken, policy: TimerPolicy) -> bool {
        if policy == TimerPolicy::Reset && token.0 != self.latest {
            return false;
        }
        let was_visible = self.is_visible();
        self.hidden = true;
        was_visible
    }

    /// The message currently on screen, if any.
    pub fn visible(&self) -> Option<&StatusMessage> {
        if self.hidden {
            None
        } else {
            self.message.as_ref()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible().is_some()
    }

    /// The last message shown, visible or not. Hiding keeps the text in place.
    pub fn last(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let region = StatusRegion::default();
        assert!(!region.is_visible());
        assert!(region.last().is_none());
    }

    #[test]
    fn test_show_then_expire() {
        let mut region = StatusRegion::default();
        let token = region.show(StatusKind::Success, "Signed up");

        assert_eq!(region.visible().unwrap().text, "Signed up");
        assert_eq!(region.visible().unwrap().kind.class(), "message success");

        assert!(region.expire(token, TimerPolicy::Reset));
        assert!(!region.is_visible());
        assert_eq!(region.last().unwrap().text, "Signed up");
    }

    #[test]
    fn test_reset_policy_ignores_stale_timer() {
        let mut region = StatusRegion::default();
        let first = region.show(StatusKind::Success, "Signed up");
        let second = region.show(StatusKind::Error, "Activity full");

        assert!(!region.expire(first, TimerPolicy::Reset));
        assert_eq!(region.visible().unwrap().text, "Activity full");

        assert!(region.expire(second, TimerPolicy::Reset));
        assert!(!region.is_visible());
    }

    #[test]
    fn test_independent_policy_hides_newer_message() {
        let mut region = StatusRegion::default();
        let first = region.show(StatusKind::Success, "Signed up");
        let second = region.show(StatusKind::Error, "Activity full");

        assert!(region.expire(first, TimerPolicy::Independent));
        assert!(!region.is_visible());

        // The second timer still fires but has nothing left to hide.
        assert!(!region.expire(second, TimerPolicy::Independent));
    }
}
