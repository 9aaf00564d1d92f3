//! # View models for the activity list and the activity selector
//!
//! The renderer does not touch the page directly. [`display_activities`] turns a
//! [`Catalog`] into plain [`ActivityCard`] values, and every participant row
//! carries the [`UiEvent`] its remove button emits. The components in the `ui`
//! crate draw these values and hand events back to a single dispatcher, so no
//! closure is built per participant.

use crate::models::Catalog;

pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Everything the user can do on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    EmailChanged(String),
    ActivityChanged(String),
    /// The signup form was submitted.
    Submit,
    /// A participant's remove button was clicked.
    Remove { activity: String, email: String },
    Reload,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    /// Event emitted by this row's remove button, `None` when removal is not offered.
    pub remove: Option<UiEvent>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticipantsView {
    /// Shows [`NO_PARTICIPANTS`].
    Empty,
    List(Vec<ParticipantRow>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// "current/max"
    pub capacity: String,
    pub participants: ParticipantsView,
}

/// State of the activity list container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    #[default]
    Loading,
    Ready(Vec<ActivityCard>),
    /// Static notice replacing the list after a failed load.
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListOptions {
    pub show_remove_controls: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            show_remove_controls: true,
        }
    }
}

/// One `<option>` of the activity selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }
}

/// Build one card per activity, in catalog order. The result replaces whatever
/// the list showed before.
pub fn display_activities(catalog: &Catalog, options: &ListOptions) -> Vec<ActivityCard> {
    catalog
        .iter()
        .map(|(name, activity)| {
            let participants = if activity.participants.is_empty() {
                ParticipantsView::Empty
            } else {
                ParticipantsView::List(
                    activity
                        .participants
                        .iter()
                        .map(|email| ParticipantRow {
                            email: email.clone(),
                            remove: options.show_remove_controls.then(|| UiEvent::Remove {
                                activity: name.to_string(),
                                email: email.clone(),
                            }),
                        })
                        .collect(),
                )
            };

            ActivityCard {
                name: name.to_string(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                capacity: activity.capacity_label(),
                participants,
            }
        })
        .collect()
}

/// Append one option per activity name. Existing options are left alone, so
/// calling this twice on the same selector duplicates every entry.
pub fn populate_activity_select(select: &mut Vec<SelectOption>, catalog: &Catalog) {
    select.extend(catalog.names().map(|name| SelectOption {
        value: name.to_string(),
        label: name.to_string(),
    }));
}

/// Drop everything but the placeholder.
pub fn reset_activity_select(select: &mut Vec<SelectOption>) {
    select.clear();
    select.push(SelectOption::placeholder());
}
