//! # Domain models for the activity catalog
//!
//! Defines the data structures decoded from the backend's JSON bodies. The
//! catalog is a mapping from activity name to [`Activity`]; its key order is
//! the order the backend sent, and everything downstream (cards, selector
//! options) iterates in that order.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Catalog`] | The full `GET /activities` body, keyed by activity name. |
//! | [`Activity`] | One activity: description, schedule, capacity and the ordered participant emails. |
//! | [`ActionReply`] | Success body of signup/unregister: `{"message": ...}`. |
//! | [`ActionFailure`] | Failure body of signup/unregister: `{"detail": ...}`, detail optional. |
//!
//! Decoding is strict about required fields: a missing `participants` array or
//! a string where `max_participants` should be fails with a [`DecodeError`]
//! instead of rendering a half-empty card.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// A named activity as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    /// "current/max", e.g. `"2/12"`.
    pub fn capacity_label(&self) -> String {
        format!("{}/{}", self.participants.len(), self.max_participants)
    }

    /// Remaining places. Display only; the backend decides whether a signup fits.
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Activity name to details, in backend order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    activities: IndexMap<String, Activity>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a `GET /activities` body.
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(body).map_err(DecodeError::from)
    }

    pub fn to_json(&self) -> Result<String, DecodeError> {
        serde_json::to_string(self).map_err(DecodeError::from)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }

    /// Insert or replace; a new name is appended at the end.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.activities.iter().map(|(name, a)| (name.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (String, Activity)>>(iter: T) -> Self {
        Self {
            activities: iter.into_iter().collect(),
        }
    }
}

/// `{"message": "..."}` returned by a successful signup or unregister.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    pub message: String,
}

/// `{"detail": "..."}` returned by a rejected signup or unregister.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionFailure {
    #[serde(default)]
    pub detail: Option<String>,
}
