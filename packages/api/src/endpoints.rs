//! URLs of the three backend endpoints.
//!
//! Activity names and emails are percent-encoded: the activity becomes a single
//! path segment (`Chess Club` → `Chess%20Club`), the email a query pair
//! (`a@b.com` → `a%40b.com`).

use reqwest::Url;

use crate::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }
        Ok(Self { base })
    }

    /// `GET /activities`
    pub fn activities(&self) -> Url {
        self.with_segments(&["activities"])
    }

    /// `POST /activities/{activity}/signup?email={email}`
    pub fn signup(&self, activity: &str, email: &str) -> Url {
        self.action(activity, "signup", email)
    }

    /// `DELETE /activities/{activity}/unregister?email={email}`
    pub fn unregister(&self, activity: &str, email: &str) -> Url {
        self.action(activity, "unregister", email)
    }

    fn action(&self, activity: &str, action: &str, email: &str) -> Url {
        let mut url = self.with_segments(&["activities", activity, action]);
        url.query_pairs_mut().append_pair("email", email);
        url
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
