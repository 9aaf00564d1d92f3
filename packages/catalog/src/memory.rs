use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::client::ActivityApi;
use crate::error::ClientError;
use crate::models::{Activity, Catalog};

/// A request as the backend received it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedRequest {
    List,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

/// In-memory backend for testing and the offline demo build.
///
/// Follows the REST backend's rules: unknown activities are 404, duplicate
/// signups and unknown participants are 400, and a full activity rejects
/// new signups.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    catalog: Arc<Mutex<Catalog>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    offline: Arc<AtomicBool>,
}

impl MemoryBackend {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            ..Self::default()
        }
    }

    /// The Mergington High School catalog the reference backend starts with.
    pub fn mergington() -> Self {
        let seed = [
            ("Chess Club", "Learn strategies and compete in chess tournaments", "Fridays, 3:30 PM - 5:00 PM", 12, ["michael@mergington.edu", "daniel@mergington.edu"]),
            ("Programming Class", "Learn programming fundamentals and build software projects", "Tuesdays and Thursdays, 3:30 PM - 4:30 PM", 20, ["emma@mergington.edu", "sophia@mergington.edu"]),
            ("Gym Class", "Physical education and sports activities", "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM", 30, ["john@mergington.edu", "olivia@mergington.edu"]),
            ("Soccer Team", "Join the school soccer team and compete in local leagues", "Tuesdays and Thursdays, 4:00 PM - 5:30 PM", 18, ["lucas@mergington.edu", "mia@mergington.edu"]),
            ("Basketball Club", "Practice basketball skills and play friendly matches", "Wednesdays, 3:30 PM - 5:00 PM", 15, ["liam@mergington.edu", "ava@mergington.edu"]),
            ("Art Club", "Explore painting, drawing, and other visual arts", "Mondays, 3:30 PM - 5:00 PM", 16, ["noah@mergington.edu", "isabella@mergington.edu"]),
            ("Drama Society", "Participate in acting, stage production, and school plays", "Thursdays, 4:00 PM - 5:30 PM", 20, ["ethan@mergington.edu", "charlotte@mergington.edu"]),
            ("Math Olympiad", "Prepare for math competitions and solve challenging problems", "Fridays, 2:00 PM - 3:30 PM", 10, ["amelia@mergington.edu", "benjamin@mergington.edu"]),
            ("Science Club", "Conduct experiments and explore scientific concepts", "Wednesdays, 4:00 PM - 5:00 PM", 14, ["elijah@mergington.edu", "harper@mergington.edu"]),
        ];

        Self::new(
            seed.into_iter()
                .map(|(name, description, schedule, max, participants)| {
                    (
                        name.to_string(),
                        Activity {
                            description: description.to_string(),
                            schedule: schedule.to_string(),
                            max_participants: max,
                            participants: participants.iter().map(|p| p.to_string()).collect(),
                        },
                    )
                })
                .collect(),
        )
    }

    /// While offline every call fails as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn snapshot(&self) -> Catalog {
        self.catalog.lock().unwrap().clone()
    }

    fn record(&self, request: RecordedRequest) -> Result<(), ClientError> {
        self.requests.lock().unwrap().push(request);
        if self.offline.load(Ordering::SeqCst) {
            return Err(ClientError::Transport("backend unreachable".to_string()));
        }
        Ok(())
    }
}

fn rejected(status: u16, detail: &str) -> ClientError {
    ClientError::Rejected {
        status,
        detail: Some(detail.to_string()),
    }
}

impl ActivityApi for MemoryBackend {
    async fn list_activities(&self) -> Result<Catalog, ClientError> {
        self.record(RecordedRequest::List)?;
        Ok(self.snapshot())
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        self.record(RecordedRequest::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
        })?;

        let mut catalog = self.catalog.lock().unwrap();
        let entry = catalog
            .get_mut(activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;
        if entry.has_participant(email) {
            return Err(rejected(400, "Student is already signed up"));
        }
        if entry.spots_left() == 0 {
            return Err(rejected(400, "Activity is full"));
        }
        entry.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {activity}"))
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        self.record(RecordedRequest::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
        })?;

        let mut catalog = self.catalog.lock().unwrap();
        let entry = catalog
            .get_mut(activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;
        let Some(position) = entry.participants.iter().position(|p| p == email) else {
            return Err(rejected(400, "Student is not signed up for this activity"));
        };
        entry.participants.remove(position);
        Ok(format!("Unregistered {email} from {activity}"))
    }
}
