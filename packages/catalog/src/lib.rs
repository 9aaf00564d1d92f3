pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod page;
pub mod status;
pub mod view;

mod memory;
pub use memory::{MemoryBackend, RecordedRequest};

pub use client::ActivityApi;
pub use config::{ClientConfig, TimerPolicy};
pub use controller::Controller;
pub use error::{ClientError, ConfigError, DecodeError};
pub use models::{ActionFailure, ActionReply, Activity, Catalog};
pub use page::{Host, Page, SignupForm};
pub use status::{StatusKind, StatusMessage, StatusRegion, StatusToken};
pub use view::{ActivityCard, ListView, ParticipantRow, ParticipantsView, SelectOption, UiEvent};
