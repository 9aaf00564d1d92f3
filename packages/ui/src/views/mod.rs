mod activities;
pub use activities::ActivitiesView;
