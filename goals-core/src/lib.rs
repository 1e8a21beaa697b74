pub mod app;
pub mod handlers;
pub mod key_event;
pub mod store;
pub mod style;
pub mod types;
pub mod ui;
pub mod utils;

pub use store::{CommitOutcome, CommitPolicy, GoalListStore, StoreEvent, SubscriptionId};
