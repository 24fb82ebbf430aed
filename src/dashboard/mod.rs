//! Dashboard client: actions, loads and the status poller

pub mod client;
pub mod poller;
pub mod sender;
pub mod sequencer;

pub use client::{Action, DashboardClient};
pub use poller::spawn_status_poller;
pub use sender::EventSender;
pub use sequencer::AppliedSequence;
