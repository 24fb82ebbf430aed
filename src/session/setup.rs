//! Session setup and initialization

use crate::api::BotApiClient;
use crate::api::error::ApiError;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::consts::cli_consts::polling::status_interval;
use crate::dashboard::{Action, DashboardClient, EventSender, spawn_status_poller};
use crate::events::Event;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data shared by the TUI, headless and one-shot modes
#[derive(Debug)]
pub struct SessionData {
    /// Issues backend calls and reports through the event channel
    pub client: DashboardClient,
    /// Receives snapshots and log entries
    pub event_receiver: mpsc::Receiver<Event>,
    /// Stops the status poller
    pub shutdown_sender: broadcast::Sender<()>,
    /// Initial load and poller tasks, once started
    pub join_handles: Vec<JoinHandle<()>>,
}

/// Builds the HTTP client and the event channel for `base_url`.
///
/// Nothing is requested yet; interactive modes call
/// [`SessionData::start_dashboard`] and one-shot commands perform a single
/// action.
pub fn setup_session(base_url: &str) -> Result<SessionData, ApiError> {
    let api = BotApiClient::new(base_url)?;
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (shutdown_sender, _) = broadcast::channel(1);

    Ok(SessionData {
        client: DashboardClient::new(Arc::new(api), EventSender::new(event_sender)),
        event_receiver,
        shutdown_sender,
        join_handles: Vec::new(),
    })
}

impl SessionData {
    /// Loads status, accounts and URLs once and starts polling status.
    pub fn start_dashboard(&mut self) {
        log::info!("Starting dashboard against {}", self.client.base_url());
        self.join_handles.push(self.client.dispatch(Action::Reload));
        self.join_handles.push(spawn_status_poller(
            self.client.clone(),
            status_interval(),
            self.shutdown_sender.subscribe(),
        ));
    }
}
