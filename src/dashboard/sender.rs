//! Event sending utilities for dashboard actions

use crate::events::{Event, LogEntry};
use tokio::sync::mpsc;

#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event. A closed receiver means the view is gone; the event is dropped.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_log(&self, entry: LogEntry) {
        self.send_event(Event::Log(entry)).await;
    }

    pub async fn send_success(&self, message: String) {
        self.send_log(LogEntry::success(message)).await;
    }

    pub async fn send_error(&self, message: String) {
        self.send_log(LogEntry::error(message)).await;
    }
}
