//! Dashboard state update logic
//!
//! Applies queued events to the dashboard state

use super::state::{AccountForm, DashboardState, UrlForm};
use crate::events::{Event, Form, Resource};

impl DashboardState {
    /// Apply every queued event.
    pub fn update(&mut self) {
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event);
        }
    }

    /// Apply a single event
    pub fn process_event(&mut self, event: Event) {
        match event {
            Event::Status(snapshot) => {
                if self.applied_mut().accept(Resource::Status, snapshot.seq) {
                    self.status = Some(snapshot.value);
                }
            }
            Event::Accounts(snapshot) => {
                if self.applied_mut().accept(Resource::Accounts, snapshot.seq) {
                    self.selected_account = clamp_selection(self.selected_account, snapshot.value.len());
                    self.accounts = Some(snapshot.value);
                }
            }
            Event::Urls(snapshot) => {
                if self.applied_mut().accept(Resource::Urls, snapshot.seq) {
                    self.selected_url = clamp_selection(self.selected_url, snapshot.value.len());
                    self.urls = Some(snapshot.value);
                }
            }
            Event::FormCleared(Form::Account) => self.account_form = AccountForm::default(),
            Event::FormCleared(Form::Urls) => self.url_form = UrlForm::default(),
            Event::Log(entry) => self.add_to_activity_log(entry),
        }
    }
}

fn clamp_selection(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}
