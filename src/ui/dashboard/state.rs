//! Dashboard state management
//!
//! Contains the main dashboard state struct and the form/focus types

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dashboard::AppliedSequence;
use crate::events::{Event, LogEntry};
use crate::models::{Account, StatusSnapshot, UrlEntry};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;

/// Panel receiving key input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Accounts,
    Urls,
    AccountForm,
    UrlForm,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Accounts,
        Focus::Urls,
        Focus::AccountForm,
        Focus::UrlForm,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Focus {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_form(self) -> bool {
        matches!(self, Focus::AccountForm | Focus::UrlForm)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum AccountField {
    #[default]
    Email,
    Proxy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub email: String,
    pub proxy: String,
    pub field: AccountField,
}

impl AccountForm {
    pub fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            AccountField::Email => &mut self.email,
            AccountField::Proxy => &mut self.proxy,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlForm {
    pub text: String,
}

/// Everything the dashboard screen draws from.
///
/// Snapshots are only ever replaced by events carrying a newer sequence
/// number; nothing in here is edited to anticipate a backend change.
#[derive(Debug)]
pub struct DashboardState {
    /// Backend the dashboard talks to.
    pub base_url: String,
    /// Latest status snapshot, if one has arrived.
    pub status: Option<StatusSnapshot>,
    /// Latest account list, if one has arrived.
    pub accounts: Option<Vec<Account>>,
    /// Latest URL list, if one has arrived.
    pub urls: Option<Vec<UrlEntry>>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity log for display
    pub activity_logs: VecDeque<LogEntry>,
    pub account_form: AccountForm,
    pub url_form: UrlForm,
    pub focus: Focus,
    pub selected_account: usize,
    pub selected_url: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,

    applied: AppliedSequence,
}

impl DashboardState {
    pub fn new(base_url: String, ui_config: UIConfig) -> Self {
        Self {
            base_url,
            status: None,
            accounts: None,
            urls: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            account_form: AccountForm::default(),
            url_form: UrlForm::default(),
            focus: Focus::Accounts,
            selected_account: 0,
            selected_url: 0,
            with_background_color: ui_config.with_background_color,
            applied: AppliedSequence::default(),
        }
    }

    pub fn applied_mut(&mut self) -> &mut AppliedSequence {
        &mut self.applied
    }

    /// Add an entry to the activity log with size limit
    pub fn add_to_activity_log(&mut self, entry: LogEntry) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(entry);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Accounts.next(), Focus::Urls);
        assert_eq!(Focus::UrlForm.next(), Focus::Accounts);
        assert_eq!(Focus::Accounts.previous(), Focus::UrlForm);
        assert!(Focus::AccountForm.is_form());
        assert!(!Focus::Urls.is_form());
    }

    #[test]
    fn activity_log_is_capped() {
        let mut state = DashboardState::new(
            "http://localhost:5000".to_string(),
            UIConfig::new(false),
        );
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(LogEntry::info(format!("entry {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "entry 5");
    }
}
