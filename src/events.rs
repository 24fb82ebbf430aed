//! Event System
//!
//! Messages sent from dashboard actions back to whoever owns the view:
//! fetched snapshots, form resets and activity log entries.

use crate::logging::{LogLevel, should_log_with_env};
use crate::models::{Account, StatusSnapshot, UrlEntry};
use chrono::Local;
use std::fmt::Display;

/// A backend resource the dashboard keeps a snapshot of.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
pub enum Resource {
    Status,
    Accounts,
    Urls,
}

/// One of the two input forms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Form {
    Account,
    Urls,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Info,
}

/// A fetched value tagged with the sequence number of the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub seq: u64,
    pub value: T,
}

impl<T> Snapshot<T> {
    pub fn new(seq: u64, value: T) -> Self {
        Self { seq, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl LogEntry {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Error, LogLevel::Error)
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Info, LogLevel::Info)
    }

    /// Underlying cause of a failure, hidden unless `RUST_LOG` asks for it.
    pub fn detail(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Error, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Status(Snapshot<StatusSnapshot>),
    Accounts(Snapshot<Vec<Account>>),
    Urls(Snapshot<Vec<UrlEntry>>),
    /// The add behind this form succeeded; its inputs should be reset.
    FormCleared(Form),
    Log(LogEntry),
}

impl Event {
    pub fn log_entry(&self) -> Option<&LogEntry> {
        match self {
            Event::Log(entry) => Some(entry),
            _ => None,
        }
    }

    /// True for entries that report a failed operation.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::Log(LogEntry {
                event_type: EventType::Error,
                log_level: LogLevel::Error,
                ..
            })
        )
    }
}
