//! Plain-text rendering of dashboard events for the console modes

use crate::events::Event;
use crate::ui::dashboard::view::{AccountRow, ListView, accounts_view, status_view, urls_view};

fn account_line(row: &AccountRow) -> String {
    let mut line = format!("{}  {}", row.email, row.badge.label());
    if let Some(proxy) = &row.proxy {
        line.push_str(&format!("  Proxy: {}", proxy));
    }
    if row.session_saved {
        line.push_str("  (session saved)");
    }
    line
}

/// Console lines for one event. Hidden log entries and form resets print nothing.
pub fn event_lines(event: &Event) -> Vec<String> {
    match event {
        Event::Status(snapshot) => {
            let view = status_view(Some(&snapshot.value));
            vec![
                format!("Status: {}", view.indicator.label()),
                view.summary,
            ]
        }
        Event::Accounts(snapshot) => match accounts_view(Some(&snapshot.value)) {
            ListView::Rows(rows) => rows.iter().map(account_line).collect(),
            ListView::Placeholder(text) => vec![text.to_string()],
            ListView::Loading => Vec::new(),
        },
        Event::Urls(snapshot) => match urls_view(Some(&snapshot.value)) {
            ListView::Rows(rows) => rows.iter().map(|row| row.url.clone()).collect(),
            ListView::Placeholder(text) => vec![text.to_string()],
            ListView::Loading => Vec::new(),
        },
        Event::FormCleared(_) => Vec::new(),
        Event::Log(entry) if entry.should_display() => vec![entry.to_string()],
        Event::Log(_) => Vec::new(),
    }
}
