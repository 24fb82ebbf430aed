//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use super::state::Focus;
use super::view::{Badge, Indicator};
use crate::events::EventType;
use ratatui::prelude::{Color, Modifier, Style};

/// Color for an activity log line based on its type
pub fn get_event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::Red,
        EventType::Info => Color::Gray,
    }
}

pub fn indicator_color(indicator: Indicator) -> Color {
    match indicator {
        Indicator::Online => Color::LightGreen,
        Indicator::Offline => Color::LightRed,
        Indicator::Connecting => Color::DarkGray,
    }
}

pub fn badge_color(badge: Badge) -> Color {
    match badge {
        Badge::LoggedIn => Color::Green,
        Badge::Pending => Color::Yellow,
        Badge::Error => Color::Red,
    }
}

/// Border style for a panel, highlighted when it holds the focus.
pub fn panel_border_style(focus: Focus, panel: Focus) -> Style {
    if focus == panel {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

/// Format compact timestamp with time only from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "HH:MM:SS"
    timestamp
        .split(' ')
        .nth(1)
        .filter(|time| time.len() == 8)
        .map(str::to_string)
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_time_of_day() {
        assert_eq!(format_compact_timestamp("2024-05-01 13:45:09"), "13:45:09");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }
}
