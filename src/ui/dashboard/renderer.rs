//! Dashboard main renderer

use super::components::{accounts, footer, forms, header, logs, urls};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    let list_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content_chunks[0]);

    accounts::render_accounts_panel(f, list_chunks[0], state);
    urls::render_urls_panel(f, list_chunks[1], state);
    forms::render_forms(f, content_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, LogEntry, Snapshot};
    use crate::models::{Account, AccountStatus, StatusSnapshot, UrlEntry};
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 44)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state() -> DashboardState {
        DashboardState::new(
            "http://localhost:5000".to_string(),
            UIConfig::new(true),
        )
    }

    #[test]
    fn empty_backend_shows_placeholders() {
        let mut state = state();
        state.add_event(Event::Status(Snapshot::new(1, StatusSnapshot::default())));
        state.add_event(Event::Accounts(Snapshot::new(1, vec![])));
        state.add_event(Event::Urls(Snapshot::new(1, vec![])));
        state.update();

        let text = screen_text(&state);
        assert!(text.contains("Offline"));
        assert!(text.contains("No accounts added"));
        assert!(text.contains("No URLs added"));
    }

    #[test]
    fn populated_backend_shows_rows_and_logs() {
        let mut state = state();
        state.add_event(Event::Status(Snapshot::new(
            1,
            StatusSnapshot {
                is_running: true,
                accounts_count: 1,
                ..StatusSnapshot::default()
            },
        )));
        state.add_event(Event::Accounts(Snapshot::new(
            1,
            vec![Account {
                email: "pending@example.com".to_string(),
                proxy: Some("http://proxy:8080".to_string()),
                status: AccountStatus::Pending,
                session_saved: false,
            }],
        )));
        state.add_event(Event::Urls(Snapshot::new(
            1,
            vec![UrlEntry {
                url: "https://www.depop.com/products/shoe".to_string(),
            }],
        )));
        state.add_event(Event::Log(LogEntry::success("Bot started")));
        state.update();

        let text = screen_text(&state);
        assert!(text.contains("Online"));
        assert!(text.contains("pending@example.com"));
        assert!(text.contains("Proxy: http://proxy:8080"));
        assert!(text.contains("I'm Logged In"));
        assert!(text.contains("https://www.depop.com/products/shoe"));
        assert!(text.contains("Bot started"));
    }
}
