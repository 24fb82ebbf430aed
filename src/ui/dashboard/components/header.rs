//! Dashboard header component
//!
//! Renders the title and the bot status line

use super::super::state::DashboardState;
use super::super::utils::indicator_color;
use super::super::view::status_view;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title, running indicator and start/stop controls.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("DEPOP LIKE BOT v{}  •  {}", version, state.base_url))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let view = status_view(state.status.as_ref());
    let control = |key: &str, label: &str, enabled: bool| {
        let style = if enabled {
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        };
        Span::styled(format!("[{}] {}", key, label), style)
    };

    let status_line = Line::from(vec![
        Span::styled("● ", Style::default().fg(indicator_color(view.indicator))),
        Span::styled(
            view.indicator.label(),
            Style::default()
                .fg(indicator_color(view.indicator))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(view.summary, Style::default().fg(Color::White)),
        Span::raw("   "),
        control("S", "Start Bot", view.start_enabled),
        Span::raw("  "),
        control("X", "Stop Bot", view.stop_enabled),
    ]);

    let status = Paragraph::new(status_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}
