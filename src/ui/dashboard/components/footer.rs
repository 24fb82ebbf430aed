//! Dashboard footer component
//!
//! Renders the key hints for the focused panel

use super::super::state::{DashboardState, Focus};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn footer_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Accounts => {
            "[Q] Quit | [Tab] Panel | [↑↓] Select | [L] Login | [D] Remove | [S] Start | [X] Stop | [R] Reload"
        }
        Focus::Urls => {
            "[Q] Quit | [Tab] Panel | [↑↓] Select | [D] Remove | [S] Start | [X] Stop | [R] Reload"
        }
        Focus::AccountForm => "[Esc] Back | [Tab] Panel | [↑↓] Field | [Enter] Next / Add | [Ctrl+S] Add",
        Focus::UrlForm => "[Esc] Back | [Tab] Panel | [Enter] New line | [Ctrl+S] Add URLs",
    }
}

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer = Paragraph::new(footer_text(state.focus))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
