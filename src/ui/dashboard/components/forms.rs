//! Dashboard input forms
//!
//! Renders the add-account form and the add-URLs text area

use super::super::state::{AccountField, DashboardState, Focus};
use super::super::utils::panel_border_style;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

const CURSOR: &str = "▏";

pub fn render_forms(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(area);

    render_account_form(f, chunks[0], state);
    render_url_form(f, chunks[1], state);
}

fn render_account_form(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let focused = state.focus == Focus::AccountForm;
    let form = &state.account_form;

    let field = |label: &str, value: &str, active: bool| {
        let label_style = if active {
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::styled(format!("{:<7}", label), label_style),
            Span::raw(value.to_string()),
        ];
        if active {
            spans.push(Span::styled(CURSOR, Style::default().fg(Color::LightYellow)));
        }
        Line::from(spans)
    };

    let lines = vec![
        field(
            "Email",
            &form.email,
            focused && form.field == AccountField::Email,
        ),
        field(
            "Proxy",
            &form.proxy,
            focused && form.field == AccountField::Proxy,
        ),
        Line::from(Span::styled(
            "[Enter] next / add  [Ctrl+S] add",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("ADD ACCOUNT")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border_style(state.focus, Focus::AccountForm));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_url_form(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let focused = state.focus == Focus::UrlForm;

    let mut lines: Vec<Line> = state.url_form.text.split('\n').map(Line::from).collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(CURSOR, Style::default().fg(Color::LightYellow)));
        }
    } else if state.url_form.text.is_empty() {
        lines = vec![Line::from(Span::styled(
            "One URL per line",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let block = Block::default()
        .title("ADD URLS  [Ctrl+S] add")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border_style(state.focus, Focus::UrlForm));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
