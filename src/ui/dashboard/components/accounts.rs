//! Dashboard accounts panel component

use super::super::state::{DashboardState, Focus};
use super::super::utils::{badge_color, panel_border_style};
use super::super::view::{ListView, accounts_view};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

pub fn render_accounts_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("ACCOUNTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border_style(state.focus, Focus::Accounts));

    let rows = match accounts_view(state.accounts.as_deref()) {
        ListView::Loading => {
            f.render_widget(placeholder("Loading...").block(block), area);
            return;
        }
        ListView::Placeholder(text) => {
            f.render_widget(placeholder(text).block(block), area);
            return;
        }
        ListView::Rows(rows) => rows,
    };

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mut title = vec![
                Span::styled(
                    row.email.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(row.badge.label(), Style::default().fg(badge_color(row.badge))),
            ];
            if row.session_saved {
                title.push(Span::styled(
                    "  session saved",
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let mut lines = vec![Line::from(title)];
            if let Some(proxy) = &row.proxy {
                lines.push(Line::from(Span::styled(
                    format!("  Proxy: {}", proxy),
                    Style::default().fg(Color::Gray),
                )));
            }
            let controls: Vec<Span> = row
                .actions
                .iter()
                .map(|action| {
                    Span::styled(
                        format!("  [{}] {}", action.key_hint().to_ascii_uppercase(), action.label()),
                        Style::default().fg(Color::LightCyan),
                    )
                })
                .collect();
            lines.push(Line::from(controls));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 48, 56)))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.selected_account));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn placeholder(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(text)).style(Style::default().fg(Color::DarkGray))
}
