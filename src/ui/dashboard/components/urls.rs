//! Dashboard URL panel component

use super::super::state::{DashboardState, Focus};
use super::super::utils::panel_border_style;
use super::super::view::{ListView, urls_view};

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

pub fn render_urls_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("URLS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border_style(state.focus, Focus::Urls));

    let view = urls_view(state.urls.as_deref());
    let rows = match &view {
        ListView::Loading => {
            render_placeholder(f, area, block, "Loading...");
            return;
        }
        ListView::Placeholder(text) => {
            render_placeholder(f, area, block, text);
            return;
        }
        ListView::Rows(rows) => rows,
    };

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mut spans = vec![Span::raw(row.url.clone())];
            spans.extend(row.actions.iter().map(|action| {
                Span::styled(
                    format!("  [{}] {}", action.key_hint().to_ascii_uppercase(), action.label()),
                    Style::default().fg(Color::LightCyan),
                )
            }));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 48, 56)))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.selected_url));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_placeholder(f: &mut Frame, area: ratatui::layout::Rect, block: Block, text: &str) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    f.render_widget(paragraph, area);
}
