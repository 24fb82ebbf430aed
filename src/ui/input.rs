//! Key handling for the dashboard screen
//!
//! Translates key presses into state edits and dashboard actions. Nothing
//! here talks to the backend; dispatching is left to the caller.

use crate::dashboard::Action;
use crate::ui::dashboard::DashboardState;
use crate::ui::dashboard::state::{AccountField, Focus};
use crate::ui::dashboard::view::{accounts_view, status_view, urls_view};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing to send; the state may have been edited.
    None,
    Dispatch(Action),
    Quit,
}

pub fn handle_key(state: &mut DashboardState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Tab => {
            state.focus = state.focus.next();
            return KeyOutcome::None;
        }
        KeyCode::BackTab => {
            state.focus = state.focus.previous();
            return KeyOutcome::None;
        }
        _ => {}
    }

    if state.focus.is_form() {
        if key.code == KeyCode::Esc {
            state.focus = match state.focus {
                Focus::AccountForm => Focus::Accounts,
                _ => Focus::Urls,
            };
            return KeyOutcome::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return submit_form(state);
        }
        return match state.focus {
            Focus::AccountForm => handle_account_form_key(state, key),
            _ => handle_url_form_key(state, key),
        };
    }

    handle_navigation_key(state, key)
}

fn handle_navigation_key(state: &mut DashboardState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => KeyOutcome::Quit,
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(state, -1);
            KeyOutcome::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(state, 1);
            KeyOutcome::None
        }
        KeyCode::Char('a') => {
            state.focus = Focus::AccountForm;
            KeyOutcome::None
        }
        KeyCode::Char('u') => {
            state.focus = Focus::UrlForm;
            KeyOutcome::None
        }
        KeyCode::Char('r') => KeyOutcome::Dispatch(Action::Reload),
        KeyCode::Char('s')
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && status_view(state.status.as_ref()).start_enabled =>
        {
            KeyOutcome::Dispatch(Action::StartBot)
        }
        KeyCode::Char('x')
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && status_view(state.status.as_ref()).stop_enabled =>
        {
            KeyOutcome::Dispatch(Action::StopBot)
        }
        KeyCode::Char('l') if state.focus == Focus::Accounts => {
            let view = accounts_view(state.accounts.as_deref());
            view.rows()
                .get(state.selected_account)
                .and_then(|row| row.login_action().map(|action| row.action(action)))
                .map_or(KeyOutcome::None, KeyOutcome::Dispatch)
        }
        KeyCode::Char('d') | KeyCode::Delete => match state.focus {
            Focus::Accounts => {
                let view = accounts_view(state.accounts.as_deref());
                view.rows()
                    .get(state.selected_account)
                    .map_or(KeyOutcome::None, |row| {
                        KeyOutcome::Dispatch(Action::RemoveAccount(row.email.clone()))
                    })
            }
            _ => {
                let view = urls_view(state.urls.as_deref());
                view.rows()
                    .get(state.selected_url)
                    .map_or(KeyOutcome::None, |row| {
                        KeyOutcome::Dispatch(row.remove_action())
                    })
            }
        },
        _ => KeyOutcome::None,
    }
}

fn move_selection(state: &mut DashboardState, delta: isize) {
    let (selected, len) = match state.focus {
        Focus::Accounts => (
            &mut state.selected_account,
            state.accounts.as_ref().map_or(0, Vec::len),
        ),
        _ => (
            &mut state.selected_url,
            state.urls.as_ref().map_or(0, Vec::len),
        ),
    };
    if len == 0 {
        *selected = 0;
        return;
    }
    *selected = selected.saturating_add_signed(delta).min(len - 1);
}

fn handle_account_form_key(state: &mut DashboardState, key: KeyEvent) -> KeyOutcome {
    let form = &mut state.account_form;
    match key.code {
        KeyCode::Enter => {
            if form.field == AccountField::Email {
                form.field = AccountField::Proxy;
                KeyOutcome::None
            } else {
                submit_form(state)
            }
        }
        KeyCode::Up | KeyCode::Down => {
            form.field = match form.field {
                AccountField::Email => AccountField::Proxy,
                AccountField::Proxy => AccountField::Email,
            };
            KeyOutcome::None
        }
        KeyCode::Backspace => {
            form.active_field_mut().pop();
            KeyOutcome::None
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.active_field_mut().push(c);
            KeyOutcome::None
        }
        _ => KeyOutcome::None,
    }
}

fn handle_url_form_key(state: &mut DashboardState, key: KeyEvent) -> KeyOutcome {
    let text = &mut state.url_form.text;
    match key.code {
        KeyCode::Enter => text.push('\n'),
        KeyCode::Backspace => {
            text.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => text.push(c),
        _ => {}
    }
    KeyOutcome::None
}

/// Builds the add action for the focused form. The form keeps its contents
/// until the backend accepts the submission.
fn submit_form(state: &mut DashboardState) -> KeyOutcome {
    match state.focus {
        Focus::AccountForm => {
            let form = &state.account_form;
            if form.email.trim().is_empty() {
                return KeyOutcome::None;
            }
            KeyOutcome::Dispatch(Action::AddAccount {
                email: form.email.clone(),
                proxy: form.proxy.clone(),
            })
        }
        Focus::UrlForm => KeyOutcome::Dispatch(Action::AddUrls(state.url_form.text.clone())),
        _ => KeyOutcome::None,
    }
}
