//! Dashboard view models
//!
//! Pure functions from the latest snapshots to what the panels draw. The
//! components never look at snapshots directly, so every frame is a full
//! rebuild of these values.

use crate::consts::cli_consts::ui::{NO_ACCOUNTS_PLACEHOLDER, NO_URLS_PLACEHOLDER};
use crate::dashboard::Action;
use crate::models::{Account, AccountStatus, StatusSnapshot, UrlEntry};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Indicator {
    /// No status snapshot received yet.
    Connecting,
    Online,
    Offline,
}

impl Indicator {
    pub fn label(self) -> &'static str {
        match self {
            Indicator::Connecting => "Connecting",
            Indicator::Online => "Online",
            Indicator::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub indicator: Indicator,
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub summary: String,
}

pub fn summary_line(status: &StatusSnapshot) -> String {
    format!(
        "{} accounts ({} logged in) • {} URLs • {} likes",
        status.accounts_count, status.logged_in_accounts, status.urls_count, status.likes_sent
    )
}

/// Exactly one of start/stop is enabled once a snapshot exists; neither before.
pub fn status_view(status: Option<&StatusSnapshot>) -> StatusView {
    match status {
        None => StatusView {
            indicator: Indicator::Connecting,
            start_enabled: false,
            stop_enabled: false,
            summary: String::new(),
        },
        Some(status) => StatusView {
            indicator: if status.is_running {
                Indicator::Online
            } else {
                Indicator::Offline
            },
            start_enabled: !status.is_running,
            stop_enabled: status.is_running,
            summary: summary_line(status),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<R> {
    /// The first load has not completed.
    Loading,
    Placeholder(&'static str),
    Rows(Vec<R>),
}

impl<R> ListView<R> {
    pub fn rows(&self) -> &[R] {
        match self {
            ListView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Badge {
    LoggedIn,
    Pending,
    Error,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::LoggedIn => "✅ Logged In",
            Badge::Pending => "⏳ Pending Login",
            Badge::Error => "❌ Error",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RowAction {
    ConfirmLogin,
    Login,
    Remove,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::ConfirmLogin => "I'm Logged In",
            RowAction::Login => "Login",
            RowAction::Remove => "Remove",
        }
    }

    /// Key that triggers this action on the selected row.
    pub fn key_hint(self) -> char {
        match self {
            RowAction::ConfirmLogin | RowAction::Login => 'l',
            RowAction::Remove => 'd',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub email: String,
    pub proxy: Option<String>,
    pub badge: Badge,
    pub session_saved: bool,
    /// Row controls in display order; `Remove` is always last.
    pub actions: Vec<RowAction>,
}

impl AccountRow {
    /// The login-related control of this row, if it has one.
    pub fn login_action(&self) -> Option<RowAction> {
        self.actions
            .iter()
            .copied()
            .find(|action| *action != RowAction::Remove)
    }

    pub fn action(&self, action: RowAction) -> Action {
        let email = self.email.clone();
        match action {
            RowAction::ConfirmLogin => Action::ConfirmLogin(email),
            RowAction::Login => Action::LoginAccount(email),
            RowAction::Remove => Action::RemoveAccount(email),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRow {
    pub url: String,
    pub actions: Vec<RowAction>,
}

impl UrlRow {
    pub fn remove_action(&self) -> Action {
        Action::RemoveUrl(self.url.clone())
    }
}

pub fn account_row(account: &Account) -> AccountRow {
    let (badge, login) = match account.status {
        AccountStatus::LoggedIn => (Badge::LoggedIn, None),
        AccountStatus::Pending => (Badge::Pending, Some(RowAction::ConfirmLogin)),
        AccountStatus::Error | AccountStatus::Unknown => (Badge::Error, Some(RowAction::Login)),
    };
    AccountRow {
        email: account.email.clone(),
        proxy: account.proxy.clone(),
        badge,
        session_saved: account.session_saved,
        actions: login.into_iter().chain([RowAction::Remove]).collect(),
    }
}

pub fn accounts_view(accounts: Option<&[Account]>) -> ListView<AccountRow> {
    match accounts {
        None => ListView::Loading,
        Some([]) => ListView::Placeholder(NO_ACCOUNTS_PLACEHOLDER),
        Some(accounts) => ListView::Rows(accounts.iter().map(account_row).collect()),
    }
}

pub fn urls_view(urls: Option<&[UrlEntry]>) -> ListView<UrlRow> {
    match urls {
        None => ListView::Loading,
        Some([]) => ListView::Placeholder(NO_URLS_PLACEHOLDER),
        Some(urls) => ListView::Rows(
            urls.iter()
                .map(|entry| UrlRow {
                    url: entry.url.clone(),
                    actions: vec![RowAction::Remove],
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str, status: AccountStatus) -> Account {
        Account {
            email: email.to_string(),
            proxy: None,
            status,
            session_saved: false,
        }
    }

    #[test]
    fn running_bot_shows_online_and_only_stop() {
        let view = status_view(Some(&StatusSnapshot {
            is_running: true,
            accounts_count: 2,
            logged_in_accounts: 1,
            urls_count: 4,
            likes_sent: 12,
        }));
        assert_eq!(view.indicator, Indicator::Online);
        assert!(!view.start_enabled);
        assert!(view.stop_enabled);
        assert_eq!(
            view.summary,
            "2 accounts (1 logged in) • 4 URLs • 12 likes"
        );
    }

    #[test]
    fn stopped_bot_shows_offline_and_only_start() {
        let view = status_view(Some(&StatusSnapshot::default()));
        assert_eq!(view.indicator, Indicator::Offline);
        assert_eq!(view.indicator.label(), "Offline");
        assert!(view.start_enabled);
        assert!(!view.stop_enabled);
    }

    #[test]
    fn no_snapshot_disables_both_controls() {
        let view = status_view(None);
        assert_eq!(view.indicator, Indicator::Connecting);
        assert!(!view.start_enabled && !view.stop_enabled);
    }

    #[test]
    fn empty_lists_render_placeholders() {
        assert_eq!(
            accounts_view(Some(&[])),
            ListView::Placeholder("No accounts added")
        );
        let urls = urls_view(Some(&[]));
        assert_eq!(urls, ListView::Placeholder("No URLs added"));
        assert!(urls.rows().is_empty());
        assert_eq!(accounts_view(None), ListView::Loading);
    }

    #[test]
    fn pending_account_offers_confirm_and_remove() {
        let row = account_row(&account("p@example.com", AccountStatus::Pending));
        assert_eq!(row.badge, Badge::Pending);
        assert_eq!(row.actions, vec![RowAction::ConfirmLogin, RowAction::Remove]);
        assert_eq!(
            row.action(row.login_action().unwrap()),
            Action::ConfirmLogin("p@example.com".to_string())
        );
    }

    #[test]
    fn logged_in_account_only_offers_remove() {
        let row = account_row(&account("l@example.com", AccountStatus::LoggedIn));
        assert_eq!(row.badge.label(), "✅ Logged In");
        assert_eq!(row.actions, vec![RowAction::Remove]);
        assert_eq!(row.login_action(), None);
    }

    #[test]
    fn errored_and_unknown_accounts_offer_login() {
        for status in [AccountStatus::Error, AccountStatus::Unknown] {
            let row = account_row(&account("e@example.com", status));
            assert_eq!(row.badge, Badge::Error);
            assert_eq!(row.actions, vec![RowAction::Login, RowAction::Remove]);
            assert_eq!(
                row.action(RowAction::Login),
                Action::LoginAccount("e@example.com".to_string())
            );
        }
    }

    #[test]
    fn every_url_row_can_be_removed() {
        let urls = vec![UrlEntry {
            url: "https://www.depop.com/products/x".to_string(),
        }];
        let view = urls_view(Some(&urls));
        let row = &view.rows()[0];
        assert_eq!(row.actions, vec![RowAction::Remove]);
        assert_eq!(
            row.remove_action(),
            Action::RemoveUrl("https://www.depop.com/products/x".to_string())
        );
    }
}
