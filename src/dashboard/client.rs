//! Dashboard client
//!
//! Request/render pairs for every dashboard operation. Each operation issues
//! exactly one backend call and reports what happened through the event
//! channel; it never touches view state directly.

use super::sender::EventSender;
use super::sequencer::RequestSequencer;
use crate::api::BotApi;
use crate::api::error::ApiError;
use crate::events::{Event, Form, LogEntry, Resource, Snapshot};
use crate::models::{ActionOutcome, ActionResponse};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A user-triggered operation, as handed from the view to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadStatus,
    LoadAccounts,
    LoadUrls,
    /// Reload status, accounts and URLs together.
    Reload,
    AddAccount { email: String, proxy: String },
    LoginAccount(String),
    ConfirmLogin(String),
    /// Raw contents of the URL input, one URL per line.
    AddUrls(String),
    RemoveAccount(String),
    RemoveUrl(String),
    StartBot,
    StopBot,
}

/// What to do with the response of one action endpoint.
struct Followup {
    /// Logged when the request itself fails.
    failure_line: &'static str,
    /// Whether `success: false` is logged or swallowed.
    log_rejection: bool,
    /// Form reset after a successful call.
    clears: Option<Form>,
    /// List reloaded (alongside status) after a successful call.
    reloads: Option<Resource>,
}

/// Splits the URL input into the list sent to the backend.
///
/// Blank and whitespace-only lines are dropped; kept lines are sent verbatim.
pub fn parse_url_input(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone)]
pub struct DashboardClient {
    api: Arc<dyn BotApi>,
    events: EventSender,
    sequencer: Arc<RequestSequencer>,
}

impl std::fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardClient")
            .field("base_url", &self.api.base_url())
            .finish_non_exhaustive()
    }
}

impl DashboardClient {
    pub fn new(api: Arc<dyn BotApi>, events: EventSender) -> Self {
        Self {
            api,
            events,
            sequencer: Arc::new(RequestSequencer::new()),
        }
    }

    pub fn base_url(&self) -> String {
        self.api.base_url()
    }

    /// Runs `action` on its own task. Overlapping actions are not sequenced
    /// against each other; snapshots carry sequence numbers instead.
    pub fn dispatch(&self, action: Action) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move { client.perform(action).await })
    }

    pub async fn perform(&self, action: Action) {
        match action {
            Action::LoadStatus => self.load_status().await,
            Action::LoadAccounts => self.load_accounts().await,
            Action::LoadUrls => self.load_urls().await,
            Action::Reload => self.initialize().await,
            Action::AddAccount { email, proxy } => self.add_account(&email, &proxy).await,
            Action::LoginAccount(email) => self.login_account(&email).await,
            Action::ConfirmLogin(email) => self.confirm_login(&email).await,
            Action::AddUrls(raw) => self.add_urls(&raw).await,
            Action::RemoveAccount(email) => self.remove_account(&email).await,
            Action::RemoveUrl(url) => self.remove_url(&url).await,
            Action::StartBot => self.start_bot().await,
            Action::StopBot => self.stop_bot().await,
        }
    }

    /// Initial load of everything the dashboard shows.
    pub async fn initialize(&self) {
        tokio::join!(self.load_status(), self.load_accounts(), self.load_urls());
    }

    pub async fn load_status(&self) {
        let seq = self.sequencer.next(Resource::Status);
        match self.api.get_status().await {
            Ok(status) => {
                self.events
                    .send_event(Event::Status(Snapshot::new(seq, status)))
                    .await
            }
            Err(e) => self.report_failure("Error loading status", &e).await,
        }
    }

    pub async fn load_accounts(&self) {
        let seq = self.sequencer.next(Resource::Accounts);
        match self.api.get_accounts().await {
            Ok(accounts) => {
                self.events
                    .send_event(Event::Accounts(Snapshot::new(seq, accounts)))
                    .await
            }
            Err(e) => self.report_failure("Error loading accounts", &e).await,
        }
    }

    pub async fn load_urls(&self) {
        let seq = self.sequencer.next(Resource::Urls);
        match self.api.get_urls().await {
            Ok(urls) => {
                self.events
                    .send_event(Event::Urls(Snapshot::new(seq, urls)))
                    .await
            }
            Err(e) => self.report_failure("Error loading URLs", &e).await,
        }
    }

    pub async fn add_account(&self, email: &str, proxy: &str) {
        let response = self.api.add_account(email, proxy).await;
        self.follow_up(
            response,
            Followup {
                failure_line: "Error adding account",
                log_rejection: true,
                clears: Some(Form::Account),
                reloads: Some(Resource::Accounts),
            },
        )
        .await;
    }

    pub async fn login_account(&self, email: &str) {
        let response = self.api.login_account(email).await;
        self.follow_up(
            response,
            Followup {
                failure_line: "Error starting login",
                log_rejection: true,
                clears: None,
                reloads: Some(Resource::Accounts),
            },
        )
        .await;
    }

    pub async fn confirm_login(&self, email: &str) {
        let response = self.api.confirm_login(email).await;
        self.follow_up(
            response,
            Followup {
                failure_line: "Error confirming login",
                log_rejection: true,
                clears: None,
                reloads: Some(Resource::Accounts),
            },
        )
        .await;
    }

    pub async fn add_urls(&self, raw: &str) {
        let response = self.api.add_urls(parse_url_input(raw)).await;
        self.follow_up(
            response,
            Followup {
                failure_line: "Error adding URLs",
                log_rejection: true,
                clears: Some(Form::Urls),
                reloads: Some(Resource::Urls),
            },
        )
        .await;
    }

    pub async fn remove_account(&self, email: &str) {
        let response = self.api.remove_account(email).await;
        self.follow_up(
            response,
            Followup {
                failure_line: "Error removing account",
                log_rejection: false,
                clears: None,
                reloads: Some(Resource::Accounts),
            },
        )
        .await;
    }

    pub async fn remove_url(&self, url: &str) {
        let response = self.api.remove_url(url).await;
        self.follow_up(
            response,
            Followup {
                failure_line: "Error removing URL",
                log_rejection: false,
                clears: None,
                reloads: Some(Resource::Urls),
            },
        )
        .await;
    }

    pub async fn start_bot(&self) {
        let response = self.api.start_bot().await;
        self.follow_up(
            response,
            Followup {
                failure_line: "Error starting bot",
                log_rejection: true,
                clears: None,
                reloads: None,
            },
        )
        .await;
    }

    pub async fn stop_bot(&self) {
        let response = self.api.stop_bot().await;
        self.follow_up(
            response,
            Followup {
                failure_line: "Error stopping bot",
                log_rejection: false,
                clears: None,
                reloads: None,
            },
        )
        .await;
    }

    async fn follow_up(&self, response: Result<ActionResponse, ApiError>, followup: Followup) {
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                self.report_failure(followup.failure_line, &e).await;
                return;
            }
        };

        match response.outcome() {
            ActionOutcome::Success { message } => {
                if !message.is_empty() {
                    self.events.send_success(message).await;
                }
                if let Some(form) = followup.clears {
                    self.events.send_event(Event::FormCleared(form)).await;
                }
                self.reload_with_status(followup.reloads).await;
            }
            ActionOutcome::Failure { error } => {
                if followup.log_rejection {
                    self.events.send_error(error).await;
                } else {
                    log::debug!("{} rejected by backend: {}", followup.failure_line, error);
                }
            }
        }
    }

    async fn reload_with_status(&self, list: Option<Resource>) {
        match list {
            Some(Resource::Accounts) => {
                tokio::join!(self.load_accounts(), self.load_status());
            }
            Some(Resource::Urls) => {
                tokio::join!(self.load_urls(), self.load_status());
            }
            Some(Resource::Status) | None => self.load_status().await,
        }
    }

    /// Reduces a transport or decoding failure to its fixed log line.
    async fn report_failure(&self, line: &str, error: &ApiError) {
        let level: log::Level = error.log_level().into();
        log::log!(level, "{}: {}", line, error);
        self.events.send_error(line.to_string()).await;
        self.events.send_log(LogEntry::detail(error.to_string())).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBotApi;
    use crate::models::{Account, AccountStatus, StatusSnapshot, UrlEntry};
    use tokio::sync::mpsc;

    fn client_with(api: MockBotApi) -> (DashboardClient, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(100);
        let client = DashboardClient::new(Arc::new(api), EventSender::new(tx));
        (client, rx)
    }

    fn drain(rx: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn log_messages(events: &[Event]) -> Vec<String> {
        events
            .iter()
            .filter_map(Event::log_entry)
            .filter(|entry| entry.should_display())
            .map(|entry| entry.msg.clone())
            .collect()
    }

    fn transport_error() -> ApiError {
        ApiError::Http {
            status: 502,
            message: "Bad Gateway".to_string(),
        }
    }

    fn running_status() -> StatusSnapshot {
        StatusSnapshot {
            is_running: true,
            accounts_count: 1,
            logged_in_accounts: 1,
            urls_count: 2,
            likes_sent: 5,
        }
    }

    #[test]
    fn url_input_drops_blank_lines() {
        assert_eq!(parse_url_input("a\n\nb\n  \nc"), vec!["a", "b", "c"]);
        assert!(parse_url_input("").is_empty());
        assert!(parse_url_input("\n \t\n").is_empty());
    }

    #[tokio::test]
    async fn add_urls_sends_filtered_list_then_clears_and_reloads() {
        let mut api = MockBotApi::new();
        api.expect_add_urls()
            .withf(|urls: &Vec<String>| urls == &vec!["a", "b", "c"])
            .times(1)
            .returning(|_| Ok(ActionResponse::success("Added 3 URLs")));
        api.expect_get_urls().times(1).returning(|| {
            Ok(vec![UrlEntry {
                url: "a".to_string(),
            }])
        });
        api.expect_get_status()
            .times(1)
            .returning(|| Ok(running_status()));
        let (client, mut rx) = client_with(api);

        client.add_urls("a\n\nb\n  \nc").await;

        let events = drain(&mut rx);
        assert_eq!(log_messages(&events), vec!["Added 3 URLs"]);
        assert!(events.contains(&Event::FormCleared(Form::Urls)));
        assert!(events.iter().any(|e| matches!(e, Event::Urls(_))));
        assert!(events.iter().any(|e| matches!(e, Event::Status(_))));
    }

    #[tokio::test]
    async fn rejected_add_account_logs_error_and_keeps_form() {
        let mut api = MockBotApi::new();
        api.expect_add_account()
            .withf(|email: &str, proxy: &str| email == "a@example.com" && proxy.is_empty())
            .times(1)
            .returning(|_, _| Ok(ActionResponse::failure("X")));
        api.expect_get_accounts().times(0);
        api.expect_get_status().times(0);
        let (client, mut rx) = client_with(api);

        client.add_account("a@example.com", "").await;

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert_eq!(log_messages(&events), vec!["X"]);
        assert!(events[0].is_failure());
    }

    #[tokio::test]
    async fn add_account_transport_failure_logs_generic_line() {
        let mut api = MockBotApi::new();
        api.expect_add_account()
            .returning(|_, _| Err(transport_error()));
        let (client, mut rx) = client_with(api);

        client.add_account("a@example.com", "").await;

        let events = drain(&mut rx);
        assert_eq!(log_messages(&events), vec!["Error adding account"]);
        assert!(!events.contains(&Event::FormCleared(Form::Account)));
    }

    #[tokio::test]
    async fn confirm_login_reloads_accounts_and_status() {
        let mut api = MockBotApi::new();
        api.expect_confirm_login()
            .withf(|email: &str| email == "a@example.com")
            .times(1)
            .returning(|_| Ok(ActionResponse::success("Login confirmed and session saved")));
        api.expect_get_accounts().times(1).returning(|| {
            Ok(vec![Account {
                email: "a@example.com".to_string(),
                proxy: None,
                status: AccountStatus::LoggedIn,
                session_saved: true,
            }])
        });
        api.expect_get_status()
            .times(1)
            .returning(|| Ok(running_status()));
        let (client, mut rx) = client_with(api);

        client.perform(Action::ConfirmLogin("a@example.com".to_string())).await;

        let events = drain(&mut rx);
        assert_eq!(
            log_messages(&events),
            vec!["Login confirmed and session saved"]
        );
        let accounts = events.iter().find_map(|e| match e {
            Event::Accounts(snapshot) => Some(snapshot.value.clone()),
            _ => None,
        });
        assert_eq!(accounts.unwrap()[0].status, AccountStatus::LoggedIn);
    }

    #[tokio::test]
    async fn rejected_removals_are_silent() {
        let mut api = MockBotApi::new();
        api.expect_remove_account()
            .returning(|_| Ok(ActionResponse::failure("nope")));
        api.expect_remove_url()
            .returning(|_| Ok(ActionResponse::failure("nope")));
        api.expect_get_accounts().times(0);
        api.expect_get_urls().times(0);
        api.expect_get_status().times(0);
        let (client, mut rx) = client_with(api);

        client.remove_account("a@example.com").await;
        client.remove_url("https://www.depop.com/products/x").await;

        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn start_logs_rejection_but_stop_does_not() {
        let mut api = MockBotApi::new();
        api.expect_start_bot()
            .returning(|| Ok(ActionResponse::failure("No URLs added")));
        api.expect_stop_bot()
            .returning(|| Ok(ActionResponse::failure("already stopped")));
        api.expect_get_status().times(0);
        let (client, mut rx) = client_with(api);

        client.start_bot().await;
        client.stop_bot().await;

        assert_eq!(log_messages(&drain(&mut rx)), vec!["No URLs added"]);
    }

    #[tokio::test]
    async fn stop_success_reloads_status_only() {
        let mut api = MockBotApi::new();
        api.expect_stop_bot()
            .returning(|| Ok(ActionResponse::success("Bot stopped")));
        api.expect_get_status()
            .times(1)
            .returning(|| Ok(StatusSnapshot::default()));
        api.expect_get_accounts().times(0);
        api.expect_get_urls().times(0);
        let (client, mut rx) = client_with(api);

        client.perform(Action::StopBot).await;

        let events = drain(&mut rx);
        assert_eq!(log_messages(&events), vec!["Bot stopped"]);
        assert!(events.iter().any(|e| matches!(e, Event::Status(_))));
    }

    /// Makes the one endpoint behind `action` fail in transport.
    fn fail_transport(api: &mut MockBotApi, action: &Action) {
        match action {
            Action::LoadStatus => {
                api.expect_get_status().returning(|| Err(transport_error()));
            }
            Action::LoadAccounts => {
                api.expect_get_accounts().returning(|| Err(transport_error()));
            }
            Action::LoadUrls => {
                api.expect_get_urls().returning(|| Err(transport_error()));
            }
            Action::AddAccount { .. } => {
                api.expect_add_account()
                    .returning(|_, _| Err(transport_error()));
            }
            Action::LoginAccount(_) => {
                api.expect_login_account()
                    .returning(|_| Err(transport_error()));
            }
            Action::ConfirmLogin(_) => {
                api.expect_confirm_login()
                    .returning(|_| Err(transport_error()));
            }
            Action::AddUrls(_) => {
                api.expect_add_urls().returning(|_| Err(transport_error()));
            }
            Action::RemoveAccount(_) => {
                api.expect_remove_account()
                    .returning(|_| Err(transport_error()));
            }
            Action::RemoveUrl(_) => {
                api.expect_remove_url().returning(|_| Err(transport_error()));
            }
            Action::StartBot => {
                api.expect_start_bot().returning(|| Err(transport_error()));
            }
            Action::StopBot => {
                api.expect_stop_bot().returning(|| Err(transport_error()));
            }
            Action::Reload => unreachable!("reload spans three endpoints"),
        }
    }

    #[tokio::test]
    async fn transport_failures_log_the_fixed_line_per_action() {
        let cases = vec![
            (Action::LoadStatus, "Error loading status"),
            (Action::LoadAccounts, "Error loading accounts"),
            (Action::LoadUrls, "Error loading URLs"),
            (
                Action::AddAccount {
                    email: "a@example.com".to_string(),
                    proxy: String::new(),
                },
                "Error adding account",
            ),
            (
                Action::LoginAccount("a@example.com".to_string()),
                "Error starting login",
            ),
            (
                Action::ConfirmLogin("a@example.com".to_string()),
                "Error confirming login",
            ),
            (
                Action::AddUrls("https://www.depop.com/products/x".to_string()),
                "Error adding URLs",
            ),
            (
                Action::RemoveAccount("a@example.com".to_string()),
                "Error removing account",
            ),
            (
                Action::RemoveUrl("https://www.depop.com/products/x".to_string()),
                "Error removing URL",
            ),
            (Action::StartBot, "Error starting bot"),
            (Action::StopBot, "Error stopping bot"),
        ];

        for (action, line) in cases {
            // Any reload would hit a method without an expectation and panic
            let mut api = MockBotApi::new();
            fail_transport(&mut api, &action);
            let (client, mut rx) = client_with(api);

            client.perform(action.clone()).await;

            let events = drain(&mut rx);
            let failures: Vec<&str> = events
                .iter()
                .filter(|e| e.is_failure())
                .filter_map(Event::log_entry)
                .map(|entry| entry.msg.as_str())
                .collect();
            assert_eq!(failures, vec![line], "{:?}", action);
            assert!(
                events.iter().all(|e| e.log_entry().is_some()),
                "{:?} emitted more than log entries",
                action
            );
        }
    }

    #[tokio::test]
    async fn remove_account_success_reloads_accounts_and_status() {
        let mut api = MockBotApi::new();
        api.expect_remove_account()
            .withf(|email: &str| email == "a@example.com")
            .times(1)
            .returning(|_| Ok(ActionResponse::success("Account removed")));
        api.expect_get_accounts().times(1).returning(|| Ok(vec![]));
        api.expect_get_status()
            .times(1)
            .returning(|| Ok(running_status()));
        api.expect_get_urls().times(0);
        let (client, mut rx) = client_with(api);

        client
            .perform(Action::RemoveAccount("a@example.com".to_string()))
            .await;

        let events = drain(&mut rx);
        assert_eq!(log_messages(&events), vec!["Account removed"]);
        assert!(events.iter().any(|e| matches!(e, Event::Accounts(_))));
        assert!(events.iter().any(|e| matches!(e, Event::Status(_))));
    }

    #[tokio::test]
    async fn remove_url_success_reloads_urls_and_status() {
        let mut api = MockBotApi::new();
        api.expect_remove_url()
            .withf(|url: &str| url == "https://www.depop.com/products/x")
            .times(1)
            .returning(|_| Ok(ActionResponse::success("URL removed")));
        api.expect_get_urls().times(1).returning(|| Ok(vec![]));
        api.expect_get_status()
            .times(1)
            .returning(|| Ok(running_status()));
        api.expect_get_accounts().times(0);
        let (client, mut rx) = client_with(api);

        client
            .perform(Action::RemoveUrl(
                "https://www.depop.com/products/x".to_string(),
            ))
            .await;

        let events = drain(&mut rx);
        assert_eq!(log_messages(&events), vec!["URL removed"]);
        assert!(events.iter().any(|e| matches!(e, Event::Urls(_))));
        assert!(events.iter().any(|e| matches!(e, Event::Status(_))));
    }

    #[tokio::test]
    async fn start_success_reloads_status_only() {
        let mut api = MockBotApi::new();
        api.expect_start_bot()
            .times(1)
            .returning(|| Ok(ActionResponse::success("Bot started")));
        api.expect_get_status()
            .times(1)
            .returning(|| Ok(running_status()));
        api.expect_get_accounts().times(0);
        api.expect_get_urls().times(0);
        let (client, mut rx) = client_with(api);

        client.perform(Action::StartBot).await;

        let events = drain(&mut rx);
        assert_eq!(log_messages(&events), vec!["Bot started"]);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, Event::Status(_)))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn failed_status_load_emits_no_snapshot() {
        let mut api = MockBotApi::new();
        api.expect_get_status()
            .returning(|| Err(transport_error()));
        let (client, mut rx) = client_with(api);

        client.load_status().await;

        let events = drain(&mut rx);
        assert!(!events.iter().any(|e| matches!(e, Event::Status(_))));
        assert_eq!(log_messages(&events), vec!["Error loading status"]);
        // The underlying cause travels as a debug-level entry
        assert!(
            events
                .iter()
                .filter_map(Event::log_entry)
                .any(|entry| entry.msg.contains("Bad Gateway"))
        );
    }

    #[tokio::test]
    async fn each_load_draws_a_newer_sequence_number() {
        let mut api = MockBotApi::new();
        api.expect_get_status()
            .times(2)
            .returning(|| Ok(StatusSnapshot::default()));
        let (client, mut rx) = client_with(api);

        client.load_status().await;
        client.load_status().await;

        let seqs: Vec<u64> = drain(&mut rx)
            .into_iter()
            .filter_map(|e| match e {
                Event::Status(snapshot) => Some(snapshot.seq),
                _ => None,
            })
            .collect();
        assert_eq!(seqs, vec![1, 2]);
    }

    #[tokio::test]
    async fn initialize_loads_every_resource() {
        let mut api = MockBotApi::new();
        api.expect_get_status()
            .times(1)
            .returning(|| Ok(StatusSnapshot::default()));
        api.expect_get_accounts().times(1).returning(|| Ok(vec![]));
        api.expect_get_urls().times(1).returning(|| Ok(vec![]));
        let (client, mut rx) = client_with(api);

        client.dispatch(Action::Reload).await.unwrap();

        assert_eq!(drain(&mut rx).len(), 3);
    }
}
