//! Single-action commands
//!
//! Performs one dashboard action, prints what it reported and exits.

use super::{SessionData, report::event_lines};
use crate::dashboard::Action;

/// Runs `action` to completion and prints every event it produced.
///
/// Returns an error naming the first failure if any operation logged one.
pub async fn run_oneshot(session: SessionData, action: Action) -> Result<(), String> {
    let SessionData {
        client,
        mut event_receiver,
        ..
    } = session;

    client.perform(action).await;
    // Every sender lives inside `client`; dropping it ends the stream.
    drop(client);

    let mut failure = None;
    while let Some(event) = event_receiver.recv().await {
        if failure.is_none() && event.is_failure() {
            failure = event.log_entry().map(|entry| entry.msg.clone());
        }
        for line in event_lines(&event) {
            println!("{}", line);
        }
    }

    match failure {
        Some(msg) => Err(msg),
        None => Ok(()),
    }
}
