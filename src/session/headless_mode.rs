//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
    report::event_lines,
};
use crate::dashboard::AppliedSequence;
use crate::events::{Event, Resource};
use std::error::Error;

/// Runs the dashboard in headless mode
///
/// Prints the initial snapshots, every status change and every activity log
/// entry until Ctrl+C.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.client.base_url());

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    session.start_dashboard();

    let mut applied = AppliedSequence::default();
    let mut last_status: Option<Vec<String>> = None;

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                let fresh = match &event {
                    Event::Status(s) => applied.accept(Resource::Status, s.seq),
                    Event::Accounts(s) => applied.accept(Resource::Accounts, s.seq),
                    Event::Urls(s) => applied.accept(Resource::Urls, s.seq),
                    _ => true,
                };
                if !fresh {
                    continue;
                }
                let lines = event_lines(&event);
                // Polls repeat the same status every few seconds
                if let Event::Status(_) = event {
                    if last_status.as_ref() == Some(&lines) {
                        continue;
                    }
                    last_status = Some(lines.clone());
                }
                for line in lines {
                    println!("{}", line);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    for handle in session.join_handles.drain(1..) {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
