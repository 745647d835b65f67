//! `dialectic` binary: run one debate in the terminal.
//!
//! Turns are printed to stdout as they arrive; logs go to stderr and honour
//! `RUST_LOG`. Ctrl-C stops the debate after the current turn.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dialectic::prelude::*;
use tokio::sync::mpsc;

use crate::cli::Cli;

const DEFAULT_LOG_FILTER: &str = "dialectic=info,dialectic_session=info,warn";

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print events until the debate drops its sender.
async fn print_events(mut rx: mpsc::UnboundedReceiver<SessionEvent>, roster: Roster) {
    while let Some(event) = rx.recv().await {
        match event {
            SessionEvent::Started { topic } => println!("Topic: {topic}\n"),
            SessionEvent::Turn { round, message } => {
                println!(
                    "[{round}] {}: {}\n",
                    roster.label(message.speaker),
                    message.content
                );
            }
            SessionEvent::Failed { error } => eprintln!("turn failed: {error}"),
            SessionEvent::Finished => println!("-- debate finished --"),
            SessionEvent::Stopped => println!("-- debate stopped --"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.session_config();
    let roster = config.roster.clone();

    let (tx, rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(print_events(rx, roster.clone()));

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received, stopping after the current turn");
                cancel.cancel();
            }
        });
    }

    let mut debate =
        Debate::new(cli.hosted_provider(), cli.local_provider(), config).with_events(tx);
    let status = debate.run_topic(cli.topic.clone(), &cancel).await;
    let snapshot = debate.snapshot();
    let last_error = debate.session().last_error().map(str::to_string);
    drop(debate);

    printer.await.context("event printer task failed")?;

    if let Some(path) = &cli.export {
        snapshot
            .write_to(path, &roster)
            .with_context(|| format!("failed to export transcript to {}", path.display()))?;
        tracing::info!(path = %path.display(), turns = snapshot.history.len(), "transcript exported");
    }

    if status == Status::Errored {
        bail!(
            "debate halted after {} turns: {}",
            snapshot.history.len(),
            last_error.unwrap_or_default()
        );
    }
    Ok(())
}
