use anyhow::Context;
use clap::Parser;
use roll_client::Level;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod router;
mod ui;

use commands::shared::notify::NotificationError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        match error.downcast_ref::<NotificationError>() {
            Some(NotificationError(note)) if note.level == Level::Warning => {
                eprintln!("roll warning: {}", note.message);
            }
            Some(NotificationError(note)) => eprintln!("roll error: {}", note.message),
            None => eprintln!("roll error: {error:#}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    let ctx = context::AppContext::init(config)
        .context("failed to initialize rollcall application context")?;
    ctx.spawn_interrupt_handler();

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ROLLCALL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
