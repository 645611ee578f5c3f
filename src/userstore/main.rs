use clap::Parser;
use colored::*;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use userstore::api::{self, CmdMessage, CmdResult, MessageLevel};
use userstore::config::StoreConfig;
use userstore::error::{Result, UserStoreError};

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = StoreConfig::load_or_default(cli.config.as_deref())?;

    let result = api::perform(&cli.arguments(), &config)?;
    print_result(&result)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(bytes) = &result.listing {
        out.write_all(bytes)
            .map_err(|e| UserStoreError::file("<stdout>", e))?;
    }
    if let Some(user) = &result.found {
        let bytes = serde_json::to_vec(user)?;
        out.write_all(&bytes)
            .map_err(|e| UserStoreError::file("<stdout>", e))?;
    }
    out.flush().map_err(|e| UserStoreError::file("<stdout>", e))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
        }
    }
}
