use anyhow::{bail, Context, Result};

use prompt_actions::config::Config;
use prompt_actions::providers::Providers;

const USAGE: &str = "usage: prompt-actions [check]";

fn init_logging(config: &Config) -> Result<()> {
    let directive = format!("prompt_actions={}", config.global.log_level.as_str())
        .parse()
        .context("Invalid log directive")?;
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(directive);

    let log_file = config.global.log_file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Arc::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

macro_rules! probe {
    ($slot:expr) => {
        match $slot.get() {
            Ok(client) => Some(client.test_connection().await),
            Err(_) => None,
        }
    };
}

/// Returns true when every configured provider answered.
async fn check(providers: &Providers) -> bool {
    let results = [
        (providers.confluence.service(), probe!(providers.confluence)),
        (providers.discord.service(), probe!(providers.discord)),
        (providers.github.service(), probe!(providers.github)),
        (providers.gitlab.service(), probe!(providers.gitlab)),
        (providers.jira.service(), probe!(providers.jira)),
        (providers.slack.service(), probe!(providers.slack)),
    ];

    let mut healthy = true;
    for (service, result) in results {
        match result {
            Some(Ok(())) => println!("{:<11} ok", service),
            Some(Err(e)) => {
                healthy = false;
                tracing::error!("{} connection check failed: {:#}", service, e);
                println!("{:<11} {:#}", service, e);
            }
            None => println!("{:<11} not configured", service),
        }
    }

    healthy
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;

    tracing::info!("=== prompt-actions starting ===");

    let command = std::env::args().nth(1);
    match command.as_deref() {
        None | Some("check") => {
            let providers = Providers::from_config(&config);
            if !check(&providers).await {
                std::process::exit(1);
            }
        }
        Some("-h") | Some("--help") | Some("help") => println!("{}", USAGE),
        Some(other) => bail!("unknown command '{}'\n{}", other, USAGE),
    }

    Ok(())
}
