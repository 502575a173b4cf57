//! CreativeFuse - idea boosting backend
//!
//! CLI entry point: runs the HTTP API or a one-shot flow.

use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use creativefuse::categorize::{self, Category};
use creativefuse::cli::{Cli, Command};
use creativefuse::config::Config;
use creativefuse::llm;
use creativefuse::server;
use creativefuse::service::IdeaService;
use creativefuse::stats::UsageTracker;

fn setup_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Invalid log level")?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    info!("Logging initialized (level: {})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Level priority: CLI flag, then config file, then info
    let level = cli
        .log_level
        .clone()
        .or_else(|| Config::load_log_level(cli.config.as_ref()))
        .unwrap_or_else(|| "info".to_string());
    setup_logging(&level).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("CreativeFuse loaded config: model={}", config.llm.model);

    match cli.command {
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await,
        Some(Command::Boost { idea }) => cmd_boost(&config, &idea).await,
        Some(Command::Generate {
            domain,
            keywords,
            style,
        }) => cmd_generate(&config, &domain, &keywords, &style).await,
        Some(Command::Categorize { text }) => cmd_categorize(&text),
        Some(Command::Categories) => cmd_categories(),
        None => cmd_serve(config, None, None).await,
    }
}

/// Build the service; fails when the provider key is missing
fn build_service(config: &Config) -> Result<Arc<IdeaService>> {
    config.validate().context("Invalid configuration")?;
    let client = llm::create_client(&config.llm)?;
    let service = IdeaService::new(config, client, Arc::new(UsageTracker::new()))
        .context("Failed to compile prompt templates")?;
    Ok(Arc::new(service))
}

async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let service = build_service(&config)?;
    server::serve(service, &config.server).await
}

async fn cmd_boost(config: &Config, idea: &str) -> Result<()> {
    let service = build_service(config)?;
    let outcome = match service.boost(idea).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e.user_message());
            eprintln!("{} {}", "Suggestion:".yellow(), e.suggestion());
            return Err(e).context("Boost failed");
        }
    };

    println!(
        "{} {} ({} words, {:.2}s)",
        "Category:".bright_cyan().bold(),
        outcome.category.display_name(),
        outcome.word_count,
        outcome.processing_time
    );
    println!();
    println!("{}", outcome.boosted_idea);
    Ok(())
}

async fn cmd_generate(config: &Config, domain: &str, keywords: &str, style: &str) -> Result<()> {
    let service = build_service(config)?;
    let idea = service
        .generate(domain, keywords, style)
        .await
        .context("Failed to generate idea")?;

    println!("{}", "Generated idea".bright_cyan().bold());
    println!("{}", idea);
    Ok(())
}

fn cmd_categorize(text: &str) -> Result<()> {
    let category = categorize::classify(text);
    println!("{} ({})", category.display_name().bold(), category.as_str().dimmed());
    Ok(())
}

fn cmd_categories() -> Result<()> {
    for category in Category::ALL {
        println!("{} {}", category.as_str().bright_cyan().bold(), format!("- {}", category.display_name()).dimmed());
        println!("    {}", category.description());
        for example in category.examples() {
            println!("    * {}", example);
        }
    }
    Ok(())
}
