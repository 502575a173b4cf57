//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CreativeFuse - turn rough ideas into action plans
#[derive(Parser)]
#[command(
    name = "cf",
    about = "Idea boosting backend: HTTP API plus one-shot commands",
    version = env!("GIT_DESCRIBE"),
    after_help = "The provider API key is read from the variable named by llm.api-key-env (default OPENROUTER_API_KEY)."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, help = "Log level (overrides config)")]
    pub log_level: Option<String>,

    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Boost one idea and print the plan
    Boost {
        /// The idea text
        #[arg(value_name = "IDEA")]
        idea: String,
    },

    /// Generate a fresh idea for a domain
    Generate {
        /// Domain to generate in, e.g. agriculture
        #[arg(short, long)]
        domain: String,

        /// Comma-separated keywords to weave in
        #[arg(short, long, default_value = "")]
        keywords: String,

        /// Style adjective, e.g. practical or playful
        #[arg(short, long, default_value = "creative")]
        style: String,
    },

    /// Print the category for some text (offline)
    Categorize {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List all categories (offline)
    Categories,
}
