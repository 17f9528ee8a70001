//! CLI argument parsing for the policy browser.
//!
//! The CLI is intentionally thin: it wires user intent into view-model
//! operations without embedding any fetch or display logic of its own.
use clap::{Parser, Subcommand};
use std::env;

/// Fallback server address; the accounting service binds here by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable consulted when `--base-url` is not given.
pub const BASE_URL_ENV: &str = "POLICY_BROWSER_URL";

/// Root CLI entrypoint for the policy browser.
#[derive(Parser, Debug)]
#[command(
    name = "polb",
    version,
    about = "Browse insurance policies, invoices, and payments from an accounting API",
    after_help = "Examples:\n  polb list\n  polb show --policy-id 2\n  polb show --policy-id 2 --date 2015-6-1\n  polb --base-url http://accounting.example.com list",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Base URL of the accounting server (falls back to POLICY_BROWSER_URL,
    /// then http://localhost:5000)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level browser commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    List(ListArgs),
    Show(ShowArgs),
}

/// List command inputs.
#[derive(Parser, Debug)]
#[command(about = "Show the policy list")]
pub struct ListArgs {}

/// Show command inputs for one policy's detail view.
#[derive(Parser, Debug)]
#[command(about = "Show one policy with its invoices and payments")]
pub struct ShowArgs {
    /// Policy id to display
    #[arg(long, value_name = "ID")]
    pub policy_id: String,

    /// As-of date in Y-M-D form (defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

/// Resolve the server base URL: flag, then environment, then default.
pub fn resolve_base_url(flag: Option<&str>) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    if let Ok(url) = env::var(BASE_URL_ENV) {
        if !url.is_empty() {
            return url;
        }
    }
    DEFAULT_BASE_URL.to_string()
}
