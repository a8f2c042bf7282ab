//! # ProcureX CLI
//!
//! Command-line access to the ProcureX backend, driving the same
//! controllers as the desktop console.
//!
//! ## Commands
//!
//! - `entities` - List the entity kinds the console manages
//! - `list` - List the records of an entity
//! - `delete` - Delete one record (asks first unless `--yes`)
//! - `finalize` - Mark a vendor as finalized or not
//! - `signin` - Check credentials against the backend
//!

pub mod output;

use std::io::{self, BufRead, Write};

use anyhow::{Context, anyhow, bail};
use clap::{Parser, Subcommand};
use procurex_client::{ApiClient, AuthClient, Credentials};
use procurex_controller::{CrudController, Session};
use procurex_core::config::normalize_base_url;
use procurex_core::{ConsoleConfig, ConsoleError, Record, RecordId};
use procurex_schema::EntitySchema;
use procurex_schema::catalog::{self, VENDOR};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Arguments
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "procurex-cli",
    version,
    about = "Command-line access to the ProcureX backend"
)]
pub struct Cli {
    /// Backend base URL; overrides procurex.toml and PROCUREX_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the entity kinds the console manages
    Entities,

    /// List the records of an entity
    List {
        /// Entity name, e.g. `vendor` or `receipts`
        entity: String,

        /// Id of the owning product or vendor
        #[arg(long)]
        parent: Option<String>,

        /// Only finalized records, as filtered by the server
        #[arg(long)]
        finalized: bool,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Delete one record
    Delete {
        entity: String,
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Mark a vendor as finalized
    Finalize {
        vendor_id: String,

        /// Clear the flag instead
        #[arg(long)]
        off: bool,
    },

    /// Check credentials against the backend
    Signin {
        #[arg(long)]
        email: String,

        #[arg(long, env = "PROCUREX_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

// ============================================================================
// Commands
// ============================================================================

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Entities => {
            print!("{}", output::entities_table(catalog::catalog()));
            Ok(())
        }
        Command::List {
            entity,
            parent,
            finalized,
            json,
        } => {
            let api = connect(cli.api_url.as_deref())?;
            let format = if json { Format::Json } else { Format::Table };
            list(&api, &entity, parent.as_deref(), finalized, format).await
        }
        Command::Delete { entity, id, yes } => {
            let api = connect(cli.api_url.as_deref())?;
            delete(&api, &entity, &id, yes).await
        }
        Command::Finalize { vendor_id, off } => {
            let api = connect(cli.api_url.as_deref())?;
            finalize(&api, &vendor_id, !off).await
        }
        Command::Signin { email, password } => {
            let api = connect(cli.api_url.as_deref())?;
            sign_in(&api, email, password).await
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Table,
    Json,
}

async fn list(
    api: &ApiClient,
    entity: &str,
    parent: Option<&str>,
    finalized: bool,
    format: Format,
) -> anyhow::Result<()> {
    let schema = catalog::find(entity)?;
    let parent = parent.map(parse_id).transpose()?;
    let require_parent = |parent: Option<RecordId>| {
        parent.ok_or_else(|| ConsoleError::MissingParent {
            entity: schema.name.to_string(),
        })
    };

    if schema.singleton {
        let parent = require_parent(parent)?;
        let record = api.resource(schema).fetch_single(&parent).await?;
        match format {
            Format::Table => print!("{}", output::record_details(schema, &record)),
            Format::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        }
        return Ok(());
    }

    if finalized {
        if schema.paths.finalized.is_none() {
            bail!("{} have no finalized list", schema.plural_label);
        }
        let parent = require_parent(parent)?;
        let records = api.resource(schema).list_finalized(&parent).await?;
        return print_records(schema, &records, format);
    }

    let mut controller = CrudController::new(api.resource(schema), parent);
    controller.load().await?;
    print_records(schema, controller.items(), format)
}

fn print_records(schema: &EntitySchema, records: &[Record], format: Format) -> anyhow::Result<()> {
    match format {
        Format::Table => print!("{}", output::records_table(schema, records)),
        Format::Json => println!("{}", serde_json::to_string_pretty(records)?),
    }
    Ok(())
}

async fn delete(api: &ApiClient, entity: &str, id: &str, yes: bool) -> anyhow::Result<()> {
    let schema = catalog::find(entity)?;
    let id = parse_id(id)?;

    let question = format!("Delete {} {}?", schema.label.to_lowercase(), id);
    if !yes && !confirm(&question)? {
        println!("Cancelled");
        return Ok(());
    }

    let mut controller = CrudController::new(api.resource(schema), None);
    controller.request_delete(id);
    let result = controller.confirm_delete().await;
    output::print_notification(controller.state().notification());
    Ok(result?)
}

async fn finalize(api: &ApiClient, vendor_id: &str, value: bool) -> anyhow::Result<()> {
    let id = parse_id(vendor_id)?;
    let mut controller = CrudController::new(api.resource(&VENDOR), None);
    let result = controller.toggle(id, value).await;
    output::print_notification(controller.state().notification());
    Ok(result?)
}

async fn sign_in(api: &ApiClient, email: String, password: String) -> anyhow::Result<()> {
    let mut session = Session::new();
    session.begin_request();

    let credentials = Credentials::new(email, password);
    match AuthClient::new(api.clone()).sign_in(&credentials).await {
        Ok(()) => session.sign_in_succeeded(credentials.email),
        Err(err) => session.sign_in_failed(&err),
    }

    match session.email() {
        Some(email) => {
            output::print_success(&format!("Signed in as {email}"));
            Ok(())
        }
        None => {
            let message = session
                .notification()
                .map(|n| n.message.clone())
                .unwrap_or_else(|| "Sign in failed".to_string());
            Err(anyhow!(message))
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the API client from configuration plus the `--api-url` flag
fn connect(api_url: Option<&str>) -> anyhow::Result<ApiClient> {
    let mut config = ConsoleConfig::load().context("Failed to load configuration")?;
    if let Some(url) = api_url {
        config.api.base_url = normalize_base_url(url)?;
    }
    tracing::debug!("Using backend {}", config.api.base_url);
    Ok(ApiClient::from_config(&config.api)?)
}

fn parse_id(raw: &str) -> anyhow::Result<RecordId> {
    RecordId::parse(raw).ok_or_else(|| anyhow!("Invalid id '{raw}'"))
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_parent() {
        let cli = Cli::parse_from(["procurex-cli", "list", "vendors", "--parent", "7"]);
        match cli.command {
            Command::List {
                entity,
                parent,
                finalized,
                json,
            } => {
                assert_eq!(entity, "vendors");
                assert!(!json);
                assert_eq!(parent.as_deref(), Some("7"));
                assert!(!finalized);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_finalize_off() {
        let cli = Cli::parse_from(["procurex-cli", "finalize", "3", "--off"]);
        assert!(matches!(cli.command, Command::Finalize { off: true, .. }));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), RecordId::Int(42));
        assert!(parse_id("  ").is_err());
    }
}
