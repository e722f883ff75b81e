// src/main.rs
//! Terminal front-end for workshop-trigger.
//!
//! Usage:
//!   workshop-trigger [--config <file>] [--key <routing-key>] [--theme] [scenario-id ...]
//!
//! - No scenario ids: prints the catalog.
//! - With ids: triggers each one in turn and prints the history, newest first.
//! - `--theme`: toggles the stored theme and prints it.

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use tracing::{error, warn};

use workshop_trigger::adapter::pagerduty::events_client::PagerDutyEventsClient;
use workshop_trigger::config::app_config::AppConfig;
use workshop_trigger::repository::kv_store::{JsonFileStore, SessionStore};
use workshop_trigger::repository::local_state::{CredentialStore, PreferenceStore};
use workshop_trigger::repository::scenario_catalog::ScenarioCatalog;
use workshop_trigger::service::incident_dispatcher::IncidentDispatcher;
use workshop_trigger::telemetry;
use workshop_trigger::usecase::configure_routing_key::{RoutingKeyError, RoutingKeyState};
use workshop_trigger::usecase::toggle_theme::ThemeState;
use workshop_trigger::usecase::trigger_incident::{TriggerConsole, TriggerOutcome};

#[derive(Debug, Default)]
struct Args {
    config: Vec<PathBuf>,
    key: Option<String>,
    toggle_theme: bool,
    scenarios: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args
                .config
                .push(it.next().context("--config needs a file path")?.into()),
            "--key" => args.key = Some(it.next().context("--key needs a value")?),
            "--theme" => args.toggle_theme = true,
            other if other.starts_with("--") => anyhow::bail!("unknown flag {other}"),
            _ => args.scenarios.push(arg),
        }
    }
    Ok(args)
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<()> {
    let args = parse_args()?;
    let cfg = AppConfig::load_from_sources(&args.config)?;

    if let Err(e) = telemetry::tracing::init_tracing(&cfg.logging) {
        eprintln!("tracing not initialised: {e:#}");
    }

    let session = Arc::new(SessionStore::new());
    let durable = Arc::new(JsonFileStore::new(cfg.preferences_path()));

    let mut theme = ThemeState::load(PreferenceStore::new(durable))?;
    if args.toggle_theme {
        theme.toggle()?;
    }
    println!("theme: {}", theme.theme());

    let mut routing_key = RoutingKeyState::load(CredentialStore::new(session))?;
    if let Some(raw) = args.key.as_deref() {
        match routing_key.save_input(raw) {
            Ok(()) => {}
            Err(RoutingKeyError::Invalid(reason)) => println!("{reason}"),
            Err(RoutingKeyError::Storage(e)) => return Err(e.into()),
        }
    }

    let catalog = ScenarioCatalog::builtin();
    if args.scenarios.is_empty() {
        for s in catalog.all() {
            println!(
                "{:<20} {:<9} {:<11} {} - {}",
                s.id, s.severity, s.component, s.name, s.description
            );
        }
        return Ok(());
    }

    if !routing_key.is_configured() {
        warn!("no routing key configured; pass --key <routing-key>");
    }

    let client = PagerDutyEventsClient::new(cfg.pagerduty.events_url.clone());
    let console = TriggerConsole::new(IncidentDispatcher::new(Arc::new(client)));

    for id in &args.scenarios {
        let Some(scenario) = catalog.find(id) else {
            error!(scenario = %id, "unknown scenario id");
            continue;
        };
        let outcome = console.trigger(routing_key.routing_key(), scenario).await;
        if let TriggerOutcome::NotConfigured = outcome {
            println!("{}: skipped, routing key not configured", scenario.id);
        }
    }

    for entry in console.history().await {
        let detail = entry
            .dedup_key
            .as_deref()
            .or(entry.error_message.as_deref())
            .unwrap_or_default();
        println!(
            "{} {:<7} {:<28} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.status,
            entry.error_type,
            detail
        );
    }
    Ok(())
}
