//! # Connection String Checker
//!
//! Resolves the configured broker and result backend and reports which client
//! family each string selects, without connecting to anything.

use std::process;

use anyhow::Context;
use broker_resolver::logging::{init_structured_logging, redact_error, redact_url};
use broker_resolver::{
    resolve_backend, resolve_broker, Config, ResolverError, ResolverResult, Role, Scheme,
};
use clap::Parser;
use serde_json::json;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "resolve-check")]
#[command(about = "Check that broker and result backend connection strings resolve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file (YAML, TOML or JSON); defaults plus environment when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Broker connection string, overriding the configuration
    #[arg(long)]
    broker: Option<String>,

    /// Result backend connection string, overriding the configuration
    #[arg(long)]
    backend: Option<String>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_structured_logging();

    match run(&cli) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Connection string check failed: {e:#}");
            process::exit(2);
        }
    }
}

/// Returns whether both strings resolved
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {path}"))?,
        None => Config::from_env().context("reading configuration from environment")?,
    };
    if let Some(broker) = &cli.broker {
        config.broker = broker.clone();
    }
    if let Some(backend) = &cli.backend {
        config.result_backend = backend.clone();
    }

    let broker = resolve_broker(&config).map(|b| b.provider_name());
    let backend = resolve_backend(&config).map(|b| b.provider_name());
    let ok = broker.is_ok() && backend.is_ok();

    if cli.json {
        let report = json!({
            "broker": entry(Role::Broker, &config.broker, &broker),
            "result_backend": entry(Role::Backend, &config.result_backend, &backend),
            "ok": ok,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_line(Role::Broker, &config.broker, &broker);
        print_line(Role::Backend, &config.result_backend, &backend);
    }

    info!(ok = ok, "Connection string check finished");
    Ok(ok)
}

fn entry(role: Role, url: &str, outcome: &ResolverResult<&'static str>) -> serde_json::Value {
    match outcome {
        Ok(provider) => json!({ "url": redact_url(url), "provider": provider }),
        Err(e) => json!({
            "url": redact_url(url),
            "error": redact_error(e),
            "supported": supported_hint(role, e),
        }),
    }
}

fn print_line(role: Role, url: &str, outcome: &ResolverResult<&'static str>) {
    let label = match role {
        Role::Broker => "broker",
        Role::Backend => "result backend",
    };
    match outcome {
        Ok(provider) => println!("✅ {label}: {} -> {provider}", redact_url(url)),
        Err(e) => {
            println!("❌ {label}: {}", redact_error(e));
            if let Some(prefixes) = supported_hint(role, e) {
                println!("   supported prefixes: {}", prefixes.join(", "));
            }
        }
    }
}

/// Accepted prefixes for `role`, only when the scheme itself was not recognized
fn supported_hint(role: Role, err: &ResolverError) -> Option<Vec<&'static str>> {
    err.is_unsupported().then(|| Scheme::supported_prefixes(role))
}
