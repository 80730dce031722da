//! Generates the resource request for the OAI LTE profile.
//!
//! The binary binds the portal-supplied parameter values, verifies them, and
//! prints the resulting RSpec document to standard output:
//!
//! ```bash
//! oai-profile --parameters bound-values.json > request.xml
//! ```
//!
//! When verification fails, the collected diagnostics are printed to standard
//! error as JSON and the process exits non-zero.
#![allow(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use anyhow::Result;
use clap::Parser;
use swapin::portal::Error;
use swapin_oai::Params;
use swapin_oai::params;
use swapin_oai::topology;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[derive(Debug, Parser)]
#[command(name = "oai-profile")]
struct Args {
    /// A JSON file of bound parameter values.
    ///
    /// Defaults to the portal's binding sources (`parameters.json`, the file
    /// named by `SWAPIN_PARAMS`, and `SWAPIN_PARAM_*` environment variables).
    #[arg(short, long)]
    parameters: Option<PathBuf>,
}

/// Binds, verifies, builds, and emits.
fn run(args: Args) -> Result<String> {
    let context = params::context();

    let bindings = match &args.parameters {
        Some(path) => context.bind_file(path),
        None => context.bind(),
    }
    .context("gathering bound parameter values")?;

    match context.verify(&bindings) {
        Ok(warnings) => {
            for warning in warnings {
                warn!("{warning}");
            }
        }
        Err(err) => {
            if let Error::Invalid(diagnostics) = &err {
                eprintln!("{}", serde_json::to_string_pretty(diagnostics)?);
            }
            return Err(err).context("verifying bound parameter values");
        }
    }

    let params = Params::from_bindings(&bindings)?;
    let request = topology::build(&params)?;
    Ok(request.emit()?)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(document) => {
            println!("{document}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
