//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — one-shot `lookup` and `format`.
//! - `session.rs` — interactive `search` session.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*` and `view`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod session;

use crate::cli::{Cli, Commands};
use crate::domain::cnpj::ValidationError;
use crate::domain::models::{JsonOut, SocioDetalhe};
use crate::services::lookup::{HttpLookup, LookupError, PartnerLookup};
use crate::services::render::{render_error, render_view};
use crate::view::{SearchView, ViewState, SUBMIT_LABEL_BUSY};
use colored::Colorize;
use indicatif::ProgressBar;
use std::process::ExitCode;
use std::time::Duration;

/// Exit code for input that never reached the server.
pub const EXIT_INVALID_INPUT: u8 = 2;

pub use runtime::{handle_format, handle_lookup};
pub use session::handle_search;

pub fn handle_commands(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::Lookup {
            cnpj,
            open,
            activities,
        } => {
            let lookup = HttpLookup::new(&cli.api_base_url)?;
            handle_lookup(cli, &lookup, cnpj, *open, *activities)
        }
        Commands::Format { cnpj } => handle_format(cli, cnpj),
        Commands::Search => {
            let lookup = HttpLookup::new(&cli.api_base_url)?;
            handle_search(&lookup)
        }
    }
}

/// Shows a spinner with the busy submit label while the wrapped lookup runs.
pub struct Spinning<'a> {
    inner: &'a dyn PartnerLookup,
}

impl<'a> Spinning<'a> {
    pub fn new(inner: &'a dyn PartnerLookup) -> Self {
        Self { inner }
    }
}

impl PartnerLookup for Spinning<'_> {
    fn fetch_socio(&self, cnpj: &str) -> Result<SocioDetalhe, LookupError> {
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(SUBMIT_LABEL_BUSY);
        let outcome = self.inner.fetch_socio(cnpj);
        spinner.finish_and_clear();
        outcome
    }
}

/// Blocking prompt for input rejected before any request.
pub fn print_prompt(err: &ValidationError, json: bool) -> anyhow::Result<()> {
    eprintln!("{}", err.to_string().yellow().bold());
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: false,
                data: serde_json::json!({"state": "invalid", "message": err.to_string()}),
            })?
        );
    }
    Ok(())
}

pub fn print_view(view: &SearchView) {
    match view.state() {
        ViewState::Failed(message) => println!("{}", render_error(message).red().bold()),
        ViewState::Succeeded(_) => println!("{}", render_view(view)),
        ViewState::Idle | ViewState::Loading { .. } => println!("{}", render_view(view).dimmed()),
    }
}

/// Link-out action: opens the result's map view in the system browser.
pub fn open_map_link(url: &str) {
    tracing::info!(%url, "opening map link");
    if let Err(e) = open::that(url) {
        eprintln!("{}", format!("Failed to open browser: {}", e).yellow());
        eprintln!("Please manually open: {}", url);
    }
}
