use super::{open_map_link, print_prompt, print_view, Spinning, EXIT_INVALID_INPUT};
use crate::cli::Cli;
use crate::domain::cnpj::{format_cnpj, sanitize};
use crate::domain::models::JsonOut;
use crate::services::lookup::PartnerLookup;
use crate::services::render::print_snapshot;
use crate::view::{Key, SearchView};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Serialize)]
struct FormattedCnpj {
    cnpj: String,
    formatted: String,
}

/// Types `raw` into a fresh view and presses Enter.
pub fn handle_lookup(
    cli: &Cli,
    lookup: &dyn PartnerLookup,
    raw: &str,
    open: bool,
    activities: bool,
) -> anyhow::Result<ExitCode> {
    let mut view = SearchView::new();
    view.update_input(raw);

    if let Err(e) = view.on_key(Key::Enter, &Spinning::new(lookup)) {
        tracing::debug!(input = view.input(), "lookup rejected before request");
        print_prompt(&e, cli.json)?;
        return Ok(ExitCode::from(EXIT_INVALID_INPUT));
    }
    if activities {
        view.toggle_activities();
    }

    if cli.json {
        print_snapshot(&view)?;
    } else {
        print_view(&view);
    }

    match view.result() {
        Some(socio) => {
            if open {
                open_map_link(&socio.mapa_url);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

pub fn handle_format(cli: &Cli, raw: &str) -> anyhow::Result<ExitCode> {
    let cnpj = sanitize(raw);
    let formatted = format_cnpj(&cnpj)?;
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: FormattedCnpj { cnpj, formatted }
            })?
        );
    } else {
        println!("{}", formatted);
    }
    Ok(ExitCode::SUCCESS)
}
