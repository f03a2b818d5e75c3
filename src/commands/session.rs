use super::{open_map_link, print_prompt, print_view, Spinning};
use crate::domain::cnpj::cap_field;
use crate::services::lookup::PartnerLookup;
use crate::services::render::display_cnpj;
use crate::view::{Key, SearchView};
use colored::Colorize;
use inquire::{InquireError, Text};
use std::process::ExitCode;

#[derive(Debug, PartialEq, Eq)]
pub enum Entry {
    Quit,
    OpenMap,
    ToggleActivities,
    Input(String),
}

/// Interprets one submitted line of the input field.
pub fn parse_entry(line: &str) -> Entry {
    match line.trim() {
        ":q" | ":quit" => Entry::Quit,
        ":open" => Entry::OpenMap,
        ":activities" | ":cnae" => Entry::ToggleActivities,
        _ => Entry::Input(cap_field(line)),
    }
}

const SESSION_COMMANDS: &str = ":open map link, :activities toggle CNAE list, :quit or Esc to leave";

/// Help line under the field. Names the submit action the way the button
/// reads, and offers to repeat the last search when the field still holds a
/// submittable CNPJ.
pub fn prompt_help(view: &SearchView) -> String {
    if !view.input_enabled() {
        return view.submit_label().to_string();
    }
    if view.can_submit() {
        format!(
            "Enter: {} {} again | {}",
            view.submit_label(),
            display_cnpj(view.input()),
            SESSION_COMMANDS
        )
    } else {
        format!("Enter: {} | {}", view.submit_label(), SESSION_COMMANDS)
    }
}

pub fn handle_search(lookup: &dyn PartnerLookup) -> anyhow::Result<ExitCode> {
    let spinning = Spinning::new(lookup);
    let mut view = SearchView::new();
    print_view(&view);

    while view.input_enabled() {
        let help = prompt_help(&view);
        let mut prompt = Text::new("CNPJ:")
            .with_placeholder("14 digits")
            .with_help_message(&help);
        if view.can_submit() {
            prompt = prompt.with_default(view.input());
        }
        let answer = prompt.prompt();
        let line = match answer {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match parse_entry(&line) {
            Entry::Quit => break,
            Entry::OpenMap => match view.result() {
                Some(socio) => open_map_link(&socio.mapa_url),
                None => eprintln!("{}", "No result to open yet".yellow()),
            },
            Entry::ToggleActivities => {
                view.toggle_activities();
                print_view(&view);
            }
            Entry::Input(raw) => {
                view.update_input(&raw);
                match view.on_key(Key::Enter, &spinning) {
                    Ok(()) => print_view(&view),
                    Err(e) => print_prompt(&e, false)?,
                }
            }
        }
    }

    tracing::debug!("search session closed");
    Ok(ExitCode::SUCCESS)
}
