//! Societário Insight: look up a company partner by CNPJ.
//!
//! ## Layers
//! - `domain` — payload structs and CNPJ helpers (no I/O).
//! - `services` — HTTP lookup and rendering.
//! - `view` — the search view state machine.
//! - `commands` — CLI handlers wiring the above to the terminal.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
pub mod view;
