//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `cnpj.rs` — identifier sanitizing, validation and display formatting.
//! - `models.rs` — partner/registry payloads, error body, output envelope.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! The payload structs are serialized back out by `--json`. Keep them in sync
//! with `docs/contracts/lookup.schema.json`.

pub mod cnpj;
pub mod models;
