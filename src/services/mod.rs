//! Service layer containing the lookup client and presentation helpers.
//!
//! ## Service map
//! - `lookup.rs` — `PartnerLookup` seam, HTTP client, response classification.
//! - `render.rs` — text/JSON rendering of the search view.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod lookup;
pub mod render;
