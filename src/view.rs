//! The search view: one input, one submit action, four mutually exclusive
//! display states.
//!
//! Every submission is tagged with a [`RequestToken`]. Only the completion
//! carrying the most recent token may change the state; older completions
//! are dropped.

use crate::domain::cnpj::{self, ValidationError};
use crate::domain::models::SocioDetalhe;
use crate::services::lookup::{LookupError, PartnerLookup};

pub const SUBMIT_LABEL: &str = "Search";
pub const SUBMIT_LABEL_BUSY: &str = "Searching…";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading { token: RequestToken },
    Succeeded(Box<SocioDetalhe>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// A submission that passed validation and is waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub token: RequestToken,
    pub cnpj: String,
}

#[derive(Debug)]
pub struct SearchView {
    input: String,
    state: ViewState,
    last_token: u64,
    activities_expanded: bool,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            state: ViewState::Idle,
            last_token: 0,
            activities_expanded: false,
        }
    }

    pub fn update_input(&mut self, raw: &str) {
        self.input = cnpj::sanitize(raw);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    pub fn input_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && cnpj::validate(&self.input).is_ok()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn result(&self) -> Option<&SocioDetalhe> {
        match &self.state {
            ViewState::Succeeded(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn activities_expanded(&self) -> bool {
        self.activities_expanded
    }

    pub fn toggle_activities(&mut self) {
        self.activities_expanded = !self.activities_expanded;
    }

    /// Validates the input and enters the loading state. On a validation
    /// failure nothing changes and no request may be issued.
    pub fn begin_search(&mut self) -> Result<PendingSearch, ValidationError> {
        cnpj::validate(&self.input)?;
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.state = ViewState::Loading { token };
        self.activities_expanded = false;
        Ok(PendingSearch {
            token,
            cnpj: self.input.clone(),
        })
    }

    /// Applies a finished lookup. Returns `false` when the completion was
    /// superseded by a newer submission and therefore ignored.
    pub fn complete_search(
        &mut self,
        token: RequestToken,
        outcome: Result<SocioDetalhe, LookupError>,
    ) -> bool {
        match self.state {
            ViewState::Loading { token: current } if current == token => {}
            _ => {
                tracing::debug!(?token, "discarding stale lookup completion");
                return false;
            }
        }
        self.state = match outcome {
            Ok(socio) => ViewState::Succeeded(Box::new(socio)),
            Err(e) => ViewState::Failed(e.to_string()),
        };
        true
    }

    pub fn submit_search<L: PartnerLookup + ?Sized>(
        &mut self,
        lookup: &L,
    ) -> Result<(), ValidationError> {
        let pending = self.begin_search()?;
        let outcome = lookup.fetch_socio(&pending.cnpj);
        self.complete_search(pending.token, outcome);
        Ok(())
    }

    pub fn on_key<L: PartnerLookup + ?Sized>(
        &mut self,
        key: Key,
        lookup: &L,
    ) -> Result<(), ValidationError> {
        match key {
            Key::Enter => self.submit_search(lookup),
            Key::Other => Ok(()),
        }
    }
}
