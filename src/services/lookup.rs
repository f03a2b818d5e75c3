use crate::domain::models::SocioDetalhe;
use reqwest::StatusCode;
use serde_json::Value;

pub const FALLBACK_SERVER_MESSAGE: &str = "Error fetching company data.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// Failure of a single lookup. `Display` is the message shown to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("{}", UNKNOWN_ERROR_MESSAGE)]
    Unknown,
}

impl LookupError {
    /// Classifies a transport/parse failure by the message it carries.
    pub fn from_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            LookupError::Unknown
        } else {
            LookupError::Transport(message)
        }
    }
}

pub trait PartnerLookup {
    fn fetch_socio(&self, cnpj: &str) -> Result<SocioDetalhe, LookupError>;
}

pub struct HttpLookup {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpLookup {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn socio_url(&self, cnpj: &str) -> String {
        format!("{}/socios/{}", self.base_url, cnpj)
    }
}

impl PartnerLookup for HttpLookup {
    fn fetch_socio(&self, cnpj: &str) -> Result<SocioDetalhe, LookupError> {
        let url = self.socio_url(cnpj);
        tracing::debug!(%url, "requesting partner data");
        let resp = self.client.get(&url).send().map_err(|e| {
            tracing::info!(error = %e, "partner request failed");
            LookupError::from_failure(e.to_string())
        })?;
        let status = resp.status();
        tracing::debug!(status = status.as_u16(), "partner service responded");
        let body = resp
            .text()
            .map_err(|e| LookupError::from_failure(e.to_string()))?;
        interpret_response(status, &body)
    }
}

pub fn interpret_response(status: StatusCode, body: &str) -> Result<SocioDetalhe, LookupError> {
    if status.is_success() {
        return serde_json::from_str(body).map_err(|e| {
            tracing::warn!(error = %e, "partner payload did not parse");
            LookupError::from_failure(e.to_string())
        });
    }

    let message = error_detalhes(body).unwrap_or_else(|| FALLBACK_SERVER_MESSAGE.to_string());
    tracing::info!(status = status.as_u16(), %message, "partner service reported failure");
    Err(LookupError::Server {
        status: status.as_u16(),
        message,
    })
}

/// `detalhes` of an error body. The other fields of the body (`status`,
/// `titulo`, `validacao`) are not read, so their shape does not matter.
fn error_detalhes(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    parsed
        .get("detalhes")?
        .as_str()
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
