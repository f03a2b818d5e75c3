use crate::domain::cnpj::format_cnpj;
use crate::domain::models::{Atividade, Classificacao, DadosReceita, Estabelecimento, JsonOut, SocioDetalhe};
use crate::view::{SearchView, ViewState};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use serde::Serialize;

pub const EMPTY_STATE_PROMPT: &str = "Enter a CNPJ (14 digits) and press Enter to search";

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewSnapshot<'a> {
    Idle,
    Loading,
    Succeeded {
        cnpj_formatted: String,
        result: &'a SocioDetalhe,
    },
    Failed {
        message: &'a str,
    },
}

impl ViewSnapshot<'_> {
    pub fn is_success(&self) -> bool {
        matches!(self, ViewSnapshot::Succeeded { .. })
    }
}

pub fn snapshot(view: &SearchView) -> ViewSnapshot<'_> {
    match view.state() {
        ViewState::Idle => ViewSnapshot::Idle,
        ViewState::Loading { .. } => ViewSnapshot::Loading,
        ViewState::Succeeded(s) => ViewSnapshot::Succeeded {
            cnpj_formatted: display_cnpj(&s.cnpj),
            result: s.as_ref(),
        },
        ViewState::Failed(message) => ViewSnapshot::Failed {
            message: message.as_str(),
        },
    }
}

pub fn print_snapshot(view: &SearchView) -> anyhow::Result<()> {
    let data = snapshot(view);
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut {
            ok: data.is_success(),
            data
        })?
    );
    Ok(())
}

/// Formatted CNPJ, or the raw value when the server sent something that is
/// not 14 digits.
pub fn display_cnpj(raw: &str) -> String {
    match format_cnpj(raw) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::warn!(error = %e, "showing unformatted CNPJ");
            raw.to_string()
        }
    }
}

pub fn format_participation(value: f64) -> String {
    format!("{}%", value)
}

/// Plain-text rendering of the current state.
pub fn render_view(view: &SearchView) -> String {
    match view.state() {
        ViewState::Idle => EMPTY_STATE_PROMPT.to_string(),
        ViewState::Loading { .. } => view.submit_label().to_string(),
        ViewState::Failed(message) => render_error(message),
        ViewState::Succeeded(s) => render_result(s, view.activities_expanded()),
    }
}

pub fn render_error(message: &str) -> String {
    format!("Error: {}", message)
}

pub fn render_result(socio: &SocioDetalhe, activities_expanded: bool) -> String {
    let cnpj = display_cnpj(&socio.cnpj);
    let participation = format_participation(socio.participacao);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Name", "CNPJ", "Participation", "Action"]);
    table.add_row(vec![
        socio.nome.as_str(),
        cnpj.as_str(),
        participation.as_str(),
        socio.mapa_url.as_str(),
    ]);

    let mut out = vec![table.to_string(), String::new()];
    out.push(detail_line("Partner", &socio.nome));
    out.push(detail_line("CNPJ", &cnpj));
    out.push(detail_line("Participation", &participation));

    let registry = render_registry(&socio.registry(), activities_expanded);
    if !registry.is_empty() {
        out.push(String::new());
        out.extend(registry);
    }
    out.join("\n")
}

fn detail_line(label: &str, value: &str) -> String {
    format!("{:<15}{}", label, value)
}

fn render_registry(dados: &DadosReceita, activities_expanded: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(name) = dados.razao_social.as_deref() {
        lines.push(detail_line("Legal name", name));
    }
    if let Some(address) = dados.primary_establishment().and_then(format_address) {
        lines.push(detail_line("Address", &address));
    }
    if let Some(porte) = dados.porte.as_ref().and_then(format_classification) {
        lines.push(detail_line("Size", &porte));
    }
    if let Some(nature) = dados.natureza_juridica.as_ref().and_then(format_classification) {
        lines.push(detail_line("Legal nature", &nature));
    }
    if let Some(capital) = dados.capital_social {
        lines.push(detail_line("Share capital", &format!("R$ {:.2}", capital)));
    }

    let primary = &dados.atividade_principal;
    let secondary = &dados.atividades_secundarias;
    let total = primary.len() + secondary.len();
    if total > 0 {
        if activities_expanded {
            lines.push(format!("Activities ({})", total));
            lines.extend(primary.iter().map(|a| format!("  * {}", format_activity(a))));
            lines.extend(secondary.iter().map(|a| format!("  - {}", format_activity(a))));
        } else {
            lines.push(format!("Activities ({}) [collapsed]", total));
        }
    }
    lines
}

fn format_address(e: &Estabelecimento) -> Option<String> {
    let street = [e.logradouro.as_deref(), e.numero.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    let city = match (e.municipio.as_deref(), e.uf.as_deref()) {
        (Some(m), Some(uf)) => Some(format!("{}/{}", m, uf)),
        (Some(m), None) => Some(m.to_string()),
        (None, Some(uf)) => Some(uf.to_string()),
        (None, None) => None,
    };
    let cep = e.cep.as_deref().map(|c| format!("CEP {}", c));
    let parts: Vec<String> = [
        Some(street).filter(|s| !s.is_empty()),
        e.bairro.clone(),
        city,
        cep,
    ]
    .into_iter()
    .flatten()
    .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" - "))
    }
}

fn format_classification(c: &Classificacao) -> Option<String> {
    match (c.descricao.as_deref(), c.id.as_deref()) {
        (Some(d), Some(id)) => Some(format!("{} ({})", d, id)),
        (Some(d), None) => Some(d.to_string()),
        (None, Some(id)) => Some(id.to_string()),
        (None, None) => None,
    }
}

fn format_activity(a: &Atividade) -> String {
    match (a.code.as_deref(), a.text.as_deref()) {
        (Some(code), Some(text)) => format!("{} {}", code, text),
        (Some(code), None) => code.to_string(),
        (None, Some(text)) => text.to_string(),
        (None, None) => "?".to_string(),
    }
}
