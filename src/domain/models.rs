use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Partner record returned by `GET /socios/{cnpj}`.
///
/// `dadosReceita` is kept exactly as the server sent it (nulls and unknown
/// keys included) so `--json` can pass it through. Use [`SocioDetalhe::registry`]
/// for the fields the text view shows.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocioDetalhe {
    pub nome: String,
    pub participacao: f64,
    pub cnpj: String,
    #[serde(default)]
    pub dados_receita: Value,
    pub mapa_url: String,
}

impl SocioDetalhe {
    pub fn registry(&self) -> DadosReceita {
        DadosReceita::from_value(&self.dados_receita)
    }
}

/// Registry fields the text view knows how to show. Built best-effort: a
/// field with an unexpected shape is left out instead of failing the lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DadosReceita {
    pub razao_social: Option<String>,
    pub estabelecimento: Option<Estabelecimento>,
    pub estabelecimentos: Vec<Estabelecimento>,
    pub porte: Option<Classificacao>,
    pub natureza_juridica: Option<Classificacao>,
    pub capital_social: Option<f64>,
    pub atividade_principal: Vec<Atividade>,
    pub atividades_secundarias: Vec<Atividade>,
}

impl DadosReceita {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            razao_social: text(raw.get("razao_social")),
            estabelecimento: raw.get("estabelecimento").and_then(Estabelecimento::from_value),
            estabelecimentos: objects(raw.get("estabelecimentos"), Estabelecimento::from_value),
            porte: raw.get("porte").and_then(Classificacao::from_value),
            natureza_juridica: raw.get("natureza_juridica").and_then(Classificacao::from_value),
            capital_social: number(raw.get("capital_social")),
            atividade_principal: objects(raw.get("atividade_principal"), Atividade::from_value),
            atividades_secundarias: objects(raw.get("atividades_secundarias"), Atividade::from_value),
        }
    }

    /// The establishment to show an address for: the single `estabelecimento`
    /// if present, otherwise the first of `estabelecimentos`.
    pub fn primary_establishment(&self) -> Option<&Estabelecimento> {
        self.estabelecimento
            .as_ref()
            .or_else(|| self.estabelecimentos.first())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estabelecimento {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
}

impl Estabelecimento {
    fn from_value(raw: &Value) -> Option<Self> {
        raw.as_object()?;
        Some(Self {
            cep: text(raw.get("cep")),
            logradouro: text(raw.get("logradouro")),
            numero: text(raw.get("numero")),
            bairro: text(raw.get("bairro")),
            municipio: text(raw.get("municipio")),
            uf: text(raw.get("uf")),
        })
    }
}

/// `porte` / `natureza_juridica` classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classificacao {
    pub id: Option<String>,
    pub descricao: Option<String>,
}

impl Classificacao {
    fn from_value(raw: &Value) -> Option<Self> {
        raw.as_object()?;
        Some(Self {
            id: text(raw.get("id")),
            descricao: text(raw.get("descricao")),
        })
    }
}

/// CNAE activity code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atividade {
    pub code: Option<String>,
    pub text: Option<String>,
}

impl Atividade {
    fn from_value(raw: &Value) -> Option<Self> {
        raw.as_object()?;
        Some(Self {
            code: text(raw.get("code")),
            text: text(raw.get("text")),
        })
    }
}

/// Strings as-is, numbers in their JSON spelling. Anything else is absent.
fn text(raw: Option<&Value>) -> Option<String> {
    match raw? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(raw: Option<&Value>) -> Option<f64> {
    match raw? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn objects<T>(raw: Option<&Value>, parse: fn(&Value) -> Option<T>) -> Vec<T> {
    raw.and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse).collect())
        .unwrap_or_default()
}
