#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

pub const ACME_CNPJ: &str = "12345678000190";

/// Canned partner service: answers every request with the same status and
/// body, and records the request paths it saw.
pub struct StubServer {
    pub base_url: String,
    paths: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start(status: u16, body: impl Into<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let base_url = format!("http://{}", listener.local_addr().expect("stub address"));
        let paths = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&paths);
        let body = body.into();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                loop {
                    let mut header = String::new();
                    match reader.read_line(&mut header) {
                        Ok(0) | Err(_) => break,
                        Ok(_) if header == "\r\n" => break,
                        Ok(_) => {}
                    }
                }
                if let Some(path) = request_line.split_whitespace().nth(1) {
                    seen.lock().expect("stub paths").push(path.to_string());
                }
                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { base_url, paths }
    }

    pub fn requests(&self) -> Vec<String> {
        self.paths.lock().expect("stub paths").clone()
    }
}

/// Base URL nobody listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("societario");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SOCIETARIO_API_URL");
    for proxy in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(proxy);
    }
    cmd
}

pub fn cmd_against(base_url: &str) -> Command {
    let mut cmd = cmd();
    cmd.arg("--api-base-url").arg(base_url);
    cmd
}

pub fn run_json(base_url: &str, args: &[&str]) -> (Option<i32>, Value) {
    let out = cmd_against(base_url)
        .arg("--json")
        .args(args)
        .output()
        .expect("run societario");
    let value = serde_json::from_slice(&out.stdout).expect("valid json output");
    (out.status.code(), value)
}

pub fn acme_body() -> String {
    json!({
        "nome": "Acme LTDA",
        "participacao": 25,
        "cnpj": ACME_CNPJ,
        "mapaUrl": "https://maps.example/x",
        "dadosReceita": {}
    })
    .to_string()
}

pub fn acme_with_registry_body() -> String {
    json!({
        "nome": "Acme LTDA",
        "participacao": 12.5,
        "cnpj": ACME_CNPJ,
        "mapaUrl": "https://maps.example/x",
        "dadosReceita": {
            "razao_social": "ACME COMERCIO LTDA",
            "estabelecimentos": [
                {"logradouro": "Rua A", "numero": "10", "municipio": "Campinas", "uf": "SP"}
            ],
            "natureza_juridica": {"id": "2062", "descricao": "Sociedade Empresária Limitada"},
            "capital_social": 50000,
            "atividade_principal": [{"code": "62.01-5-01", "text": "Desenvolvimento de software"}],
            "atividades_secundarias": [{"code": "63.11-9-00", "text": "Tratamento de dados"}]
        }
    })
    .to_string()
}

pub fn not_found_body() -> String {
    json!({
        "status": 404,
        "titulo": "Not Found",
        "detalhes": "Empresa não encontrada",
        "validacao": []
    })
    .to_string()
}

/// Registry block with nulls and numbers where strings are usual.
pub fn acme_with_loose_registry_body() -> String {
    json!({
        "nome": "Acme LTDA",
        "participacao": 25,
        "cnpj": ACME_CNPJ,
        "mapaUrl": "https://maps.example/x",
        "dadosReceita": {
            "razao_social": null,
            "estabelecimento": {"logradouro": "Rua A", "numero": 123, "uf": "SP"},
            "porte": {"id": 1, "descricao": "Microempresa"},
            "capital_social": "10000.00"
        }
    })
    .to_string()
}

pub fn bad_request_body_with_nulls() -> String {
    json!({
        "status": 400,
        "titulo": null,
        "detalhes": "CNPJ inválido",
        "validacao": null
    })
    .to_string()
}
