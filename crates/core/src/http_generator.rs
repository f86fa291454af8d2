// crates/core/src/http_generator.rs

//! HTTP client for a text-generation server's /generate endpoint.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::gen_client::{GenerationRequest, TextGenerator};

/// Blocking client for a generation server that accepts the request options
/// as-is (TGI-style `POST {endpoint}/generate`).
///
/// Environment variables:
/// - PLANSHOT_ENDPOINT: e.g. "http://localhost:8080"
/// - PLANSHOT_MODEL: model or deployment name
/// - PLANSHOT_API_KEY: bearer token (optional, empty = no auth header)
pub struct HttpTextGenerator {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

impl HttpTextGenerator {
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> Self {
        let url = format!("{}/generate", endpoint.trim_end_matches('/'));

        Self {
            client: Client::new(),
            url,
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var("PLANSHOT_ENDPOINT").context("PLANSHOT_ENDPOINT not set")?;
        let model = std::env::var("PLANSHOT_MODEL").context("PLANSHOT_MODEL not set")?;
        let api_key = std::env::var("PLANSHOT_API_KEY").unwrap_or_default();

        eprintln!("[HttpTextGenerator] Using endpoint: {}", endpoint);

        Ok(Self::new(&endpoint, &model, &api_key))
    }
}

/// Request body: the generation options plus the model name.
#[derive(Serialize)]
struct GenerateBody<'a> {
    model: &'a str,
    #[serde(flatten)]
    request: &'a GenerationRequest,
}

#[derive(Deserialize)]
struct GenerateResponse {
    text: String,
}

impl TextGenerator for HttpTextGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let body = GenerateBody {
            model: &self.model,
            request,
        };

        if std::env::var("PLANSHOT_DEBUG").is_ok() {
            eprintln!("[HttpTextGenerator] URL: {}", self.url);
            if let Ok(json) = serde_json::to_string_pretty(&body) {
                eprintln!("[HttpTextGenerator] Request:\n{}", &json[..json.len().min(2000)]);
            }
        }

        // Retry up to 3 times on rate limits, server errors, and network errors
        let mut last_error = None;

        for attempt in 1..=3 {
            let mut builder = self.client.post(&self.url).json(&body);
            if !self.api_key.is_empty() {
                builder = builder.bearer_auth(&self.api_key);
            }

            match builder.send() {
                Ok(resp) => {
                    if !resp.status().is_success() {
                        let status = resp.status();
                        let text_body = resp.text().unwrap_or_default();

                        if status.as_u16() == 429 || status.is_server_error() {
                            let delay = attempt as u64 * 2;
                            eprintln!(
                                "[HttpTextGenerator] Attempt {}/3: HTTP {} - waiting {}s...",
                                attempt, status, delay
                            );
                            last_error = Some(anyhow::anyhow!("HTTP {} - {}", status, text_body));
                            std::thread::sleep(std::time::Duration::from_secs(delay));
                            continue;
                        }

                        anyhow::bail!("generation request failed: HTTP {} - {}", status, text_body);
                    }

                    let raw = resp.text().context("failed to read generation response body")?;

                    if std::env::var("PLANSHOT_DEBUG").is_ok() {
                        eprintln!(
                            "[HttpTextGenerator] Response: {}",
                            &raw[..raw.len().min(500)]
                        );
                    }

                    let parsed: GenerateResponse = serde_json::from_str(&raw)
                        .context("failed to parse generation response JSON")?;

                    return Ok(parsed.text);
                }
                Err(e) => {
                    eprintln!(
                        "[HttpTextGenerator] Attempt {}/3 network error: {} - retrying...",
                        attempt, e
                    );
                    last_error = Some(anyhow::anyhow!("network error: {}", e));
                    std::thread::sleep(std::time::Duration::from_secs(attempt as u64));
                    continue;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("request failed after retries")))
    }
}
