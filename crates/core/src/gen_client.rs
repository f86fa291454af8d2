// crates/core/src/gen_client.rs

use anyhow::Result;
use serde::Serialize;

/// Abstract text-generation engine.
///
/// Implementations can call a hosted endpoint, a local server, or be stubbed
/// out in tests. The agent treats it as a black box: prompt and options in,
/// raw text out.
pub trait TextGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// One generation call: prompt, role instruction, and sampling options.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Role instruction identifying the domain-expert persona.
    pub system: String,
    pub temperature: f64,
    pub do_sample: bool,
    pub top_p: f64,
    pub max_new_tokens: u32,
    pub enable_thinking: bool,
    pub stream: bool,
}

impl GenerationRequest {
    /// Deterministic greedy decoding; the settings both planning domains use.
    pub fn greedy(prompt: String, system: String, max_new_tokens: u32) -> Self {
        Self {
            prompt,
            system,
            temperature: 0.0,
            do_sample: false,
            top_p: 1.0,
            max_new_tokens,
            enable_thinking: false,
            stream: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_settings() {
        let request = GenerationRequest::greedy("p".into(), "s".into(), 192);
        assert_eq!(request.temperature, 0.0);
        assert!(!request.do_sample);
        assert_eq!(request.top_p, 1.0);
        assert_eq!(request.max_new_tokens, 192);
        assert!(!request.enable_thinking);
        assert!(!request.stream);
    }
}
