use {
    crate::*,
    base::{log_debug, log_info},
    reqwest::blocking::Client,
    std::fmt,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

// header carrying the credential
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }
}

// keeps the key out of logs
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Local setup only, nothing is sent until `generate`.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Use a preconfigured HTTP client, e.g. with a proxy or timeout policy.
    pub fn with_client(config: GeminiConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send the instruction and one image, wait for the full answer and
    /// return its text.
    pub fn generate(&self, prompt: &str, image: &[u8], mime_type: &str) -> Result<String, GeminiError> {
        let endpoint = self.endpoint();
        let body = GenerateContentRequest::with_image(prompt, mime_type, image);

        log_info!(
            "gemini: sending {} byte {} image to {}",
            image.len(),
            mime_type,
            self.config.model
        );
        let response = self
            .client
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        log_debug!("gemini: response status {}", status);
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text()?;
        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        parsed.text()
    }
}
