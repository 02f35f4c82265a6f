use std::fmt;

#[derive(Debug)]
pub enum GeminiError {
    Transport(reqwest::Error),
    Status { status: u16, body: String },
    Blocked(String),
    Malformed(String),
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::Transport(err) => write!(f, "transport error: {err}"),
            GeminiError::Status { status, body } => write!(f, "API error {status}: {body}"),
            GeminiError::Blocked(reason) => write!(f, "prompt blocked: {reason}"),
            GeminiError::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for GeminiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeminiError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        // a body that is not the JSON we expect is a response problem, not a network one
        if err.is_decode() {
            GeminiError::Malformed(err.to_string())
        } else {
            GeminiError::Transport(err)
        }
    }
}

impl From<serde_json::Error> for GeminiError {
    fn from(err: serde_json::Error) -> Self {
        GeminiError::Malformed(err.to_string())
    }
}
