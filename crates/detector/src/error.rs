use {gemini::GeminiError, std::fmt, video::VideoError};

/// Conditions that end a run before the remote service is contacted.
#[derive(Debug)]
pub enum DetectorError {
    DeviceUnavailable(VideoError),
    CaptureFailed(String),
    MissingCredential { var: String },
    Config(String),
}

impl DetectorError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            DetectorError::Config(_) => 1,
            DetectorError::DeviceUnavailable(_) => 2,
            DetectorError::CaptureFailed(_) => 3,
            DetectorError::MissingCredential { .. } => 4,
        }
    }
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorError::DeviceUnavailable(err) => write!(f, "camera unavailable: {err}"),
            DetectorError::CaptureFailed(msg) => write!(f, "capture failed: {msg}"),
            DetectorError::MissingCredential { var } => write!(f, "missing credential: {var} is not set"),
            DetectorError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for DetectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectorError::DeviceUnavailable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for DetectorError {
    fn from(err: toml::de::Error) -> Self {
        DetectorError::Config(err.to_string())
    }
}

/// Why an analysis produced no result. Always recovered inside the analysis step.
#[derive(Debug)]
pub enum AnalysisError {
    ImageUnreadable(String),
    Transport(String),
    Rejected(String),
    MalformedResponse(String),
}

impl AnalysisError {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::ImageUnreadable(_) => "image unreadable",
            AnalysisError::Transport(_) => "transport",
            AnalysisError::Rejected(_) => "rejected",
            AnalysisError::MalformedResponse(_) => "malformed response",
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::ImageUnreadable(msg) => write!(f, "image unreadable: {msg}"),
            AnalysisError::Transport(msg) => write!(f, "transport error: {msg}"),
            AnalysisError::Rejected(msg) => write!(f, "request rejected: {msg}"),
            AnalysisError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::ImageUnreadable(err.to_string())
    }
}

impl From<image::ImageError> for AnalysisError {
    fn from(err: image::ImageError) -> Self {
        AnalysisError::ImageUnreadable(err.to_string())
    }
}

impl From<GeminiError> for AnalysisError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Transport(err) => AnalysisError::Transport(err.to_string()),
            err @ (GeminiError::Status { .. } | GeminiError::Blocked(_)) => {
                AnalysisError::Rejected(err.to_string())
            }
            GeminiError::Malformed(msg) => AnalysisError::MalformedResponse(msg),
        }
    }
}
