use {
    crate::*,
    gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig},
    serde::Deserialize,
    std::{
        fs,
        path::{Path, PathBuf},
        time::Duration,
    },
    video::VideoInConfig,
};

pub const CONFIG_PATH_VAR: &str = "CAMERA_DETECTOR_CONFIG";
pub const HEADLESS_VAR: &str = "CAMERA_DETECTOR_HEADLESS";
pub const DEFAULT_CONFIG_PATH: &str = "camera-detector.toml";
pub const DEFAULT_CREDENTIAL_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Show the captured frame and wait for a key before analysis.
    pub interactive: bool,
    pub capture: CaptureSettings,
    pub analysis: AnalysisSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interactive: true,
            capture: CaptureSettings::default(),
            analysis: AnalysisSettings::default(),
        }
    }
}

pub const MAX_SETTLE_MS: u64 = 60_000;
pub const MAX_TICK_MS: u64 = 10_000;
pub const MAX_COUNTDOWN: u32 = 60;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptureSettings {
    pub device_index: usize,
    pub device_path: Option<PathBuf>,
    pub output: PathBuf,
    pub settle_ms: u64,
    pub countdown: u32,
    pub tick_ms: u64,
    pub quality: u8,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            device_path: None,
            output: PathBuf::from("capture.jpg"),
            settle_ms: 1000,
            countdown: 3,
            tick_ms: 1000,
            quality: 90,
        }
    }
}

impl CaptureSettings {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Length of the whole countdown, saturating for settings that skipped `validate`.
    pub fn countdown_total(&self) -> Duration {
        Duration::from_millis(self.tick_ms.saturating_mul(self.countdown as u64))
    }

    pub fn video_config(&self) -> VideoInConfig {
        VideoInConfig {
            index: self.device_index,
            path: self.device_path.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSettings {
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key.
    pub credential_var: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            credential_var: DEFAULT_CREDENTIAL_VAR.to_string(),
        }
    }
}

impl AnalysisSettings {
    pub fn gemini_config(&self, api_key: &str) -> GeminiConfig {
        GeminiConfig {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: api_key.to_string(),
        }
    }
}

impl Config {
    /// Config file location: `$CAMERA_DETECTOR_CONFIG`, or `camera-detector.toml`
    /// in the working directory.
    pub fn path(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
        lookup(CONFIG_PATH_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, DetectorError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| DetectorError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, DetectorError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DetectorError> {
        let capture = &self.capture;
        for (name, value, max) in [
            ("settle_ms", capture.settle_ms, MAX_SETTLE_MS),
            ("tick_ms", capture.tick_ms, MAX_TICK_MS),
            ("countdown", capture.countdown as u64, MAX_COUNTDOWN as u64),
        ] {
            if value > max {
                return Err(DetectorError::Config(format!(
                    "capture.{} must be at most {}, got {}",
                    name, max, value
                )));
            }
        }
        if !(1..=100).contains(&self.capture.quality) {
            return Err(DetectorError::Config(format!(
                "capture.quality must be within 1..=100, got {}",
                self.capture.quality
            )));
        }
        if self.capture.output.as_os_str().is_empty() {
            return Err(DetectorError::Config("capture.output is empty".to_string()));
        }
        if self.analysis.credential_var.is_empty() {
            return Err(DetectorError::Config("analysis.credential_var is empty".to_string()));
        }
        Ok(())
    }

    /// Apply environment overrides.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(HEADLESS_VAR) {
            if matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes") {
                self.interactive = false;
            }
        }
        self
    }
}
