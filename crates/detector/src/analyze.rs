use {
    crate::*,
    base::{log_error, log_info, log_warn},
    gemini::GeminiClient,
    std::{fs, io::Write, path::Path},
};

/// Fixed instruction sent along with every captured image.
pub const PROMPT: &str = "\
Analyze this image and answer the following questions:
1. Is there any person in the image? Answer with \"Yes\" or \"No\".
2. If there are people, describe how many there are and what they are doing.
3. Describe the other important objects visible in the image.";

/// A remote service that turns an image and an instruction into text.
pub trait Analyzer {
    fn describe(&self, prompt: &str, image: &[u8], mime_type: &str) -> Result<String, AnalysisError>;
}

impl Analyzer for GeminiClient {
    fn describe(&self, prompt: &str, image: &[u8], mime_type: &str) -> Result<String, AnalysisError> {
        Ok(self.generate(prompt, image, mime_type)?)
    }
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn describe(&self, prompt: &str, image: &[u8], mime_type: &str) -> Result<String, AnalysisError> {
        (**self).describe(prompt, image, mime_type)
    }
}

/// Read an encoded image and identify its MIME type.
pub fn load_image(path: &Path) -> Result<(Vec<u8>, &'static str), AnalysisError> {
    let bytes = fs::read(path)
        .map_err(|e| AnalysisError::ImageUnreadable(format!("{}: {}", path.display(), e)))?;
    let mime_type = image::sniff_mime(&bytes)?;
    Ok((bytes, mime_type))
}

fn try_analyze(analyzer: &dyn Analyzer, path: &Path) -> Result<String, AnalysisError> {
    let (bytes, mime_type) = load_image(path)?;
    log_info!("analyzing {} ({}, {} bytes)", path.display(), mime_type, bytes.len());
    analyzer.describe(PROMPT, &bytes, mime_type)
}

/// Describe the image at `path`. Every failure is logged and becomes `None`.
pub fn analyze(analyzer: &dyn Analyzer, path: &Path, console: &mut dyn Write) -> Option<String> {
    match try_analyze(analyzer, path) {
        Ok(text) if text.trim().is_empty() => {
            log_warn!("analysis returned empty text");
            None
        }
        Ok(text) => Some(text),
        Err(error) => {
            log_error!("analysis failed ({}): {}", error.kind(), error);
            say(console, format!("Error analyzing image: {}", error));
            None
        }
    }
}
