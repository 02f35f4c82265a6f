use {
    crate::*,
    base::log_info,
    std::io::Write,
    video::{Preview, VideoInDevice},
};

pub const BANNER: &str = "=== Person Detector with Webcam and Google Gemini ===";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Analyzed(String),
    NoResult,
}

/// Capture, configure, analyze and report, in that order.
///
/// Capture and credential failures come back as `Err` before anything is sent
/// to the analysis service. An analysis failure still reports and ends in
/// `Ok(Outcome::NoResult)`.
pub fn run<D, A, F>(
    config: &Config,
    device: &mut D,
    preview: &mut dyn Preview,
    credential: Option<&str>,
    connect: F,
    console: &mut dyn Write,
) -> Result<Outcome, DetectorError>
where
    D: VideoInDevice + ?Sized,
    A: Analyzer,
    F: FnOnce(&str) -> A,
{
    say(console, BANNER);
    say(console, "");

    log_info!("step: capture");
    let preview = if config.interactive { Some(preview) } else { None };
    let image_path = capture(device, &config.capture, preview, console)?;

    log_info!("step: configure");
    say(console, "");
    say(console, "Configuring Google Gemini API...");
    let analyzer = configure(credential, &config.analysis, connect, console)?;

    log_info!("step: analyze");
    say(console, "");
    say(console, "Analyzing image with AI...");
    let result = analyze(&analyzer, &image_path, console);

    log_info!("step: report");
    report(result.as_deref(), console);

    Ok(match result {
        Some(text) => Outcome::Analyzed(text),
        None => Outcome::NoResult,
    })
}
