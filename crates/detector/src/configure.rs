use {
    crate::*,
    base::{log_error, log_info},
    std::io::Write,
};

/// Check the credential and build the analysis client with `connect`.
///
/// The credential is passed in rather than read here; `connect` only runs
/// when it is present and non-blank.
pub fn configure<A, F>(
    credential: Option<&str>,
    settings: &AnalysisSettings,
    connect: F,
    console: &mut dyn Write,
) -> Result<A, DetectorError>
where
    F: FnOnce(&str) -> A,
{
    match credential.map(str::trim).filter(|key| !key.is_empty()) {
        Some(key) => {
            log_info!("configuring {} at {}", settings.model, settings.base_url);
            Ok(connect(key))
        }
        None => {
            let var = settings.credential_var.clone();
            log_error!("{} is missing or empty", var);
            say(console, "Error: Gemini API key not found.");
            say(
                console,
                format!(
                    "Please set {var} in the environment, e.g. export {var}=your_key_here"
                ),
            );
            Err(DetectorError::MissingCredential { var })
        }
    }
}
