use {crate::*, std::io::Write};

pub const RESULTS_HEADING: &str = "=== Analysis Results ===";
pub const NO_RESULT_MESSAGE: &str = "Could not complete the image analysis.";

pub fn report(result: Option<&str>, console: &mut dyn Write) {
    match result.filter(|text| !text.trim().is_empty()) {
        Some(text) => {
            say(console, "");
            say(console, RESULTS_HEADING);
            say(console, text);
        }
        None => {
            say(console, "");
            say(console, NO_RESULT_MESSAGE);
        }
    }
}
