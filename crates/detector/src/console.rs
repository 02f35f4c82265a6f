use {base::log_warn, std::io::Write};

/// Print one line for the operator. The run never fails on console output.
pub fn say(console: &mut dyn Write, message: impl std::fmt::Display) {
    if let Err(error) = writeln!(console, "{}", message) {
        log_warn!("console write failed: {}", error);
    }
}
