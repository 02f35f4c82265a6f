use {
    base::*,
    detector::{Config, run},
    gemini::GeminiClient,
    std::{env, io, path::PathBuf, process::ExitCode},
    video::{WindowPreview, v4l2::V4l2},
};

const LOG_DIR_VAR: &str = "CAMERA_DETECTOR_LOG_DIR";
const LOG_LEVEL_VAR: &str = "CAMERA_DETECTOR_LOG_LEVEL";

fn main() -> ExitCode {
    let log_dir = env::var_os(LOG_DIR_VAR).map(PathBuf::from);
    let log_level = env::var(LOG_LEVEL_VAR).ok();
    init_logging(log_dir.as_deref(), log_level.as_deref());

    let lookup = |key: &str| env::var(key).ok();
    let config_path = Config::path(lookup);
    let config = match Config::load(&config_path) {
        Ok(config) => config.with_env(lookup),
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::from(error.exit_code());
        }
    };
    log_info!("config: {:?}", config);

    let credential = env::var(&config.analysis.credential_var).ok();
    let mut device = V4l2::new();
    let mut preview = WindowPreview;
    let mut console = io::stdout().lock();

    match run(
        &config,
        &mut device,
        &mut preview,
        credential.as_deref(),
        |key| GeminiClient::new(config.analysis.gemini_config(key)),
        &mut console,
    ) {
        Ok(outcome) => {
            log_info!("finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(error) => {
            log_error!("{}", error);
            ExitCode::from(error.exit_code())
        }
    }
}
