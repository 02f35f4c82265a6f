use {
    anyhow::Result,
    std::{
        fs::{File, OpenOptions, create_dir_all},
        io::Write,
        path::{Path, PathBuf},
        str::FromStr,
        sync::{
            Arc, Mutex,
            atomic::{AtomicU8, Ordering},
        },
        time::{SystemTime, UNIX_EPOCH},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

pub trait Logger: Send + Sync {
    fn log(&self, level: Level, file: &str, line: usize, message: &str);
}

pub static LOGGER: Mutex<Option<Box<dyn Logger>>> = Mutex::new(None);

// lowest level that reaches the logger, stored as the enum discriminant
static MAX_LEVEL: AtomicU8 = AtomicU8::new(Level::Debug as u8);

/// Drop every message below `level`.
pub fn set_max_level(level: Level) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn enabled(level: Level) -> bool {
    level as u8 >= MAX_LEVEL.load(Ordering::Relaxed)
}

/// Forward a message to the installed logger. Used by the `log_*!` macros.
pub fn emit(level: Level, file: &str, line: usize, message: &str) {
    if !enabled(level) {
        return;
    }
    if let Some(logger) = LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
        logger.log(level, file, line, message);
    }
}

fn install(logger: Box<dyn Logger>) {
    LOGGER
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .replace(logger);
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let days = secs / 86400;
    let time_of_day = secs % 86400;
    let (year, month, day) = civil_from_days(days as i64);
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year, month, day, hours, minutes, seconds
    )
}

pub fn format_today() -> String {
    let days = unix_seconds() / 86400;
    let (year, month, day) = civil_from_days(days as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

// days since 1970-01-01 to (year, month, day), proleptic Gregorian
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

fn format_line(level: Level, file: &str, line: usize, message: &str) -> String {
    format!(
        "[{:?}:{}:{} - {}:{}] {}",
        std::thread::current().id(),
        level,
        format_timestamp(),
        file,
        line,
        message
    )
}

/// Writes to stderr, leaving stdout to the program's own output.
pub struct StderrLogger;

impl Logger for StderrLogger {
    fn log(&self, level: Level, file: &str, line: usize, message: &str) {
        eprintln!("{}", format_line(level, file, line, message));
    }
}

pub fn init_stderr_logger() {
    install(Box::new(StderrLogger));
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

/// Appends to `<dir>/<yyyy-mm-dd>.log`, switching files when the date changes.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        create_dir_all(&dir)?;
        let current_date = format_today();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(format!("{}.log", current_date)))?;
        Ok(FileLogger {
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }
}

impl Logger for FileLogger {
    fn log(&self, level: Level, file: &str, line: usize, message: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let today = format_today();
        if today != state.current_date {
            let new_path = state.dir.join(format!("{}.log", today));
            match OpenOptions::new().create(true).append(true).open(&new_path) {
                Ok(new_file) => {
                    state.file = new_file;
                    state.current_date = today;
                }
                Err(error) => {
                    eprintln!("Failed to open new log file {:?}: {}", new_path, error);
                }
            }
        }
        let log_line = format_line(level, file, line, message);
        if let Err(error) = writeln!(state.file, "{}", log_line) {
            eprintln!("Failed to write to log file: {}", error);
            eprintln!("{}", log_line);
        }
    }
}

pub fn init_file_logger(dir: impl Into<PathBuf>) -> Result<()> {
    install(Box::new(FileLogger::new(dir)?));
    Ok(())
}

/// Install the logger for a program run.
///
/// With `dir`, lines go to a `FileLogger` there at `Debug` and up. Without it,
/// or when the directory cannot be used, a `StderrLogger` takes `Warn` and up.
/// `level` overrides the minimum level; an unparsable value is logged and ignored.
pub fn init_logging(dir: Option<&Path>, level: Option<&str>) {
    match dir.map(|dir| (dir, init_file_logger(dir))) {
        Some((_, Ok(()))) => set_max_level(Level::Debug),
        Some((dir, Err(error))) => {
            init_stderr_logger();
            set_max_level(Level::Warn);
            crate::log_warn!("cannot log to {}: {}", dir.display(), error);
        }
        None => {
            init_stderr_logger();
            set_max_level(Level::Warn);
        }
    }
    if let Some(level) = level {
        match level.parse::<Level>() {
            Ok(level) => set_max_level(level),
            Err(error) => crate::log_warn!("{}, keeping the default level", error),
        }
    }
}

/// Keeps formatted records in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemoryLogger {
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.records()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, _file: &str, _line: usize, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((level, message.to_string()));
    }
}

/// Install a fresh `MemoryLogger` and return a handle to its records.
pub fn init_memory_logger() -> MemoryLogger {
    let logger = MemoryLogger::new();
    install(Box::new(logger.clone()));
    logger
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ $crate::log::emit($crate::log::Level::Debug, file!(), line!() as usize, &format!($($arg)*)); }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{ $crate::log::emit($crate::log::Level::Info, file!(), line!() as usize, &format!($($arg)*)); }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ $crate::log::emit($crate::log::Level::Warn, file!(), line!() as usize, &format!($($arg)*)); }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{ $crate::log::emit($crate::log::Level::Error, file!(), line!() as usize, &format!($($arg)*)); }};
}
