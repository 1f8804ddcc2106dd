//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start rolling file logs once per process for the host app.
//! - Emit metadata-only events; task titles and descriptions never reach
//!   log lines.
//!
//! # Invariants
//! - Repeating init with the same level and directory is a no-op.
//! - Init with a different level or directory is rejected, not applied.
//! - Init never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "todolist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Accepted log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unsupported log level `{other}`; expected trace|debug|info|warn|error"
            )),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LoggingConfig {
    level: Level,
    log_dir: PathBuf,
}

impl LoggingConfig {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: Level::parse(level)?,
            log_dir: parse_log_dir(log_dir)?,
        })
    }
}

struct ActiveLogger {
    config: LoggingConfig,
    _handle: LoggerHandle,
}

impl ActiveLogger {
    fn start(config: LoggingConfig) -> Result<Self, String> {
        std::fs::create_dir_all(&config.log_dir).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                config.log_dir.display()
            )
        })?;

        let handle = Logger::try_with_str(config.level.as_str())
            .map_err(|err| format!("invalid log level `{}`: {err}", config.level))?
            .log_to_file(
                FileSpec::default()
                    .directory(config.log_dir.as_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            // [YYYY-MM-DD HH:MM:SS.ffffff TZ] LEVEL [module] file:line: message
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        install_panic_hook_once();

        info!(
            "event=app_start module=core status=ok platform={} build_mode={} version={}",
            std::env::consts::OS,
            build_mode(),
            env!("CARGO_PKG_VERSION")
        );
        info!(
            "event=logging_init module=core status=ok level={} log_dir={}",
            config.level,
            config.log_dir.display()
        );

        Ok(Self {
            config,
            _handle: handle,
        })
    }

    /// Rejects any request that differs from the running configuration.
    fn ensure_matches(&self, requested: &LoggingConfig) -> Result<(), String> {
        if self.config.log_dir != requested.log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                self.config.log_dir.display(),
                requested.log_dir.display()
            ));
        }
        if self.config.level != requested.level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                self.config.level, requested.level
            ));
        }
        Ok(())
    }
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unsupported `level`.
/// - Empty or relative `log_dir`, or a directory that cannot be created.
/// - Logger backend start failure.
/// - A different level or directory than the one already active.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LoggingConfig::parse(level, log_dir)?;
    if let Some(active) = ACTIVE.get() {
        return active.ensure_matches(&requested);
    }

    // Two racing first calls: the loser lands here with the winner's state.
    ACTIVE
        .get_or_try_init(|| ActiveLogger::start(requested.clone()))?
        .ensure_matches(&requested)
}

/// Returns `(level, log_dir)` of the active logger, or `None` before init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.config.level.as_str(), active.config.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn parse_log_dir(raw: &str) -> Result<PathBuf, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn build_mode() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Payload may carry task text, so only the location is logged.
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()));
        error!("{}", panic_event_line(location.as_deref()));
        previous_hook(panic_info);
    }));
}

fn panic_event_line(location: Option<&str>) -> String {
    format!(
        "event=panic_captured module=core status=error location={}",
        location.unwrap_or("unknown")
    )
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, panic_event_line, parse_log_dir, Level};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "todolist-logging-{suffix}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn level_parse_normalizes_known_values() {
        assert_eq!(Level::parse("INFO"), Ok(Level::Info));
        assert_eq!(Level::parse(" warning "), Ok(Level::Warn));
        assert!(Level::parse("verbose")
            .expect_err("unknown level must be rejected")
            .contains("unsupported"));
    }

    #[test]
    fn parse_log_dir_rejects_empty_and_relative_paths() {
        assert!(parse_log_dir("  ").is_err());
        let error = parse_log_dir("logs/dev").expect_err("relative paths must be rejected");
        assert!(error.contains("absolute"));
    }

    #[test]
    fn panic_event_line_carries_location_only() {
        assert_eq!(
            panic_event_line(Some("src/lib.rs:42")),
            "event=panic_captured module=core status=error location=src/lib.rs:42"
        );
        let unknown = panic_event_line(None);
        assert!(unknown.ends_with("location=unknown"));
        assert!(!unknown.contains("payload"));
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_reconfiguration() {
        let log_dir = unique_temp_dir("idempotent");
        let log_dir_str = log_dir
            .to_str()
            .expect("temp dir should be valid UTF-8")
            .to_string();
        let other_dir = unique_temp_dir("other");
        let other_dir_str = other_dir
            .to_str()
            .expect("temp dir should be valid UTF-8")
            .to_string();

        init_logging("info", &log_dir_str).expect("first init should succeed");
        init_logging(" INFO ", &log_dir_str).expect("same config should be idempotent");

        let level_error =
            init_logging("debug", &log_dir_str).expect_err("level conflict should fail");
        assert!(level_error.contains("refusing to switch"));

        let dir_error =
            init_logging("info", &other_dir_str).expect_err("directory conflict should fail");
        assert!(dir_error.contains("refusing to switch"));

        let (active_level, active_dir) = logging_status().expect("logging should be active");
        assert_eq!(active_level, "info");
        assert_eq!(active_dir, log_dir);
    }
}
