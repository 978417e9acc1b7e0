//! Logging bootstrap for the careboard core.
//!
//! # Responsibility
//! - Initialize rotating file logs exactly once per process.
//! - Keep log events metadata-only; no patient-identifying content.
//!
//! # Invariants
//! - Re-initialization with the same directory and level is a no-op.
//! - Re-initialization with a conflicting configuration is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "careboard";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();

struct ActiveLogging {
    level: &'static str,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Initializes file logging for the process.
///
/// Idempotent for a repeated call with the same configuration; a call with
/// a different level or directory is rejected with a descriptive error.
///
/// # Errors
/// - Unsupported `level`.
/// - Empty or relative `dir`, or a directory that cannot be created.
/// - Logger backend startup failure.
pub fn init_logging(level: &str, dir: &str) -> Result<(), String> {
    let level = canonical_level(level)?;
    let dir = canonical_dir(dir)?;

    if let Some(active) = ACTIVE.get() {
        if active.dir == dir && active.level == level {
            return Ok(());
        }
        return Err(format!(
            "logging already active with level `{}` at `{}`",
            active.level,
            active.dir.display()
        ));
    }

    ACTIVE
        .get_or_try_init(|| -> Result<ActiveLogging, String> {
            std::fs::create_dir_all(&dir)
                .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;

            let handle = Logger::try_with_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                .log_to_file(FileSpec::default().directory(&dir).basename(LOG_BASENAME))
                .rotate(
                    Criterion::Size(ROTATE_AT_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(KEEP_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
                .map_err(|err| format!("cannot start logger: {err}"))?;

            info!(
                "event=core_init module=logging status=ok level={level} dir={} version={}",
                dir.display(),
                env!("CARGO_PKG_VERSION")
            );

            Ok(ActiveLogging {
                level,
                dir,
                _handle: handle,
            })
        })
        .map(|_| ())
}

/// Returns `(level, dir)` when logging is active, `None` otherwise.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE.get().map(|active| (active.level, active.dir.clone()))
}

/// Default level per build mode: `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn canonical_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn canonical_dir(dir: &str) -> Result<PathBuf, String> {
    let trimmed = dir.trim();
    if trimmed.is_empty() {
        return Err("log directory cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log directory must be absolute, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::{canonical_dir, canonical_level, init_logging, logging_status};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "careboard-logging-{suffix}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn canonical_level_accepts_aliases_and_rejects_unknown() {
        assert_eq!(canonical_level(" WARNING ").unwrap(), "warn");
        assert_eq!(canonical_level("info").unwrap(), "info");
        assert!(canonical_level("verbose").is_err());
    }

    #[test]
    fn canonical_dir_rejects_blank_and_relative_paths() {
        assert!(canonical_dir("  ").is_err());
        assert!(canonical_dir("logs/dev").is_err());
    }

    #[test]
    fn init_is_idempotent_for_same_config_and_rejects_conflicts() {
        let log_dir = unique_temp_dir("active");
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
        init_logging("info", &log_dir_str).expect("same config should be idempotent");

        let level_error =
            init_logging("debug", &log_dir_str).expect_err("level conflict should fail");
        assert!(level_error.contains("already active"));

        let dir_error =
            init_logging("info", &other_dir_str).expect_err("directory conflict should fail");
        assert!(dir_error.contains("already active"));

        let (active_level, active_dir) = logging_status().expect("logging should be active");
        assert_eq!(active_level, "info");
        assert_eq!(active_dir, log_dir);
    }
}
