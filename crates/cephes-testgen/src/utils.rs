//! Some utilities

use std::path::{Path, PathBuf};

use ftlog::{
    LevelFilter, LoggerGuard,
    appender::{FileAppender, Period},
};

/// Configures the logger.
///
/// With a `logs_dir`, logs go to `<logs_dir>/<file_name>.log` and the path is returned. Otherwise they go to
/// stderr, so that no log files end up next to the generated sources.
///
/// # Errors
///
/// - If the logs directory could not be created.
/// - If the logger could not be initialized.
pub fn configure_logger(file_name: &str, logs_dir: Option<&Path>) -> Result<(LoggerGuard, Option<PathBuf>), String> {
    let Some(logs_dir) = logs_dir else {
        let guard = ftlog::Builder::new()
            .max_log_level(LevelFilter::Info)
            .root(std::io::stderr())
            .try_init()
            .map_err(|e| e.to_string())?;
        return Ok((guard, None));
    };

    if !logs_dir.exists() {
        std::fs::create_dir_all(logs_dir).map_err(|e| format!("Failed to create log directory '{}': {e}", logs_dir.display()))?;
    }
    let log_path = logs_dir.join(format!("{file_name}.log"));

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        // global max log level
        .max_log_level(LevelFilter::Info)
        .root(writer)
        // write `Warn` and `Error` logs in ftlog::appender to `err_path` instead of `log_path`
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, Some(log_path)))
}
