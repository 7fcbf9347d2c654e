//! `tracing` subscriber setup.
//!
//! The interactive form draws over the whole terminal, so it only logs when a
//! log file is configured. The non-interactive modes fall back to stderr.

use std::fs::File;
use std::sync::Mutex;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use tracing_subscriber::EnvFilter;

use crate::analysis::error::AnalysisError;
use crate::config::SentiaConfig;

/// Where log output goes when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackTarget {
    /// Write to stderr.
    Stderr,
    /// Install no subscriber at all.
    Disabled,
}

/// Installs the global subscriber for this process.
///
/// Returns `true` when a subscriber was installed.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] when the log file cannot be opened and
/// [`AnalysisError::Configuration`] when the filter is invalid or a global
/// subscriber is already installed.
pub fn init(config: &SentiaConfig, fallback: FallbackTarget) -> Result<bool, AnalysisError> {
    let filter = build_filter(&config.log_level)?;

    if let Some(path) = config.log_file_path() {
        let file = open_log_file(&path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|error| AnalysisError::Configuration {
                message: format!("failed to install log subscriber: {error}"),
            })?;
        return Ok(true);
    }

    if fallback == FallbackTarget::Disabled {
        return Ok(false);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| AnalysisError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })?;
    Ok(true)
}

fn build_filter(level: &str) -> Result<EnvFilter, AnalysisError> {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return Ok(from_env);
    }

    EnvFilter::try_new(level).map_err(|error| AnalysisError::Configuration {
        message: format!("invalid log level '{level}': {error}"),
    })
}

/// Opens `path` for appending, creating parent directories as needed.
pub(crate) fn open_log_file(path: &Utf8Path) -> Result<File, AnalysisError> {
    let file_name = path.file_name().ok_or_else(|| AnalysisError::Io {
        message: format!("invalid log file path '{path}': no file name"),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let (root, relative) = if parent.is_absolute() {
        let relative = parent.strip_prefix("/").map_err(|_| AnalysisError::Io {
            message: format!("failed to normalise log directory '{parent}'"),
        })?;
        (open_ambient("/")?, relative)
    } else {
        (open_ambient(".")?, parent)
    };

    let directory = if relative.as_str().is_empty() || relative == Utf8Path::new(".") {
        root
    } else {
        root.create_dir_all(relative)
            .map_err(|error| AnalysisError::Io {
                message: format!("failed to create log directory '{parent}': {error}"),
            })?;
        root.open_dir(relative).map_err(|error| AnalysisError::Io {
            message: format!("failed to open log directory '{parent}': {error}"),
        })?
    };

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    directory
        .open_with(file_name, &options)
        .map(cap_std::fs_utf8::File::into_std)
        .map_err(|error| AnalysisError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}

fn open_ambient(path: &str) -> Result<Dir, AnalysisError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| AnalysisError::Io {
        message: format!("failed to open directory '{path}': {error}"),
    })
}
