// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_ENV: &str = "HRS_LOG";

/// Sends tracing output to `path`. The terminal is owned by the UI, so
/// nothing is ever logged to stdout or stderr.
pub fn init(path: &Path, level: &str) -> Result<()> {
    let file = open_log_file(path)?;
    let override_directives = env::var(LOG_FILTER_ENV).ok();
    let filter = build_filter(override_directives.as_deref(), level)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow!("install log subscriber: {error}"))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| {
            format!(
                "open log file {} -- set [log].file or HRS_LOG_PATH to a writable path",
                path.display()
            )
        })
}

fn build_filter(override_directives: Option<&str>, level: &str) -> Result<EnvFilter> {
    match override_directives.map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {LOG_FILTER_ENV} filter {directives:?}")),
        _ => EnvFilter::try_new(level).with_context(|| format!("invalid [log].level {level:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::{build_filter, open_log_file};
    use anyhow::Result;
    use std::io::Write;

    #[test]
    fn open_log_file_creates_parent_dirs_and_appends() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("nested").join("hrs.log");

        writeln!(open_log_file(&path)?, "first")?;
        writeln!(open_log_file(&path)?, "second")?;

        assert_eq!(std::fs::read_to_string(&path)?, "first\nsecond\n");
        Ok(())
    }

    #[test]
    fn open_log_file_reports_unwritable_path() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let error = open_log_file(temp.path()).expect_err("directory is not a log file");
        assert!(format!("{error:#}").contains("HRS_LOG_PATH"));
        Ok(())
    }

    #[test]
    fn override_directives_win_over_level() -> Result<()> {
        let filter = build_filter(Some("hrs_data=debug"), "warn")?;
        assert!(filter.to_string().contains("hrs_data=debug"));
        Ok(())
    }

    #[test]
    fn blank_override_falls_back_to_level() -> Result<()> {
        let filter = build_filter(Some("  "), "warn")?;
        assert!(filter.to_string().contains("warn"));
        let filter = build_filter(None, "trace")?;
        assert!(filter.to_string().contains("trace"));
        Ok(())
    }
}
