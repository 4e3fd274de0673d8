//! Items file location and date overrides.

use chrono::NaiveDate;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

use sitetrack_timeline::models::parse_date;

/// Environment variable name for the items file path
pub const ITEMS_PATH_ENV: &str = "STK_ITEMS_PATH";

/// Environment variable name for the "today" override
pub const TODAY_ENV: &str = "STK_TODAY";

/// Default items file path relative to the project root
pub const DEFAULT_ITEMS_PATH: &str = ".sitetrack/items.json";

/// Get the items file path from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --items argument
/// 2. STK_ITEMS_PATH environment variable (if non-empty)
/// 3. Default path (<project root>/.sitetrack/items.json)
pub fn resolve_items_path(cli_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_path {
        debug!("Using items path from --items: {}", path.display());
        return path;
    }

    if let Ok(env_path) = std::env::var(ITEMS_PATH_ENV)
        && !env_path.is_empty()
    {
        debug!("Using items path from {}: {}", ITEMS_PATH_ENV, env_path);
        return PathBuf::from(env_path);
    }

    default_items_path()
}

/// Get the default items path based on project root.
///
/// Uses `git rev-parse --show-toplevel` to find the project root; outside a
/// git repository the path is relative to the current directory.
pub fn default_items_path() -> PathBuf {
    let base_path = find_project_root().unwrap_or_else(|| PathBuf::from("."));
    base_path.join(DEFAULT_ITEMS_PATH)
}

/// Find the project root directory using git.
pub fn find_project_root() -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if output.status.success() {
        let path_str = String::from_utf8(output.stdout).ok()?;
        Some(PathBuf::from(path_str.trim()))
    } else {
        None
    }
}

/// Clap value parser for `--today`.
pub fn parse_today(s: &str) -> Result<NaiveDate, String> {
    parse_date("today", s).map_err(|e| e.to_string())
}
