//! Runtime settings. Every setting is taken from the command line first, then from the environment (a `.env` file is loaded by the binary), then from the default value.

use crate::model::store::DEFAULT_BOOKMARK_FILE;
use crate::model::util::BookmarkError;
use crate::output::{OutputFormat, STDOUT_TARGET};
use log::debug;
use std::path::PathBuf;

pub const BOOKMARK_FILE_ENV: &str = "BOOKMARK_FILE";
pub const BOOKMARK_OUTPUT_ENV: &str = "BOOKMARK_OUTPUT";
pub const BOOKMARK_FORMAT_ENV: &str = "BOOKMARK_FORMAT";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bookmark_file: PathBuf,
    pub output: String,
    pub format: OutputFormat,
}

impl Settings {
    pub fn from_env(
        file: Option<String>,
        output: Option<String>,
        format: Option<String>,
    ) -> Result<Settings, BookmarkError> {
        Settings::resolve(file, output, format, |key| std::env::var(key).ok())
    }

    /// Resolve the settings with a custom environment lookup.
    pub fn resolve<F>(
        file: Option<String>,
        output: Option<String>,
        format: Option<String>,
        env: F,
    ) -> Result<Settings, BookmarkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bookmark_file = pick(file, BOOKMARK_FILE_ENV, &env)
            .unwrap_or_else(|| DEFAULT_BOOKMARK_FILE.to_string());
        let output =
            pick(output, BOOKMARK_OUTPUT_ENV, &env).unwrap_or_else(|| STDOUT_TARGET.to_string());
        let format = match pick(format, BOOKMARK_FORMAT_ENV, &env) {
            Some(v) => v.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        let settings = Settings {
            bookmark_file: PathBuf::from(bookmark_file),
            output,
            format,
        };
        debug!("Resolved settings: {:?}", settings);

        Ok(settings)
    }
}

fn pick<F>(value: Option<String>, key: &str, env: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        Some(v) => Some(v),
        None => env(key).filter(|v| !v.trim().is_empty()),
    }
}
