//! Environment-backed configuration.
//!
//! All inputs come from the environment (a local `.env` file is honored via
//! `dotenvy` in [`crate::run`]): the service-account key path, the spreadsheet
//! id, the worksheet name, and an optional output directory.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const ENV_CREDENTIALS_FILE: &str = "CREDENTIALS_FILE";
pub const ENV_SHEET_ID: &str = "SHEET_ID";
pub const ENV_SHEET_NAME: &str = "SHEET_NAME";
pub const ENV_OUTPUT_DIR: &str = "OUTPUT_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the Google service-account JSON key file.
    pub credentials_file: PathBuf,
    /// Spreadsheet id (the key in the sheet URL).
    pub sheet_id: String,
    /// Worksheet (tab) name inside the spreadsheet.
    pub sheet_name: String,
    /// Directory the PDFs are written into. Defaults to the working directory.
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            credentials_file: required(ENV_CREDENTIALS_FILE)?.into(),
            sheet_id: required(ENV_SHEET_ID)?,
            sheet_name: required(ENV_SHEET_NAME)?,
            output_dir: env::var(ENV_OUTPUT_DIR)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| ".".into())
                .into(),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process environment is never mutated concurrently.
    #[test]
    fn from_env_reads_vars_and_reports_missing_ones() {
        env::set_var(ENV_CREDENTIALS_FILE, "/tmp/key.json");
        env::set_var(ENV_SHEET_ID, "sheet-id");
        env::set_var(ENV_SHEET_NAME, "Página1");
        env::remove_var(ENV_OUTPUT_DIR);

        let config = Config::from_env().unwrap();
        assert_eq!(config.credentials_file, PathBuf::from("/tmp/key.json"));
        assert_eq!(config.sheet_id, "sheet-id");
        assert_eq!(config.sheet_name, "Página1");
        assert_eq!(config.output_dir, PathBuf::from("."));

        env::set_var(ENV_OUTPUT_DIR, "out");
        let config = Config::from_env().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));

        env::remove_var(ENV_SHEET_NAME);
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ENV_SHEET_NAME)));

        // An empty value counts as missing.
        env::set_var(ENV_SHEET_NAME, "");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ENV_SHEET_NAME)));
    }
}
