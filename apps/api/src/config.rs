use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::ingest::TextSourceKind;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a value that does not parse fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub store_path: PathBuf,
    pub catalog_dir: PathBuf,
    pub text_source: TextSourceKind,
    /// Take skills and degrees from `skills.txt` / `education.txt`.
    pub keyword_overrides: bool,
    /// Write the default reference CSVs when none exist.
    pub bootstrap_catalog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            store_path: PathBuf::from("./parsed_resumes.json"),
            catalog_dir: PathBuf::from("."),
            text_source: TextSourceKind::Pdf,
            keyword_overrides: false,
            bootstrap_catalog: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            store_path: lookup("STORE_PATH").map(PathBuf::from).unwrap_or(defaults.store_path),
            catalog_dir: lookup("CATALOG_DIR").map(PathBuf::from).unwrap_or(defaults.catalog_dir),
            text_source: match lookup("TEXT_SOURCE") {
                Some(v) => v
                    .parse::<TextSourceKind>()
                    .map_err(|e| anyhow!(e))
                    .context("TEXT_SOURCE is invalid")?,
                None => defaults.text_source,
            },
            keyword_overrides: flag(&lookup, "KEYWORD_OVERRIDES", defaults.keyword_overrides)?,
            bootstrap_catalog: flag(&lookup, "BOOTSTRAP_CATALOG", defaults.bootstrap_catalog)?,
        })
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> Result<bool> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("Environment variable '{key}' must be a boolean, got '{raw}'")),
    }
}
