use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Every value has a default, so a bare `cargo run` works.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory backing the local key-value storage.
    pub storage_dir: PathBuf,
    /// Name of the slot the submitted resume is written to.
    pub storage_slot: String,
    /// Image reference shown when the resume has no profile picture.
    pub placeholder_image: String,
    /// When set, "edit" loads the stored resume back into the form instead of
    /// starting from a blank one.
    pub rehydrate_on_edit: bool,
    pub rust_log: String,
}

pub const DEFAULT_SLOT: &str = "resumeData";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=128&width=128";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "127.0.0.1"),
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            storage_dir: PathBuf::from(env_or("STORAGE_DIR", "./data")),
            storage_slot: env_or("STORAGE_SLOT", DEFAULT_SLOT),
            placeholder_image: env_or("PLACEHOLDER_IMAGE", DEFAULT_PLACEHOLDER_IMAGE),
            rehydrate_on_edit: parse_flag(&env_or("REHYDRATE_ON_EDIT", "false"))
                .context("REHYDRATE_ON_EDIT must be true/false/1/0")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            storage_dir: PathBuf::from("./data"),
            storage_slot: DEFAULT_SLOT.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            rehydrate_on_edit: false,
            rust_log: "info".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}
