use anyhow::{anyhow, Result};
use std::env;

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub http_host: String,
    /// Port the HTTP listener binds to.
    pub http_port: u16,
    /// Directory the HTML templates are loaded from.
    pub templates_dir: String,
}

impl Config {
    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset or blank.
    pub fn from_env() -> Result<Self> {
        let http_host = env::var("HTTP_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());
        let http_host = if http_host.trim().is_empty() {
            "0.0.0.0".to_string()
        } else {
            http_host
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let port_str = if port_str.trim().is_empty() {
            "3000".to_string()
        } else {
            port_str
        };
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let templates_dir = env::var("TEMPLATES_DIR")
            .unwrap_or_else(|_| "templates".to_string());
        let templates_dir = if templates_dir.trim().is_empty() {
            "templates".to_string()
        } else {
            templates_dir
        };

        Ok(Config {
            http_host,
            http_port,
            templates_dir,
        })
    }
}
