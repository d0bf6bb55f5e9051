// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Greenhouse configuration
    #[serde(default)]
    pub greenhouse: GreenhouseConfig,

    /// System configuration
    #[serde(default)]
    pub system: SystemConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the web server to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// Greenhouse configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenhouseConfig {
    /// Display name shown in the dashboard header
    #[serde(default = "default_greenhouse_name")]
    pub name: String,

    /// Optional path to a JSON snapshot delivered by the data supplier.
    /// When unset or unreadable, the dashboard starts on built-in sample data.
    #[serde(default)]
    pub snapshot_path: Option<String>,
}

impl Default for GreenhouseConfig {
    fn default() -> Self {
        Self {
            name: default_greenhouse_name(),
            snapshot_path: None,
        }
    }
}

/// System configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Debug mode
    #[serde(default)]
    pub debug_mode: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            debug_mode: false,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8098
}

fn default_greenhouse_name() -> String {
    "Greenhouse A".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from config file
    pub fn load() -> Result<Self> {
        // Try config.toml for development
        if let Ok(config_str) = std::fs::read_to_string("config.toml") {
            let config: AppConfig =
                toml::from_str(&config_str).context("Failed to parse config.toml")?;
            info!("✅ Loaded configuration from config.toml");
            config.validate()?;
            return Ok(config);
        }

        // Try config.json for development
        if let Ok(config_str) = std::fs::read_to_string("config.json") {
            let config: AppConfig =
                serde_json::from_str(&config_str).context("Failed to parse config.json")?;
            info!("✅ Loaded configuration from config.json");
            config.validate()?;
            return Ok(config);
        }

        // Fall back to defaults with environment variable overrides
        warn!("No configuration file found, using defaults with environment overrides");
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables (development/testing)
    fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var("ORCHIS_BIND") {
            config.server.bind = bind;
        }

        if let Ok(port) = std::env::var("ORCHIS_PORT")
            && let Ok(port) = port.parse::<u16>()
        {
            config.server.port = port;
        }

        if let Ok(name) = std::env::var("ORCHIS_GREENHOUSE_NAME") {
            config.greenhouse.name = name;
        }

        if let Ok(path) = std::env::var("ORCHIS_SNAPSHOT") {
            config.greenhouse.snapshot_path = Some(path);
        }

        if let Ok(debug_mode) = std::env::var("DEBUG_MODE")
            && let Ok(enabled) = debug_mode.parse::<bool>()
        {
            config.system.debug_mode = enabled;
        }

        config
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.bind.is_empty() {
            anyhow::bail!("server.bind cannot be empty");
        }
        if self.server.port == 0 {
            anyhow::bail!("server.port cannot be 0");
        }

        if self.greenhouse.name.is_empty() {
            anyhow::bail!("greenhouse.name cannot be empty");
        }

        match self.system.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                anyhow::bail!(
                    "system.log_level '{}' is invalid (must be: trace, debug, info, warn, or error)",
                    other
                );
            }
        }

        Ok(())
    }
}
