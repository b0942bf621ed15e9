//! Configuration file management for Aiyo.
//!
//! Supports reading secrets from `~/.config/aiyo/secret.json`, with the
//! `GEMINI_API_KEY` environment variable as a fallback for deployments
//! that inject secrets through the environment.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Loads the secret configuration file from ~/.config/aiyo/secret.json
pub fn load_secret_config() -> Result<SecretConfig, String> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        return Err(format!(
            "Configuration file not found at: {}",
            config_path.display()
        ));
    }

    let content = fs::read_to_string(&config_path).map_err(|e| {
        format!(
            "Failed to read configuration file at {}: {}",
            config_path.display(),
            e
        )
    })?;

    serde_json::from_str(&content).map_err(|e| {
        format!(
            "Failed to parse configuration file at {}: {}",
            config_path.display(),
            e
        )
    })
}

/// Resolves the Gemini configuration, preferring secret.json and falling
/// back to the `GEMINI_API_KEY` environment variable.
pub fn resolve_gemini_config() -> Result<GeminiConfig, String> {
    if let Ok(config) = load_secret_config() {
        if let Some(gemini) = config.gemini {
            return Ok(gemini);
        }
    }

    match std::env::var("GEMINI_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => Ok(GeminiConfig {
            api_key,
            model_name: None,
        }),
        _ => Err(
            "Gemini configuration not found in secret.json and GEMINI_API_KEY is unset"
                .to_string(),
        ),
    }
}

/// Returns the path to the configuration file: ~/.config/aiyo/secret.json
fn get_config_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or_else(|| "Could not determine home directory".to_string())?;
    Ok(home.join(".config").join("aiyo").join("secret.json"))
}
