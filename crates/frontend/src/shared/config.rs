//! Client configuration
//!
//! An embedded TOML document provides the defaults. A full or partial TOML
//! document stored in `localStorage["docchat-config"]` overrides them, which
//! lets a deployment point the client at another API origin without a rebuild.

use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin prefixed to every endpoint path. Empty means same origin.
    pub base: String,
    /// Where bare filenames in bot answers are served from.
    pub outputs_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub flash_hide_ms: u32,
    /// Grace period after hiding before a flash leaves the tree, in case no
    /// `transitionend` fires.
    pub flash_remove_ms: u32,
    pub mobile_breakpoint_px: f64,
    pub welcome_message: String,
    pub quick_prompts: Vec<QuickPrompt>,
}

/// Preset query sent by a single click.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QuickPrompt {
    pub label: String,
    pub text: String,
}

const STORAGE_KEY: &str = "docchat-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base = ""
outputs_path = "/static/outputs/"

[ui]
flash_hide_ms = 2500
flash_remove_ms = 400
mobile_breakpoint_px = 900.0
welcome_message = "Welcome - Upload your sources then ask Questions"

[[ui.quick_prompts]]
label = "Summarize"
text = "Summarize the uploaded documents"

[[ui.quick_prompts]]
label = "Slides"
text = "Create a presentation from the uploaded documents"

[[ui.quick_prompts]]
label = "Podcast"
text = "Create a podcast audio overview of the uploaded documents"
"#;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            outputs_path: "/static/outputs/".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            flash_hide_ms: 2500,
            flash_remove_ms: 400,
            mobile_breakpoint_px: 900.0,
            welcome_message: "Welcome - Upload your sources then ask Questions".to_string(),
            quick_prompts: vec![
                QuickPrompt {
                    label: "Summarize".to_string(),
                    text: "Summarize the uploaded documents".to_string(),
                },
                QuickPrompt {
                    label: "Slides".to_string(),
                    text: "Create a presentation from the uploaded documents".to_string(),
                },
                QuickPrompt {
                    label: "Podcast".to_string(),
                    text: "Create a podcast audio overview of the uploaded documents".to_string(),
                },
            ],
        }
    }
}

/// Parse a configuration document. Missing keys keep their defaults.
pub fn parse_config(source: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(source)
}

static CONFIG: OnceCell<ClientConfig> = OnceCell::new();

/// Load configuration once: the stored override if it parses, the embedded
/// default otherwise.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        if let Some(raw) = stored_override() {
            match parse_config(&raw) {
                Ok(config) => {
                    log::info!("Loaded client config override from localStorage");
                    return config;
                }
                Err(e) => log::warn!("Ignoring invalid client config override: {}", e),
            }
        }
        parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::error!("Embedded client config is invalid: {}", e);
            ClientConfig::default()
        })
    })
}

/// Shorthand for [`load_config`].
pub fn config() -> &'static ClientConfig {
    load_config()
}

fn stored_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
[api]
base = "https://docs.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base, "https://docs.example.com");
        assert_eq!(config.api.outputs_path, "/static/outputs/");
        assert_eq!(config.ui.flash_hide_ms, 2500);
        assert_eq!(config.ui.quick_prompts.len(), 3);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        assert!(parse_config("[ui]\nflash_hide_ms = \"soon\"").is_err());
    }
}
