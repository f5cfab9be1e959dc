// Chunk: docs/chunks/settings - JSON settings + userscript header
//!
//! Settings for the installed filter and the userscript metadata header.
//!
//! Settings are JSON. Every field is optional; missing fields take their
//! defaults, so `{}` is a valid document:
//!
//! ```json
//! {
//!   "form_fields": true,
//!   "rich_regions": true,
//!   "editable_marker": "[contenteditable=\"true\"]",
//!   "log_level": "warn",
//!   "userscript": { "matches": ["https://www.notion.so/*"] }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::editable::DEFAULT_EDITABLE_MARKER;

/// Errors from parsing or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
    #[error("editable marker must not be empty")]
    EmptyMarker,
    #[error("userscript needs at least one @match pattern")]
    EmptyMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Take over Home/End in `<input>`/`<textarea>`.
    pub form_fields: bool,
    /// Take over Home/End in rich editable regions.
    pub rich_regions: bool,
    /// Selector marking an editable region.
    pub editable_marker: String,
    /// Default tracing level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub userscript: UserscriptMeta,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            form_fields: true,
            rich_regions: true,
            editable_marker: DEFAULT_EDITABLE_MARKER.to_string(),
            log_level: "warn".to_string(),
            userscript: UserscriptMeta::default(),
        }
    }
}

impl Settings {
    /// Parses and validates settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level_filter()?;
        if self.editable_marker.trim().is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.userscript.matches.is_empty() {
            return Err(ConfigError::EmptyMatch);
        }
        Ok(())
    }

    /// The configured log level as a tracing filter.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// The `// ==UserScript==` metadata block the userscript manager reads to
/// decide where and how to inject the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserscriptMeta {
    pub name: String,
    pub namespace: String,
    pub version: String,
    pub description: String,
    pub author: String,
    /// One `@match` line per pattern.
    pub matches: Vec<String>,
    pub grant: String,
}

impl Default for UserscriptMeta {
    fn default() -> Self {
        Self {
            name: "Smart Home/End (line + prev/next line) + Shift Select".to_string(),
            namespace: "http://tampermonkey.net/".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Home/End go to start/end of line; if already there, jump to \
                          previous/next line start/end. Shift keeps selection."
                .to_string(),
            author: "You".to_string(),
            matches: vec!["https://www.notion.so/*".to_string()],
            grant: "none".to_string(),
        }
    }
}

impl UserscriptMeta {
    /// Renders the metadata block with values aligned in one column.
    pub fn render(&self) -> String {
        let mut out = String::from("// ==UserScript==\n");
        let mut line = |key: &str, value: &str| {
            out.push_str(&format!("// {:<13}{}\n", key, value));
        };

        line("@name", &self.name);
        line("@namespace", &self.namespace);
        line("@version", &self.version);
        line("@description", &self.description);
        line("@author", &self.author);
        for pattern in &self.matches {
            line("@match", pattern);
        }
        line("@grant", &self.grant);

        out.push_str("// ==/UserScript==\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parsing ====================

    #[test]
    fn test_empty_object_is_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_settings_keep_other_defaults() {
        let settings =
            Settings::from_json(r#"{"rich_regions": false, "log_level": "debug"}"#).unwrap();
        assert!(settings.form_fields);
        assert!(!settings.rich_regions);
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::DEBUG);
        assert_eq!(settings.editable_marker, DEFAULT_EDITABLE_MARKER);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Settings::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let err = Settings::from_json(r#"{"editable_marker": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyMarker));
    }

    #[test]
    fn test_empty_match_list_rejected() {
        let err = Settings::from_json(r#"{"userscript": {"matches": []}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyMatch));
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let json = Settings::default().to_json_pretty().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }

    // ==================== Header ====================

    #[test]
    fn test_header_layout() {
        let meta = UserscriptMeta {
            matches: vec![
                "https://www.notion.so/*".to_string(),
                "https://*.notion.site/*".to_string(),
            ],
            ..Default::default()
        };
        let header = meta.render();
        let lines: Vec<&str> = header.lines().collect();

        assert_eq!(lines.first(), Some(&"// ==UserScript=="));
        assert_eq!(lines.last(), Some(&"// ==/UserScript=="));
        assert!(lines.contains(&"// @namespace   http://tampermonkey.net/"));
        assert!(lines.contains(&"// @match       https://www.notion.so/*"));
        assert!(lines.contains(&"// @match       https://*.notion.site/*"));
        assert!(lines.contains(&"// @grant       none"));
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_header_version_tracks_crate() {
        let header = UserscriptMeta::default().render();
        let expected = format!("// @version     {}", env!("CARGO_PKG_VERSION"));
        assert!(header.lines().any(|line| line == expected));
    }
}
