//! Configuration handling for the inquiry form

use crate::i18n::Locale;
use crate::sink::StubSink;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the configured sink
pub const SINK_ENV_VAR: &str = "CONCRETE_INQUIRY_SINK";

/// Environment variable that overrides the configured locale
pub const LOCALE_ENV_VAR: &str = "CONCRETE_INQUIRY_LOCALE";

/// Which submission sink to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stub,
    Outbox,
}

impl SinkKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stub" => Some(Self::Stub),
            "outbox" => Some(Self::Outbox),
            _ => None,
        }
    }
}

/// User configuration for the inquiry form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InquiryConfig {
    /// Submission sink
    pub sink: Option<SinkKind>,
    /// Simulated round-trip of the stub sink, in milliseconds
    pub stub_delay_ms: Option<u64>,
    /// Make the stub sink refuse every inquiry
    pub stub_fails: Option<bool>,
    /// Directory the outbox sink writes to
    pub outbox_dir: Option<PathBuf>,
    /// Display language
    pub locale: Option<Locale>,
}

impl InquiryConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("th.co", "svconcrete", "concrete-inquiry")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for logs and the default outbox
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from the user config file, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let env_sink = std::env::var(SINK_ENV_VAR).ok();
        let env_locale = std::env::var(LOCALE_ENV_VAR).ok();
        match Self::config_path() {
            Some(path) => Self::load_with(&path, env_sink.as_deref(), env_locale.as_deref()),
            None => Ok(Self::default()
                .with_sink_override(env_sink.as_deref())
                .with_locale_override(env_locale.as_deref())),
        }
    }

    /// Load configuration from `path` and apply the given overrides.
    ///
    /// On first run the defaults are written out so there is a file to edit.
    pub fn load_with(path: &Path, env_sink: Option<&str>, env_locale: Option<&str>) -> Result<Self> {
        let config = Self::load_from(path)?;
        if !path.exists() {
            if let Err(err) = config.save_to(path) {
                tracing::warn!("Could not write default config to {}: {err}", path.display());
            }
        }
        Ok(config
            .with_sink_override(env_sink)
            .with_locale_override(env_locale))
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: InquiryConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }

        Ok(Self::default())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Replace the sink with `value` when it names a known sink
    pub fn with_sink_override(mut self, value: Option<&str>) -> Self {
        if let Some(raw) = value {
            match SinkKind::parse(raw) {
                Some(kind) => self.sink = Some(kind),
                None => tracing::warn!("Ignoring unknown {SINK_ENV_VAR} value {raw:?}"),
            }
        }
        self
    }

    /// Replace the locale with `value` when it names a supported language
    pub fn with_locale_override(mut self, value: Option<&str>) -> Self {
        if let Some(raw) = value {
            match Locale::parse(raw) {
                Some(locale) => self.locale = Some(locale),
                None => tracing::warn!("Ignoring unknown {LOCALE_ENV_VAR} value {raw:?}"),
            }
        }
        self
    }

    pub fn sink_kind(&self) -> SinkKind {
        self.sink.unwrap_or_default()
    }

    pub fn stub_delay(&self) -> Duration {
        self.stub_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(StubSink::DEFAULT_DELAY)
    }

    pub fn stub_fails(&self) -> bool {
        self.stub_fails.unwrap_or(false)
    }

    pub fn outbox_dir(&self) -> PathBuf {
        self.outbox_dir
            .clone()
            .or_else(|| Self::data_dir().map(|dir| dir.join("outbox")))
            .unwrap_or_else(|| PathBuf::from("outbox"))
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = InquiryConfig::default();
        assert!(config.sink.is_none());
        assert!(config.stub_delay_ms.is_none());
        assert!(config.stub_fails.is_none());
        assert!(config.outbox_dir.is_none());
        assert!(config.locale.is_none());
    }

    #[test]
    fn test_defaults_through_accessors() {
        let config = InquiryConfig::default();
        assert_eq!(config.sink_kind(), SinkKind::Stub);
        assert_eq!(config.stub_delay(), Duration::from_millis(2000));
        assert!(!config.stub_fails());
        assert_eq!(config.locale(), Locale::Th);
        assert!(config.outbox_dir().ends_with("outbox"));
    }

    #[test]
    fn test_serialization() {
        let config = InquiryConfig {
            sink: Some(SinkKind::Outbox),
            stub_delay_ms: Some(500),
            stub_fails: Some(true),
            outbox_dir: Some(PathBuf::from("/var/spool/inquiries")),
            locale: Some(Locale::En),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: InquiryConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.sink, Some(SinkKind::Outbox));
        assert_eq!(parsed.stub_delay(), Duration::from_millis(500));
        assert!(parsed.stub_fails());
        assert_eq!(
            parsed.outbox_dir(),
            PathBuf::from("/var/spool/inquiries")
        );
        assert_eq!(parsed.locale(), Locale::En);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: InquiryConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.sink.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"sink": "outbox", "unknown_field": "value"}"#;
        let parsed: InquiryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sink_kind(), SinkKind::Outbox);
    }

    #[test]
    fn test_deserialize_rejects_unknown_sink() {
        let json = r#"{"sink": "carrier-pigeon"}"#;
        assert!(serde_json::from_str::<InquiryConfig>(json).is_err());
    }

    #[test]
    fn test_sink_override() {
        let config = InquiryConfig::default().with_sink_override(Some(" Outbox "));
        assert_eq!(config.sink_kind(), SinkKind::Outbox);

        let config = config.with_sink_override(Some("nonsense"));
        assert_eq!(config.sink_kind(), SinkKind::Outbox);

        let config = config.with_sink_override(None);
        assert_eq!(config.sink_kind(), SinkKind::Outbox);
    }

    #[test]
    fn test_locale_override() {
        let config = InquiryConfig {
            locale: Some(Locale::Th),
            ..Default::default()
        };
        let config = config.with_locale_override(Some("en_GB"));
        assert_eq!(config.locale(), Locale::En);

        let config = config.with_locale_override(Some("klingon"));
        assert_eq!(config.locale(), Locale::En);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let tmp = tempfile::tempdir().unwrap();
        let config = InquiryConfig::load_from(&tmp.path().join("config.json")).unwrap();
        assert!(config.sink.is_none());
    }

    #[test]
    fn test_save_then_load_from() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.json");
        let config = InquiryConfig {
            locale: Some(Locale::En),
            stub_delay_ms: Some(10),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = InquiryConfig::load_from(&path).unwrap();

        assert_eq!(loaded.locale(), Locale::En);
        assert_eq!(loaded.stub_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_load_from_invalid_json_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(InquiryConfig::load_from(&path).is_err());
    }

    mod first_run {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_file_is_created_with_defaults() {
            let tmp = tempfile::tempdir().unwrap();
            let path = tmp.path().join("concrete-inquiry").join("config.json");

            let config = InquiryConfig::load_with(&path, None, None).unwrap();

            assert_eq!(config.sink_kind(), SinkKind::Stub);
            let written = std::fs::read_to_string(&path).unwrap();
            // Pretty printed, one key per line
            assert!(written.contains("\n  \"sink\": null"));
            let reloaded = InquiryConfig::load_from(&path).unwrap();
            assert!(reloaded.sink.is_none());
            assert!(reloaded.locale.is_none());
        }

        #[test]
        fn test_existing_file_is_not_overwritten() {
            let tmp = tempfile::tempdir().unwrap();
            let path = tmp.path().join("config.json");
            let original = r#"{"sink": "outbox", "locale": "en"}"#;
            std::fs::write(&path, original).unwrap();

            let config = InquiryConfig::load_with(&path, None, None).unwrap();

            assert_eq!(config.sink_kind(), SinkKind::Outbox);
            assert_eq!(config.locale(), Locale::En);
            assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
        }

        #[test]
        fn test_env_values_beat_file_values() {
            let tmp = tempfile::tempdir().unwrap();
            let path = tmp.path().join("config.json");
            std::fs::write(&path, r#"{"sink": "outbox", "locale": "en"}"#).unwrap();

            let config = InquiryConfig::load_with(&path, Some("stub"), Some("th")).unwrap();

            assert_eq!(config.sink_kind(), SinkKind::Stub);
            assert_eq!(config.locale(), Locale::Th);
        }

        #[test]
        fn test_unknown_env_values_keep_file_values() {
            let tmp = tempfile::tempdir().unwrap();
            let path = tmp.path().join("config.json");
            std::fs::write(&path, r#"{"sink": "outbox", "locale": "en"}"#).unwrap();

            let config = InquiryConfig::load_with(&path, Some("fax"), Some("fr")).unwrap();

            assert_eq!(config.sink_kind(), SinkKind::Outbox);
            assert_eq!(config.locale(), Locale::En);
        }
    }
}
