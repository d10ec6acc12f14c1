//! Logger construction options

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::AnyLogResult;
use crate::level::Level;

/// Environment variable read by [`Options::from_env`]
pub const LEVEL_ENV_VAR: &str = "ANYLOG_LEVEL";

/// Options applied when a logger is first constructed
///
/// `level` is the only key the base pipeline understands. Every other key is
/// kept in `extra` untouched so `ext` hooks can define their own.
///
/// Options only matter on a registry miss; asking for an existing logger with
/// different options returns it unchanged.
///
/// # Example
///
/// ```
/// use anylog_core::{Level, Options};
///
/// let options = Options::from_json(r#"{"level": "warn", "color": true}"#).unwrap();
/// assert_eq!(options.level, Some(Level::Warn));
/// assert_eq!(options.get("color"), Some(&serde_json::json!(true)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Initial dispatch threshold; unknown names are treated as unset
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,

    /// Keys not recognized by the base pipeline
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial threshold
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Add a pass-through key
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Look up a pass-through key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> AnyLogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse options from a YAML mapping
    pub fn from_yaml(yaml: &str) -> AnyLogResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Options with `level` taken from `ANYLOG_LEVEL`, if set to a level name
    pub fn from_env() -> Self {
        let level = std::env::var(LEVEL_ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok());
        Self {
            level,
            extra: Map::new(),
        }
    }
}

fn lenient_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Level>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let options = Options::new()
            .with_level(Level::Info)
            .with_option("target", "stderr");
        assert_eq!(options.level, Some(Level::Info));
        assert_eq!(options.get("target"), Some(&json!("stderr")));
        assert_eq!(options.get("missing"), None);
    }

    #[test]
    fn test_from_json_keeps_unknown_keys() {
        let options = Options::from_json(r#"{"level":"error","depth":3}"#).unwrap();
        assert_eq!(options.level, Some(Level::Error));
        assert_eq!(options.get("depth"), Some(&json!(3)));
        assert!(!options.extra.contains_key("level"));
    }

    #[test]
    fn test_from_yaml() {
        let options = Options::from_yaml("level: trace\nformat: short\n").unwrap();
        assert_eq!(options.level, Some(Level::Trace));
        assert_eq!(options.get("format"), Some(&json!("short")));
    }

    #[test]
    fn test_unknown_level_is_unset() {
        let options = Options::from_json(r#"{"level":"verbose"}"#).unwrap();
        assert_eq!(options.level, None);

        let options = Options::from_json(r#"{"level":7}"#).unwrap();
        assert_eq!(options.level, None);
    }

    #[test]
    fn test_from_env() {
        // Only test reading ANYLOG_LEVEL.
        std::env::set_var(LEVEL_ENV_VAR, "INFO");
        assert_eq!(Options::from_env().level, Some(Level::Info));

        std::env::set_var(LEVEL_ENV_VAR, "loud");
        assert_eq!(Options::from_env().level, None);

        std::env::remove_var(LEVEL_ENV_VAR);
        assert_eq!(Options::from_env(), Options::default());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(Options::from_json("{level").is_err());
        assert!(Options::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_serialize_skips_missing_level() {
        let value = serde_json::to_value(Options::new().with_option("a", 1)).unwrap();
        assert_eq!(value, json!({"a": 1}));

        let value = serde_json::to_value(Options::new().with_level(Level::Log)).unwrap();
        assert_eq!(value, json!({"level": "log"}));
    }
}
