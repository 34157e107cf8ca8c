use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use team_builder_core::entry::{MAX_LEVEL, MIN_LEVEL};
use team_builder_core::tera::RestrictedSet;

fn default_notice_ttl_ms() -> u64 {
    3000
}

fn default_level() -> u8 {
    MAX_LEVEL
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuilderConfig {
    /// Replaces the built-in tera-captain ban list when set.
    #[serde(default)]
    pub restricted_tera: Option<Vec<String>>,
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
    #[serde(default = "default_level")]
    pub default_level: u8,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            restricted_tera: None,
            notice_ttl_ms: default_notice_ttl_ms(),
            default_level: default_level(),
        }
    }
}

impl BuilderConfig {
    pub fn restricted_set(&self) -> RestrictedSet {
        match &self.restricted_tera {
            Some(names) => RestrictedSet::new(names.iter().cloned()),
            None => RestrictedSet::default(),
        }
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.default_level) {
            anyhow::bail!(
                "default_level must be within {MIN_LEVEL}..={MAX_LEVEL}, got {}",
                self.default_level
            );
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<BuilderConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let parsed: BuilderConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    parsed.validate()?;
    Ok(parsed)
}

/// Loads `path` when given, otherwise returns the defaults.
pub fn load_config_or_default(path: Option<&Path>) -> anyhow::Result<BuilderConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(BuilderConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() -> anyhow::Result<()> {
        let config: BuilderConfig = serde_json::from_str("{}")?;
        assert_eq!(config, BuilderConfig::default());
        assert_eq!(config.notice_ttl(), Duration::from_millis(3000));
        assert!(config.restricted_set().contains("Miraidon"));
        Ok(())
    }

    #[test]
    fn restricted_override_replaces_builtin_list() -> anyhow::Result<()> {
        let config: BuilderConfig =
            serde_json::from_str(r#"{"restricted_tera": ["Pikachu"], "notice_ttl_ms": 500}"#)?;
        let set = config.restricted_set();
        assert!(set.contains("Pikachu"));
        assert!(!set.contains("Miraidon"));
        assert_eq!(config.notice_ttl(), Duration::from_millis(500));
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_level_and_unknown_keys() {
        let config: BuilderConfig =
            serde_json::from_str(r#"{"default_level": 0}"#).expect("valid json");
        assert!(config.validate().is_err());
        assert!(serde_json::from_str::<BuilderConfig>(r#"{"levle": 50}"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/team-builder.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/team-builder.json"));
    }
}
