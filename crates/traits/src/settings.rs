//! Per-trait enable switches.
//!
//! ```yaml
//! default_enabled: true
//! traits:
//!   age: true
//!   sheep:
//!     color: false
//!   bee: false          # disables bee.nectar and bee.stung
//!   "horse.color": true # flat dotted keys work too
//! ```

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitSettings {
    /// Answer for paths the `traits` tree does not mention.
    pub default_enabled: bool,
    pub traits: Value,
}

impl Default for TraitSettings {
    fn default() -> Self {
        Self {
            default_enabled: true,
            traits: Value::Null,
        }
    }
}

impl TraitSettings {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_yaml_str(&data)?;
        tracing::debug!(path = %path.as_ref().display(), "trait settings loaded");
        Ok(settings)
    }

    /// Whether the trait at the dotted `path` is switched on.
    ///
    /// A flat key matching the whole path wins. Otherwise the tree is walked
    /// segment by segment and the first boolean met decides, so a `false` on
    /// a parent disables every trait beneath it.
    pub fn is_enabled(&self, path: &str) -> bool {
        if let Some(Value::Bool(enabled)) = self.traits.get(path) {
            return *enabled;
        }
        let mut node = &self.traits;
        for segment in path.split('.') {
            match node.get(segment) {
                Some(Value::Bool(enabled)) => return *enabled,
                Some(next) => node = next,
                None => return self.default_enabled,
            }
        }
        self.default_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
traits:
  age: false
  sheep:
    color: false
    shear: true
  bee: false
  "horse.color": false
"#;

    #[test]
    fn default_enables_everything() {
        let settings = TraitSettings::default();
        assert!(settings.is_enabled("age"));
        assert!(settings.is_enabled("sheep.color"));
    }

    #[test]
    fn nested_lookup() {
        let settings = TraitSettings::from_yaml_str(SAMPLE).unwrap();
        assert!(!settings.is_enabled("age"));
        assert!(!settings.is_enabled("sheep.color"));
        assert!(settings.is_enabled("sheep.shear"));
        assert!(settings.is_enabled("leash"));
    }

    #[test]
    fn parent_switch_covers_children() {
        let settings = TraitSettings::from_yaml_str(SAMPLE).unwrap();
        assert!(!settings.is_enabled("bee.nectar"));
        assert!(!settings.is_enabled("bee.stung"));
    }

    #[test]
    fn flat_dotted_key() {
        let settings = TraitSettings::from_yaml_str(SAMPLE).unwrap();
        assert!(!settings.is_enabled("horse.color"));
    }

    #[test]
    fn non_boolean_leaf_falls_back_to_default() {
        let settings = TraitSettings::from_yaml_str(
            "default_enabled: false\ntraits:\n  age: yes please\n  sheep:\n    color: true\n",
        )
        .unwrap();
        assert!(!settings.is_enabled("age"));
        assert!(!settings.is_enabled("sheep"));
        assert!(settings.is_enabled("sheep.color"));
        assert!(!settings.is_enabled("potion"));
    }

    #[test]
    fn load_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(SAMPLE.as_bytes()).unwrap();
        let settings = TraitSettings::load(tmp.path()).unwrap();
        assert!(!settings.is_enabled("age"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TraitSettings::load("/definitely/not/here.yml").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let err = TraitSettings::from_yaml_str("traits: [unclosed").unwrap_err();
        assert!(matches!(err, SettingsError::Yaml(_)));
    }
}
