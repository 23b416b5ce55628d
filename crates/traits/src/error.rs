/// Fatal errors raised while building a trait registry.
///
/// Each of these points at a defect in the rule catalog, never at a runtime
/// condition, so callers should abort startup of the stacking subsystem.
#[derive(Debug, thiserror::Error)]
pub enum TraitError {
    #[error("trait {rule} could not be constructed: {reason}")]
    Construction { rule: String, reason: String },
    #[error("trait {rule} declares an invalid config path {path:?}")]
    InvalidPath { rule: String, path: String },
    #[error("trait {rule} is registered more than once")]
    DuplicateRule { rule: String },
    #[error("config path {path:?} is claimed by more than one trait")]
    DuplicatePath { path: String },
}

impl TraitError {
    pub fn construction(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Construction {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from loading trait settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
