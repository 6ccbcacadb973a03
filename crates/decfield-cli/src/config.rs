use anyhow::{Context, Result};
use decfield_core::{FieldConfig, ValidationMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the field profile path based on priority:
/// 1. Explicit path passed on the command line
/// 2. DECFIELD_CONFIG environment variable
/// 3. XDG config directory (recommended default)
/// 4. ~/.decfield (fallback for systems without XDG)
pub fn resolve_profile_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("DECFIELD_CONFIG") {
        return Ok(PathBuf::from(env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("decfield").join("fields.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".decfield").join("fields.toml"));
    }

    anyhow::bail!("Could not determine profile path: no HOME directory or XDG config directory found")
}

/// A named set of field configurations for the interactive form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl Profile {
    /// Load the profile at `path`; a missing file yields the built-in
    /// two-field demo profile.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::demo());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading field profile {}", path.display()))?;
        let profile: Profile = toml::from_str(&content)
            .with_context(|| format!("parsing field profile {}", path.display()))?;

        if profile.fields.is_empty() {
            return Ok(Self::demo());
        }
        Ok(profile)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The default form: one generic decimal field and one amount field.
    pub fn demo() -> Self {
        Self {
            fields: vec![
                FieldConfig::new("price", "1"),
                FieldConfig::new("montant", "2").with_mode(ValidationMode::Amount),
            ],
        }
    }
}
