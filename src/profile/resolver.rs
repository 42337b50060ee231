//! Profile selection, loading and merging.

use super::model::{ConfigDocument, ProfileOverlay};
use crate::context::WorkspaceContext;
use crate::domain::AddonDomain;
use crate::error::{ConfigError, Result};
use crate::merge::deep_merge;
use crate::parser::{load_document, load_mapping};
use crate::value::{Mapping, Value};
use std::fs;
use std::path::PathBuf;

/// Extension of base and profile documents.
const DOCUMENT_EXTENSION: &str = "yml";

/// Resolves the effective configuration of one add-on domain.
///
/// Every call re-reads the documents it needs; nothing is cached.
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    ctx: WorkspaceContext,
    domain: AddonDomain,
}

impl ProfileResolver {
    pub fn new(ctx: WorkspaceContext, domain: AddonDomain) -> Self {
        Self { ctx, domain }
    }

    pub fn domain(&self) -> &AddonDomain {
        &self.domain
    }

    /// Resolve the merged configuration.
    ///
    /// The profile is `explicit` when given (and non-empty), otherwise the one
    /// named in the feature registry, otherwise the domain default. The merged
    /// data carries the effective name under `profile`.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDocument)` - Base merged with the profile's overrides
    /// * `Err(ConfigError::MissingFile)` - Base or profile document is absent
    /// * `Err(ConfigError::Structural)` - A document is malformed
    /// * `Err(ConfigError::Shape)` - The profile document has the wrong shape
    pub fn resolve(&self, explicit: Option<&str>) -> Result<ConfigDocument> {
        let base = self.load_base()?;

        let profile = match explicit.filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => self.active_profile()?,
        };

        let overlay = self.load_profile(&profile)?;
        let mut data = deep_merge(&base, &overlay.overrides);
        data.insert("profile".to_string(), Value::String(profile.clone()));

        log::debug!(
            "resolved {} with profile '{}' ({} top-level keys)",
            self.domain.key,
            profile,
            data.len()
        );

        Ok(ConfigDocument {
            profile,
            description: overlay.description,
            data,
        })
    }

    /// Load `addons/<slug>/config/<slug>.yml`.
    pub fn load_base(&self) -> Result<Mapping> {
        load_mapping(&self.ctx.base_config_path(&self.domain))
    }

    /// Load `addons/<slug>/profiles/<name>.yml`.
    pub fn load_profile(&self, name: &str) -> Result<ProfileOverlay> {
        let path = self.profile_path(name)?;
        let doc = load_mapping(&path)?;
        ProfileOverlay::from_mapping(name, doc)
    }

    /// Path of a profile document. Names that could escape the profiles
    /// directory are rejected.
    pub fn profile_path(&self, name: &str) -> Result<PathBuf> {
        validate_profile_name(name)?;
        Ok(self
            .ctx
            .profiles_dir(&self.domain)
            .join(format!("{}.{}", name, DOCUMENT_EXTENSION)))
    }

    /// The profile named in the feature registry, or the domain default.
    ///
    /// A missing registry file, a missing entry, or a non-text `profile`
    /// value all fall back to the default. A malformed registry is an error.
    pub fn active_profile(&self) -> Result<String> {
        let registry_path = &self.ctx.registry_path;
        if !registry_path.is_file() {
            log::debug!(
                "no feature registry at {}; using default profile '{}'",
                registry_path.display(),
                self.domain.default_profile
            );
            return Ok(self.domain.default_profile.to_string());
        }

        let registry = load_document(registry_path)?;
        match registry.get_path(&["addons", self.domain.key, "profile"]) {
            Some(Value::String(name)) if !name.is_empty() => {
                log::debug!("registry selects profile '{}' for {}", name, self.domain.key);
                Ok(name.clone())
            }
            Some(other) if !other.is_null() => {
                log::warn!(
                    "registry profile for {} is a {}, not text; using default profile '{}'",
                    self.domain.key,
                    other.type_name(),
                    self.domain.default_profile
                );
                Ok(self.domain.default_profile.to_string())
            }
            _ => {
                log::debug!(
                    "registry names no profile for {}; using default profile '{}'",
                    self.domain.key,
                    self.domain.default_profile
                );
                Ok(self.domain.default_profile.to_string())
            }
        }
    }

    /// Names of the profile documents on disk, sorted.
    pub fn available_profiles(&self) -> Result<Vec<String>> {
        let dir = self.ctx.profiles_dir(&self.domain);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|e| ConfigError::io(&dir, &e))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ConfigError::io(&dir, &e))?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

fn validate_profile_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..");

    if invalid {
        return Err(ConfigError::Shape(format!(
            "invalid profile name '{}': expected a plain file stem",
            name
        )));
    }
    Ok(())
}
