//! Registry loading, mutation and saving.

use super::model::RegistryEntry;
use super::render::render;
use crate::domain::AddonDomain;
use crate::error::{ConfigError, Result};
use crate::fs::atomic_write_file;
use crate::parser::{load_mapping, parse_mapping};
use crate::value::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// The feature registry: which add-ons are on, and with which profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRegistry {
    addons: BTreeMap<String, RegistryEntry>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry from disk.
    ///
    /// A missing file is an empty registry. Entries of built-in domains get
    /// their absent fields filled from the domain defaults.
    ///
    /// # Returns
    ///
    /// * `Ok(FeatureRegistry)` - The parsed registry
    /// * `Err(ConfigError::Structural)` - The document is malformed
    /// * `Err(ConfigError::Shape)` - `addons` or an entry has the wrong shape
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no feature registry at {}; starting empty", path.display());
            return Ok(Self::new());
        }

        Self::from_mapping(load_mapping(path)?)
    }

    /// Parse a registry from document text.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_mapping(parse_mapping(text)?)
    }

    fn from_mapping(mut doc: Mapping) -> Result<Self> {
        let addons = match doc.shift_remove("addons") {
            None | Some(Value::Null) => Mapping::new(),
            Some(Value::Mapping(map)) => map,
            Some(other) => {
                return Err(ConfigError::Shape(format!(
                    "'addons' section must be a mapping, found {}",
                    other.type_name()
                )));
            }
        };

        let mut registry = Self::new();
        for (key, value) in addons {
            let map = match value {
                Value::Null => Mapping::new(),
                Value::Mapping(map) => map,
                other => {
                    return Err(ConfigError::Shape(format!(
                        "add-on '{}' must map to a mapping, found {}",
                        key,
                        other.type_name()
                    )));
                }
            };

            let mut entry = RegistryEntry::from_mapping(&key, map)?;
            if let Some(domain) = AddonDomain::by_key(&key) {
                entry.fill_defaults(domain);
            }
            registry.addons.insert(key, entry);
        }

        Ok(registry)
    }

    pub fn get(&self, key: &str) -> Option<&RegistryEntry> {
        self.addons.get(key)
    }

    /// Entries sorted by key.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RegistryEntry)> {
        self.addons.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }

    /// Return the domain's entry, creating it from defaults when absent.
    pub fn ensure_entry(&mut self, domain: &AddonDomain) -> &mut RegistryEntry {
        let entry = self
            .addons
            .entry(domain.key.to_string())
            .or_insert_with(|| {
                log::info!("registering add-on {}", domain.key);
                RegistryEntry::defaults_for(domain)
            });
        entry.fill_defaults(domain);
        entry
    }

    /// Switch an add-on on. Returns `false` if it already was.
    pub fn enable(&mut self, domain: &AddonDomain) -> bool {
        self.set_enabled(domain, true)
    }

    /// Switch an add-on off. Returns `false` if it already was.
    pub fn disable(&mut self, domain: &AddonDomain) -> bool {
        self.set_enabled(domain, false)
    }

    fn set_enabled(&mut self, domain: &AddonDomain, enabled: bool) -> bool {
        let entry = self.ensure_entry(domain);
        let changed = entry.enabled != enabled;
        entry.enabled = enabled;
        if changed {
            log::info!(
                "{} add-on {}",
                if enabled { "enabled" } else { "disabled" },
                domain.key
            );
        }
        changed
    }

    /// Select the active profile of an add-on.
    ///
    /// `available` lists the profile documents on disk; a name not in it is
    /// rejected and the registry is left unchanged.
    pub fn set_profile(
        &mut self,
        domain: &AddonDomain,
        profile: &str,
        available: &[String],
    ) -> Result<()> {
        if !available.iter().any(|name| name == profile) {
            let listed = if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            };
            return Err(ConfigError::Shape(format!(
                "profile '{}' not found for {}. Available profiles: {}",
                profile, domain.key, listed
            )));
        }

        let entry = self.ensure_entry(domain);
        entry.profile = Some(profile.to_string());
        log::info!("set {} profile to '{}'", domain.key, profile);
        Ok(())
    }

    /// Render the registry document.
    pub fn dump(&self) -> Result<String> {
        render(&self.addons)
    }

    /// Render and atomically write the registry to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.dump()?;
        atomic_write_file(path, &text)?;
        log::info!("saved feature registry to {}", path.display());
        Ok(())
    }
}
