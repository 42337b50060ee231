//! Built-in add-on domains.
//!
//! Each domain owns a base configuration, a directory of profile overlays, and
//! an entry in the feature registry. The constants here are the single source
//! of truth for file names, registry keys, and defaults.

use crate::error::{ConfigError, Result};

/// Static description of one add-on domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddonDomain {
    /// Key under `addons:` in the feature registry (e.g. `3d_game_core`).
    pub key: &'static str,
    /// Directory name under `addons/` (e.g. `3d-game-core`).
    pub slug: &'static str,
    /// Human-readable name.
    pub title: &'static str,
    /// Profile used when neither the caller nor the registry names one.
    pub default_profile: &'static str,
    /// Version recorded when the registry entry is first created.
    pub version: &'static str,
    /// Description recorded when the registry entry is first created.
    pub description: &'static str,
}

/// 3D game core: determinism/rollback harnesses, asset and performance gates.
pub const GAME_3D_CORE: AddonDomain = AddonDomain {
    key: "3d_game_core",
    slug: "3d-game-core",
    title: "3D Game Core",
    default_profile: "generic",
    version: "1.0.0",
    description: "Add-in for 3D games: profiles, determinism/rollback harnesses, tolerant replays, asset and performance gates.",
};

/// Video AI enhancer: capture, quality, latency and storage budgets.
pub const VIDEO_AI_ENHANCER: AddonDomain = AddonDomain {
    key: "video_ai_enhancer",
    slug: "video-ai-enhancer",
    title: "Video AI Enhancer",
    default_profile: "baseline",
    version: "1.0.0",
    description: "Add-in for real-time video enhancement pipelines with capture, quality, latency, and storage governance.",
};

/// All domains known to this build.
pub const BUILTIN_DOMAINS: &[AddonDomain] = &[GAME_3D_CORE, VIDEO_AI_ENHANCER];

impl AddonDomain {
    /// Find a built-in domain by registry key or directory slug.
    pub fn lookup(name: &str) -> Result<&'static AddonDomain> {
        BUILTIN_DOMAINS
            .iter()
            .find(|domain| domain.key == name || domain.slug == name)
            .ok_or_else(|| {
                let known: Vec<&str> = BUILTIN_DOMAINS.iter().map(|d| d.key).collect();
                ConfigError::Shape(format!(
                    "unknown add-on domain '{}'. Known domains: {}",
                    name,
                    known.join(", ")
                ))
            })
    }

    /// Find a built-in domain by registry key only.
    pub fn by_key(key: &str) -> Option<&'static AddonDomain> {
        BUILTIN_DOMAINS.iter().find(|domain| domain.key == key)
    }

    /// File name of the base configuration (`<slug>.yml`).
    pub fn base_file_name(&self) -> String {
        format!("{}.yml", self.slug)
    }
}
