//! Tests for command rendering.

use super::features::{render_status, set_profile, toggle};
use super::parse::render_parse;
use super::resolve::{render_get, render_profiles, render_resolve};
use crate::cli::{DomainArgs, GetArgs, ParseArgs, ResolveArgs, SetProfileArgs};
use crate::domain::GAME_3D_CORE;
use crate::error::ConfigError;
use crate::registry::FeatureRegistry;
use crate::test_support::Workspace;

const BASE: &str = r#"profile: generic
budgets:
  cpu_ms: 16
  platforms: ["pc", "console"]
"#;

fn workspace() -> Workspace {
    Workspace::new()
        .with_base(&GAME_3D_CORE, BASE)
        .with_profile(
            &GAME_3D_CORE,
            "generic",
            "profile: generic\ndescription: Default\n",
        )
        .with_profile(
            &GAME_3D_CORE,
            "fast",
            "profile: fast\ndescription: Fast\noverrides:\n  budgets:\n    cpu_ms: 8\n",
        )
}

fn get_args(path: &str, profile: Option<&str>) -> GetArgs {
    GetArgs {
        domain: "3d_game_core".to_string(),
        path: path.to_string(),
        profile: profile.map(str::to_string),
    }
}

fn domain_args(name: &str) -> DomainArgs {
    DomainArgs {
        domain: name.to_string(),
    }
}

#[test]
fn test_resolve_prints_profile_description_and_data() {
    let ws = workspace();
    let args = ResolveArgs {
        domain: "3d-game-core".to_string(),
        profile: Some("fast".to_string()),
    };

    let output = render_resolve(&ws.ctx, &args).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["profile"], "fast");
    assert_eq!(json["description"], "Fast");
    assert_eq!(json["data"]["budgets"]["cpu_ms"], 8);
    assert_eq!(json["data"]["profile"], "fast");
}

#[test]
fn test_resolve_unknown_domain_fails() {
    let ws = workspace();
    let args = ResolveArgs {
        domain: "audio".to_string(),
        profile: None,
    };

    let err = render_resolve(&ws.ctx, &args).unwrap_err();
    assert!(matches!(err, ConfigError::Shape(_)));
}

#[test]
fn test_get_scalar_is_bare() {
    let ws = workspace();

    assert_eq!(
        render_get(&ws.ctx, &get_args("budgets.cpu_ms", Some("fast"))).unwrap(),
        "8"
    );
    assert_eq!(
        render_get(&ws.ctx, &get_args("budgets.platforms.1", None)).unwrap(),
        "console"
    );
}

#[test]
fn test_get_container_is_json() {
    let ws = workspace();

    let output = render_get(&ws.ctx, &get_args("budgets.platforms", None)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json, serde_json::json!(["pc", "console"]));
}

#[test]
fn test_get_missing_path_names_it() {
    let ws = workspace();

    let err = render_get(&ws.ctx, &get_args("budgets.gpu_ms", None)).unwrap_err();
    assert!(matches!(err, ConfigError::Shape(ref msg) if msg.contains("budgets.gpu_ms")));
}

#[test]
fn test_profiles_marks_active() {
    let ws = workspace().with_registry("addons:\n  3d_game_core:\n    profile: fast\n");

    let output = render_profiles(&ws.ctx, &domain_args("3d_game_core")).unwrap();

    assert_eq!(output, "* fast\n  generic\n");
}

#[test]
fn test_profiles_without_directory() {
    let ws = crate::test_support::Workspace::new();

    let output = render_profiles(&ws.ctx, &domain_args("video_ai_enhancer")).unwrap();

    assert!(output.starts_with("No profiles found"));
}

#[test]
fn test_parse_prints_json_in_document_order() {
    let ws = workspace();
    let args = ParseArgs {
        file: ws.ctx.base_config_path(&GAME_3D_CORE),
    };

    let output = render_parse(&args).unwrap();

    let profile_at = output.find("\"profile\"").unwrap();
    let budgets_at = output.find("\"budgets\"").unwrap();
    assert!(profile_at < budgets_at);
    assert!(output.contains("\"cpu_ms\": 16"));
}

#[test]
fn test_parse_missing_file() {
    let ws = workspace();
    let args = ParseArgs {
        file: ws.root().join("nope.yml"),
    };

    assert!(matches!(
        render_parse(&args),
        Err(ConfigError::MissingFile { .. })
    ));
}

#[test]
fn test_enable_writes_registry() {
    let ws = workspace();

    let message = toggle(&ws.ctx, &domain_args("3d-game-core"), true).unwrap();
    assert_eq!(message, "3d_game_core enabled");

    let registry = FeatureRegistry::load(&ws.ctx.registry_path).unwrap();
    assert!(registry.get("3d_game_core").unwrap().enabled);

    let message = toggle(&ws.ctx, &domain_args("3d_game_core"), true).unwrap();
    assert_eq!(message, "3d_game_core already enabled");
}

#[test]
fn test_disable_keeps_profile() {
    let ws = workspace().with_registry(
        "addons:\n  3d_game_core:\n    enabled: true\n    profile: fast\n",
    );

    toggle(&ws.ctx, &domain_args("3d_game_core"), false).unwrap();

    let registry = FeatureRegistry::load(&ws.ctx.registry_path).unwrap();
    let entry = registry.get("3d_game_core").unwrap();
    assert!(!entry.enabled);
    assert_eq!(entry.profile.as_deref(), Some("fast"));
}

#[test]
fn test_set_profile_then_resolve_uses_it() {
    let ws = workspace();
    let args = SetProfileArgs {
        domain: "3d_game_core".to_string(),
        profile: "fast".to_string(),
    };

    set_profile(&ws.ctx, &args).unwrap();

    assert_eq!(
        render_get(&ws.ctx, &get_args("budgets.cpu_ms", None)).unwrap(),
        "8"
    );
}

#[test]
fn test_set_profile_unknown_leaves_registry_untouched() {
    let ws = workspace();
    let args = SetProfileArgs {
        domain: "3d_game_core".to_string(),
        profile: "cinematic".to_string(),
    };

    let err = set_profile(&ws.ctx, &args).unwrap_err();

    assert!(matches!(err, ConfigError::Shape(ref msg) if msg.contains("fast, generic")));
    assert!(!ws.ctx.registry_path.exists());
}

#[test]
fn test_status_lists_registered_and_missing_domains() {
    let ws = workspace().with_registry("addons:\n  3d_game_core:\n    enabled: true\n");

    let output = render_status(&ws.ctx).unwrap();

    assert!(output.contains("3d_game_core [3D Game Core]"));
    assert!(output.contains("video_ai_enhancer [Video AI Enhancer]"));
    assert!(output.contains("enabled"));
    assert!(output.contains("profile=generic"));
    assert!(output.contains("video_ai_enhancer"));
    assert!(output.contains("(not registered)"));
}

#[test]
fn test_status_unknown_entry_has_no_title() {
    let ws = workspace().with_registry("addons:\n  audio:\n    enabled: true\n");

    let output = render_status(&ws.ctx).unwrap();

    assert!(output.contains("  audio "));
    assert!(!output.contains("audio ["));
}
