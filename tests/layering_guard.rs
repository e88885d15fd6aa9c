//! Layering guardrails to keep the registry crate free of IO and runtime dependencies.
//!
//! `scriptcheck_core` holds only tables and pure matching; process spawning, logging and
//! serialization belong to the root crate. This test scans the core `Cargo.toml` and fails if any
//! `[dependencies]` entry other than `thiserror` appears.

const ALLOWED: &[&str] = &["thiserror"];

#[test]
fn core_crate_has_only_pure_dependencies() {
    let manifest = include_str!("../crates/scriptcheck_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let name = line.split(['=', '.']).next().unwrap_or("").trim();
        assert!(
            ALLOWED.contains(&name),
            "`{name}` must not appear in scriptcheck_core [dependencies]; keep IO in the root crate"
        );
    }
}
