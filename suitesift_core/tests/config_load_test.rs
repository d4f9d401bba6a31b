use std::path::{Path, PathBuf};

use tempfile::TempDir;

use suitesift_core::config::{
    discover_config_path, load_suitesift_config, load_suitesift_config_from_path,
};

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

fn keys(mapping: &suitesift_core::mapping::SuiteMapping) -> Vec<&str> {
    mapping.iter().map(|(k, _)| k).collect()
}

#[test]
fn config_discovery_prefers_toml_over_rc_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(&root.join(".suitesiftrc.json"), r#"{ "skipFilter": true }"#);
    write_file(&root.join("suitesift.toml"), "skip_filter = false\n");

    let discovered = discover_config_path(root).unwrap();
    assert!(discovered.ends_with("suitesift.toml"));

    let loaded = load_suitesift_config_from_path(&discovered).unwrap();
    assert_eq!(loaded.skip_filter, Some(false));
}

#[test]
fn toml_config_keeps_mapping_order_and_key_spelling() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("suitesift.toml");
    write_file(
        &path,
        r#"
suite_file = "src/test/resources/acceptance.xml"
sha_url = "http://jenkins/job/app/lastSuccessfulBuild/api/xml?xpath=//lastBuiltRevision/SHA1"
package_file = "package.json"

[suite_mappings]
"src/zeta_pkg" = "ZetaTest"
"src/alpha_pkg" = "AlphaTest;AlphaTest2"
_fallback_code_path_ = "SmokeTest"

[integration_suite_mappings]
"tree-descendancy" = "DescendancyIntegrationTest"
"#,
    );
    let cfg = load_suitesift_config_from_path(&path).unwrap();
    assert_eq!(
        cfg.suite_file,
        Some(PathBuf::from("src/test/resources/acceptance.xml"))
    );
    assert_eq!(cfg.package_file.as_deref(), Some("package.json"));
    let suites = cfg.suite_mappings.unwrap();
    assert_eq!(
        keys(&suites),
        vec!["src/zeta_pkg", "src/alpha_pkg", "_fallback_code_path_"]
    );
    assert_eq!(suites.get("src/alpha_pkg"), Some("AlphaTest;AlphaTest2"));
    assert_eq!(
        cfg.integration_suite_mappings.unwrap().get("tree-descendancy"),
        Some("DescendancyIntegrationTest")
    );
}

#[test]
fn config_loads_yaml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("suitesift.config.yml");
    write_file(
        &path,
        r#"
sourceRoot: /repo
lastSuccessfulRevision: abc123
suiteMappings:
  src/b: B
  src/a: A
"#,
    );
    let cfg = load_suitesift_config_from_path(&path).unwrap();
    assert_eq!(cfg.source_root, Some(PathBuf::from("/repo")));
    assert_eq!(cfg.last_successful_revision.as_deref(), Some("abc123"));
    assert_eq!(keys(&cfg.suite_mappings.unwrap()), vec!["src/b", "src/a"]);
}

#[test]
fn config_loads_json5_with_comments() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".suitesiftrc.json5");
    write_file(
        &path,
        r#"
// comment
{
  packageFile: "package.json",
  integrationSuiteMappings: { "lib-x": "IX" },
}
"#,
    );
    let cfg = load_suitesift_config_from_path(&path).unwrap();
    assert_eq!(cfg.package_file.as_deref(), Some("package.json"));
    assert_eq!(
        cfg.integration_suite_mappings.unwrap().get("lib-x"),
        Some("IX")
    );
}

#[test]
fn cargo_metadata_is_used_when_no_config_file_exists() {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp.path().join("Cargo.toml"),
        r#"
[package]
name = "app"
version = "0.1.0"

[package.metadata.suitesift]
package_file = "Cargo.lock"
"#,
    );
    let cfg = load_suitesift_config(temp.path()).unwrap();
    assert_eq!(cfg.package_file.as_deref(), Some("Cargo.lock"));
}

#[test]
fn missing_config_is_default() {
    let temp = TempDir::new().unwrap();
    let cfg = load_suitesift_config(temp.path()).unwrap();
    assert_eq!(cfg, Default::default());
}

#[test]
fn malformed_config_reports_its_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("suitesift.config.json");
    write_file(&path, "{ not json");
    let err = load_suitesift_config_from_path(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("suitesift: failed to parse config at"), "{message}");
}

#[test]
fn relative_paths_resolve_against_the_repo_root() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("suitesift.config.json");
    write_file(&path, r#"{ "suiteFile": "suite.xml", "sourceRoot": "." }"#);
    let cfg = load_suitesift_config_from_path(&path)
        .unwrap()
        .resolve_paths(temp.path());
    assert_eq!(cfg.suite_file, Some(temp.path().join("suite.xml")));
    assert_eq!(cfg.source_root, Some(temp.path().join(".")));
}
