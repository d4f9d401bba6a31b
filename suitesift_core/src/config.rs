use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::SuitesiftError;
use crate::mapping::SuiteMapping;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuitesiftConfig {
    pub suite_file: Option<PathBuf>,
    pub sha_url: Option<String>,
    pub last_successful_revision: Option<String>,
    pub source_root: Option<PathBuf>,
    pub package_file: Option<String>,
    pub skip_filter: Option<bool>,

    pub suite_mappings: Option<SuiteMapping>,
    pub integration_suite_mappings: Option<SuiteMapping>,
}

impl SuitesiftConfig {
    /// Resolves relative `suiteFile` / `sourceRoot` entries against `root`.
    pub fn resolve_paths(mut self, root: &Path) -> Self {
        let absolutize = |p: PathBuf| if p.is_relative() { root.join(p) } else { p };
        self.suite_file = self.suite_file.map(absolutize);
        self.source_root = self.source_root.map(absolutize);
        self
    }
}

pub fn find_repo_root(start: &Path) -> PathBuf {
    git2::Repository::discover(start)
        .ok()
        .and_then(|repo| repo.workdir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| start.to_path_buf())
}

pub fn discover_config_path(repo_root: &Path) -> Option<PathBuf> {
    let names = [
        "suitesift.toml",
        "suitesift.config.json",
        "suitesift.config.json5",
        "suitesift.config.jsonc",
        "suitesift.config.yaml",
        "suitesift.config.yml",
        ".suitesiftrc",
        ".suitesiftrc.json",
        ".suitesiftrc.json5",
        ".suitesiftrc.jsonc",
        ".suitesiftrc.yaml",
        ".suitesiftrc.yml",
    ];
    names
        .into_iter()
        .map(|name| repo_root.join(name))
        .find(|p| p.exists())
}

pub fn load_suitesift_config(repo_root: &Path) -> Result<SuitesiftConfig, SuitesiftError> {
    if let Some(path) = discover_config_path(repo_root) {
        return load_suitesift_config_from_path(&path);
    }

    load_embedded_toml_config(repo_root)
}

pub fn load_suitesift_config_from_path(path: &Path) -> Result<SuitesiftConfig, SuitesiftError> {
    let ext = path
        .extension()
        .and_then(|x| x.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        // `.suitesiftrc` without extension is JSON, like most rc files.
        "json" | "json5" | "jsonc" | "" => load_json_config(path),
        "yaml" | "yml" => load_yaml_config(path),
        "toml" => load_toml_config(path, TomlConfigSource::FullFile).map(|v| v.unwrap_or_default()),
        _ => Ok(SuitesiftConfig::default()),
    }
}

fn read_config(path: &Path) -> Result<String, SuitesiftError> {
    std::fs::read_to_string(path).map_err(|source| SuitesiftError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_json_config(path: &Path) -> Result<SuitesiftConfig, SuitesiftError> {
    let raw = read_config(path)?;
    json5::from_str::<SuitesiftConfig>(&raw)
        .or_else(|_| serde_json::from_str::<SuitesiftConfig>(&raw))
        .map_err(|err| SuitesiftError::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

fn load_yaml_config(path: &Path) -> Result<SuitesiftConfig, SuitesiftError> {
    let raw = read_config(path)?;
    serde_yaml::from_str::<SuitesiftConfig>(&raw).map_err(|err| SuitesiftError::ConfigParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TomlConfigSource {
    FullFile,
    CargoPackageMetadataSuitesift,
}

fn load_embedded_toml_config(repo_root: &Path) -> Result<SuitesiftConfig, SuitesiftError> {
    let cargo_toml_path = repo_root.join("Cargo.toml");
    if cargo_toml_path.exists() {
        if let Some(config) = load_toml_config(
            &cargo_toml_path,
            TomlConfigSource::CargoPackageMetadataSuitesift,
        )? {
            return Ok(config);
        }
    }

    Ok(SuitesiftConfig::default())
}

fn load_toml_config(
    path: &Path,
    source: TomlConfigSource,
) -> Result<Option<SuitesiftConfig>, SuitesiftError> {
    let raw = read_config(path)?;

    let toml_value =
        toml::from_str::<toml::Value>(&raw).map_err(|err| SuitesiftError::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let maybe_table_value = match source {
        TomlConfigSource::FullFile => Some(toml_value),
        TomlConfigSource::CargoPackageMetadataSuitesift => {
            extract_cargo_package_metadata_suitesift(&toml_value)
        }
    };

    let Some(table_value) = maybe_table_value else {
        return Ok(None);
    };

    let json_value =
        serde_json::to_value(table_value).map_err(|err| SuitesiftError::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
    let normalized = normalize_top_level_keys_to_camel_case(json_value);

    serde_json::from_value::<SuitesiftConfig>(normalized)
        .map(Some)
        .map_err(|err| SuitesiftError::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

fn extract_cargo_package_metadata_suitesift(value: &toml::Value) -> Option<toml::Value> {
    value
        .as_table()
        .and_then(|root| root.get("package"))
        .and_then(|package| package.as_table())
        .and_then(|package_table| package_table.get("metadata"))
        .and_then(|metadata| metadata.as_table())
        .and_then(|metadata_table| metadata_table.get("suitesift"))
        .cloned()
}

// Only setting names are normalized: mapping keys are source paths and
// component names and must reach the selector untouched.
fn normalize_top_level_keys_to_camel_case(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(object) => JsonValue::Object(
            object
                .into_iter()
                .map(|(key, value)| (normalize_toml_key(&key), value))
                .collect(),
        ),
        other => other,
    }
}

fn normalize_toml_key(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }

    let mut segments = key.split('_').filter(|segment| !segment.is_empty());
    let Some(first_segment) = segments.next() else {
        return key.to_string();
    };

    let mut normalized_key = String::from(first_segment);
    for segment in segments {
        let mut chars = segment.chars();
        let Some(first_char) = chars.next() else {
            continue;
        };
        normalized_key.push(first_char.to_ascii_uppercase());
        normalized_key.extend(chars);
    }
    normalized_key
}
