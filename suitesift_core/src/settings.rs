use std::path::PathBuf;

use crate::config::SuitesiftConfig;
use crate::error::SuitesiftError;
use crate::mapping::SuiteMapping;

/// Everything a run needs, merged from flags, environment and config file.
/// Nothing here has been checked yet; see [`Settings::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub suite_file: Option<PathBuf>,
    pub sha_url: Option<String>,
    pub last_successful_revision: Option<String>,
    pub source_root: Option<PathBuf>,
    pub package_file: Option<String>,
    pub skip_filter: bool,
    pub dry_run: bool,
    pub suite_mappings: SuiteMapping,
    pub integration_suite_mappings: SuiteMapping,
}

/// Settings that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub suite_file: PathBuf,
    pub revision: RevisionSource,
    pub source_root: PathBuf,
    pub package_file: String,
    pub dry_run: bool,
    pub suite_mappings: SuiteMapping,
    pub integration_suite_mappings: SuiteMapping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionSource {
    Explicit(String),
    Url(String),
}

impl RevisionSource {
    pub fn explicit(&self) -> Option<&str> {
        match self {
            RevisionSource::Explicit(sha) => Some(sha),
            RevisionSource::Url(_) => None,
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            RevisionSource::Explicit(_) => "LAST_SUCCESSFUL_REVISION",
            RevisionSource::Url(url) => url,
        }
    }
}

impl Settings {
    /// Starts from config file values. Flags layered on top afterwards win.
    pub fn from_config(config: SuitesiftConfig) -> Self {
        Self {
            suite_file: config.suite_file,
            sha_url: config.sha_url,
            last_successful_revision: config.last_successful_revision,
            source_root: config.source_root,
            package_file: config.package_file,
            skip_filter: config.skip_filter.unwrap_or(false),
            dry_run: false,
            suite_mappings: config.suite_mappings.unwrap_or_default(),
            integration_suite_mappings: config.integration_suite_mappings.unwrap_or_default(),
        }
    }

    /// Checks required settings in a fixed order and reports the first one
    /// that is missing.
    pub fn validate(self) -> Result<RunSettings, SuitesiftError> {
        let suite_file = self
            .suite_file
            .ok_or_else(|| SuitesiftError::missing("suiteFile"))?;

        let explicit = non_blank(self.last_successful_revision);
        let sha_url = non_blank(self.sha_url);
        let revision = match (explicit, sha_url) {
            (Some(sha), _) => RevisionSource::Explicit(sha),
            (None, Some(url)) => RevisionSource::Url(url),
            (None, None) => {
                return Err(SuitesiftError::config(
                    "shaUrl or LAST_SUCCESSFUL_REVISION environment variable/property must be set",
                ));
            }
        };

        let source_root = self
            .source_root
            .filter(|root| !root.as_os_str().is_empty())
            .ok_or_else(|| SuitesiftError::missing("sourceRoot"))?;
        if self.suite_mappings.is_empty() {
            return Err(SuitesiftError::missing("suiteMappings"));
        }
        let package_file =
            non_blank(self.package_file).ok_or_else(|| SuitesiftError::missing("packageFile"))?;
        if self.integration_suite_mappings.is_empty() {
            return Err(SuitesiftError::missing("integrationSuiteMappings"));
        }

        Ok(RunSettings {
            suite_file,
            revision,
            source_root,
            package_file,
            dry_run: self.dry_run,
            suite_mappings: self.suite_mappings,
            integration_suite_mappings: self.integration_suite_mappings,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
