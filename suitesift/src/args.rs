use std::path::PathBuf;

use clap::Parser;

use suitesift_core::config::SuitesiftConfig;
use suitesift_core::mapping::parse_mapping_entry;
use suitesift_core::revision::LAST_SUCCESSFUL_REVISION;
use suitesift_core::settings::Settings;

#[derive(Debug, Clone, Parser, Default)]
#[command(
    name = "suitesift",
    version,
    about = "Select the acceptance test classes to run from the changes since the last successful build"
)]
pub struct SuitesiftCli {
    /// Config file to load instead of discovering one at the repository root.
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// TestNG suite file to rewrite.
    #[arg(long = "suite-file")]
    pub suite_file: Option<PathBuf>,

    /// Endpoint returning the SHA of the last successful build, bare or as
    /// `<SHA1>…</SHA1>`. Supports http(s) and file URLs.
    #[arg(long = "sha-url")]
    pub sha_url: Option<String>,

    /// Revision to diff against; takes precedence over `--sha-url`.
    #[arg(long = "last-successful-revision", env = LAST_SUCCESSFUL_REVISION)]
    pub last_successful_revision: Option<String>,

    /// Root of the git repository holding the code under test.
    #[arg(long = "source-root")]
    pub source_root: Option<PathBuf>,

    /// Manifest whose added lines are matched against the integration mappings.
    #[arg(long = "package-file")]
    pub package_file: Option<String>,

    /// `path/prefix=Class1;Class2`, repeatable. Extends the config file mappings.
    #[arg(long = "suite-mapping", value_parser = parse_mapping_entry)]
    pub suite_mappings: Vec<(String, String)>,

    /// `component=Class1;Class2`, repeatable. Extends the config file mappings.
    #[arg(long = "integration-suite-mapping", value_parser = parse_mapping_entry)]
    pub integration_suite_mappings: Vec<(String, String)>,

    /// Leave the suite file untouched and run every test.
    #[arg(
        long = "skip-filter",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool)
    )]
    pub skip_filter: Option<bool>,

    /// Print the rewritten suite file instead of writing it.
    #[arg(long = "dry-run", default_value_t = false)]
    pub dry_run: bool,

    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long = "log-json", default_value_t = false)]
    pub log_json: bool,
}

impl SuitesiftCli {
    pub fn skips_filter(&self) -> bool {
        self.skip_filter.unwrap_or(false)
    }

    /// Layers the flags over `config`. Flags win; mapping flags add to or
    /// replace individual config entries.
    pub fn into_settings(self, config: SuitesiftConfig) -> Settings {
        let mut settings = Settings::from_config(config);
        if let Some(suite_file) = self.suite_file {
            settings.suite_file = Some(suite_file);
        }
        if let Some(sha_url) = self.sha_url {
            settings.sha_url = Some(sha_url);
        }
        if let Some(sha) = self.last_successful_revision.filter(|s| !s.trim().is_empty()) {
            settings.last_successful_revision = Some(sha);
        }
        if let Some(source_root) = self.source_root {
            settings.source_root = Some(source_root);
        }
        if let Some(package_file) = self.package_file {
            settings.package_file = Some(package_file);
        }
        if let Some(skip_filter) = self.skip_filter {
            settings.skip_filter = skip_filter;
        }
        settings.dry_run = self.dry_run;
        self.suite_mappings
            .into_iter()
            .for_each(|(k, v)| settings.suite_mappings.insert(k, v));
        self.integration_suite_mappings
            .into_iter()
            .for_each(|(k, v)| settings.integration_suite_mappings.insert(k, v));
        settings
    }
}
