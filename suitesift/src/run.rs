use indexmap::IndexSet;

use suitesift_core::descriptor::patch_descriptor;
use suitesift_core::error::SuitesiftError;
use suitesift_core::revision::resolve_revision;
use suitesift_core::selection::select_suites;
use suitesift_core::settings::{RunSettings, Settings};

use crate::fetch::RevisionFetcher;
use crate::git::{changed_files, changed_pins};
use crate::logging::{log_debug, log_info};
use crate::process::CommandRunner;
use crate::store::DescriptorStore;

/// The external collaborators a run talks to.
pub struct Capabilities<'a> {
    pub commands: &'a dyn CommandRunner,
    pub fetcher: &'a dyn RevisionFetcher,
    pub store: &'a dyn DescriptorStore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `skipFilter` was set; nothing was read or written.
    Skipped,
    /// The suite file was rewritten.
    Written { suites: IndexSet<String> },
    /// `--dry-run`: the patched suite file, not persisted.
    DryRun {
        suites: IndexSet<String>,
        contents: String,
    },
}

/// Selects the suites for the current changes and rewrites the suite file.
pub fn execute(settings: Settings, caps: &Capabilities) -> Result<RunOutcome, SuitesiftError> {
    if settings.skip_filter {
        log_info("Bypassing acceptance test selection.");
        return Ok(RunOutcome::Skipped);
    }
    let settings = settings.validate()?;

    let existing = if caps.store.exists(&settings.suite_file) {
        Some(caps.store.read(&settings.suite_file)?)
    } else {
        log_info("Suite file name doesn't exist, using generated simple suite.");
        None
    };
    log_info(format!("Running {}", settings.suite_file.display()));

    let sha = resolve_revision(
        settings.revision.explicit(),
        settings.revision.describe(),
        || caps.fetcher.fetch(settings.revision.describe()),
    )?;
    log_info(format!("SHA is {sha}"));

    let suites = select_for_revision(&settings, caps, &sha)?;
    let contents = patch_descriptor(existing.as_deref(), suites.iter().map(String::as_str));
    log_debug(format!("Patched suite file:\n{contents}"));

    if settings.dry_run {
        return Ok(RunOutcome::DryRun { suites, contents });
    }
    caps.store.write(&settings.suite_file, &contents)?;
    Ok(RunOutcome::Written { suites })
}

fn select_for_revision(
    settings: &RunSettings,
    caps: &Capabilities,
    sha: &str,
) -> Result<IndexSet<String>, SuitesiftError> {
    let files = changed_files(caps.commands, &settings.source_root, sha)?;
    log_info("Changed file list begin:");
    files
        .iter()
        .for_each(|file| log_info(format!("Changed file item: {file}")));
    log_info("Changed file list end.");

    log_info(format!("Package file name is {}", settings.package_file));
    let pins = changed_pins(
        caps.commands,
        &settings.source_root,
        sha,
        &settings.package_file,
    )?;
    log_info("Changed Pins Begin:");
    log_info(&pins);
    log_info("Changed Pins End.");

    let suites = select_suites(
        &files,
        &pins,
        &settings.suite_mappings,
        &settings.integration_suite_mappings,
    );
    log_info("Suites to run begin:");
    suites
        .iter()
        .for_each(|suite| log_info(format!("Suite to run item: {suite}")));
    log_info("Suites to run end.");
    Ok(suites)
}
