use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use suitesift::args::SuitesiftCli;
use suitesift::fetch::UrlRevisionFetcher;
use suitesift::logging::{init_tracing, log_debug};
use suitesift::process::DuctCommandRunner;
use suitesift::run::{Capabilities, RunOutcome, execute};
use suitesift::store::FsDescriptorStore;
use suitesift_core::config::{
    SuitesiftConfig, find_repo_root, load_suitesift_config, load_suitesift_config_from_path,
};
use suitesift_core::error::SuitesiftError;

fn main() -> ExitCode {
    let cli = SuitesiftCli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    init_tracing(cli.log_json, level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: SuitesiftCli) -> Result<(), SuitesiftError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let cwd = dunce::canonicalize(&cwd).unwrap_or(cwd);
    let repo_root = find_repo_root(&cwd);
    log_debug(format!(
        "version={} repo_root={}",
        suitesift_core::core_version(),
        repo_root.display()
    ));

    let config = if cli.skips_filter() {
        SuitesiftConfig::default()
    } else {
        let loaded = match cli.config.as_deref() {
            Some(path) => load_suitesift_config_from_path(path)?,
            None => load_suitesift_config(&repo_root)?,
        };
        loaded.resolve_paths(&repo_root)
    };
    let settings = cli.into_settings(config);

    let commands = DuctCommandRunner;
    let fetcher = UrlRevisionFetcher::new();
    let store = FsDescriptorStore;
    let caps = Capabilities {
        commands: &commands,
        fetcher: &fetcher,
        store: &store,
    };

    if let RunOutcome::DryRun { contents, .. } = execute(settings, &caps)? {
        print!("{contents}");
    }
    Ok(())
}
