use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use suitesift_core::error::SuitesiftError;

use crate::fetch::RevisionFetcher;
use crate::process::{CommandRunner, display_command};
use crate::store::DescriptorStore;

/// Answers commands from a table keyed by the rendered command line.
#[derive(Default)]
pub struct FakeCommandRunner {
    outputs: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCommandRunner {
    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.insert(command.to_string(), stdout.to_string());
        self
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, program: &str, args: &[String], _dir: &Path) -> Result<String, SuitesiftError> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(command.clone());
        self.outputs
            .get(&command)
            .cloned()
            .ok_or_else(|| SuitesiftError::Command {
                command,
                message: "exit_code=Some(128)".to_string(),
            })
    }
}

#[derive(Default)]
pub struct FakeFetcher {
    response: Option<String>,
    pub calls: Cell<usize>,
}

impl FakeFetcher {
    pub fn responding(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            calls: Cell::new(0),
        }
    }
}

impl RevisionFetcher for FakeFetcher {
    fn fetch(&self, source_url: &str) -> Result<String, SuitesiftError> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone().ok_or_else(|| SuitesiftError::Fetch {
            source_url: source_url.to_string(),
            message: "connection refused".to_string(),
        })
    }
}

#[derive(Default)]
pub struct FakeStore {
    existing: Option<String>,
    pub reads: Cell<usize>,
    pub writes: RefCell<Vec<(PathBuf, String)>>,
}

impl FakeStore {
    pub fn containing(contents: &str) -> Self {
        Self {
            existing: Some(contents.to_string()),
            ..Self::default()
        }
    }

    pub fn written(&self) -> Option<String> {
        self.writes.borrow().last().map(|(_, c)| c.clone())
    }
}

impl DescriptorStore for FakeStore {
    fn exists(&self, _path: &Path) -> bool {
        self.existing.is_some()
    }

    fn read(&self, path: &Path) -> Result<String, SuitesiftError> {
        self.reads.set(self.reads.get() + 1);
        self.existing.clone().ok_or_else(|| SuitesiftError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), SuitesiftError> {
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}
