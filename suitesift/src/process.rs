use std::path::{Path, PathBuf};

use duct::cmd as duct_cmd;

use suitesift_core::error::SuitesiftError;

/// Runs an external command and hands back its stdout.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], dir: &Path) -> Result<String, SuitesiftError>;
}

/// [`CommandRunner`] backed by real child processes.
#[derive(Debug, Clone, Default)]
pub struct DuctCommandRunner;

impl CommandRunner for DuctCommandRunner {
    fn run(&self, program: &str, args: &[String], dir: &Path) -> Result<String, SuitesiftError> {
        let display_command = display_command(program, args);
        let out = duct_cmd(resolve_program(program), args)
            .dir(dir)
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .map_err(|e| SuitesiftError::Command {
                command: display_command.clone(),
                message: e.to_string(),
            })?;
        if !out.status.success() {
            let mut stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            if stderr.is_empty() {
                stderr = format!("exit_code={:?}", out.status.code());
            }
            return Err(SuitesiftError::Command {
                command: display_command,
                message: stderr,
            });
        }
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn resolve_program(program: &str) -> PathBuf {
    which::which(program).unwrap_or_else(|_| PathBuf::from(program))
}
