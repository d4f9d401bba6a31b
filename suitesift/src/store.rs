use std::path::Path;

use suitesift_core::error::SuitesiftError;

/// Access to the suite file being rewritten.
pub trait DescriptorStore {
    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> Result<String, SuitesiftError>;

    fn write(&self, path: &Path, contents: &str) -> Result<(), SuitesiftError>;
}

#[derive(Debug, Clone, Default)]
pub struct FsDescriptorStore;

impl DescriptorStore for FsDescriptorStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<String, SuitesiftError> {
        std::fs::read_to_string(path).map_err(|source| SuitesiftError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), SuitesiftError> {
        std::fs::write(path, contents).map_err(|source| SuitesiftError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
