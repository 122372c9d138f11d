use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use crate::app_config::StyleConfig;
use crate::errors::{ConfigError, ConvertError};

// @module: File and directory utilities

/// Read/write capability used by the converter.
///
/// The filesystem adapter is `FileManager`; tests substitute an in-memory store.
pub trait Storage {
    /// Read a whole text file
    fn read_to_string(&self, path: &Path) -> Result<String, ConvertError>;

    /// Replace a file's contents
    fn write(&self, path: &Path, content: &str) -> Result<(), ConvertError>;
}

// @struct: File operations utility
#[derive(Debug, Clone, Copy, Default)]
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Default output path, `<input>.ass`
    pub fn default_output_path<P: AsRef<Path>>(input_file: P) -> PathBuf {
        let mut output: OsString = input_file.as_ref().as_os_str().to_owned();
        output.push(".ass");
        PathBuf::from(output)
    }

    /// Write the starter style configuration as pretty JSON.
    ///
    /// An existing file is left untouched unless `force` is set.
    pub fn write_default_config<P: AsRef<Path>>(path: P, force: bool) -> Result<(), ConvertError> {
        let path = path.as_ref();
        if Self::file_exists(path) && !force {
            return Err(ConvertError::Storage(format!(
                "{:?} already exists, use --force to overwrite it",
                path
            )));
        }

        let config_json = serde_json::to_string_pretty(&StyleConfig::default())
            .map_err(ConfigError::from)?;
        FileManager.write(path, &config_json)
    }
}

impl Storage for FileManager {
    fn read_to_string(&self, path: &Path) -> Result<String, ConvertError> {
        fs::read_to_string(path)
            .map_err(|e| ConvertError::Storage(format!("Failed to read file {:?}: {}", path, e)))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), ConvertError> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)
                .map_err(|e| ConvertError::Storage(format!("Failed to create directory {:?}: {}", parent, e)))?;
        }

        fs::write(path, content)
            .map_err(|e| ConvertError::Storage(format!("Failed to write to file {:?}: {}", path, e)))
    }
}
