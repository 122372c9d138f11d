/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use chat2ass::app_config::StyleConfig;
use chat2ass::errors::ConvertError;
use chat2ass::file_utils::{FileManager, Storage};
use crate::common;

/// Test that the default output path appends .ass to the full input name
#[test]
fn test_default_output_path_withTxtInput_shouldAppendExtension() {
    assert_eq!(
        FileManager::default_output_path("/tmp/chat/stream.txt"),
        Path::new("/tmp/chat/stream.txt.ass")
    );
    assert_eq!(FileManager::default_output_path("chat"), Path::new("chat.ass"));
}

#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.txt", "content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing.txt")));
    Ok(())
}

#[test]
fn test_write_withMissingParentDirectory_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("nested").join("deeper").join("out.ass");

    FileManager.write(&output, "[Script Info]\n")?;

    assert_eq!(FileManager.read_to_string(&output)?, "[Script Info]\n");
    Ok(())
}

#[test]
fn test_read_to_string_withMissingFile_shouldReturnStorageError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let result = FileManager.read_to_string(&temp_dir.path().join("missing.txt"));

    match result {
        Err(ConvertError::Storage(message)) => assert!(message.contains("missing.txt")),
        other => panic!("unexpected result: {:?}", other),
    }
    Ok(())
}

/// Test writing the starter configuration to a fresh path
#[test]
fn test_write_default_config_withNewPath_shouldWriteValidConfig() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("config.json");

    FileManager::write_default_config(&path, false)?;

    let config = StyleConfig::from_json(&std::fs::read_to_string(&path)?)?;
    assert!(config.validate().is_ok());
    assert_eq!(config, StyleConfig::default());
    Ok(())
}

/// Test that an existing configuration is kept without force
#[test]
fn test_write_default_config_withExistingFileWithoutForce_shouldRefuseAndKeepContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "config.json", "{ \"mine\": true }")?;

    let result = FileManager::write_default_config(&path, false);

    match result {
        Err(ConvertError::Storage(message)) => assert!(message.contains("already exists")),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(std::fs::read_to_string(&path)?, "{ \"mine\": true }");
    Ok(())
}

/// Test that force replaces an existing configuration
#[test]
fn test_write_default_config_withExistingFileAndForce_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "config.json", "{ \"mine\": true }")?;

    FileManager::write_default_config(&path, true)?;

    let config = StyleConfig::from_json(&std::fs::read_to_string(&path)?)?;
    assert!(config.validate().is_ok());
    assert_eq!(config.style_name()?, "Default");
    Ok(())
}
