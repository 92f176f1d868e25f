/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use sitelingo::file_utils::FileManager;
use crate::common;

/// Test output path generation mirrors the tree under the language code
#[test]
fn test_generate_output_path_withNestedFile_shouldMirrorUnderCode() -> Result<()> {
    let root = PathBuf::from("/site");
    let source = root.join("_posts").join("2024").join("hello.md");

    let output = FileManager::generate_output_path(&root, "fr", &source)?;

    assert_eq!(output, PathBuf::from("/site/fr/_posts/2024/hello.md"));
    Ok(())
}

/// Test output path generation rejects files outside the root
#[test]
fn test_generate_output_path_withForeignFile_shouldFail() {
    let result = FileManager::generate_output_path("/site", "fr", "/elsewhere/page.md");
    assert!(result.is_err());
}

/// Test file discovery order and extension filtering
#[test]
fn test_find_files_withMixedFiles_shouldReturnSortedMarkdownOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();

    common::create_test_file(dir, "b.md", "b")?;
    common::create_test_file(dir, "a.md", "a")?;
    common::create_test_file(dir, "sub/c.MD", "c")?;
    common::create_test_file(dir, "notes.txt", "not markdown")?;

    let files = FileManager::find_files(dir, "md")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(dir).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.md", "b.md", "sub/c.MD"]);
    Ok(())
}

/// Test writing creates intermediate directories
#[test]
fn test_write_to_file_withMissingParents_shouldCreateThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("fr").join("pages").join("about.md");

    FileManager::write_to_file(&target, "contenu")?;

    assert!(FileManager::file_exists(&target));
    assert!(FileManager::dir_exists(temp_dir.path().join("fr").join("pages")));
    assert_eq!(fs::read_to_string(&target)?, "contenu");
    Ok(())
}

/// Test reading a missing file reports the path
#[test]
fn test_read_to_string_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.md");

    let err = FileManager::read_to_string(&missing).unwrap_err();

    assert!(format!("{:#}", err).contains("missing.md"));
    Ok(())
}

/// Test unreadable walker entries are skipped instead of failing the listing
#[cfg(unix)]
#[test]
fn test_find_files_withSymlinkLoop_shouldSkipLoopAndKeepFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "a.md", "a")?;
    fs::create_dir_all(dir.join("zz"))?;
    std::os::unix::fs::symlink(dir, dir.join("zz").join("loop"))?;

    let files = FileManager::find_files(dir, "md")?;

    assert_eq!(files, vec![dir.join("a.md")]);
    Ok(())
}
