/*!
 * Tests for file and folder utilities
 */

use anyhow::Result;
use std::path::PathBuf;
use textgroom::file_utils::FileManager;

use crate::common;

/// Test output path generation keeps the extension and marks the copy
#[test]
fn test_generate_output_path_shouldInsertGroomedMarker() {
    let out = FileManager::generate_output_path("book.txt", "/out");
    assert_eq!(out, PathBuf::from("/out/book.groomed.txt"));

    let out = FileManager::generate_output_path("/docs/notes.org", "/docs");
    assert_eq!(out, PathBuf::from("/docs/notes.groomed.org"));
}

/// Test atomic writing produces the full content at the target path
#[test]
fn test_write_atomic_shouldCreateFileWithContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out.txt");

    FileManager::write_atomic(&target, "full document\n")?;

    assert_eq!(FileManager::read_to_string(&target)?, "full document\n");
    Ok(())
}

/// Test atomic writing replaces existing content entirely
#[test]
fn test_write_atomic_overExistingFile_shouldReplaceContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "doc.txt",
        "old content",
    )?;

    FileManager::write_atomic(&target, "new content")?;

    assert_eq!(FileManager::read_to_string(&target)?, "new content");
    Ok(())
}

/// Test backup creation copies the original next to it
#[test]
fn test_create_backup_shouldCopyWithBakSuffix() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let original = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "doc.txt",
        "precious content",
    )?;

    let backup = FileManager::create_backup(&original)?;

    assert!(backup.to_string_lossy().ends_with(".bak"));
    assert!(backup.to_string_lossy().contains("doc.txt."));
    assert_eq!(FileManager::read_to_string(&backup)?, "precious content");
    Ok(())
}

/// Test recursive discovery filters by extension, case-insensitively
#[test]
fn test_find_files_shouldMatchConfiguredExtensions() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "a.txt", "a")?;
    common::create_test_file(&dir, "b.TXT", "b")?;
    common::create_test_file(&dir, "c.org", "c")?;
    common::create_test_file(&dir, "d.srt", "d")?;

    let sub = dir.join("nested");
    FileManager::ensure_dir(&sub)?;
    common::create_test_file(&sub, "e.txt", "e")?;

    let extensions = vec!["txt".to_string(), "org".to_string()];
    let found = FileManager::find_files(&dir, &extensions)?;
    let names: Vec<String> = found
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();

    assert_eq!(found.len(), 4);
    assert!(names.contains(&"a.txt".to_string()));
    assert!(names.contains(&"b.TXT".to_string()));
    assert!(names.contains(&"c.org".to_string()));
    assert!(names.contains(&"e.txt".to_string()));
    Ok(())
}

/// Test existence helpers
#[test]
fn test_existence_checks_shouldDistinguishFilesAndDirs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(&temp_dir.path().to_path_buf(), "x.txt", "x")?;

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));
    Ok(())
}
