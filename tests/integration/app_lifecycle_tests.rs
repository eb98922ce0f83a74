/*!
 * Full app lifecycle tests: controller construction, single-file runs,
 * folder runs, overwrite handling
 */

use anyhow::Result;
use textgroom::app_config::Config;
use textgroom::app_controller::Controller;
use textgroom::file_utils::FileManager;

use crate::common;

/// Test controller construction and initialization checks
#[test]
fn test_controller_withDefaultConfig_shouldBeInitialized() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert!(controller.is_initialized());
    Ok(())
}

/// Test a single-file run produces a groomed sibling file
#[tokio::test]
async fn test_run_withSingleFile_shouldWriteGroomedOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_document(&dir, "book.txt")?;

    let controller = Controller::new_for_test()?;
    controller.run(input, dir.clone(), false).await?;

    let output = dir.join("book.groomed.txt");
    assert!(FileManager::file_exists(&output));
    let content = FileManager::read_to_string(&output)?;
    assert!(content.contains("[1] The first footnote text."));
    assert!(content.contains("[2] The second footnote text,"));
    Ok(())
}

/// Test that an existing output is skipped without the force flag
#[tokio::test]
async fn test_run_withExistingOutput_shouldSkipWithoutForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_document(&dir, "book.txt")?;
    let output = common::create_test_file(&dir, "book.groomed.txt", "sentinel")?;

    let controller = Controller::new_for_test()?;
    controller.run(input.clone(), dir.clone(), false).await?;
    assert_eq!(FileManager::read_to_string(&output)?, "sentinel");

    // With force the output is rewritten
    controller.run(input, dir, true).await?;
    assert_ne!(FileManager::read_to_string(&output)?, "sentinel");
    Ok(())
}

/// Test in-place mode with backup keeps a copy of the original
#[tokio::test]
async fn test_run_withInPlaceAndBackup_shouldKeepOriginalCopy() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(
        &dir,
        "book.txt",
        "A \"quoted\" word [1] here.\n\n[1] note\n",
    )?;
    let original = FileManager::read_to_string(&input)?;

    let mut config = Config::default();
    config.in_place = true;
    config.backup = true;
    let controller = Controller::with_config(config)?;
    controller.run(input.clone(), dir.clone(), false).await?;

    let groomed = FileManager::read_to_string(&input)?;
    assert!(groomed.contains('\u{201C}'));

    let backups = FileManager::find_files(&dir, &["bak".to_string()])?;
    assert_eq!(backups.len(), 1);
    assert_eq!(FileManager::read_to_string(&backups[0])?, original);
    Ok(())
}

/// Test folder processing grooms every matching document
#[tokio::test]
async fn test_run_folder_withMultipleFiles_shouldProcessAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_document(&dir, "one.txt")?;
    common::create_test_document(&dir, "two.org")?;
    common::create_test_file(&dir, "ignored.srt", "not a document")?;

    let controller = Controller::new_for_test()?;
    controller.run_folder(dir.clone(), false).await?;

    assert!(FileManager::file_exists(dir.join("one.groomed.txt")));
    assert!(FileManager::file_exists(dir.join("two.groomed.org")));
    assert!(!FileManager::file_exists(dir.join("ignored.groomed.srt")));
    Ok(())
}

/// Test a folder rerun does not treat previous outputs as inputs
#[tokio::test]
async fn test_run_folder_rerun_shouldIgnoreGroomedOutputs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_document(&dir, "one.txt")?;

    let controller = Controller::new_for_test()?;
    controller.run_folder(dir.clone(), false).await?;
    controller.run_folder(dir.clone(), true).await?;

    // A groomed copy of the groomed copy must not appear
    assert!(!FileManager::file_exists(dir.join("one.groomed.groomed.txt")));
    Ok(())
}

/// Test folder processing fails cleanly on an empty directory
#[tokio::test]
async fn test_run_folder_withNoDocuments_shouldError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::new_for_test()?;
    let result = controller.run_folder(temp_dir.path().to_path_buf(), false).await;
    assert!(result.is_err());
    Ok(())
}
