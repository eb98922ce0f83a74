use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::FootnoteError;
use crate::file_utils::FileManager;
use crate::footnotes::FootnoteRenumberer;
use crate::language_utils;
use crate::links::LinkFilter;
use crate::typography;

// @module: Application controller for document grooming

/// Main application controller for the grooming pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.language.is_empty() && !self.config.fixes.is_empty()
    }

    /// Typography profile code for the configured language, folded to
    /// ISO 639-1 where possible so that "eng" and "en" select the same
    /// profile.
    fn typography_code(&self) -> String {
        language_utils::normalize_to_part1(&self.config.language)
            .unwrap_or_else(|_| self.config.language.trim().to_lowercase())
    }

    /// Run the configured fixers over one document, in the fixed order
    /// links -> typography -> footnotes.
    ///
    /// A footnote mismatch aborts with the full diagnostic; the caller must
    /// not commit any output in that case.
    pub fn groom_text(&self, text: &str) -> Result<String> {
        let mut current = text.to_string();

        if self.config.fixes.links {
            current = LinkFilter::linkify(&current);
        }

        if self.config.fixes.typography {
            let code = self.typography_code();
            if typography::profile_for(&code).is_none() {
                debug!(
                    "No typography profile for language '{}', skipping typography fixes",
                    self.config.language
                );
            }
            current = typography::apply(&code, &current);
        }

        if self.config.fixes.footnotes {
            current = FootnoteRenumberer::renumber_text(&current)
                .context("Footnote renumbering failed")?;
        }

        Ok(current)
    }

    /// Run the main workflow for a single document file
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let target = if self.config.in_place {
            input_file.clone()
        } else {
            FileManager::ensure_dir(&output_dir)?;
            let output_path = FileManager::generate_output_path(&input_file, &output_dir);
            if output_path.exists() && !force_overwrite {
                warn!(
                    "Skipping file, groomed output already exists (use -f to force overwrite): {:?}",
                    output_path
                );
                return Ok(());
            }
            output_path
        };

        let content = FileManager::read_to_string(&input_file)?;
        debug!(
            "Grooming {:?} ({} lines, language {})",
            input_file,
            content.lines().count(),
            self.config.language
        );

        // All fixers run before anything is written; a footnote mismatch
        // must leave the input untouched
        let groomed = self.groom_text(&content)?;

        if self.config.in_place && self.config.backup {
            let backup = FileManager::create_backup(&input_file)?;
            debug!("Backup written to {:?}", backup);
        }

        FileManager::write_atomic(&target, &groomed)?;

        info!(
            "Groomed {:?} -> {:?} in {:.2}s",
            input_file,
            target,
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }

    /// Validate footnote consistency for one file without writing anything.
    /// Returns true when both passes succeed.
    pub async fn check(&self, input_file: PathBuf) -> Result<bool> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let content = FileManager::read_to_string(&input_file)?;
        match FootnoteRenumberer::renumber_text(&content) {
            Ok(_) => {
                info!("Footnotes consistent: {:?}", input_file);
                Ok(true)
            }
            Err(FootnoteError::CountMismatch(report)) => {
                error!("Footnote mismatch in {:?}\n{}", input_file, report);
                Ok(false)
            }
        }
    }

    /// Run the main workflow for every matching document in a directory
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let document_files = self.discover_documents(&input_dir)?;
        if document_files.is_empty() {
            return Err(anyhow::anyhow!(
                "No document files found in directory: {:?}",
                input_dir
            ));
        }

        let folder_pb = ProgressBar::new(document_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Grooming files");

        let mut success_count = 0;
        let mut error_count = 0;

        for document_file in document_files.iter() {
            let file_name = document_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            let output_dir = match document_file.parent() {
                Some(parent) => parent.to_path_buf(),
                None => input_dir.clone(),
            };

            match self.run(document_file.clone(), output_dir, force_overwrite).await {
                Ok(_) => {
                    success_count += 1;
                }
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!(
            "Folder processing completed: {} processed, {} errors in {:.2}s",
            success_count,
            error_count,
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }

    /// Check footnote consistency for every matching document in a
    /// directory. Returns true when every file passes.
    pub async fn check_folder(&self, input_dir: PathBuf) -> Result<bool> {
        let document_files = self.discover_documents(&input_dir)?;
        if document_files.is_empty() {
            return Err(anyhow::anyhow!(
                "No document files found in directory: {:?}",
                input_dir
            ));
        }

        let mut all_consistent = true;
        for document_file in document_files {
            if !self.check(document_file).await? {
                all_consistent = false;
            }
        }
        Ok(all_consistent)
    }

    /// Matching documents under a directory, minus our own groomed outputs
    fn discover_documents(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let files = FileManager::find_files(input_dir, &self.config.extensions)?;
        Ok(files
            .into_iter()
            .filter(|p| {
                let name = p.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
                !name.contains(".groomed.")
            })
            .collect())
    }
}
