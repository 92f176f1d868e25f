use anyhow::Result;
use log::{debug, error, info, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::translation::{ContentTranslator, FileOutcome, LanguagePair, TranslationService};

// @module: Application controller for content tree translation

/// One file to translate and where its translation goes
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationJob {
    /// Source content file
    pub source: PathBuf,
    /// Mirrored destination under the language subtree
    pub destination: PathBuf,
}

/// Counts reported at the end of a run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    /// Files written
    pub translated: usize,
    /// Files whose destination already existed
    pub skipped: usize,
    /// Files without usable front matter
    pub abandoned: usize,
    /// Files that hit a read or write error
    pub failed: usize,
}

impl RunSummary {
    /// Total number of files seen
    pub fn total(&self) -> usize {
        self.translated + self.skipped + self.abandoned + self.failed
    }
}

/// Main application controller: walks the content tree and translates it file by file
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translation service shared by every file
    service: TranslationService,
    // @field: Whether to draw a progress bar
    show_progress: bool,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let service = TranslationService::new(&config.translation)?;
        Ok(Self::with_service(config, service))
    }

    /// Create a controller around an existing translation service
    pub fn with_service(config: Config, service: TranslationService) -> Self {
        Self {
            config,
            service,
            show_progress: true,
        }
    }

    /// Enable or disable the progress bar
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// The translation service used for every call
    pub fn service(&self) -> &TranslationService {
        &self.service
    }

    /// Enumerate the Markdown files of every configured content directory
    pub fn discover_jobs(&self, source_root: &Path, target_code: &str) -> Vec<TranslationJob> {
        let mut jobs = Vec::new();

        for directory in &self.config.content_directories {
            let content_dir = source_root.join(directory);
            if !FileManager::dir_exists(&content_dir) {
                debug!("Content directory {:?} does not exist, skipping.", content_dir);
                continue;
            }

            let files = match FileManager::find_files(&content_dir, &self.config.markdown_extension) {
                Ok(files) => files,
                Err(e) => {
                    error!("Failed to list {:?}: {:#}", content_dir, e);
                    continue;
                }
            };

            for source in files {
                match FileManager::generate_output_path(source_root, target_code, &source) {
                    Ok(destination) => jobs.push(TranslationJob { source, destination }),
                    Err(e) => warn!("Skipping {:?}: {:#}", source, e),
                }
            }
        }

        jobs
    }

    /// Translate every discovered file that has no translation yet.
    ///
    /// Files are handled one at a time. A file whose destination exists is
    /// skipped, so an interrupted run can simply be started again. After each
    /// file handed to the translator the controller pauses for the configured
    /// delay to stay under the provider's rate limit.
    pub async fn run(&self, source_root: &Path, languages: &LanguagePair) -> Result<RunSummary> {
        let start_time = Instant::now();
        let jobs = self.discover_jobs(source_root, &languages.target_code);
        let delay = Duration::from_millis(self.config.translation.common.request_delay_ms);
        let translator = ContentTranslator::new(&self.service, languages);

        info!(
            "Found {} file(s) to consider under {:?} ({} -> {}, code '{}')",
            jobs.len(),
            source_root,
            languages.source_language,
            languages.target_language,
            languages.target_code
        );

        let progress_bar = self.create_progress_bar(jobs.len() as u64);
        let mut summary = RunSummary::default();

        for job in &jobs {
            progress_bar.set_message(job.source.file_name().unwrap_or_default().to_string_lossy().to_string());

            if job.destination.exists() {
                info!("Destination file already exists: {:?}, skipping.", job.destination);
                summary.skipped += 1;
                progress_bar.inc(1);
                continue;
            }

            info!("Translating file: {:?}", job.source);
            match translator.transform(&job.source, &job.destination).await {
                Ok(FileOutcome::Written) => summary.translated += 1,
                Ok(FileOutcome::Abandoned(_)) => summary.abandoned += 1,
                Err(e) => {
                    error!("Failed to translate {:?}: {}", job.source, e);
                    summary.failed += 1;
                }
            }
            progress_bar.inc(1);

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        progress_bar.finish_and_clear();

        info!(
            "Finished in {}: {} translated, {} skipped, {} abandoned, {} failed",
            Self::format_duration(start_time.elapsed()),
            summary.translated,
            summary.skipped,
            summary.abandoned,
            summary.failed
        );
        info!("{}", self.service.usage().summary());

        Ok(summary)
    }

    fn create_progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(len);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar
    }

    /// Format a duration as `1h 02m 03s`, `2m 03s` or `3.2s`
    pub fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            format!("{}h {:02}m {:02}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {:02}s", minutes, seconds)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
