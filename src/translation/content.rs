/*!
 * Translation of a single content file.
 *
 * Reads the source file, translates front matter and body, reassembles the
 * document and writes it to the destination path. Existence of the
 * destination is the caller's concern.
 */

use log::{info, warn};
use std::path::Path;

use crate::errors::{AppError, FrontMatterError};
use crate::file_utils::FileManager;
use crate::front_matter::ContentDocument;
use super::core::TranslationService;
use super::front_matter::{FrontMatterTranslator, LanguagePair};

/// How a single file ended
#[derive(Debug, PartialEq)]
pub enum FileOutcome {
    /// The translated document was written
    Written,
    /// The file was left alone because its structure could not be used
    Abandoned(String),
}

/// Translates whole content files
pub struct ContentTranslator<'a> {
    service: &'a TranslationService,
    languages: &'a LanguagePair,
}

impl<'a> ContentTranslator<'a> {
    /// Create a content translator for one language pair
    pub fn new(service: &'a TranslationService, languages: &'a LanguagePair) -> Self {
        Self { service, languages }
    }

    /// Translate `source_path` into `dest_path`.
    ///
    /// Files without a usable front-matter block are abandoned with a
    /// warning; read and write failures are returned as errors.
    pub async fn transform(&self, source_path: &Path, dest_path: &Path) -> Result<FileOutcome, AppError> {
        let content = FileManager::read_to_string(source_path)
            .map_err(|e| AppError::File(format!("{:#}", e)))?;

        let document = match ContentDocument::parse(&content) {
            Ok(document) => document,
            Err(FrontMatterError::MissingBlock) => {
                warn!("No front matter found in {:?}, skipping file.", source_path);
                return Ok(FileOutcome::Abandoned("no front matter".to_string()));
            },
            Err(e) => {
                warn!("Unusable front matter in {:?}, skipping file: {}", source_path, e);
                return Ok(FileOutcome::Abandoned(e.to_string()));
            },
        };

        let front_matter = FrontMatterTranslator::new(self.service, self.languages)
            .transform(document.front_matter)
            .await;

        let body = self.service
            .translate_markdown(&document.body, &self.languages.source_language, &self.languages.target_language)
            .await;

        let translated = ContentDocument { front_matter, body }.render()?;

        FileManager::write_to_file(dest_path, &translated)
            .map_err(|e| AppError::File(format!("{:#}", e)))?;
        info!("Translated file saved to {:?}", dest_path);

        Ok(FileOutcome::Written)
    }
}
