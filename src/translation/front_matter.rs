/*!
 * Front-matter translation.
 *
 * Translates the text fields of a parsed block, regenerates the slug from
 * the translated title and moves the permalink under the language prefix.
 */

use log::debug;
use serde_yaml::Value;

use crate::front_matter::{FieldValue, FrontMatter, TAXONOMY_FIELDS, TEXT_FIELDS};
use super::core::TranslationService;
use super::slug::generate_slug;

/// Language pair and destination code for one batch
#[derive(Debug, Clone)]
pub struct LanguagePair {
    /// Source language name, e.g. "English"
    pub source_language: String,
    /// Target language name, e.g. "French"
    pub target_language: String,
    /// Destination language code, e.g. "fr"
    pub target_code: String,
}

impl LanguagePair {
    /// Create a new language pair
    pub fn new(source_language: impl Into<String>, target_language: impl Into<String>, target_code: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            target_code: target_code.into(),
        }
    }
}

/// Rewrites front matter for the destination language
pub struct FrontMatterTranslator<'a> {
    service: &'a TranslationService,
    languages: &'a LanguagePair,
}

impl<'a> FrontMatterTranslator<'a> {
    /// Create a translator for one language pair
    pub fn new(service: &'a TranslationService, languages: &'a LanguagePair) -> Self {
        Self { service, languages }
    }

    /// Translate text fields, regenerate `slug`, prefix `permalink`.
    ///
    /// Untranslatable or absent fields are left as they are; provider faults
    /// leave the affected field in the source language.
    pub async fn transform(&self, mut front_matter: FrontMatter) -> FrontMatter {
        for name in TEXT_FIELDS.iter().chain(TAXONOMY_FIELDS.iter()) {
            let translated = match front_matter.get(name) {
                Some(FieldValue::Text(text)) => FieldValue::Text(self.translate(text).await),
                Some(FieldValue::TextList(items)) => {
                    let mut translated = Vec::with_capacity(items.len());
                    for item in items {
                        translated.push(self.translate(item).await);
                    }
                    FieldValue::TextList(translated)
                },
                Some(FieldValue::Raw(_)) => {
                    debug!("Leaving non-text '{}' field untranslated", name);
                    continue;
                },
                None => continue,
            };
            front_matter.set(name, translated);
        }

        if let Some(title) = front_matter.get("title").and_then(FieldValue::as_str) {
            let slug = generate_slug(title);
            front_matter.set("slug", FieldValue::Raw(Value::String(slug)));
        }

        if let Some(permalink) = front_matter.get("permalink").and_then(FieldValue::as_str) {
            let prefixed = prefix_permalink(permalink, &self.languages.target_code);
            front_matter.set("permalink", FieldValue::Raw(Value::String(prefixed)));
        }

        front_matter
    }

    async fn translate(&self, text: &str) -> String {
        self.service
            .translate_text(text, &self.languages.source_language, &self.languages.target_language)
            .await
    }
}

/// Put a permalink under `/<code>/`; already-prefixed permalinks are returned as-is
pub fn prefix_permalink(permalink: &str, code: &str) -> String {
    let prefix = format!("/{}/", code);
    if permalink.starts_with(&prefix) || permalink == prefix.trim_end_matches('/') {
        return permalink.to_string();
    }

    format!("{}{}", prefix, permalink.trim_start_matches('/'))
}
