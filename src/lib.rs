/*!
 * # sitelingo - static site content translation with AI
 *
 * A Rust library for translating a static-site content tree (YAML front
 * matter + Markdown body) into another language.
 *
 * ## Features
 *
 * - Walk the configured content directories (`pages`, `_posts`, `blog`)
 * - Translate `title`, `subheadline`, `teaser`, `categories` and `tags`
 * - Regenerate `slug` from the translated title
 * - Prefix `permalink` with the destination language code
 * - Translate Markdown bodies while keeping their structure
 * - Mirror the tree under `<source root>/<code>/`, skipping files already
 *   translated so interrupted runs can resume
 * - Translation failures fall back to the original text instead of
 *   aborting the batch
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `front_matter`: Splitting, parsing and rendering content files
 * - `translation`: AI-powered translation services:
 *   - `translation::core`: Fail-open text and Markdown translation
 *   - `translation::front_matter`: Field translation, slug and permalink
 *   - `translation::content`: Whole-file translation
 * - `file_utils`: File system operations
 * - `app_controller`: Tree walking and per-file orchestration
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for various LLM providers:
 *   - `providers::openai`: OpenAI API client
 *   - `providers::anthropic`: Anthropic API client
 *   - `providers::ollama`: Ollama API client
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod front_matter;
pub mod translation;
pub mod app_controller;
pub mod language_utils;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use front_matter::{ContentDocument, FieldValue, FrontMatter};
pub use translation::{LanguagePair, TranslationService};
pub use errors::{AppError, FrontMatterError, ProviderError};
