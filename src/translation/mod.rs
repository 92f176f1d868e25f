/*!
 * Translation of content files using AI providers.
 *
 * This module is split into several submodules:
 *
 * - `core`: The translation service and its fail-open text/Markdown calls
 * - `prompts`: Prompt templates for plain text and Markdown
 * - `slug`: URL slug generation from translated titles
 * - `front_matter`: Front-matter field translation, slug and permalink rewriting
 * - `content`: Translation of a whole content file
 */

// Re-export main types for easier usage
pub use self::content::{ContentTranslator, FileOutcome};
pub use self::core::{TokenUsageStats, TranslationService};
pub use self::front_matter::{FrontMatterTranslator, LanguagePair, prefix_permalink};
pub use self::prompts::{PromptKind, TranslationPrompt};
pub use self::slug::generate_slug;

// Submodules
pub mod content;
pub mod core;
pub mod front_matter;
pub mod prompts;
pub mod slug;
