/*!
 * Prompt construction for translation calls.
 *
 * This module provides:
 * - System and user templates for plain text and Markdown
 * - The rendered `TranslationPrompt` handed to providers
 */

pub mod templates;

// Re-export main types
pub use templates::{PromptKind, PromptTemplate, TranslationPrompt};
