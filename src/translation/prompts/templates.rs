/*!
 * Prompt templates for front-matter fields and Markdown bodies.
 *
 * Each translation call sends a system-level instruction naming the
 * language pair and a user-level payload embedding the text itself.
 */

/// What kind of text a prompt carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// A short plain-text fragment such as a title or a tag
    Text,
    /// A full Markdown document whose structure must survive translation
    Markdown,
}

/// A template with `{source_language}`, `{target_language}` and `{text}` placeholders
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// System instruction for plain text
    pub const TEXT_SYSTEM: &'static str =
        "You are a helpful assistant that translates {source_language} to {target_language}.";

    /// User payload for plain text
    pub const TEXT_USER: &'static str =
        "Translate the following text from {source_language} to {target_language}:\n\n{text}";

    /// System instruction for Markdown documents
    pub const MARKDOWN_SYSTEM: &'static str =
        "You are a helpful assistant that translates {source_language} Markdown content to {target_language}, \
         preserving the Markdown formatting, code blocks, links, and images.";

    /// User payload for Markdown documents
    pub const MARKDOWN_USER: &'static str =
        "Translate the following Markdown content from {source_language} to {target_language}, \
         preserving the Markdown formatting, code blocks, links, and images:\n\n{text}";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Render the template with the given variables.
    pub fn render(&self, source_language: &str, target_language: &str, text: &str) -> String {
        // Languages first, so a `{text}` payload containing placeholders stays verbatim
        self.template
            .replace("{source_language}", source_language)
            .replace("{target_language}", target_language)
            .replace("{text}", text)
    }
}

/// A fully rendered request for the external translation capability
#[derive(Debug, Clone)]
pub struct TranslationPrompt {
    /// Plain text or Markdown
    pub kind: PromptKind,
    /// Source language name, e.g. "English"
    pub source_language: String,
    /// Target language name, e.g. "French"
    pub target_language: String,
    /// System-level role instruction
    pub system: String,
    /// User-level payload containing the text
    pub user: String,
    /// The raw text being translated
    pub text: String,
}

impl TranslationPrompt {
    /// Build the prompt for a short plain-text fragment
    pub fn text(text: &str, source_language: &str, target_language: &str) -> Self {
        Self::build(PromptKind::Text, text, source_language, target_language)
    }

    /// Build the prompt for a whole Markdown document
    pub fn markdown(text: &str, source_language: &str, target_language: &str) -> Self {
        Self::build(PromptKind::Markdown, text, source_language, target_language)
    }

    fn build(kind: PromptKind, text: &str, source_language: &str, target_language: &str) -> Self {
        let (system, user) = match kind {
            PromptKind::Text => (PromptTemplate::TEXT_SYSTEM, PromptTemplate::TEXT_USER),
            PromptKind::Markdown => (PromptTemplate::MARKDOWN_SYSTEM, PromptTemplate::MARKDOWN_USER),
        };

        Self {
            kind,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            system: PromptTemplate::new(system).render(source_language, target_language, ""),
            user: PromptTemplate::new(user).render(source_language, target_language, text),
            text: text.to_string(),
        }
    }
}
