/*!
 * Content files: a YAML front-matter block followed by a Markdown body.
 *
 * Translatable fields are classified once, when the block is parsed:
 * `title`, `subheadline` and `teaser` become `FieldValue::Text` when they
 * hold a scalar, while `categories` and `tags` become `FieldValue::Text` or
 * `FieldValue::TextList`. Everything else is kept as a raw YAML value and
 * written back untouched, in its original position.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::errors::FrontMatterError;

/// Marker line opening and closing a front-matter block
pub const FRONT_MATTER_MARKER: &str = "---";

/// Scalar fields translated as a single string
pub const TEXT_FIELDS: [&str; 3] = ["title", "subheadline", "teaser"];

/// Fields that hold either one string or a list of strings
pub const TAXONOMY_FIELDS: [&str; 2] = ["categories", "tags"];

static FRONT_MATTER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)??---[ \t]*(?:\r?\n|\z)(.*)\z").unwrap()
});

/// A front-matter value after classification
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A single translatable string
    Text(String),
    /// An ordered list of translatable strings
    TextList(Vec<String>),
    /// Any value that is not translated
    Raw(Value),
}

impl FieldValue {
    /// Classify the value stored under `key`
    fn classify(key: &Value, value: Value) -> Self {
        let name = key.as_str().unwrap_or_default();

        if TEXT_FIELDS.contains(&name) {
            return match scalar_text(&value) {
                Some(text) => Self::Text(text),
                None => Self::Raw(value),
            };
        }

        if TAXONOMY_FIELDS.contains(&name) {
            if let Value::Sequence(items) = &value {
                let texts: Option<Vec<String>> = items.iter().map(scalar_text).collect();
                return match texts {
                    Some(texts) => Self::TextList(texts),
                    None => Self::Raw(value),
                };
            }
            return match scalar_text(&value) {
                Some(text) => Self::Text(text),
                None => Self::Raw(value),
            };
        }

        Self::Raw(value)
    }

    /// Convert back into a YAML value
    fn into_value(self) -> Value {
        match self {
            Self::Text(text) => Value::String(text),
            Self::TextList(items) => Value::Sequence(items.into_iter().map(Value::String).collect()),
            Self::Raw(value) => value,
        }
    }

    /// The value as a string, when it is text or a plain YAML string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Raw(Value::String(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Stringify strings, numbers and booleans; anything else is not text
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Ordered front-matter fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontMatter {
    entries: Vec<(Value, FieldValue)>,
}

impl FrontMatter {
    /// Parse a YAML block into classified fields, keeping key order
    pub fn parse(block: &str) -> Result<Self, FrontMatterError> {
        let value: Value = serde_yaml::from_str(block)
            .map_err(|e| FrontMatterError::InvalidYaml(e.to_string()))?;

        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            // An empty block parses to null
            Value::Null => Mapping::new(),
            _ => return Err(FrontMatterError::NotAMapping),
        };

        let entries = mapping
            .into_iter()
            .map(|(key, value)| {
                let field = FieldValue::classify(&key, value);
                (key, field)
            })
            .collect();

        Ok(Self { entries })
    }

    /// Serialize back to a YAML block ending in a newline
    pub fn to_yaml(&self) -> Result<String, FrontMatterError> {
        let mapping: Mapping = self.entries
            .iter()
            .cloned()
            .map(|(key, field)| (key, field.into_value()))
            .collect();

        serde_yaml::to_string(&mapping)
            .map_err(|e| FrontMatterError::Serialize(e.to_string()))
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str() == Some(name))
            .map(|(_, field)| field)
    }

    /// Whether a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Replace a field in place, or append it when it is new
    pub fn set(&mut self, name: &str, field: FieldValue) {
        match self.entries.iter_mut().find(|(key, _)| key.as_str() == Some(name)) {
            Some((_, existing)) => *existing = field,
            None => self.entries.push((Value::String(name.to_string()), field)),
        }
    }

    /// Field names in document order (non-string keys are skipped)
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(key, _)| key.as_str())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the block has no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A content file split into front matter and body
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDocument {
    /// Parsed front matter
    pub front_matter: FrontMatter,
    /// Raw Markdown body following the closing marker
    pub body: String,
}

impl ContentDocument {
    /// Split and parse a content file
    pub fn parse(content: &str) -> Result<Self, FrontMatterError> {
        let (block, body) = split_front_matter(content).ok_or(FrontMatterError::MissingBlock)?;

        Ok(Self {
            front_matter: FrontMatter::parse(block)?,
            body: body.to_string(),
        })
    }

    /// Reassemble marker, front matter, marker and body
    pub fn render(&self) -> Result<String, FrontMatterError> {
        let yaml = self.front_matter.to_yaml()?;
        Ok(format!("{marker}\n{yaml}{marker}\n{body}", marker = FRONT_MATTER_MARKER, yaml = yaml, body = self.body))
    }
}

/// Split a file into its front-matter block and body, if it opens with one
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let captures = FRONT_MATTER_PATTERN.captures(content)?;
    let block = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());
    Some((block, body))
}
