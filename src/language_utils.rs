use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The destination code doubles as a directory name and permalink prefix,
/// so it is never rewritten here; these helpers only recognise it.
/// Language code type
#[derive(Debug, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-3 (3-letter) code
    Part3,
    /// Regional locale such as `pt-br`, with a known primary subtag
    Regional,
}

/// Validate if a code is a known ISO 639-1 / 639-3 code or a regional locale
/// built on one (`pt-br`, `zh_CN`)
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    if let Some((primary, region)) = normalized_code.split_once(['-', '_']) {
        if !region.is_empty() && region.chars().all(|c| c.is_ascii_alphanumeric()) {
            return validate_language_code(primary).map(|_| LanguageCodeType::Regional);
        }
        return Err(anyhow!("Invalid language code: {}", code));
    }

    match normalized_code.len() {
        2 if Language::from_639_1(&normalized_code).is_some() => Ok(LanguageCodeType::Part1),
        3 if Language::from_639_3(&normalized_code).is_some() => Ok(LanguageCodeType::Part3),
        _ => Err(anyhow!("Invalid language code: {}", code)),
    }
}

/// Get the English language name for a code, ignoring any region subtag
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();
    let primary = normalized_code
        .split(['-', '_'])
        .next()
        .unwrap_or_default();

    let lang = match primary.len() {
        2 => Language::from_639_1(primary),
        3 => Language::from_639_3(primary),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(lang.to_name().to_string())
}
