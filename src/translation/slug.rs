/*!
 * URL slug generation for translated titles.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid")
});

/// Turn a title into a lowercase, accent-free, hyphen-separated slug.
///
/// Only nonspacing marks are dropped after decomposition; spacing marks
/// count as separators.
///
/// "Café Déjà Vu!" becomes "cafe-deja-vu". Titles without any ASCII letters
/// or digits produce an empty slug.
pub fn generate_slug(title: &str) -> String {
    let stripped: String = title
        .to_lowercase()
        .nfd()
        .filter(|c| c.general_category() != GeneralCategory::NonspacingMark)
        .collect();

    NON_SLUG_CHARS
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_string()
}
