/*!
 * Tests for language utility functions
 */

use anyhow::Result;
use sitelingo::language_utils::{self, LanguageCodeType};

/// Test ISO 639-1 and 639-3 codes are recognised
#[test]
fn test_validate_language_code_withIsoCodes_shouldReturnType() -> Result<()> {
    assert_eq!(language_utils::validate_language_code("fr")?, LanguageCodeType::Part1);
    assert_eq!(language_utils::validate_language_code("DE")?, LanguageCodeType::Part1);
    assert_eq!(language_utils::validate_language_code("fra")?, LanguageCodeType::Part3);
    Ok(())
}

/// Test regional locales are accepted when their primary subtag is known
#[test]
fn test_validate_language_code_withRegionalCode_shouldReturnRegional() -> Result<()> {
    assert_eq!(language_utils::validate_language_code("pt-br")?, LanguageCodeType::Regional);
    assert_eq!(language_utils::validate_language_code("zh_CN")?, LanguageCodeType::Regional);
    Ok(())
}

/// Test unknown codes are rejected
#[test]
fn test_validate_language_code_withUnknownCode_shouldFail() {
    assert!(language_utils::validate_language_code("xx").is_err());
    assert!(language_utils::validate_language_code("english").is_err());
    assert!(language_utils::validate_language_code("pt-").is_err());
}

/// Test language names are resolved, ignoring the region
#[test]
fn test_get_language_name_withKnownCodes_shouldReturnEnglishName() -> Result<()> {
    assert_eq!(language_utils::get_language_name("fr")?, "French");
    assert_eq!(language_utils::get_language_name("deu")?, "German");
    assert_eq!(language_utils::get_language_name("pt-br")?, "Portuguese");
    Ok(())
}
