/*!
 * Tests for translating a single content file
 */

use std::fs;
use anyhow::Result;
use sitelingo::providers::mock::MockProvider;
use sitelingo::translation::{ContentTranslator, FileOutcome};
use sitelingo::{ContentDocument, FieldValue};
use crate::common;

/// Test a full page is translated and written to its destination
#[tokio::test]
async fn test_transform_withValidPage_shouldWriteTranslatedDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_page(temp_dir.path(), "pages/about.md")?;
    let destination = temp_dir.path().join("fr/pages/about.md");

    let mock = MockProvider::uppercase();
    let service = common::service_with(&mock);
    let languages = common::french();

    let outcome = ContentTranslator::new(&service, &languages)
        .transform(&source, &destination)
        .await?;

    assert_eq!(outcome, FileOutcome::Written);

    let document = ContentDocument::parse(&fs::read_to_string(&destination)?)?;
    assert_eq!(document.front_matter.get("title").and_then(FieldValue::as_str), Some("HELLO WORLD"));
    assert_eq!(document.front_matter.get("slug").and_then(FieldValue::as_str), Some("hello-world"));
    assert_eq!(document.front_matter.get("permalink").and_then(FieldValue::as_str), Some("/fr/about"));
    assert_eq!(document.front_matter.get("layout").and_then(FieldValue::as_str), Some("page"));
    assert_eq!(document.body, "# HI\n\nSOME *TEXT*.");

    // Title then body
    assert_eq!(mock.request_count(), 2);
    Ok(())
}

/// Test files without front matter are abandoned and nothing is written
#[tokio::test]
async fn test_transform_withoutFrontMatter_shouldAbandonFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_file(temp_dir.path(), "pages/plain.md", "# Just a body\n")?;
    let destination = temp_dir.path().join("fr/pages/plain.md");

    let mock = MockProvider::working();
    let service = common::service_with(&mock);
    let languages = common::french();

    let outcome = ContentTranslator::new(&service, &languages)
        .transform(&source, &destination)
        .await?;

    assert!(matches!(outcome, FileOutcome::Abandoned(_)));
    assert!(!destination.exists());
    assert_eq!(mock.request_count(), 0);
    Ok(())
}

/// Test invalid YAML is abandoned rather than aborting
#[tokio::test]
async fn test_transform_withInvalidYaml_shouldAbandonFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_file(temp_dir.path(), "pages/bad.md", "---\ntitle: [oops\n---\nbody")?;
    let destination = temp_dir.path().join("fr/pages/bad.md");

    let mock = MockProvider::working();
    let service = common::service_with(&mock);
    let languages = common::french();

    let outcome = ContentTranslator::new(&service, &languages)
        .transform(&source, &destination)
        .await?;

    assert!(matches!(outcome, FileOutcome::Abandoned(_)));
    assert!(!destination.exists());
    Ok(())
}

/// Test an empty body is kept empty without a provider call for it
#[tokio::test]
async fn test_transform_withEmptyBody_shouldOnlyTranslateFrontMatter() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_file(temp_dir.path(), "blog/empty.md", "---\ntitle: Only a title\n---\n")?;
    let destination = temp_dir.path().join("fr/blog/empty.md");

    let mock = MockProvider::uppercase();
    let service = common::service_with(&mock);
    let languages = common::french();

    ContentTranslator::new(&service, &languages)
        .transform(&source, &destination)
        .await?;

    let document = ContentDocument::parse(&fs::read_to_string(&destination)?)?;
    assert_eq!(document.front_matter.get("title").and_then(FieldValue::as_str), Some("ONLY A TITLE"));
    assert_eq!(document.body, "");
    assert_eq!(mock.payloads(), vec!["Only a title"]);
    Ok(())
}

/// Test a missing source file is reported as an error
#[tokio::test]
async fn test_transform_withMissingSource_shouldReturnError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mock = MockProvider::working();
    let service = common::service_with(&mock);
    let languages = common::french();

    let result = ContentTranslator::new(&service, &languages)
        .transform(&temp_dir.path().join("pages/nope.md"), &temp_dir.path().join("fr/pages/nope.md"))
        .await;

    assert!(result.is_err());
    Ok(())
}
