/*!
 * Tests for front-matter parsing and translation
 */

use anyhow::Result;
use serde_yaml::Value;
use sitelingo::errors::FrontMatterError;
use sitelingo::providers::mock::{MockErrorType, MockProvider};
use sitelingo::translation::{FrontMatterTranslator, generate_slug};
use sitelingo::{ContentDocument, FieldValue, FrontMatter};
use crate::common;

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

fn raw(value: &str) -> FieldValue {
    FieldValue::Raw(Value::String(value.to_string()))
}

/// Test field classification
#[test]
fn test_front_matter_parse_shouldClassifyFields() -> Result<()> {
    let front_matter = FrontMatter::parse(
        "title: Hello\nteaser: 42\ncategories: [news, 2024]\ntags: rust\nlayout: page\nsubheadline: ~\n",
    )?;

    assert_eq!(front_matter.get("title"), Some(&text("Hello")));
    assert_eq!(front_matter.get("teaser"), Some(&text("42")));
    assert_eq!(
        front_matter.get("categories"),
        Some(&FieldValue::TextList(vec!["news".to_string(), "2024".to_string()]))
    );
    assert_eq!(front_matter.get("tags"), Some(&text("rust")));
    assert_eq!(front_matter.get("layout"), Some(&raw("page")));
    assert_eq!(front_matter.get("subheadline"), Some(&FieldValue::Raw(Value::Null)));
    Ok(())
}

/// Test documents without a leading block or with unusable YAML are rejected
#[test]
fn test_content_document_parse_withBadFrontMatter_shouldFail() {
    assert!(matches!(
        ContentDocument::parse("# No front matter\n"),
        Err(FrontMatterError::MissingBlock)
    ));
    assert!(matches!(
        ContentDocument::parse("---\ntitle: [unclosed\n---\nbody"),
        Err(FrontMatterError::InvalidYaml(_))
    ));
    assert!(matches!(
        ContentDocument::parse("---\n- a\n- b\n---\nbody"),
        Err(FrontMatterError::NotAMapping)
    ));
}

/// Test rendering keeps key order and the body verbatim
#[test]
fn test_content_document_render_shouldKeepKeyOrderAndBody() -> Result<()> {
    let document = ContentDocument::parse("---\nzeta: 1\ntitle: Hi\nalpha: 2\n---\nBody\n---\nmore\n")?;

    let rendered = document.render()?;

    assert!(rendered.starts_with("---\nzeta: 1\ntitle: Hi\nalpha: 2\n---\n"));
    assert!(rendered.ends_with("Body\n---\nmore\n"));

    let reparsed = ContentDocument::parse(&rendered)?;
    assert_eq!(reparsed.front_matter.keys().collect::<Vec<_>>(), vec!["zeta", "title", "alpha"]);
    Ok(())
}

/// Test slug generation from translated titles
#[test]
fn test_generate_slug_shouldProduceUrlSafeSlugs() {
    assert_eq!(generate_slug("Hello World"), "hello-world");
    assert_eq!(generate_slug("Café crème, s'il vous plaît!"), "cafe-creme-s-il-vous-plait");
    assert_eq!(generate_slug("  --Déjà vu--  "), "deja-vu");
    assert_eq!(generate_slug("!!!"), "");
}

/// Test translated fields, slug and permalink together
#[tokio::test]
async fn test_transform_withFullFrontMatter_shouldRewriteExpectedFields() -> Result<()> {
    let mock = MockProvider::uppercase();
    let service = common::service_with(&mock);
    let languages = common::french();
    let front_matter = FrontMatter::parse(
        "layout: post\ntitle: Hello World\nsubheadline: A sub\nteaser: Short\ncategories: [news, tech]\ntags: [a, b, c]\npermalink: /blog/hello\nslug: old-slug\nimage: header.png\n",
    )?;

    let translated = FrontMatterTranslator::new(&service, &languages).transform(front_matter).await;

    assert_eq!(translated.get("title"), Some(&text("HELLO WORLD")));
    assert_eq!(translated.get("subheadline"), Some(&text("A SUB")));
    assert_eq!(translated.get("teaser"), Some(&text("SHORT")));
    assert_eq!(
        translated.get("categories"),
        Some(&FieldValue::TextList(vec!["NEWS".to_string(), "TECH".to_string()]))
    );
    assert_eq!(
        translated.get("tags"),
        Some(&FieldValue::TextList(vec!["A".to_string(), "B".to_string(), "C".to_string()]))
    );
    assert_eq!(translated.get("slug").and_then(FieldValue::as_str), Some("hello-world"));
    assert_eq!(translated.get("permalink").and_then(FieldValue::as_str), Some("/fr/blog/hello"));
    assert_eq!(translated.get("layout"), Some(&raw("post")));
    assert_eq!(translated.get("image"), Some(&raw("header.png")));

    // Existing keys keep their position
    assert_eq!(
        translated.keys().collect::<Vec<_>>(),
        vec!["layout", "title", "subheadline", "teaser", "categories", "tags", "permalink", "slug", "image"]
    );

    // One call per text field and per list item, in field order
    assert_eq!(
        mock.payloads(),
        vec!["Hello World", "A sub", "Short", "news", "tech", "a", "b", "c"]
    );
    Ok(())
}

/// Test a slug is added when the title exists but no slug did
#[tokio::test]
async fn test_transform_withoutSlug_shouldAppendGeneratedSlug() -> Result<()> {
    let mock = MockProvider::working().with_custom_response(|_| "Bonjour le monde".to_string());
    let service = common::service_with(&mock);
    let languages = common::french();
    let front_matter = FrontMatter::parse("title: Hello world\n")?;

    let translated = FrontMatterTranslator::new(&service, &languages).transform(front_matter).await;

    assert_eq!(translated.keys().collect::<Vec<_>>(), vec!["title", "slug"]);
    assert_eq!(translated.get("slug").and_then(FieldValue::as_str), Some("bonjour-le-monde"));
    Ok(())
}

/// Test absent fields stay absent and nothing is called
#[tokio::test]
async fn test_transform_withoutTranslatableFields_shouldNotCallProvider() -> Result<()> {
    let mock = MockProvider::working();
    let service = common::service_with(&mock);
    let languages = common::french();
    let front_matter = FrontMatter::parse("layout: page\ndate: 2024-01-01\n")?;

    let translated = FrontMatterTranslator::new(&service, &languages).transform(front_matter.clone()).await;

    assert_eq!(translated, front_matter);
    assert!(!translated.contains("slug"));
    assert!(!translated.contains("permalink"));
    assert_eq!(mock.request_count(), 0);
    Ok(())
}

/// Test provider faults leave fields in the source language but still rewrite slug and permalink
#[tokio::test]
async fn test_transform_withFailingProvider_shouldKeepSourceText() -> Result<()> {
    let mock = MockProvider::failing(MockErrorType::Connection);
    let service = common::service_with(&mock);
    let languages = common::french();
    let front_matter = FrontMatter::parse("title: Hello World\ntags: [one, two]\npermalink: /fr/already\n")?;

    let translated = FrontMatterTranslator::new(&service, &languages).transform(front_matter).await;

    assert_eq!(translated.get("title"), Some(&text("Hello World")));
    assert_eq!(
        translated.get("tags"),
        Some(&FieldValue::TextList(vec!["one".to_string(), "two".to_string()]))
    );
    assert_eq!(translated.get("slug").and_then(FieldValue::as_str), Some("hello-world"));
    assert_eq!(translated.get("permalink").and_then(FieldValue::as_str), Some("/fr/already"));
    Ok(())
}

/// Test nested taxonomy values pass through untouched
#[tokio::test]
async fn test_transform_withNestedTaxonomy_shouldLeaveItRaw() -> Result<()> {
    let mock = MockProvider::uppercase();
    let service = common::service_with(&mock);
    let languages = common::french();
    let front_matter = FrontMatter::parse("categories:\n  main: news\ntags: [[a, b]]\n")?;

    let translated = FrontMatterTranslator::new(&service, &languages).transform(front_matter.clone()).await;

    assert_eq!(translated.get("categories"), front_matter.get("categories"));
    assert_eq!(translated.get("tags"), front_matter.get("tags"));
    assert_eq!(mock.request_count(), 0);
    Ok(())
}
