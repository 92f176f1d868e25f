/*!
 * Tests for error types and conversions
 */

use sitelingo::errors::{AppError, FrontMatterError, ProviderError};

/// Test HTTP statuses map to the matching provider error
#[test]
fn test_provider_error_from_status_shouldClassifyStatus() {
    assert!(matches!(
        ProviderError::from_status(401, "bad key".into()),
        ProviderError::AuthenticationError(_)
    ));
    assert!(matches!(
        ProviderError::from_status(403, "forbidden".into()),
        ProviderError::AuthenticationError(_)
    ));
    assert!(matches!(
        ProviderError::from_status(429, "slow down".into()),
        ProviderError::RateLimitExceeded(_)
    ));
    assert!(matches!(
        ProviderError::from_status(503, "down".into()),
        ProviderError::ApiError { status_code: 503, .. }
    ));
}

/// Test error messages carry their details
#[test]
fn test_error_display_shouldIncludeDetails() {
    let err = ProviderError::ApiError { status_code: 500, message: "boom".into() };
    assert_eq!(err.to_string(), "API responded with error: 500 - boom");

    let err: AppError = FrontMatterError::MissingBlock.into();
    assert_eq!(err.to_string(), "Front matter error: No front matter block found");
}

/// Test io and anyhow errors convert into the application error
#[test]
fn test_app_error_from_shouldWrapSources() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    assert!(matches!(AppError::from(io_err), AppError::File(_)));

    let any_err = anyhow::anyhow!("something else");
    assert!(matches!(AppError::from(any_err), AppError::Unknown(_)));

    let provider_err: AppError = ProviderError::EmptyResponse.into();
    assert!(matches!(provider_err, AppError::Provider(ProviderError::EmptyResponse)));
}

fn variant_name(error: &AppError) -> &'static str {
    match error {
        AppError::File(_) => "file",
        AppError::Provider(_) => "provider",
        AppError::FrontMatter(_) => "front_matter",
        AppError::Unknown(_) => "unknown",
    }
}

/// Test every application error variant has a source that produces it
#[test]
fn test_app_error_variants_shouldAllBeReachableFromConversions() {
    let errors = [
        AppError::from(std::io::Error::other("disk")),
        AppError::from(ProviderError::TruncatedResponse("finish_reason: length".into())),
        AppError::from(FrontMatterError::NotAMapping),
        AppError::from(anyhow::anyhow!("other")),
    ];

    let names: Vec<_> = errors.iter().map(variant_name).collect();
    assert_eq!(names, vec!["file", "provider", "front_matter", "unknown"]);
}
