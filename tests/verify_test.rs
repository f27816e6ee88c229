//! Tests for verifying signed URLs.

mod common;

use pixsign::models::SourceConfig;
use pixsign::services::{build_proxy_url, build_url, verify_url, UrlSigner};
use pixsign::SignError;

use common::fixtures::{self, paths, DOMAIN};

#[test]
fn test_built_urls_verify() {
    let source = fixtures::source();
    let params = fixtures::params(&[
        ("con", 10.into()),
        ("txt", "Hello World".into()),
        ("w", 400.into()),
    ]);

    let urls = [
        build_url(paths::JETS, None, &source).unwrap(),
        build_url(paths::JETS, Some(&params), &source).unwrap(),
        build_proxy_url(paths::AVATAR_URL, None, &source).unwrap(),
        build_proxy_url(paths::AVATAR_URL, Some(&params), &source).unwrap(),
    ];

    for url in &urls {
        assert!(verify_url(url, &source).is_ok(), "Expected {} to verify", url);
    }
}

#[test]
fn test_tampered_query_fails() {
    let source = fixtures::source();
    let params = fixtures::params(&[("w", 400.into())]);
    let url = build_url(paths::JETS, Some(&params), &source).unwrap();

    let tampered = url.replace("w%3D400", "w%3D4000");
    assert!(matches!(
        verify_url(&tampered, &source),
        Err(SignError::InvalidSignature)
    ));
}

#[test]
fn test_tampered_signature_fails() {
    let source = fixtures::source();
    let url = build_url(paths::JETS, None, &source).unwrap();

    let (head, signature) = common::split_signature(&url);
    let flipped = if signature.starts_with('0') { "1" } else { "0" };
    let tampered = format!("{head}s={flipped}{}", &signature[1..]);

    assert!(matches!(
        verify_url(&tampered, &source),
        Err(SignError::InvalidSignature)
    ));
}

#[test]
fn test_wrong_source_fails() {
    let url = build_url(paths::JETS, None, &fixtures::source()).unwrap();
    let other = SourceConfig::new("ddEEff", DOMAIN);

    assert!(matches!(
        verify_url(&url, &other),
        Err(SignError::InvalidSignature)
    ));
}

#[test]
fn test_url_signer_verify() {
    let signer = UrlSigner::new(fixtures::source()).unwrap();
    let url = signer.proxy(paths::AVATAR_URL, None).unwrap();

    assert!(signer.verify(&url).is_ok());
    assert!(signer.verify(&format!("{url}0")).is_err());
}
