//! HTTP-level tests for the live provider client, against a local mock server.

use mockito::Matcher;
use nasihun::config::ApiConfig;
use nasihun::models::Collection;
use nasihun::source::{HadithApiSource, HadithSource, SourceError};

fn source_for(server: &mockito::ServerGuard, api_key: Option<&str>) -> HadithApiSource {
    HadithApiSource::new(&ApiConfig {
        base_url: server.url(),
        api_key: api_key.map(str::to_string),
    })
}

#[tokio::test]
async fn citation_fetch_parses_flat_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/hadiths")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("book".into(), "sahih-bukhari".into()),
            Matcher::UrlEncoded("hadithNumber".into(), "1".into()),
            Matcher::UrlEncoded("apiKey".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "status": 200,
                "hadiths": [{
                    "hadithNumber": "1",
                    "hadithEnglish": "Actions are judged by intentions.",
                    "status": "Sahih",
                    "book": {"bookName": "Sahih al-Bukhari", "writerName": "Imam Bukhari"},
                    "chapter": {"chapterEnglish": "Revelation"}
                }]
            }"#,
        )
        .create_async()
        .await;

    let source = source_for(&server, Some("test-key"));
    let response = source
        .fetch_by_citation(Collection::SahihBukhari, 1)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.hadiths.len(), 1);
    assert_eq!(
        response.hadiths[0].hadith_english.as_deref(),
        Some("Actions are judged by intentions.")
    );
    assert_eq!(response.hadiths[0].status.as_deref(), Some("Sahih"));
}

#[tokio::test]
async fn citation_fetch_accepts_paginated_shape() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/hadiths")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"hadiths": {"data": [{"hadithNumber": 9}], "next_page_url": null}}"#)
        .create_async()
        .await;

    let source = source_for(&server, Some("k"));
    let response = source
        .fetch_by_citation(Collection::SahihMuslim, 9)
        .await
        .unwrap();

    assert_eq!(response.hadiths.len(), 1);
    assert_eq!(response.hadiths[0].hadith_number.as_deref(), Some("9"));
}

#[tokio::test]
async fn page_fetch_reports_next_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/hadiths")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("book".into(), "mishkat".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"hadiths": {
                "data": [{"hadithNumber": "10"}, {"hadithNumber": "11"}],
                "next_page_url": "https://hadithapi.com/public/api/hadiths?page=3"
            }}"#,
        )
        .create_async()
        .await;

    let source = source_for(&server, Some("k"));
    let page = source
        .fetch_page(Collection::Mishkat, None, 2)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.hadiths.len(), 2);
    assert!(page.has_next_page);
}

#[tokio::test]
async fn page_fetch_without_next_url_is_final() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/hadiths")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"hadiths": {"data": [], "next_page_url": null}}"#)
        .create_async()
        .await;

    let source = source_for(&server, Some("k"));
    let page = source
        .fetch_page(Collection::Mishkat, None, 5)
        .await
        .unwrap();

    assert!(page.hadiths.is_empty());
    assert!(!page.has_next_page);
}

#[tokio::test]
async fn page_fetch_forwards_search_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/hadiths")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("book".into(), "sahih-bukhari".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("hadithEnglish".into(), "good deeds".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"hadiths": {"data": [], "next_page_url": null}}"#)
        .create_async()
        .await;

    let source = source_for(&server, Some("k"));
    source
        .fetch_page(Collection::SahihBukhari, Some("good deeds"), 1)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/hadiths")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"message": "invalid key"}"#)
        .create_async()
        .await;

    let source = source_for(&server, Some("wrong"));
    let err = source
        .fetch_by_citation(Collection::SahihBukhari, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Api(_)), "got {:?}", err);
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/hadiths")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let source = source_for(&server, Some("k"));
    let err = source
        .fetch_page(Collection::AbuDawood, None, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn missing_key_sends_no_key_parameter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/hadiths")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("book".into(), "sahih-bukhari".into()),
            Matcher::Missing("apiKey".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"hadiths": []}"#)
        .create_async()
        .await;

    let source = source_for(&server, None);
    let response = source
        .fetch_by_citation(Collection::SahihBukhari, 2)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(response.hadiths.is_empty());
}
