use super::*;
use crate::net::types::EntryKind;

fn client(base: &str) -> ApiClient {
    ApiClient::new(&ClientConfig { api_base: base.to_owned(), ..ClientConfig::default() })
}

#[test]
fn url_prefixes_api_base() {
    assert_eq!(client("").url("/api/login"), "/api/login");
    assert_eq!(client("https://vault.local").url("/api/entries"), "https://vault.local/api/entries");
}

#[test]
fn client_carries_configured_timeout() {
    let cfg = ClientConfig { request_timeout: Duration::from_secs(7), ..ClientConfig::default() };
    assert_eq!(ApiClient::new(&cfg).timeout(), Duration::from_secs(7));
}

#[test]
fn entry_endpoint_formats_expected_path() {
    assert_eq!(entry_endpoint("abc123"), "/api/entries/abc123");
}

#[test]
fn create_request_posts_to_collection() {
    let request = SaveRequest::Create(Entry::blank(EntryKind::Login));
    assert!(!request.is_update());
    assert_eq!(request.route(), (HttpMethod::Post, "/api/entries".to_owned()));
}

#[test]
fn update_request_puts_to_entry() {
    let mut entry = Entry::blank(EntryKind::Server);
    entry.id = Some("e-9".to_owned());
    let request = SaveRequest::Update { id: "e-9".to_owned(), entry };
    assert!(request.is_update());
    assert_eq!(request.route(), (HttpMethod::Put, "/api/entries/e-9".to_owned()));
    assert_eq!(request.entry().kind(), Some(EntryKind::Server));
}

#[test]
fn parse_error_message_reads_error_field() {
    assert_eq!(parse_error_message(r#"{"error":"Invalid master password"}"#), Some("Invalid master password".to_owned()));
    assert_eq!(parse_error_message(r#"{"success":false}"#), None);
    assert_eq!(parse_error_message("<html>oops</html>"), None);
}

#[test]
fn ajax_header_marks_requests() {
    assert_eq!(AJAX_HEADER, "X-Requested-With");
    assert_eq!(AJAX_HEADER_VALUE, "XMLHttpRequest");
}
