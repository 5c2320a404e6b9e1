use std::io;

use trickle::http::parser::parse;
use trickle::http::reader::READ_TIMEOUT;
use trickle::http::version::Version;

#[tokio::test]
async fn test_parse_curl_style_request() {
    let input: &[u8] =
        b"GET / HTTP/1.1\r\nHost: localhost:8080\r\nUser-Agent: curl/7.55.1\r\nAccept: */*\r\n\r\n";

    let (request, response) = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap();

    assert_eq!(request.method(), "GET");
    assert_eq!(request.path(), "/");
    assert_eq!(request.version(), Version::Http11);
    assert_eq!(request.headers().len(), 3);
    assert_eq!(request.header("host"), Some("localhost:8080"));
    assert_eq!(request.header("user_agent"), Some("curl/7.55.1"));
    assert_eq!(request.header("accept"), Some("*/*"));

    // The response writer starts fresh, version copied over
    assert_eq!(response.version(), Version::Http11);
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_parse_unrecognized_version_token() {
    let input: &[u8] = b"GET /x FOO\r\n\r\n";

    let (request, _) = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap();

    assert_eq!(request.method(), "GET");
    assert_eq!(request.path(), "/x");
    assert_eq!(request.version(), Version::Unknown);
    assert!(request.headers().is_empty());
}

#[tokio::test]
async fn test_parse_no_headers() {
    let input: &[u8] = b"GET / HTTP/1.0\r\n\r\n";

    let (request, _) = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap();

    assert_eq!(request.version(), Version::Http10);
    assert!(request.headers().is_empty());
}

#[tokio::test]
async fn test_parse_method_is_uppercased() {
    let input: &[u8] = b"get / HTTP/1.1\r\n\r\n";

    let (request, _) = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap();

    assert_eq!(request.method(), "GET");
}

#[tokio::test]
async fn test_parse_header_name_normalization() {
    // Dashes become underscores, case folds: all three spell user_agent
    for raw in ["User-Agent", "USER_AGENT", "user-agent"] {
        let input = format!("GET / HTTP/1.1\r\n{raw}: test\r\n\r\n");

        let (request, _) = parse(input.as_bytes(), Vec::new(), READ_TIMEOUT)
            .await
            .unwrap();

        assert_eq!(request.header("user_agent"), Some("test"), "raw: {raw}");
    }
}

#[tokio::test]
async fn test_parse_duplicate_header_last_wins() {
    let input: &[u8] = b"GET / HTTP/1.1\r\nX-Tag: first\r\nX-Tag: second\r\n\r\n";

    let (request, _) = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap();

    assert_eq!(request.headers().len(), 1);
    assert_eq!(request.header("x_tag"), Some("second"));
}

#[tokio::test]
async fn test_parse_header_value_left_trimmed() {
    let input: &[u8] = b"GET / HTTP/1.1\r\nHost:   value  \r\n\r\n";

    let (request, _) = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap();

    // Leading spaces stripped, trailing ones kept
    assert_eq!(request.header("host"), Some("value  "));
}

#[tokio::test]
async fn test_parse_carriage_returns_never_reach_values() {
    let input: &[u8] = b"GET /\rx HTTP/1.1\r\nHost: a\rb\r\n\r\n";

    let (request, _) = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap();

    assert_eq!(request.path(), "/x");
    assert_eq!(request.header("host"), Some("ab"));
}

#[tokio::test]
async fn test_parse_bare_line_feeds_accepted() {
    let input: &[u8] = b"GET / HTTP/1.1\nHost: localhost\n\n";

    let (request, _) = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap();

    assert_eq!(request.version(), Version::Http11);
    assert_eq!(request.header("host"), Some("localhost"));
}

#[tokio::test]
async fn test_parse_colonless_header_line_ends_section() {
    // A line without ':' trips the end-of-headers short-circuit; the rest of
    // the header block is left unread on the stream
    let input: &[u8] = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: x\r\n\r\n";

    let (request, _) = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap();

    assert!(request.headers().is_empty());
}

#[tokio::test]
async fn test_parse_eof_mid_headers_propagates() {
    let input: &[u8] = b"GET / HTTP/1.1\r\nHost: exam";

    let err = parse(input, Vec::new(), READ_TIMEOUT).await.unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}

#[tokio::test(start_paused = true)]
async fn test_parse_stalled_client_times_out() {
    use tokio::io::AsyncWriteExt;

    let (mut client, server) = tokio::io::duplex(64);
    client.write_all(b"GET / HTT").await.unwrap();

    let err = parse(server, Vec::new(), READ_TIMEOUT).await.unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    drop(client);
}
