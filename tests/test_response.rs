use lanternd::http::mime::ContentType;
use lanternd::http::response::{http_date, ResponseHead, StatusCode};

fn head(status: StatusCode, content_type: ContentType) -> String {
    let head = ResponseHead {
        status,
        content_type,
        date: "Wed, 01 May 2024 12:00:00 GMT".to_string(),
        server: "test-server".to_string(),
    };
    String::from_utf8(head.to_bytes().to_vec()).unwrap()
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_head_ok_layout() {
    let text = head(StatusCode::Ok, ContentType::Png);
    assert_eq!(
        text,
        "HTTP/1.1 200 OK\r\n\
         Date: Wed, 01 May 2024 12:00:00 GMT\r\n\
         Server: test-server\r\n\
         Connection: close\r\n\
         Content-Type: image/png\r\n\
         \r\n"
    );
}

#[test]
fn test_head_not_found_status_line() {
    let text = head(StatusCode::NotFound, ContentType::Html);
    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(text.contains("Content-Type: text/html\r\n"));
}

#[test]
fn test_head_has_no_content_length() {
    let text = head(StatusCode::Ok, ContentType::Html);
    assert!(!text.contains("Content-Length"));
}

#[test]
fn test_head_ends_with_single_blank_line() {
    let text = head(StatusCode::Ok, ContentType::Gif);
    assert!(text.ends_with("\r\n\r\n"));
    assert!(!text.ends_with("\r\n\r\n\r\n"));
    assert_eq!(text.matches("\r\n\r\n").count(), 1);
}

#[test]
fn test_http_date_shape() {
    let date = http_date();
    assert!(date.ends_with(" GMT"));
    assert_eq!(date.len(), "Wed, 01 May 2024 12:00:00 GMT".len());
    assert_eq!(&date[3..5], ", ");
}

#[test]
fn test_new_head_stamps_date() {
    let head = ResponseHead::new(StatusCode::Ok, ContentType::Html, "srv");
    assert!(!head.date.is_empty());
    assert_eq!(head.server, "srv");
}
