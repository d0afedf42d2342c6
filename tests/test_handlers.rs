//! Tests for the file, echo and user-agent handlers

use std::path::{Path, PathBuf};

use wirehttp::http::request::{Method, RequestBuilder};
use wirehttp::http::response::StatusCode;
use wirehttp::router::handlers;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wirehttp-handlers-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_file_path_stays_under_base() {
    let base = Path::new("/srv/data");
    assert_eq!(handlers::file_path(base, "a.txt"), PathBuf::from("/srv/data/a.txt"));
    assert_eq!(handlers::file_path(base, "/etc/passwd"), PathBuf::from("/srv/data/etc/passwd"));
    assert_eq!(handlers::file_path(base, "x/y"), PathBuf::from("/srv/data/x/y"));
}

#[tokio::test]
async fn test_get_missing_file_is_not_found() {
    let dir = temp_dir("missing");

    let response = handlers::get_file(&dir, "nothing-here").await.unwrap();
    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.is_empty());
    assert!(response.headers.is_empty());
}

#[tokio::test]
async fn test_post_creates_directories_and_file() {
    let dir = temp_dir("create");

    let response = handlers::post_file(&dir, "a/b/c.txt", b"hello").await.unwrap();
    assert_eq!(response.status, StatusCode::Created);
    assert!(response.body.is_empty());
    assert_eq!(std::fs::read(dir.join("a/b/c.txt")).unwrap(), b"hello".to_vec());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_post_overwrites_whole_file() {
    let dir = temp_dir("overwrite");

    handlers::post_file(&dir, "f", b"a much longer first body").await.unwrap();
    handlers::post_file(&dir, "f", b"short").await.unwrap();

    assert_eq!(std::fs::read(dir.join("f")).unwrap(), b"short".to_vec());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_post_same_body_twice_is_idempotent() {
    let dir = temp_dir("idempotent");

    let first = handlers::post_file(&dir, "same", b"body").await.unwrap();
    let second = handlers::post_file(&dir, "same", b"body").await.unwrap();

    assert_eq!(first.status, StatusCode::Created);
    assert_eq!(second.status, StatusCode::Created);
    assert_eq!(std::fs::read(dir.join("same")).unwrap(), b"body".to_vec());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_get_returns_raw_bytes() {
    let dir = temp_dir("raw");
    let bytes = vec![0u8, 255, 10, 13, 0xc3];

    handlers::post_file(&dir, "blob", &bytes).await.unwrap();
    let response = handlers::get_file(&dir, "blob").await.unwrap();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(response.header("Content-Length"), Some("5"));
    assert_eq!(response.body, bytes);

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_get_directory_is_an_error() {
    let dir = temp_dir("is-dir");
    std::fs::create_dir_all(dir.join("sub")).unwrap();

    assert!(handlers::get_file(&dir, "sub").await.is_err());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_post_into_file_parent_is_an_error() {
    let dir = temp_dir("bad-parent");
    handlers::post_file(&dir, "plain", b"x").await.unwrap();

    // "plain" is a file, so it cannot act as a directory.
    assert!(handlers::post_file(&dir, "plain/child", b"y").await.is_err());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_echo_multibyte_length() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/echo/日本")
        .build()
        .unwrap();

    let response = handlers::echo(&req, "日本").unwrap();
    assert_eq!(response.header("Content-Length"), Some("6"));
}

#[test]
fn test_root_and_not_found_have_no_headers() {
    assert!(handlers::root().headers.is_empty());
    assert_eq!(handlers::not_found().status, StatusCode::NotFound);
}
