use error_trail::{spawn, trail, with_message, TrailError};
use std::error::Error;

#[test]
fn trail_formats_underlying_text() {
    let port = 5432;
    let err = trail!(100101, "connect to localhost:{} failed", port);

    assert_eq!(err.code(), 100101);
    assert_eq!(err.underlying().to_string(), "connect to localhost:5432 failed");
    assert_eq!(err.message(), "");
}

#[test]
fn spawn_links_cause_and_formats_text() {
    let inner = trail!(100101, "connect failed");
    let outer = spawn!(inner, 100301, "gave up after {} attempts", 3);

    assert_eq!(outer.to_string(), "gave up after 3 attempts");
    assert_eq!(outer.cause().map(TrailError::code), Some(100101));
}

#[test]
fn with_message_on_place_appends() {
    let mut err = trail!(100101, "connect failed");
    with_message!(&mut err, "host {}", "db-1");
    with_message!(&mut err, "retry {}", 2);

    assert_eq!(err.message(), "host db-1: retry 2");
    assert_eq!(err.to_string(), "host db-1: retry 2");
}

#[test]
fn with_message_on_none_is_noop() {
    let mut missing: Option<TrailError> = None;
    with_message!(missing.as_mut(), "never recorded {}", 1);
    assert!(missing.is_none());
}

#[test]
fn with_message_on_some_appends() {
    let mut present = Some(trail!(100101, "connect failed"));
    with_message!(present.as_mut(), "Database error");

    assert_eq!(present.map(|e| e.to_string()).as_deref(), Some("Database error"));
}

#[test]
fn with_message_on_boxed_trail_error() {
    let mut boxed: Box<dyn Error + Send + Sync> = Box::new(trail!(100101, "connect failed"));
    with_message!(&mut *boxed, "Database error");

    assert_eq!(boxed.to_string(), "Database error");
}

#[test]
#[should_panic(expected = "with_message: expected a TrailError")]
fn with_message_on_foreign_error_panics() {
    let mut io_err = std::io::Error::other("disk full");
    with_message!(&mut io_err, "never appended");
}

#[test]
fn macros_capture_stack_at_invocation() {
    let inner = trail!(100101, "connect failed");
    let outer = spawn!(inner, 100301, "error change err_code");

    assert!(!outer.stack().is_empty());
    assert!(!outer.cause().unwrap().stack().is_empty());
}
