use error_trail::{erased, AnyError, TrailError};
use std::error::Error;
use std::io;

#[test]
fn wrap_none_is_none() {
    assert!(erased::wrap(None::<io::Error>, 100201).is_none());
}

#[test]
fn wrap_some_produces_node_without_cause() {
    let node = erased::wrap(Some(io::Error::other("disk full")), 100401).unwrap();

    assert_eq!(node.code(), 100401);
    assert_eq!(node.to_string(), "disk full");
    assert!(node.cause().is_none());
}

#[test]
fn spawn_none_is_none() {
    assert!(erased::spawn(None::<TrailError>, 100301, "ignored").is_none());
}

#[test]
fn spawn_accepts_boxed_trail_error() {
    let boxed: AnyError = Box::new(TrailError::new(100101, "connect failed"));
    let outer = erased::spawn(Some(boxed), 100301, "error change err_code").unwrap();

    assert_eq!(outer.code(), 100301);
    assert_eq!(outer.cause().map(TrailError::code), Some(100101));
}

#[test]
#[should_panic(expected = "spawn: expected a TrailError")]
fn spawn_panics_on_foreign_error() {
    let _ = erased::spawn(Some(io::Error::other("disk full")), 100301, "never built");
}

#[test]
fn with_message_none_is_noop() {
    erased::with_message(None::<&mut TrailError>, "x");
}

#[test]
fn with_message_appends_through_trait_object() {
    let mut boxed: AnyError = Box::new(TrailError::new(100101, "connect failed"));
    erased::with_message(Some(boxed.as_mut()), "Database error");
    erased::with_message(Some(boxed.as_mut()), "retry 3");

    let node = boxed.downcast_ref::<TrailError>().unwrap();
    assert_eq!(node.message(), "Database error: retry 3");
}

#[test]
#[should_panic(expected = "with_message: expected a TrailError")]
fn with_message_panics_on_foreign_error() {
    let mut io_err = io::Error::other("disk full");
    erased::with_message(Some(&mut io_err), "never appended");
}

#[test]
#[should_panic(expected = "with_message: expected a TrailError")]
fn with_message_panics_on_foreign_trait_object() {
    let mut boxed: Box<dyn Error + Send + Sync> = Box::new(io::Error::other("disk full"));
    erased::with_message(Some(boxed.as_mut()), "never appended");
}

#[test]
fn unwrap_returns_one_level() {
    let outer = TrailError::new(10, "a").spawn(20, "b").spawn(30, "c");

    let next = erased::unwrap(&outer).unwrap();
    assert_eq!(next.downcast_ref::<TrailError>().map(TrailError::code), Some(20));
}

#[test]
fn unwrap_ignores_wrapped_foreign_error() {
    let node = TrailError::wrap(io::Error::other("disk full"), 100401);
    assert!(erased::unwrap(&node).is_none());
}

#[test]
fn cause_stops_at_last_node_with_a_cause() {
    let c = TrailError::new(10, "c");
    let b = c.spawn(20, "b");
    let a = b.spawn(30, "a");

    let found = erased::cause(&a);
    assert_eq!(found.downcast_ref::<TrailError>().map(TrailError::code), Some(20));
}

#[test]
fn cause_of_two_levels_is_the_head() {
    let outer = TrailError::new(10, "inner").spawn(20, "outer");

    let found = erased::cause(&outer);
    assert_eq!(found.downcast_ref::<TrailError>().map(TrailError::code), Some(20));
}

#[test]
fn cause_of_root_is_itself() {
    let root = TrailError::new(10, "root");
    let found = erased::cause(&root);

    assert_eq!(found.downcast_ref::<TrailError>().map(TrailError::code), Some(10));
}

#[test]
fn cause_of_foreign_error_is_itself() {
    let io_err = io::Error::other("disk full");
    assert_eq!(erased::cause(&io_err).to_string(), "disk full");
}

#[test]
#[should_panic(expected = "with_message: TrailError is shared")]
fn with_message_panics_on_shared_node() {
    let mut node = std::sync::Arc::new(TrailError::new(100101, "connect failed"));
    let _other = std::sync::Arc::clone(&node);
    erased::with_message(Some(&mut node), "never appended");
}
