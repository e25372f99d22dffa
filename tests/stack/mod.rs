use error_trail::advanced::{CallerOnly, MAX_DEPTH};
use error_trail::{Frame, StackTrace, TrailError};

#[test]
fn caller_only_records_exact_call_site() {
    let (trace, line) = (StackTrace::capture_with(&CallerOnly, 0), line!());

    assert_eq!(trace.len(), 1);
    let frame = trace.first().unwrap();
    assert_eq!(frame.file(), file!());
    assert_eq!(frame.line(), line);
    assert_eq!(frame.function(), "unknown");
}

#[test]
fn frame_display() {
    let frame = Frame::new("src/db.rs", 42, "app::db::connect");
    assert_eq!(frame.to_string(), "src/db.rs:42 (app::db::connect)");
}

#[test]
fn unknown_frame_placeholder() {
    let frame = Frame::unknown();

    assert!(frame.is_unknown());
    assert_eq!(frame.to_string(), "unknown:0 (unknown)");
    assert!(!Frame::new("unknown", 1, "unknown").is_unknown());
}

#[test]
fn from_frames_truncates_to_max_depth() {
    let frames = (0..MAX_DEPTH as u32 + 10).map(|i| Frame::new("src/deep.rs", i, "deep"));
    let trace = StackTrace::from_frames(frames);

    assert_eq!(trace.len(), MAX_DEPTH);
    assert_eq!(trace.frames().last().map(Frame::line), Some(MAX_DEPTH as u32 - 1));
}

#[test]
fn stack_trace_display_is_one_frame_per_line() {
    let trace = StackTrace::from_frames([
        Frame::new("src/a.rs", 1, "a"),
        Frame::new("src/b.rs", 2, "b"),
    ]);

    assert_eq!(trace.to_string(), "src/a.rs:1 (a)\nsrc/b.rs:2 (b)");
    assert_eq!((&trace).into_iter().count(), 2);
}

#[test]
fn empty_trace() {
    let trace = StackTrace::default();

    assert!(trace.is_empty());
    assert!(trace.first().is_none());
    assert_eq!(trace.to_string(), "");
}

#[test]
fn node_stack_is_bounded_and_non_empty() {
    let err = TrailError::new(100101, "connect failed");

    assert!(!err.stack().is_empty());
    assert!(err.stack().len() <= MAX_DEPTH);
}

#[cfg(not(feature = "backtrace"))]
#[test]
fn node_stack_starts_at_call_site_without_symbols() {
    let (err, line) = (TrailError::new(100101, "connect failed"), line!());

    let frame = err.stack().first().unwrap();
    assert_eq!(frame.file(), file!());
    assert_eq!(frame.line(), line);
}

#[cfg(feature = "backtrace")]
#[inline(never)]
fn connect_to_primary() -> TrailError {
    TrailError::new(100101, "connect failed")
}

#[cfg(feature = "backtrace")]
#[test]
fn node_stack_starts_at_calling_function() {
    let err = connect_to_primary();
    let first = err.stack().first().unwrap();

    assert!(
        first.function().contains("connect_to_primary"),
        "first frame was {}",
        first
    );
}

#[cfg(feature = "backtrace")]
#[test]
fn every_entry_point_starts_at_its_caller() {
    use error_trail::traits::{ResultExt, TrailResultExt};
    use error_trail::{erased, trail};

    #[inline(never)]
    fn build_all() -> Vec<TrailError> {
        let root = trail!(100101, "connect failed");
        let spawned = erased::spawn(Some(TrailError::new(100101, "a")), 100301, "b").unwrap();
        let wrapped = erased::wrap(Some(std::io::Error::other("disk full")), 100401).unwrap();
        let trailed = Err::<(), _>(std::io::Error::other("disk full")).trail(100401).unwrap_err();
        let chained = Err::<(), _>(TrailError::new(100101, "a"))
            .spawn_err(100301, "b")
            .unwrap_err();
        vec![root, spawned, wrapped, trailed, chained]
    }

    for err in build_all() {
        let first = err.stack().first().unwrap();
        assert!(first.function().contains("build_all"), "first frame was {}", first);
    }
}

#[cfg(feature = "backtrace")]
#[test]
fn backtrace_capture_skips_own_frames() {
    let err = TrailError::new(100101, "connect failed");

    assert!(err
        .stack()
        .iter()
        .all(|frame| !frame.function().starts_with("backtrace::")));
}

#[cfg(feature = "serde")]
#[test]
fn frame_serializes_fields_in_order() {
    let frame = Frame::new("src/db.rs", 42, "app::db::connect");
    let json = serde_json::to_string(&frame).unwrap();

    assert_eq!(json, r#"{"file":"src/db.rs","line":42,"function":"app::db::connect"}"#);
}
