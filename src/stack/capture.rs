//! Stack capture backends.

use core::panic::Location;

use super::{Frame, StackTrace};

/// Source of call-stack snapshots.
///
/// `origin` is the `#[track_caller]` location of the public call that created
/// the error; backends use it to find the first frame worth recording.
pub trait StackCapture {
    fn capture(&self, skip: usize, origin: &'static Location<'static>) -> StackTrace;
}

/// Records only the caller's source position, with no symbolization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallerOnly;

impl StackCapture for CallerOnly {
    #[inline]
    fn capture(&self, _skip: usize, origin: &'static Location<'static>) -> StackTrace {
        StackTrace::from_frames([Frame::from_location(origin)])
    }
}

/// Backend selected by the enabled features.
#[cfg(feature = "backtrace")]
pub type DefaultCapture = BacktraceCapture;
/// Backend selected by the enabled features.
#[cfg(not(feature = "backtrace"))]
pub type DefaultCapture = CallerOnly;

#[cfg(feature = "backtrace")]
pub use symbolized::BacktraceCapture;

#[cfg(feature = "backtrace")]
mod symbolized {
    use core::panic::Location;
    use std::path::Path;

    use smallvec::SmallVec;

    use super::StackCapture;
    use crate::stack::{Frame, StackTrace, MAX_DEPTH, UNKNOWN};
    use crate::types::alloc_type::{String, ToString, Vec};

    /// Headroom for the unwinder's and this crate's own frames above the caller.
    const RAW_CAPACITY: usize = MAX_DEPTH + 32;

    /// Crates whose frames never belong to the recorded trace.
    const INTERNAL_CRATES: [&str; 2] = ["backtrace::", "error_trail::"];

    /// Walks and symbolizes the stack with the `backtrace` crate.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct BacktraceCapture;

    impl StackCapture for BacktraceCapture {
        fn capture(&self, skip: usize, origin: &'static Location<'static>) -> StackTrace {
            let mut raw: SmallVec<[backtrace::Frame; RAW_CAPACITY]> = SmallVec::new();
            backtrace::trace(|frame| {
                raw.push(frame.clone());
                raw.len() < RAW_CAPACITY
            });

            let mut frames = Vec::with_capacity(raw.len());
            let mut origin_at = None;
            for frame in &raw {
                let before = frames.len();
                resolve_into(frame, &mut frames);
                if origin_at.is_none() {
                    origin_at = frames[before..]
                        .iter()
                        .position(|frame| is_origin(frame, origin))
                        .map(|offset| before + offset);
                }
                if origin_at.is_some_and(|at| frames.len() >= at + MAX_DEPTH) {
                    break;
                }
            }

            let start = origin_at.unwrap_or_else(|| fallback_start(&frames, skip));
            let trace = StackTrace::from_frames(frames.into_iter().skip(start));
            if trace.is_empty() {
                return StackTrace::from_frames([Frame::from_location(origin)]);
            }
            trace
        }
    }

    fn resolve_into(frame: &backtrace::Frame, out: &mut Vec<Frame>) {
        let before = out.len();
        backtrace::resolve_frame(frame, |symbol| {
            let file = symbol
                .filename()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| UNKNOWN.to_string());
            let function: String = match symbol.name() {
                Some(name) => format!("{:#}", name),
                None => UNKNOWN.to_string(),
            };
            out.push(Frame::new(file, symbol.lineno().unwrap_or(0), function));
        });
        if out.len() == before {
            out.push(Frame::unknown());
        }
    }

    fn is_origin(frame: &Frame, origin: &Location<'_>) -> bool {
        frame.line() == origin.line() && Path::new(frame.file()).ends_with(origin.file())
    }

    // Used when no frame carries the caller's line, as in builds without
    // line tables. Crate frames may be inlined away, so they are matched by
    // name rather than counted.
    fn fallback_start(frames: &[Frame], skip: usize) -> usize {
        let internal = frames
            .iter()
            .take_while(|frame| frame.is_unknown() || is_internal(frame.function()))
            .count();
        internal + skip
    }

    // `error_trail::..`, `<error_trail::.. as ..>::..` and
    // `<.. as error_trail::..>::..` all count as internal.
    fn is_internal(function: &str) -> bool {
        let path = function.strip_prefix('<').unwrap_or(function);
        INTERNAL_CRATES.iter().any(|krate| {
            path.starts_with(krate)
                || function.split(" as ").skip(1).any(|implemented| implemented.starts_with(krate))
        })
    }

}
