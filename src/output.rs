//! The error output sink.
//!
//! Diff text for failed equality checks and printed faults go through
//! [`write_error_line`]. Lines go to standard error unless the current thread
//! is inside [`capture_error_output`], in which case they are collected and
//! returned to the caller.
//!
//! # Example
//!
//! ```
//! use require::output::{capture_error_output, write_error_line};
//!
//! let ((), written) = capture_error_output(|| write_error_line("hello"));
//! assert_eq!(written, "hello\n");
//! ```

use std::cell::RefCell;

thread_local! {
    static CAPTURE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Write `text` and a trailing newline to the error output.
pub fn write_error_line(text: &str) {
    let captured = CAPTURE.with(|capture| {
        let mut capture = capture.borrow_mut();
        match capture.as_mut() {
            Some(buffer) => {
                buffer.push_str(text);
                buffer.push('\n');
                true
            }
            None => false,
        }
    });
    if !captured {
        eprintln!("{text}");
    }
}

/// Run `f` and collect everything it writes to the error output.
///
/// Captures nest: an inner capture sees only its own lines, and the outer
/// capture resumes when it ends, including when `f` panics.
pub fn capture_error_output<R>(f: impl FnOnce() -> R) -> (R, String) {
    let guard = CaptureGuard::start();
    let result = f();
    (result, guard.finish())
}

struct CaptureGuard {
    previous: Option<Option<String>>,
}

impl CaptureGuard {
    fn start() -> Self {
        let previous = CAPTURE.with(|capture| capture.replace(Some(String::new())));
        Self {
            previous: Some(previous),
        }
    }

    fn finish(mut self) -> String {
        let previous = self.previous.take().unwrap_or_default();
        CAPTURE
            .with(|capture| capture.replace(previous))
            .unwrap_or_default()
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            CAPTURE.with(|capture| capture.replace(previous));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_lines() {
        let ((), written) = capture_error_output(|| {
            write_error_line("first");
            write_error_line("second");
        });
        assert_eq!(written, "first\nsecond\n");
    }

    #[test]
    fn returns_closure_result() {
        let (value, written) = capture_error_output(|| 42);
        assert_eq!(value, 42);
        assert!(written.is_empty());
    }

    #[test]
    fn nested_captures_are_separate() {
        let (inner, outer) = capture_error_output(|| {
            write_error_line("outer before");
            let ((), inner) = capture_error_output(|| write_error_line("inner"));
            write_error_line("outer after");
            inner
        });
        assert_eq!(inner, "inner\n");
        assert_eq!(outer, "outer before\nouter after\n");
    }

    #[test]
    fn capture_restored_after_panic() {
        let ((), outer) = capture_error_output(|| {
            let result = std::panic::catch_unwind(|| {
                capture_error_output(|| {
                    panic!("inside capture");
                })
            });
            assert!(result.is_err());
            write_error_line("still captured");
        });
        assert_eq!(outer, "still captured\n");
    }
}
