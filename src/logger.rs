//! Severity-routed logger and elapsed-time measurement.

use std::io::{self, Write};
use std::time::Instant;

use crate::format::{Arg, Formatter};
use crate::severity::Severity;

/// Single-slot elapsed-time measurement.
///
/// `start` from either state discards any unfinished run; nested timing
/// collapses to the most recent start.
#[derive(Debug, Clone, Copy)]
enum Timer {
    Idle,
    Running(Instant),
}

impl Timer {
    fn start(&mut self) {
        *self = Timer::Running(Instant::now());
    }

    /// Elapsed nanoseconds since the matching start, or 0 when idle.
    fn stop(&mut self) -> u128 {
        match *self {
            Timer::Running(started) => {
                *self = Timer::Idle;
                started.elapsed().as_nanos()
            }
            Timer::Idle => 0,
        }
    }
}

/// Per-severity suppression flags passed at construction.
///
/// A suppressed severity makes logging at that level a complete no-op:
/// no formatting, no write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Suppression {
    pub debug: bool,
    pub info: bool,
    pub error: bool,
}

/// A severity-based console logger with per-severity styling and
/// output routing.
///
/// Each severity owns a [`Formatter`] and an optional output sink;
/// severities without a sink write to the default output (stdout
/// unless replaced). A `Logger` is single-threaded state: sharing one
/// across threads requires external mutual exclusion.
///
/// # Example
///
/// ```rust
/// use tintlog::{args, Logger};
///
/// let mut log = Logger::new(true);
/// log.info("starting up");
/// log.timer_start();
/// // ... measured work ...
/// let elapsed = log.timer_stop();
/// log.debug_with("startup took %vns", &args![elapsed]);
/// ```
pub struct Logger {
    formatters: [Formatter; 3],
    outputs: [Option<Box<dyn Write>>; 3],
    default_output: Box<dyn Write>,
    suppressed: [bool; 3],
    timer: Timer,
    write_error_hook: Option<Box<dyn FnMut(io::Error)>>,
}

impl Logger {
    /// Creates a logger writing to stdout.
    ///
    /// Debug messages are suppressed unless `allow_debug` is true;
    /// Info and Error are always emitted. Body styles are bright-black
    /// for Debug, bright-yellow for Info and bright-red for Error,
    /// each with a bold severity-labeled prefix in the same color.
    pub fn new(allow_debug: bool) -> Self {
        Self::with_suppression(Suppression {
            debug: !allow_debug,
            info: false,
            error: false,
        })
    }

    /// Creates a logger with explicit per-severity suppression.
    pub fn with_suppression(suppress: Suppression) -> Self {
        let mut debug = Formatter::new(["fghiblack"]);
        let mut info = Formatter::new(["fghiyellow"]);
        let mut error = Formatter::new(["fghired"]);

        debug.set_prefix(["bold", "fghiblack", "Debug: "]);
        info.set_prefix(["bold", "fghiyellow", "Info:  "]);
        error.set_prefix(["bold", "fghired", "Error: "]);

        Self {
            formatters: [debug, info, error],
            outputs: [None, None, None],
            default_output: Box::new(io::stdout()),
            suppressed: [suppress.debug, suppress.info, suppress.error],
            timer: Timer::Idle,
            write_error_hook: None,
        }
    }

    /// Returns the formatter for a severity, for prefix/suffix
    /// customization. Every call returns the same underlying instance.
    pub fn formatter(&mut self, severity: Severity) -> &mut Formatter {
        &mut self.formatters[severity.idx()]
    }

    /// Routes a severity to its own sink instead of the default output.
    pub fn set_output(&mut self, severity: Severity, sink: impl Write + 'static) {
        self.outputs[severity.idx()] = Some(Box::new(sink));
    }

    /// Replaces the fallback sink used by severities without one.
    pub fn set_default_output(&mut self, sink: impl Write + 'static) {
        self.default_output = Box::new(sink);
    }

    /// Installs an observer for sink write failures.
    ///
    /// Without one, write errors are discarded and logging never
    /// reports failure to the caller.
    pub fn on_write_error(&mut self, hook: impl FnMut(io::Error) + 'static) {
        self.write_error_hook = Some(Box::new(hook));
    }

    /// Logs a plain message at the given severity.
    pub fn log(&mut self, severity: Severity, message: &str) {
        self.emit(severity, message, &[]);
    }

    /// Logs a message with positional interpolation arguments.
    pub fn log_with(&mut self, severity: Severity, message: &str, args: &[Arg]) {
        self.emit(severity, message, args);
    }

    /// Logs a debug message.
    pub fn debug(&mut self, message: &str) {
        self.emit(Severity::Debug, message, &[]);
    }

    /// Logs a debug message with interpolation arguments.
    pub fn debug_with(&mut self, message: &str, args: &[Arg]) {
        self.emit(Severity::Debug, message, args);
    }

    /// Logs an info message.
    pub fn info(&mut self, message: &str) {
        self.emit(Severity::Info, message, &[]);
    }

    /// Logs an info message with interpolation arguments.
    pub fn info_with(&mut self, message: &str, args: &[Arg]) {
        self.emit(Severity::Info, message, args);
    }

    /// Logs an error message.
    pub fn error(&mut self, message: &str) {
        self.emit(Severity::Error, message, &[]);
    }

    /// Logs an error message with interpolation arguments.
    pub fn error_with(&mut self, message: &str, args: &[Arg]) {
        self.emit(Severity::Error, message, args);
    }

    /// Starts the elapsed-time measurement, discarding any unfinished
    /// one.
    pub fn timer_start(&mut self) {
        self.timer.start();
    }

    /// Stops the measurement and returns the elapsed nanoseconds, or 0
    /// if no measurement was running.
    pub fn timer_stop(&mut self) -> u128 {
        self.timer.stop()
    }

    fn emit(&mut self, severity: Severity, message: &str, args: &[Arg]) {
        let i = severity.idx();

        if self.suppressed[i] {
            return;
        }

        let line = self.formatters[i].format(message, args);
        let sink = match self.outputs[i].as_mut() {
            Some(sink) => sink,
            None => &mut self.default_output,
        };

        if let Err(err) = sink.write_all(line.as_bytes()) {
            if let Some(hook) = self.write_error_hook.as_mut() {
                hook(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink that records everything written to it.
    #[derive(Clone, Default)]
    struct Capture(Rc<RefCell<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }

        fn is_empty(&self) -> bool {
            self.0.borrow().is_empty()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Sink whose writes always fail.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logger(allow_debug: bool) -> (Logger, Capture) {
        let capture = Capture::default();
        let mut log = Logger::new(allow_debug);
        log.set_default_output(capture.clone());
        (log, capture)
    }

    #[test]
    fn test_suppressed_severity_writes_nothing() {
        let (mut log, capture) = captured_logger(false);
        log.debug("invisible");
        log.debug_with("also %s", &args!["invisible"]);
        assert!(capture.is_empty());
    }

    #[test]
    fn test_suppression_config_covers_all_severities() {
        let capture = Capture::default();
        let mut log = Logger::with_suppression(Suppression {
            debug: true,
            info: true,
            error: true,
        });
        log.set_default_output(capture.clone());

        log.debug("a");
        log.info("b");
        log.error("c");
        assert!(capture.is_empty());
    }

    #[test]
    fn test_unsuppressed_severities_write_one_line() {
        console::set_colors_enabled(true);
        let (mut log, capture) = captured_logger(false);

        log.info("y");
        log.error("z");

        let out = capture.contents();
        let lines: Vec<&str> = out.split_terminator('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Info:"));
        assert!(lines[0].contains('y'));
        assert!(lines[1].contains("Error:"));
        assert!(lines[1].contains('z'));
    }

    #[test]
    fn test_debug_allowed_writes() {
        let (mut log, capture) = captured_logger(true);
        log.debug("visible");
        assert!(capture.contents().contains("visible"));
    }

    #[test]
    fn test_per_severity_output_routing() {
        let errors = Capture::default();
        let (mut log, fallback) = captured_logger(true);
        log.set_output(Severity::Error, errors.clone());

        log.error("routed");
        log.info("fell back");

        assert!(errors.contents().contains("routed"));
        assert!(!fallback.contents().contains("routed"));
        assert!(fallback.contents().contains("fell back"));
    }

    #[test]
    fn test_log_with_interpolates() {
        let (mut log, capture) = captured_logger(true);
        log.log_with(Severity::Info, "%s=%d", &args!["answer", 42]);
        assert!(capture.contents().contains("answer=42"));
    }

    #[test]
    fn test_formatter_handle_aliases_same_instance() {
        let (mut log, capture) = captured_logger(true);

        log.formatter(Severity::Debug).set_suffix(["<<"]);
        // A second handle sees the mutation made through the first.
        log.formatter(Severity::Debug).set_prefix([">>"]);

        log.debug("m");
        let out = capture.contents();
        assert!(out.starts_with(">>"));
        assert!(out.contains("<<"));
    }

    #[test]
    fn test_write_errors_are_silent_by_default() {
        let mut log = Logger::new(true);
        log.set_default_output(Broken);
        log.error("dropped");
    }

    #[test]
    fn test_write_error_hook_observes_failures() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut log = Logger::new(true);
        log.set_default_output(Broken);
        log.on_write_error(move |err| sink.borrow_mut().push(err.kind()));

        log.error("dropped");
        assert_eq!(*seen.borrow(), vec![io::ErrorKind::BrokenPipe]);
    }

    #[test]
    fn test_timer_stop_without_start_is_zero() {
        let mut log = Logger::new(true);
        assert_eq!(log.timer_stop(), 0);
    }

    #[test]
    fn test_timer_double_stop_is_zero() {
        let mut log = Logger::new(true);
        log.timer_start();
        log.timer_stop();
        assert_eq!(log.timer_stop(), 0);
    }

    #[test]
    fn test_timer_measures_elapsed_time() {
        let mut log = Logger::new(true);
        log.timer_start();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let elapsed = log.timer_stop();
        assert!(elapsed >= 5_000_000);
    }

    #[test]
    fn test_timer_restart_discards_first_start() {
        let mut log = Logger::new(true);
        log.timer_start();
        std::thread::sleep(std::time::Duration::from_millis(10));
        log.timer_start();
        let elapsed = log.timer_stop();
        // Measured from the second start only.
        assert!(elapsed < 10_000_000);
    }
}
