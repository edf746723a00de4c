// src/internal/logger/logger.rs

use chrono::Local;
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::format::{render_record, SpaceJoined};
use crate::internal::level::Level;
use crate::internal::sink::Sink;
use crate::internal::stack::{
    capture_stack, short_function_name, BacktraceInspector, StackInspector,
};

/// Frames from `StackInspector::caller_name` up to the code that called a
/// trace helper: the helper itself, then its caller.
const CALLER_FRAMES: usize = 2;

/// One severity channel.
///
/// A logger is enabled exactly when it holds a sink. Every print operation
/// checks that first and does nothing on a disabled channel; write failures
/// on the sink are dropped.
pub struct Logger {
    level: Level,
    sink: RwLock<Option<Sink>>,
    inspector: Arc<dyn StackInspector>,
    qualified_names: AtomicBool,
}

impl Logger {
    /// A disabled channel using the backtrace inspector.
    pub fn new(level: Level) -> Self {
        Self::with_inspector(level, Arc::new(BacktraceInspector::new()))
    }

    pub fn with_inspector(level: Level, inspector: Arc<dyn StackInspector>) -> Self {
        Self {
            level,
            sink: RwLock::new(None),
            inspector,
            qualified_names: AtomicBool::new(false),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// The current sink, if any.
    pub fn sink(&self) -> Option<Sink> {
        self.sink.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replace the destination. `None` disables the channel; a sink enables
    /// it and drops whatever sink was there before.
    pub fn set_sink(&self, sink: Option<Sink>) {
        let mut slot = self.sink.write().unwrap_or_else(PoisonError::into_inner);
        match &sink {
            Some(new) => tracing::debug!(channel = %self.level, sink = %new.kind(), "channel enabled"),
            None => tracing::debug!(channel = %self.level, "channel disabled"),
        }
        *slot = sink;
    }

    /// Print the caller's full module path in trace helpers instead of the
    /// bare function name.
    pub fn set_qualified_names(&self, qualified: bool) {
        self.qualified_names.store(qualified, Ordering::Relaxed);
    }

    /// Emit `=> <caller>` with a name resolved at compile time, usually
    /// through [`log_enter!`](crate::log_enter).
    #[track_caller]
    pub fn enter_named(&self, caller: &str) {
        let Some(sink) = self.sink() else { return };
        self.mark(&sink, Location::caller(), "=>", caller, None);
    }

    /// Emit `=> <caller> (<description>)`, see [`log_enter_anon!`](crate::log_enter_anon).
    #[track_caller]
    pub fn enter_named_anon(&self, caller: &str, description: &str) {
        let Some(sink) = self.sink() else { return };
        self.mark(&sink, Location::caller(), "=>", caller, Some(description));
    }

    /// Emit `<= <caller>`, see [`log_leave!`](crate::log_leave).
    #[track_caller]
    pub fn leave_named(&self, caller: &str) {
        let Some(sink) = self.sink() else { return };
        self.mark(&sink, Location::caller(), "<=", caller, None);
    }

    /// Emit `<= <caller> (<description>)`, see [`log_leave_anon!`](crate::log_leave_anon).
    #[track_caller]
    pub fn leave_named_anon(&self, caller: &str, description: &str) {
        let Some(sink) = self.sink() else { return };
        self.mark(&sink, Location::caller(), "<=", caller, Some(description));
    }

    /// Emit `=> <caller>`, naming the caller from the runtime stack.
    ///
    /// Best effort: optimized builds inline and tail-call frames away, so the
    /// name can be wrong or [`UNKNOWN_CALLER`](crate::UNKNOWN_CALLER). Prefer
    /// [`log_enter!`](crate::log_enter).
    #[track_caller]
    pub fn print_enter(&self) {
        let Some(sink) = self.sink() else { return };
        let caller = self.inspector.caller_name(CALLER_FRAMES);
        self.mark(&sink, Location::caller(), "=>", &caller, None);
    }

    /// Emit `=> <caller> (<description>)`; same caveats as [`Self::print_enter`].
    #[track_caller]
    pub fn print_enter_anon(&self, description: &str) {
        let Some(sink) = self.sink() else { return };
        let caller = self.inspector.caller_name(CALLER_FRAMES);
        self.mark(&sink, Location::caller(), "=>", &caller, Some(description));
    }

    /// Emit `<= <caller>`; same caveats as [`Self::print_enter`].
    #[track_caller]
    pub fn print_leave(&self) {
        let Some(sink) = self.sink() else { return };
        let caller = self.inspector.caller_name(CALLER_FRAMES);
        self.mark(&sink, Location::caller(), "<=", &caller, None);
    }

    /// Emit `<= <caller> (<description>)`; same caveats as [`Self::print_enter`].
    #[track_caller]
    pub fn print_leave_anon(&self, description: &str) {
        let Some(sink) = self.sink() else { return };
        let caller = self.inspector.caller_name(CALLER_FRAMES);
        self.mark(&sink, Location::caller(), "<=", &caller, Some(description));
    }

    /// Emit the values separated by single spaces.
    #[track_caller]
    pub fn println(&self, values: &[&dyn fmt::Display]) {
        let Some(sink) = self.sink() else { return };
        self.emit(&sink, Location::caller(), format_args!("{}", SpaceJoined(values)));
    }

    /// Emit preformatted arguments, usually built with `format_args!`.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let Some(sink) = self.sink() else { return };
        self.emit(&sink, Location::caller(), args);
    }

    /// Emit a dump of the current call stack; with `all_threads`, the other
    /// live threads of the process are listed as well.
    #[track_caller]
    pub fn print_stack(&self, all_threads: bool) {
        let Some(sink) = self.sink() else { return };
        let dump = capture_stack(self.inspector.as_ref(), all_threads);
        self.emit(
            &sink,
            Location::caller(),
            format_args!("Stack (all threads: {})\n{}", all_threads, dump.text()),
        );
    }

    fn mark(
        &self,
        sink: &Sink,
        location: &Location<'_>,
        arrow: &str,
        caller: &str,
        description: Option<&str>,
    ) {
        let name = self.display_name(caller);
        match description {
            Some(description) => {
                self.emit(sink, location, format_args!("{arrow} {name} ({description})"))
            }
            None => self.emit(sink, location, format_args!("{arrow} {name}")),
        }
    }

    fn display_name<'a>(&self, caller: &'a str) -> &'a str {
        if self.qualified_names.load(Ordering::Relaxed) {
            caller
        } else {
            short_function_name(caller)
        }
    }

    fn emit(&self, sink: &Sink, location: &Location<'_>, message: fmt::Arguments<'_>) {
        let record = render_record(self.level, location, &Local::now(), message);
        if let Err(err) = sink.write_record(&record) {
            tracing::warn!(channel = %self.level, sink = %sink.kind(), error = %err, "dropped log record");
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("sink", &self.sink())
            .field("qualified_names", &self.qualified_names.load(Ordering::Relaxed))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::sink::MemorySink;
    use crate::internal::stack::mock::MockInspector;

    fn mocked(level: Level, caller: &str) -> (Logger, MemorySink, MockInspector) {
        let inspector = MockInspector::new(caller).with_stack("frame 0\nframe 1\n");
        let logger = Logger::with_inspector(level, Arc::new(inspector.clone()));
        let memory = MemorySink::new();
        logger.set_sink(Some(memory.sink()));
        (logger, memory, inspector)
    }

    #[test]
    fn new_loggers_are_disabled() {
        let logger = Logger::new(Level::Info);
        assert!(!logger.is_enabled());
        assert!(logger.sink().is_none());
    }

    #[test]
    fn enabled_tracks_the_sink() {
        let (logger, _memory, _) = mocked(Level::Debug, "app::run");
        assert!(logger.is_enabled());
        logger.set_sink(None);
        assert!(!logger.is_enabled());
    }

    #[test]
    fn trace_helpers_ask_two_frames_up() {
        let (logger, memory, inspector) = mocked(Level::Trace, "app::worker::do_work");
        logger.print_enter();
        logger.print_leave_anon("ok");

        assert_eq!(inspector.frame_requests(), vec![CALLER_FRAMES, CALLER_FRAMES]);
        let lines = memory.lines();
        assert!(lines[0].ends_with(": => do_work"), "{}", lines[0]);
        assert!(lines[1].ends_with(": <= do_work (ok)"), "{}", lines[1]);
    }

    #[test]
    fn qualified_names_keep_the_module_path() {
        let (logger, memory, _) = mocked(Level::Trace, "app::worker::do_work");
        logger.set_qualified_names(true);
        logger.print_enter_anon("batch 2");
        assert!(memory.contents().ends_with(": => app::worker::do_work (batch 2)\n"));
    }

    #[test]
    fn disabled_loggers_skip_introspection() {
        let (logger, memory, inspector) = mocked(Level::Trace, "app::run");
        logger.set_sink(None);

        logger.print_enter();
        logger.print_stack(true);
        logger.println(&[&"x"]);

        assert!(memory.is_empty());
        assert!(inspector.frame_requests().is_empty());
        assert!(inspector.buffer_sizes().is_empty());
    }

    #[test]
    fn stack_dump_has_a_header() {
        let (logger, memory, inspector) = mocked(Level::Error, "app::run");
        logger.print_stack(true);

        let contents = memory.contents();
        assert!(contents.contains(": Stack (all threads: true)\nframe 0\nframe 1\n"));
        assert_eq!(inspector.all_threads_requests(), vec![true]);
        assert_eq!(memory.write_count(), 1);
    }

    #[test]
    fn records_point_at_the_call_site() {
        let (logger, memory, _) = mocked(Level::Warning, "app::run");
        logger.printf(format_args!("disk at {}%", 91));
        let line = line!() - 1;

        let expected = format!("logger.rs:{line}: disk at 91%\n");
        assert!(memory.contents().starts_with("[WRN] "));
        assert!(memory.contents().ends_with(&expected), "{}", memory.contents());
    }

    #[test]
    fn named_helpers_skip_the_inspector() {
        let (logger, memory, inspector) = mocked(Level::Trace, "app::elsewhere");
        logger.enter_named("app::worker::do_work");
        logger.leave_named_anon("app::worker::do_work::{{closure}}", "batch 2");

        assert!(inspector.frame_requests().is_empty());
        let lines = memory.lines();
        assert!(lines[0].ends_with(": => do_work"), "{}", lines[0]);
        assert!(lines[1].ends_with(": <= do_work (batch 2)"), "{}", lines[1]);
    }

    struct FailingWriter;

    impl std::io::Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_failures_are_dropped() {
        let (logger, _memory, inspector) = mocked(Level::Error, "app::run");
        logger.set_sink(Some(Sink::new(FailingWriter)));

        logger.println(&[&"disk", &"full"]);
        logger.printf(format_args!("code {}", 28));
        logger.print_enter();
        logger.enter_named("app::run");
        logger.print_stack(false);

        assert!(logger.is_enabled());
        assert_eq!(inspector.frame_requests(), vec![CALLER_FRAMES]);
        assert_eq!(inspector.all_threads_requests(), vec![false]);
    }

    #[test]
    fn debug_output_names_the_sink() {
        let (logger, _memory, _) = mocked(Level::Info, "app::run");
        let debug = format!("{:?}", logger);
        assert!(debug.contains("Info"));
        assert!(debug.contains("Memory"));
    }
}
