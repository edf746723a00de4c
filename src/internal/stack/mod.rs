// src/internal/stack/mod.rs

pub mod backtrace;
pub mod capture;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use self::backtrace::BacktraceInspector;
pub use capture::{capture_stack, StackDump, INITIAL_STACK_BUFFER, MAX_STACK_BUFFER};

/// Name reported when a frame cannot be symbolized.
pub const UNKNOWN_CALLER: &str = "<unknown>";

/// Call-stack introspection used by the trace helpers and stack dumps.
///
/// Results are diagnostic metadata only. Implementations must never fail:
/// an unresolvable frame yields [`UNKNOWN_CALLER`].
pub trait StackInspector: Send + Sync {
    /// Fully qualified name of the function `frames_up` frames above this
    /// call. Frame 0 is `caller_name` itself, frame 1 its caller, and so on.
    fn caller_name(&self, frames_up: usize) -> String;

    /// Render the current stack (and other live threads when `all_threads`
    /// is set) into `buf`, returning the number of bytes written.
    ///
    /// A return value equal to `buf.len()` means the text may not have fit.
    fn write_stack(&self, buf: &mut [u8], all_threads: bool) -> usize;
}

/// Strip the module path, closure markers and trailing generic arguments
/// from a demangled symbol.
///
/// `app::worker::do_work::{{closure}}` becomes `do_work`.
pub fn short_function_name(qualified: &str) -> &str {
    let mut name = qualified.trim();
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    if name.ends_with('>') {
        if let Some(generic_start) = name.rfind("::<") {
            name = &name[..generic_start];
        }
    }
    match name.rsplit_once("::") {
        Some((_, last)) if !last.is_empty() => last,
        _ => name,
    }
}
