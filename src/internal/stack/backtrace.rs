use std::backtrace::Backtrace;
use std::fmt::Write as _;
use std::thread;

use super::{StackInspector, UNKNOWN_CALLER};

/// [`StackInspector`] backed by `std::backtrace`.
///
/// Symbol names come from debug info; on stripped builds every frame
/// resolves to [`UNKNOWN_CALLER`]. Frame counting is only exact in
/// unoptimized builds, which is why the trace macros name callers at
/// compile time instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceInspector;

impl BacktraceInspector {
    pub fn new() -> Self {
        Self
    }

    fn render(all_threads: bool) -> String {
        let current = thread::current();
        let mut text = format!(
            "thread '{}' (current):\n{}",
            current.name().unwrap_or("<unnamed>"),
            Backtrace::force_capture()
        );
        if all_threads {
            append_other_threads(&mut text);
        }
        text
    }
}

impl StackInspector for BacktraceInspector {
    // Frame 0 is this method: the anchor symbol below.
    #[inline(never)]
    fn caller_name(&self, frames_up: usize) -> String {
        let rendered = Backtrace::force_capture().to_string();
        let symbols = frame_symbols(&rendered);
        symbols
            .iter()
            .position(|symbol| is_anchor(symbol))
            .and_then(|anchor| symbols.get(anchor + frames_up))
            .map(|symbol| symbol.to_string())
            .unwrap_or_else(|| UNKNOWN_CALLER.to_string())
    }

    fn write_stack(&self, buf: &mut [u8], all_threads: bool) -> usize {
        let text = Self::render(all_threads);
        let n = text.len().min(buf.len());
        buf[..n].copy_from_slice(&text.as_bytes()[..n]);
        n
    }
}

fn is_anchor(symbol: &str) -> bool {
    symbol.contains("BacktraceInspector") && symbol.ends_with("::caller_name")
}

/// Symbol lines of a rendered backtrace, innermost first.
///
/// Inlined functions appear as their own entries, in call order. Frames
/// removed by tail calls do not appear at all.
pub(crate) fn frame_symbols(rendered: &str) -> Vec<&str> {
    rendered
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("at "))
        .map(|line| match line.split_once(": ") {
            Some((index, symbol)) if index.chars().all(|c| c.is_ascii_digit()) => symbol.trim(),
            _ => line,
        })
        .collect()
}

#[cfg(target_os = "linux")]
fn append_other_threads(text: &mut String) {
    let Ok(tasks) = std::fs::read_dir("/proc/self/task") else {
        let _ = writeln!(text, "\n(thread list unavailable)");
        return;
    };
    let mut threads: Vec<(u64, String)> = tasks
        .filter_map(Result::ok)
        .filter_map(|task| {
            let tid = task.file_name().to_str()?.parse::<u64>().ok()?;
            let name = std::fs::read_to_string(task.path().join("comm")).unwrap_or_default();
            Some((tid, name.trim().to_string()))
        })
        .collect();
    threads.sort_unstable_by_key(|(tid, _)| *tid);

    let _ = writeln!(text, "\nlive threads ({}):", threads.len());
    for (tid, name) in threads {
        let _ = writeln!(text, "  thread {tid} '{name}' (stack not captured)");
    }
}

#[cfg(not(target_os = "linux"))]
fn append_other_threads(text: &mut String) {
    let _ = writeln!(text, "\n(thread list unavailable on this platform)");
}
