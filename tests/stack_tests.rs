mod fixtures;

use chanlog::{capture_stack, BacktraceInspector, Level, Logger};
use fixtures::capture;
use std::hint::black_box;

#[inline(never)]
fn recurse(depth: usize, logger: &Logger) {
    if depth == 0 {
        logger.print_stack(false);
    } else {
        recurse(depth - 1, logger);
    }
    black_box(depth);
}

#[test]
fn deep_stacks_are_dumped_without_truncation() {
    let (channels, memory) = capture(Level::Debug);
    recurse(64, channels.debug());

    let contents = memory.contents();
    assert_eq!(memory.write_count(), 1);
    assert!(contents.starts_with("[DBG] "));
    assert!(contents.contains(": Stack (all threads: false)\n"));
    assert!(contents.len() > 512 * 4);
    assert!(contents.matches("stack_tests::recurse").count() >= 64);
    // The outermost frames of the test itself survive.
    assert!(contents.contains("deep_stacks_are_dumped_without_truncation"));
}

#[test]
fn all_threads_header_is_reported() {
    let (channels, memory) = capture(Level::Error);
    channels.error().print_stack(true);
    assert!(memory.contents().contains(": Stack (all threads: true)\n"));
}

#[test]
fn backtrace_capture_grows_past_the_initial_buffer() {
    let dump = capture_stack(&BacktraceInspector::new(), false);
    assert!(!dump.is_truncated());
    assert!(dump.text().len() > 512);
    assert!(dump.text().starts_with("thread '"));
}
