mod fixtures;

use chanlog::{log_printf, log_println, Level, LogChannels, MemorySink};
use fixtures::{capture, record_pattern};

#[test]
fn disabled_channels_write_nothing() {
    for level in Level::ALL {
        let channels = LogChannels::silent();
        let memory = MemorySink::new();
        channels.set(level, Some(memory.sink()));
        channels.set(level, None);

        let logger = channels.channel(level);
        logger.print_enter();
        logger.print_enter_anon("a");
        logger.print_leave();
        logger.print_leave_anon("b");
        logger.println(&[&"x"]);
        logger.printf(format_args!("{}", 1));
        logger.print_stack(true);

        assert_eq!(memory.write_count(), 0, "{level} wrote while disabled");
    }
}

#[test]
fn println_is_one_prefixed_timestamped_line() {
    for level in Level::ALL {
        let (channels, memory) = capture(level);
        channels.channel(level).println(&[&"x"]);

        let writes = memory.writes();
        assert_eq!(writes.len(), 1);
        assert!(
            record_pattern(level, "channel_tests.rs", "x").is_match(&writes[0]),
            "unexpected record: {:?}",
            writes[0]
        );
    }
}

#[test]
fn println_joins_values_with_spaces() {
    let (channels, memory) = capture(Level::Info);
    log_println!(channels.info(), "copied", 12, "files in", 0.5, "s");
    assert!(memory.contents().ends_with(": copied 12 files in 0.5 s\n"));
}

#[test]
fn printf_formats_positionally() {
    let (channels, memory) = capture(Level::Debug);
    log_printf!(channels.debug(), "{1} before {0}", "second", "first");
    channels.debug().printf(format_args!("already terminated\n"));

    let lines = memory.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(": first before second"));
    assert!(lines[1].ends_with(": already terminated"));
    assert!(!memory.contents().contains("\n\n"));
}

#[test]
fn records_carry_the_call_site_line() {
    let (channels, memory) = capture(Level::Error);
    channels.error().println(&[&"boom"]);
    let line = line!() - 1;
    assert!(memory
        .contents()
        .ends_with(&format!("channel_tests.rs:{line}: boom\n")));
}

#[test]
fn setting_the_same_writer_twice_does_not_duplicate() {
    let channels = LogChannels::silent();
    let memory = MemorySink::new();
    let sink = memory.sink();
    channels.set_warning(Some(sink.clone()));
    channels.set_warning(Some(sink));

    channels.warning().println(&[&"once"]);
    assert_eq!(memory.write_count(), 1);
    assert_eq!(memory.lines().len(), 1);
}

#[test]
fn replacing_a_sink_redirects_output() {
    let (channels, first) = capture(Level::Info);
    let second = MemorySink::new();
    channels.info().println(&[&"to first"]);
    channels.set_info(Some(second.sink()));
    channels.info().println(&[&"to second"]);

    assert_eq!(first.lines().len(), 1);
    assert!(first.contents().contains("to first"));
    assert_eq!(second.lines().len(), 1);
    assert!(second.contents().contains("to second"));
}

#[test]
fn one_sink_can_serve_several_channels() {
    let channels = LogChannels::silent();
    let memory = MemorySink::new();
    channels.set_all(Some(memory.sink()));

    for channel in channels.iter() {
        channel.println(&[&channel.level()]);
    }

    let lines = memory.lines();
    let prefixes: Vec<&str> = lines.iter().map(|line| &line[..6]).collect();
    assert_eq!(prefixes, vec!["[TRC] ", "[DBG] ", "[INF] ", "[WRN] ", "[ERR] "]);
}

#[test]
fn concurrent_writers_never_interleave_records() {
    let (channels, memory) = capture(Level::Info);
    std::thread::scope(|scope| {
        for worker in 0..8 {
            let channels = &channels;
            scope.spawn(move || {
                for i in 0..50 {
                    log_printf!(channels.info(), "worker {worker} record {i}");
                }
            });
        }
    });

    let pattern = record_pattern(Level::Info, "channel_tests.rs", r"worker \d+ record \d+");
    let writes = memory.writes();
    assert_eq!(writes.len(), 400);
    assert!(writes.iter().all(|write| pattern.is_match(write)));
}

#[test]
fn reconfiguring_while_logging_is_safe() {
    let channels = LogChannels::silent();
    let memory = MemorySink::new();
    std::thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..200 {
                channels.set_trace(Some(memory.sink()));
                channels.set_trace(None);
            }
        });
        scope.spawn(|| {
            for i in 0..200 {
                channels.trace().println(&[&i]);
            }
        });
    });

    let pattern = record_pattern(Level::Trace, "channel_tests.rs", r"\d+");
    assert!(memory.writes().iter().all(|write| pattern.is_match(write)));
}
