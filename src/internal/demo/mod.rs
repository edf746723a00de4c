// src/internal/demo/mod.rs

use std::thread;

use crate::internal::config::DemoConfig;
use crate::internal::registry::LogChannels;
use crate::{log_enter, log_enter_anon, log_leave, log_leave_anon, log_printf, log_println};

/// Outcome of a demo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoSummary {
    pub workers_started: usize,
    pub workers_completed: usize,
}

/// Run the recursive workload on `cfg.workers` named threads, tracing every
/// level on every channel of `channels`.
pub fn run(cfg: &DemoConfig, channels: &LogChannels) -> DemoSummary {
    log_enter!(channels.trace());
    log_printf!(
        channels.info(),
        "starting {} workers, depth {}",
        cfg.workers,
        cfg.depth
    );

    let mut summary = DemoSummary::default();
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(cfg.workers);
        for id in 0..cfg.workers {
            let spawned = thread::Builder::new()
                .name(format!("worker-{id}"))
                .spawn_scoped(scope, move || worker(id, cfg, channels));
            match spawned {
                Ok(handle) => handles.push((id, handle)),
                Err(err) => log_printf!(channels.warning(), "worker {} not started: {}", id, err),
            }
        }
        summary.workers_started = handles.len();

        for (id, handle) in handles {
            match handle.join() {
                Ok(()) => summary.workers_completed += 1,
                Err(_) => log_println!(channels.error(), "worker", id, "panicked"),
            }
        }
    });

    log_printf!(
        channels.info(),
        "{} of {} workers completed",
        summary.workers_completed,
        summary.workers_started
    );
    log_leave!(channels.trace());
    summary
}

fn worker(id: usize, cfg: &DemoConfig, channels: &LogChannels) {
    log_enter_anon!(channels.trace(), &format!("worker {id}"));
    descend(id, cfg.depth, cfg, channels);
    log_leave_anon!(channels.trace(), &format!("worker {id}"));
}

fn descend(id: usize, remaining: usize, cfg: &DemoConfig, channels: &LogChannels) {
    log_enter_anon!(channels.trace(), &format!("depth {remaining}"));
    if remaining == 0 {
        log_println!(channels.debug(), "worker", id, "reached the bottom");
        if cfg.stack_dump {
            channels.debug().print_stack(cfg.all_threads);
        }
    } else {
        descend(id, remaining - 1, cfg, channels);
    }
    log_leave_anon!(channels.trace(), &format!("depth {remaining}"));
}
