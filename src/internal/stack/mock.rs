use std::sync::{Arc, Mutex, PoisonError};

use super::StackInspector;

/// Scripted inspector for testing - returns a fixed caller name and stack
/// text, and records what it was asked for.
#[derive(Clone, Default)]
pub struct MockInspector {
    caller: String,
    stack: String,
    /// `frames_up` of every `caller_name` call
    pub frame_requests: Arc<Mutex<Vec<usize>>>,
    /// `(buffer length, all_threads)` of every `write_stack` call
    pub stack_requests: Arc<Mutex<Vec<(usize, bool)>>>,
}

impl MockInspector {
    pub fn new(caller: &str) -> Self {
        Self {
            caller: caller.to_string(),
            ..Default::default()
        }
    }

    pub fn with_stack(mut self, stack: &str) -> Self {
        self.stack = stack.to_string();
        self
    }

    pub fn frame_requests(&self) -> Vec<usize> {
        self.frame_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn buffer_sizes(&self) -> Vec<usize> {
        self.stack_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(len, _)| *len)
            .collect()
    }

    pub fn all_threads_requests(&self) -> Vec<bool> {
        self.stack_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, all)| *all)
            .collect()
    }
}

impl StackInspector for MockInspector {
    fn caller_name(&self, frames_up: usize) -> String {
        self.frame_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(frames_up);
        self.caller.clone()
    }

    fn write_stack(&self, buf: &mut [u8], all_threads: bool) -> usize {
        self.stack_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((buf.len(), all_threads));
        let n = self.stack.len().min(buf.len());
        buf[..n].copy_from_slice(&self.stack.as_bytes()[..n]);
        n
    }
}
