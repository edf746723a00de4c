use super::StackInspector;

/// First buffer size tried when capturing a stack.
pub const INITIAL_STACK_BUFFER: usize = 512;
/// Largest buffer a capture may grow to.
pub const MAX_STACK_BUFFER: usize = 1 << 20;

/// A captured stack dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDump {
    text: String,
    truncated: bool,
}

impl StackDump {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the dump still filled [`MAX_STACK_BUFFER`].
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Capture the current stack through `inspector`, doubling the buffer until
/// the text fits strictly inside it.
///
/// A capture that still fills the buffer at [`MAX_STACK_BUFFER`] is kept as is
/// and marked truncated.
pub fn capture_stack(inspector: &dyn StackInspector, all_threads: bool) -> StackDump {
    let mut buf = vec![0u8; INITIAL_STACK_BUFFER];
    loop {
        let written = inspector.write_stack(&mut buf, all_threads);
        if written < buf.len() {
            buf.truncate(written);
            return StackDump {
                text: String::from_utf8_lossy(&buf).into_owned(),
                truncated: false,
            };
        }
        if buf.len() >= MAX_STACK_BUFFER {
            tracing::debug!(
                buffer = buf.len(),
                "stack dump still fills the largest buffer, keeping truncated text"
            );
            return StackDump {
                text: String::from_utf8_lossy(&buf).into_owned(),
                truncated: true,
            };
        }
        let next = (buf.len() * 2).min(MAX_STACK_BUFFER);
        buf = vec![0u8; next];
    }
}
