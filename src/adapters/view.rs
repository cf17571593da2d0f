use crate::domain::ports::ResponseView;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Prints each response on its own stdout line.
#[derive(Debug, Clone, Default)]
pub struct TerminalView {
    last: Arc<Mutex<String>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.last.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ResponseView for TerminalView {
    fn set_text(&self, text: &str) {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        last.clear();
        last.push_str(text);

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", text) {
            tracing::warn!("Failed to write response to stdout: {}", e);
        }
    }
}

/// Keeps the displayed text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    state: Arc<Mutex<ViewState>>,
}

#[derive(Debug, Default)]
struct ViewState {
    text: String,
    writes: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let view = Self::default();
        view.state.lock().unwrap_or_else(|e| e.into_inner()).text = text.into();
        view
    }

    pub fn text(&self) -> String {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .text
            .clone()
    }

    /// Number of `set_text` calls so far.
    pub fn writes(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).writes
    }
}

impl ResponseView for MemoryView {
    fn set_text(&self, text: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.text = text.to_string();
        state.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_view_overwrites() {
        let view = MemoryView::with_text("before");
        assert_eq!(view.text(), "before");
        assert_eq!(view.writes(), 0);

        view.set_text("first");
        view.set_text("second");
        assert_eq!(view.text(), "second");
        assert_eq!(view.writes(), 2);
    }

    #[test]
    fn test_terminal_view_remembers_last_text() {
        let view = TerminalView::new();
        view.set_text("shown");
        assert_eq!(view.text(), "shown");
    }
}
