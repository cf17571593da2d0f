use crate::domain::ports::MessageInput;
use std::sync::{Arc, Mutex};

/// Holds the most recently entered line. Clones share the same field.
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    current: Arc<Mutex<String>>,
}

impl LineInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the field's value; a trailing line ending is dropped.
    pub fn set(&self, line: &str) {
        let value = line.trim_end_matches(['\r', '\n']);
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        current.clear();
        current.push_str(value);
    }
}

impl MessageInput for LineInput {
    fn value(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_strips_line_ending_only() {
        let input = LineInput::new();
        assert_eq!(input.value(), "");

        input.set("  hello world \r\n");
        assert_eq!(input.value(), "  hello world ");

        let shared = input.clone();
        shared.set("next\n");
        assert_eq!(input.value(), "next");
    }
}
