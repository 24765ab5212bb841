//! Non-interactive UI for pipes and scripts.

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// Plain-text UI. Questions are never asked; the default answer is used.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        tracing::debug!("Non-interactive, answering '{}' with {}", question, default);
        Ok(default)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_returns_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(ui.confirm("Proceed?", true).unwrap());
        assert!(!ui.confirm("Proceed?", false).unwrap());
    }

    #[test]
    fn is_never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
