//! Terminal output and prompts.
//!
//! Commands talk to the user through the [`UserInterface`] trait so they
//! can be exercised in tests with [`MockUI`].
//!
//! - [`TerminalUI`] - styled output and interactive confirmation on a TTY
//! - [`NonInteractiveUI`] - plain output for pipes and scripts
//! - [`MockUI`] - captures everything for assertions

mod mock;
mod non_interactive;
mod output;
mod prompts;
mod terminal;
mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::confirm;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, MushafTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
