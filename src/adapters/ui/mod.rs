pub mod banner;
pub mod tui;

pub use tui::TuiInputPort;

use crate::domain::DomainError;

/// Prints the welcome banner and applies the theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui() -> Result<(), DomainError> {
    banner::print_welcome()?;
    tui::apply_theme();
    Ok(())
}
