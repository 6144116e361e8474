//! Custom dialoguer theme and banner for Leuko interactive mode.

use console::{style, Style};
use dialoguer::theme::ColorfulTheme;

/// Page title shown at the top of every session.
pub const TITLE: &str = "Gemini BloodCell Classification App";

/// Returns a `ColorfulTheme` configured with Leuko's visual identity.
///
/// - Prompt prefix: magenta `?`
/// - Active item indicator: magenta `▸`
/// - Success prefix: green `✓`
/// - Error prefix: red `✗`
pub fn leuko_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("?".to_string()).for_stderr().magenta(),
        prompt_style: Style::new().for_stderr().bold(),
        prompt_suffix: style("›".to_string()).for_stderr().bright().black(),
        active_item_prefix: style("▸".to_string()).for_stderr().magenta(),
        active_item_style: Style::new().for_stderr().magenta(),
        success_prefix: style("✓".to_string()).for_stderr().green(),
        success_suffix: style("·".to_string()).for_stderr().bright().black(),
        error_prefix: style("✗".to_string()).for_stderr().red(),
        error_style: Style::new().for_stderr().red(),
        values_style: Style::new().for_stderr().green(),
        ..ColorfulTheme::default()
    }
}

/// Prints the title banner to stderr.
///
/// All output goes to stderr so stdout only carries classification text.
pub fn print_banner() {
    let version_line = format!("Leuko v{}", leuko_core::VERSION);

    // Inner width: title + 4 chars padding (2 each side)
    let inner_width = TITLE.len() + 4;

    let top = format!("  ╔{:═<width$}╗", "", width = inner_width);
    let mid1 = format!("  ║{:^width$}║", TITLE, width = inner_width);
    let mid2 = format!("  ║{:^width$}║", version_line, width = inner_width);
    let bot = format!("  ╚{:═<width$}╝", "", width = inner_width);

    let magenta = Style::new().for_stderr().magenta();

    eprintln!();
    eprintln!("{}", magenta.apply_to(&top));
    eprintln!("{}", magenta.apply_to(&mid1));
    eprintln!("{}", magenta.apply_to(&mid2));
    eprintln!("{}", magenta.apply_to(&bot));
    eprintln!();
}

/// Print an inline error the way every failure in the session is shown.
pub fn print_error(message: &str) {
    let err = Style::new().for_stderr().red();
    eprintln!("  {} {}", err.apply_to("✗"), err.apply_to(format!("Error: {message}")));
    eprintln!();
}
