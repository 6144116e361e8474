//! Interactive mode: the guided session for bare `leuko` invocation.
//!
//! Mirrors a single-page upload form: choose an image, see its preview,
//! submit it, read the answer. Each run owns exactly one `Session`.

pub mod submit;
pub mod theme;
pub mod upload;

use console::Style;
use dialoguer::Select;
use leuko_core::{Config, Credential, ModelClient, Session};

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &[
    "Choose an image...",
    "Tell me about the blood cell type",
    "Clear selection",
    "Show configuration",
    "Exit",
];

/// Entry point for interactive mode.
pub async fn run(config: &Config, credential: Option<Credential>) -> anyhow::Result<()> {
    theme::print_banner();

    let theme = theme::leuko_theme();
    let client = super::build_client(config, None, credential);
    let mut session = Session::new();

    loop {
        print_status(&session);

        let default = if session.image().is_some() { 1 } else { 0 };
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(default)
            .interact_opt()?;

        match selection {
            Some(0) => upload::choose_image(&mut session, config).await?,
            Some(1) => submit::submit(&mut session, &client).await?,
            Some(2) => session.clear(),
            Some(3) => show_config(config, &client),
            Some(4) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// One-line reminder of the current selection above the menu.
fn print_status(session: &Session) {
    let dim = Style::new().for_stderr().dim();
    let label = match session.image() {
        Some(image) => format!("Selected: {}", image.file_name()),
        None => "No image selected".to_string(),
    };
    eprintln!("  {}", dim.apply_to(label));
}

/// Summary of the settings that affect a classification.
fn show_config(config: &Config, client: &dyn ModelClient) {
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();

    eprintln!();
    eprintln!("  {}", cyan.apply_to("Current configuration:"));
    eprintln!();

    let config_path = Config::default_path();
    let path_note = if config_path.exists() {
        "(exists)"
    } else {
        "(using defaults)"
    };

    eprintln!(
        "    {:<16} {} {}",
        label.apply_to("Config file:"),
        config_path.display(),
        dim.apply_to(path_note)
    );
    eprintln!("    {:<16} {}", label.apply_to("Model:"), client.model());
    eprintln!(
        "    {:<16} {}",
        label.apply_to("API key:"),
        if client.is_configured() {
            "loaded".to_string()
        } else {
            format!("missing ({})", Credential::source_hint(&config.model))
        }
    );
    eprintln!(
        "    {:<16} {}",
        label.apply_to("Timeout:"),
        config
            .model
            .timeout_secs
            .map(|s| format!("{s}s"))
            .unwrap_or_else(|| "client default".to_string())
    );
    eprintln!(
        "    {:<16} {} MB",
        label.apply_to("Max file size:"),
        config.limits.max_file_size_mb
    );
    eprintln!(
        "    {:<16} {}",
        label.apply_to("Preview:"),
        if config.preview.enabled {
            format!("{} columns", config.preview.width)
        } else {
            "disabled".to_string()
        }
    );
    eprintln!();
}
