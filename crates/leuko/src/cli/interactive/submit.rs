//! "Tell me about the blood cell type" step: blocking call with a spinner.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use leuko_core::{IntakeError, ModelClient, Session, View};
use std::time::Duration;

use super::theme::print_error;

/// Submit the selected image and display the outcome.
///
/// With nothing selected, no request is made and an inline hint is shown.
pub async fn submit(session: &mut Session, client: &dyn ModelClient) -> anyhow::Result<()> {
    if session.image().is_none() {
        print_error(&format!("{}. Choose an image first.", IntakeError::MissingFile));
        return Ok(());
    }

    let spinner = create_spinner(client.model());
    let outcome = session.submit(client).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(View::ResultShown(text)) => {
            let header = Style::new().for_stderr().bold().green();
            eprintln!("  {}", header.apply_to("The Response is"));
            eprintln!();
            println!("{text}");
            eprintln!();
        }
        Ok(View::ErrorShown(message)) => print_error(message),
        Ok(other) => tracing::debug!(view = ?other, "Submission produced no output"),
        Err(e) => print_error(&e.to_string()),
    }

    Ok(())
}

/// Spinner shown while the classification call is in flight.
fn create_spinner(model: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.magenta} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Asking {model}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
