//! "Choose an image..." step: path prompt, intake, preview.

use console::Style;
use dialoguer::Input;
use leuko_core::{Config, ImageIntake, ImageMime, ImagePreview, PreviewRenderer, Session};
use std::path::PathBuf;

use super::theme::{leuko_theme, print_error};

/// Ask for an image path and make it the session's selected image.
///
/// Invalid selections are reported inline and leave the session untouched.
pub async fn choose_image(session: &mut Session, config: &Config) -> anyhow::Result<()> {
    let theme = leuko_theme();
    let dim = Style::new().for_stderr().dim();

    eprintln!(
        "  {}",
        dim.apply_to(format!("Accepted: {}", ImageMime::EXTENSIONS.join(", ")))
    );
    let Some(raw_path) = super::handle_interrupt(
        Input::<String>::with_theme(&theme)
            .with_prompt("Choose an image...")
            .interact_text(),
    )?
    else {
        return Ok(());
    };

    let path = PathBuf::from(shellexpand::tilde(raw_path.trim()).into_owned());
    let intake = ImageIntake::new(config.limits.clone());
    let image = match intake.load(&path) {
        Ok(image) => image,
        Err(e) => {
            print_error(&e.to_string());
            return Ok(());
        }
    };

    let renderer = PreviewRenderer::new(config.preview.clone(), config.limits.clone());
    let for_preview = image.clone();
    let preview = tokio::task::spawn_blocking(move || renderer.render(&for_preview)).await?;

    session.select(image);

    match preview {
        Ok(preview) => print_preview(session, &preview),
        Err(e) => {
            tracing::warn!(error = %e, "Preview unavailable");
            let warn = Style::new().for_stderr().yellow();
            eprintln!("  {}", warn.apply_to(format!("Preview unavailable: {e}")));
            eprintln!();
        }
    }

    Ok(())
}

fn print_preview(session: &Session, preview: &ImagePreview) {
    let dim = Style::new().for_stderr().dim();
    let bold = Style::new().for_stderr().bold();

    eprintln!();
    eprint!("{}", preview.to_ansi());
    eprintln!("  {}", bold.apply_to("Uploaded Image."));
    if let Some(image) = session.image() {
        eprintln!(
            "  {}",
            dim.apply_to(format!(
                "{} | {} | {}x{} | {:.1} KB",
                image.file_name(),
                preview.format,
                preview.width,
                preview.height,
                image.size() as f64 / 1024.0
            ))
        );
    }
    eprintln!();
}
