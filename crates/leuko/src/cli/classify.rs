//! The `leuko classify` command: one image, one answer.

use clap::Args;
use leuko_core::{Config, Credential, ImageIntake, ModelClient, Session, View};
use std::path::PathBuf;

/// Arguments for the `classify` command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Image file to classify (jpg, jpeg or png)
    #[arg(required = true)]
    pub image: PathBuf,

    /// Model name, overriding `model.model` from the config file
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Execute the classify command.
///
/// The model's text goes to stdout unmodified; failures are reported on
/// stderr and exit non-zero.
pub async fn execute(
    args: ClassifyArgs,
    config: &Config,
    credential: Option<Credential>,
) -> anyhow::Result<()> {
    let client = super::build_client(config, args.model.as_deref(), credential);
    let intake = ImageIntake::new(config.limits.clone());

    let image = intake.load(&args.image)?;
    let mut session = Session::new();
    session.select(image);

    run(&mut session, &client).await
}

async fn run(session: &mut Session, client: &dyn ModelClient) -> anyhow::Result<()> {
    match session.submit(client).await? {
        View::ResultShown(text) => {
            println!("{text}");
            Ok(())
        }
        View::ErrorShown(message) => anyhow::bail!("{message}"),
        other => anyhow::bail!("Classification did not complete ({other:?})"),
    }
}
