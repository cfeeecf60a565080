use anyhow::Result;
use log::debug;
use std::io;

use crate::config::AppConfig;
use crate::output;
use crate::session::{ConsoleReader, TranslationSession};
use crate::status;
use crate::translation::CompletionClient;
use crate::ui::Style;

pub async fn run_interactive(config: AppConfig) -> Result<()> {
    debug!("Resolved configuration: {config:?}");

    if config.tracing.enabled {
        status!(
            "{} LangSmith tracing enabled for debugging and monitoring",
            Style::hint("info:")
        );
    }

    let client = CompletionClient::new(config.endpoint, config.model, config.api_key);
    status!(
        "{} {}",
        Style::secondary("Using model"),
        Style::value(client.model())
    );

    let mut session =
        TranslationSession::new(ConsoleReader::detect(), client, io::stdout(), io::stderr())
            .with_progress(output::shows_progress());

    session.run().await?;
    Ok(())
}
