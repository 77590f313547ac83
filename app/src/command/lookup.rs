//! One-shot lookup: runs the reply pipeline on a message and prints the result.

use mtgcall_config::Config;
use mtgcall_core::CardCaller;
use mtgcall_scryfall::ScryfallClient;
use tracing::info;

/// Input parameters for the Lookup command strategy.
#[derive(Debug, Clone)]
pub struct LookupInput {
    /// Message text to scan for `[[card name]]` calls
    pub text: String,
}

/// Strategy for answering a single message from the command line.
///
/// Builds the same reply the bot would post, without touching Lemmy.
#[derive(Debug, Clone, Copy)]
pub struct LookupStrategy;

impl super::CommandStrategy for LookupStrategy {
    type Input = LookupInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let caller = CardCaller::new(ScryfallClient::new(&config.scryfall)?);

        match caller.reply_for(&input.text).await {
            Some(reply) => println!("{reply}"),
            None => info!("No [[card name]] calls found in message"),
        }

        Ok(())
    }
}
