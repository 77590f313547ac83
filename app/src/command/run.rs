use crate::command::CommandStrategy;
use mtgcall_config::Config;
use mtgcall_lemmy::LemmyBot;
use mtgcall_scryfall::ScryfallClient;
use tracing::info;

/// Input for the run command.
pub struct RunInput {
    /// Optional instance (overrides config)
    pub instance: Option<String>,
    /// Communities to watch (overrides config when non-empty)
    pub communities: Vec<String>,
}

/// Strategy for running the Lemmy bot.
pub struct RunStrategy;

impl CommandStrategy for RunStrategy {
    type Input = RunInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = Config::load_or_default()?;

        if let Some(instance) = input.instance {
            config.lemmy.instance = instance;
        }
        if !input.communities.is_empty() {
            config.lemmy.communities = input.communities;
        }

        info!("Starting Lemmy bot for {}...", config.lemmy.base_url());

        let search = ScryfallClient::new(&config.scryfall)?;
        let bot = LemmyBot::new(config.lemmy, search)?;

        info!("Lemmy bot is running. Press Ctrl+C to stop.");
        bot.run().await?;

        Ok(())
    }
}
