use mtgcall_config::Config;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Lemmy instance, account (password masked) and watched communities
/// - Poll settings
/// - Scryfall client settings
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let lemmy = &config.lemmy;

        println!("=== mtgcall Configuration ===\n");

        println!("Lemmy:");
        println!("  Instance: {}", lemmy.base_url());
        println!("  Account: {}", or_unset(&lemmy.username_or_email));
        println!("  Password: {}", mask_secret(&lemmy.password));
        if lemmy.communities.is_empty() {
            println!("  Communities: (none)");
        } else {
            println!("  Communities: {}", lemmy.communities.join(", "));
        }
        println!("  Poll Interval: {}s", lemmy.seconds_between_polls);
        println!("  Fetch Limit: {}", lemmy.fetch_limit);
        println!("  Reply To Backlog: {}", lemmy.reply_to_backlog);
        println!();

        println!("Scryfall:");
        println!("  Base URL: {}", config.scryfall.base_url);
        println!("  Timeout: {}s", config.scryfall.timeout);
        println!("  User-Agent: {}", config.scryfall.user_agent);

        Ok(())
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(not set)" } else { value }
}

fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        "(not set)".to_string()
    } else {
        "*".repeat(secret.chars().count().min(8))
    }
}
