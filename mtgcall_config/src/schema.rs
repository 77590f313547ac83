use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

// Scryfall settings live next to the client that consumes them
use mtgcall_scryfall::ScryfallConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub lemmy: LemmyConfig,
    #[serde(default)]
    pub scryfall: ScryfallConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LemmyConfig {
    /// Instance host, e.g. `lemmy.ml`, or a full base URL
    #[serde(default)]
    pub instance: String,
    #[serde(default)]
    pub username_or_email: String,
    #[serde(default)]
    pub password: String,
    /// Communities on `instance` whose posts and comments are watched
    #[serde(default = "LemmyConfig::default_communities")]
    pub communities: Vec<String>,
    #[serde(default = "LemmyConfig::default_seconds_between_polls")]
    pub seconds_between_polls: u64,
    /// Items fetched per community per poll
    #[serde(default = "LemmyConfig::default_fetch_limit")]
    pub fetch_limit: u32,
    /// Answer posts and comments that already existed when the bot started
    #[serde(default)]
    pub reply_to_backlog: bool,
}

impl Default for LemmyConfig {
    fn default() -> Self {
        Self {
            instance: String::new(),
            username_or_email: String::new(),
            password: String::new(),
            communities: Self::default_communities(),
            seconds_between_polls: Self::default_seconds_between_polls(),
            fetch_limit: Self::default_fetch_limit(),
            reply_to_backlog: false,
        }
    }
}

impl LemmyConfig {
    fn default_communities() -> Vec<String> {
        vec!["sandbox".to_string()]
    }

    const fn default_seconds_between_polls() -> u64 {
        30
    }

    const fn default_fetch_limit() -> u32 {
        20
    }

    /// Base URL of the instance, adding `https://` to a bare host.
    #[must_use]
    pub fn base_url(&self) -> String {
        let instance = self.instance.trim_end_matches('/');
        if instance.starts_with("http://") || instance.starts_with("https://") {
            instance.to_string()
        } else {
            format!("https://{instance}")
        }
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("mtgcall"))
    }

    /// Load `~/mtgcall/config.json`, then apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'mtgcall init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.apply_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Like [`Self::load`], but fall back to defaults when no config file exists.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");
        if config_path.exists() {
            return Self::load();
        }

        debug!("No config at {}, using defaults", config_path.display());
        Ok(Self::from_env_with(|key| std::env::var(key).ok()))
    }

    /// Defaults with the credential overrides from `lookup` applied.
    #[must_use]
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_overrides(lookup);
        config
    }

    /// Override credentials from `INSTANCE`, `USERNAME_OR_EMAIL` and `PASSWORD`.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            ("INSTANCE", &mut self.lemmy.instance),
            ("USERNAME_OR_EMAIL", &mut self.lemmy.username_or_email),
            ("PASSWORD", &mut self.lemmy.password),
        ];

        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                debug!("Using {key} from environment");
                *field = value;
            }
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "lemmy": {
    "instance": "lemmy.example.org",
    "username_or_email": "your-bot-account",
    "password": "your-bot-password",
    "communities": ["sandbox"],
    "seconds_between_polls": 30,
    "fetch_limit": 20,
    "reply_to_backlog": false
  },
  "scryfall": {
    "base_url": "https://api.scryfall.com",
    "timeout": 10
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and set the instance and bot account");
        println!("   2. Run 'mtgcall lookup \"[[Lightning Bolt]]\"' to check Scryfall access");
        println!("   3. Run 'mtgcall run' to start the bot");
        println!();
        println!("🔧 Configuration options:");
        println!("   - communities: communities on the instance to watch");
        println!("   - seconds_between_polls: delay between feed polls");
        println!("   - INSTANCE / USERNAME_OR_EMAIL / PASSWORD env vars override the file");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sections_use_defaults() {
        let config: Config = match serde_json::from_str("{}") {
            Ok(c) => c,
            Err(e) => panic!("failed to parse: {e}"),
        };
        assert_eq!(config.lemmy.communities, vec!["sandbox"]);
        assert_eq!(config.lemmy.seconds_between_polls, 30);
        assert_eq!(config.lemmy.fetch_limit, 20);
        assert!(!config.lemmy.reply_to_backlog);
        assert_eq!(config.scryfall.base_url, "https://api.scryfall.com");
    }

    #[test]
    fn partial_lemmy_section_keeps_other_defaults() {
        let json = r#"{ "lemmy": { "instance": "lemmy.ml", "communities": ["mtg"] } }"#;
        let config: Config = match serde_json::from_str(json) {
            Ok(c) => c,
            Err(e) => panic!("failed to parse: {e}"),
        };
        assert_eq!(config.lemmy.instance, "lemmy.ml");
        assert_eq!(config.lemmy.communities, vec!["mtg"]);
        assert_eq!(config.lemmy.seconds_between_polls, 30);
    }

    #[test]
    fn env_overrides_replace_non_empty_values() {
        let mut config = Config::default();
        config.lemmy.password = "from-file".to_string();
        config.apply_overrides(|key| match key {
            "INSTANCE" => Some("lemmy.world".to_string()),
            "PASSWORD" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.lemmy.instance, "lemmy.world");
        assert_eq!(config.lemmy.password, "from-file");
        assert!(config.lemmy.username_or_email.is_empty());
    }

    #[test]
    fn base_url_adds_scheme() {
        let mut lemmy = LemmyConfig {
            instance: "lemmy.ml/".to_string(),
            ..LemmyConfig::default()
        };
        assert_eq!(lemmy.base_url(), "https://lemmy.ml");
        lemmy.instance = "http://localhost:8536".to_string();
        assert_eq!(lemmy.base_url(), "http://localhost:8536");
    }

    #[test]
    fn environment_alone_fills_credentials() {
        let config = Config::from_env_with(|key| {
            match key {
                "INSTANCE" => Some("lemmy.ml"),
                "USERNAME_OR_EMAIL" => Some("cardbot"),
                "PASSWORD" => Some("hunter2"),
                _ => None,
            }
            .map(str::to_string)
        });
        assert_eq!(config.lemmy.base_url(), "https://lemmy.ml");
        assert_eq!(config.lemmy.username_or_email, "cardbot");
        assert_eq!(config.lemmy.password, "hunter2");
        assert_eq!(config.lemmy.communities, vec!["sandbox"]);
    }
}
