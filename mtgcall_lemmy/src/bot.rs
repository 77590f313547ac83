use crate::handler::{Outcome, handle_comment, handle_post};
use crate::seen::SeenItems;
use crate::{Error, LemmyClient, Result};
use mtgcall_config::LemmyConfig;
use mtgcall_core::{CardCaller, CardSearch};
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Polls Lemmy communities and answers `[[card name]]` calls.
pub struct LemmyBot<S> {
    pub(crate) client: LemmyClient,
    pub(crate) caller: CardCaller<S>,
    pub(crate) seen: SeenItems,
    config: LemmyConfig,
    /// Account name as reported by the instance, set by login
    own_name: String,
    /// Communities whose first fetch has gone through
    primed: HashSet<String>,
}

impl<S: CardSearch> LemmyBot<S> {
    pub fn new(config: LemmyConfig, search: S) -> Result<Self> {
        if config.instance.is_empty() {
            return Err(Error::Config("lemmy.instance is not set".into()));
        }
        if config.username_or_email.is_empty() || config.password.is_empty() {
            return Err(Error::Config(
                "lemmy.username_or_email and lemmy.password must be set".into(),
            ));
        }
        if config.communities.is_empty() {
            return Err(Error::Config("lemmy.communities is empty".into()));
        }

        let client = LemmyClient::new(&config.base_url())?;

        Ok(Self {
            client,
            caller: CardCaller::new(search),
            seen: SeenItems::default(),
            config,
            own_name: String::new(),
            primed: HashSet::new(),
        })
    }

    pub(crate) fn is_own(&self, creator: &str) -> bool {
        creator.eq_ignore_ascii_case(&self.own_name)
    }

    /// Items of a community not fetched before are backlog until its first
    /// successful poll, unless backlog replies are on.
    pub(crate) fn is_backlog(&self, community: &str) -> bool {
        !self.config.reply_to_backlog && !self.primed.contains(community)
    }

    /// Log in and learn the account name.
    ///
    /// Every reply carries `[[card name]]` in its trailer, so polling without
    /// knowing our own name would make the bot answer itself.
    async fn try_login(&mut self) -> Result<String> {
        self.client
            .login(&self.config.username_or_email, &self.config.password)
            .await?;

        self.client
            .my_name()
            .await?
            .ok_or_else(|| Error::Login("instance did not report the logged-in account".into()))
    }

    /// Log in, retrying with a growing delay: 2s, 4s, 6s, 8s, then 10s.
    /// Retries indefinitely until the instance accepts the login and
    /// reports the account name.
    pub async fn login_with_backoff(&mut self) {
        const INITIAL_DELAY_SECS: u64 = 2;
        const MAX_DELAY_SECS: u64 = 10;

        let mut attempt = 1u64;
        loop {
            match self.try_login().await {
                Ok(name) => {
                    info!("Running as @{name}");
                    self.own_name = name;
                    return;
                }
                Err(e) => {
                    let delay_secs = (INITIAL_DELAY_SECS * attempt).min(MAX_DELAY_SECS);

                    warn!("Login attempt {attempt} failed: {e}. Retrying in {delay_secs}s...");

                    if attempt == 1 {
                        warn!("This may be due to:");
                        warn!("  - Network connectivity issues");
                        warn!("  - Wrong instance, username or password");
                        warn!("  - The account's email not being verified yet");
                        warn!("  - The instance being temporarily unavailable");
                    }

                    sleep(Duration::from_secs(delay_secs)).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Fetch one community and answer its new items, oldest first.
    async fn poll_community(&mut self, community: &str) -> Result<usize> {
        let limit = self.config.fetch_limit;
        let posts = self.client.list_posts(community, limit).await?;
        let comments = self.client.list_comments(community, limit).await?;

        let mut replied = 0;
        for view in posts.iter().rev() {
            if handle_post(self, community, view).await == Outcome::Replied {
                replied += 1;
            }
        }
        for view in comments.iter().rev() {
            if handle_comment(self, community, view).await == Outcome::Replied {
                replied += 1;
            }
        }

        let post_ids: HashSet<i64> = posts.iter().map(|v| v.post.id).collect();
        let comment_ids: HashSet<i64> = comments.iter().map(|v| v.comment.id).collect();
        self.seen.retain_posts(community, &post_ids);
        self.seen.retain_comments(community, &comment_ids);

        if self.primed.insert(community.to_string()) && !self.config.reply_to_backlog {
            info!(
                "Skipped {} existing item(s) in {community} on first poll",
                post_ids.len() + comment_ids.len()
            );
        }

        Ok(replied)
    }

    /// Poll every watched community once.
    ///
    /// A community that fails is logged and skipped until the next poll.
    /// Only a rejected session is returned as an error, since it affects
    /// every community. Returns the number of replies posted.
    pub async fn poll_once(&mut self) -> Result<usize> {
        let communities = self.config.communities.clone();
        let mut replied = 0;

        for community in &communities {
            match self.poll_community(community).await {
                Ok(n) => replied += n,
                Err(e) if e.is_unauthorized() => return Err(e),
                Err(e) => warn!("Skipping {community} this poll: {e}"),
            }
        }

        Ok(replied)
    }

    async fn poll_or_relogin(&mut self) {
        match self.poll_once().await {
            Ok(0) => debug!("Nothing to answer"),
            Ok(n) => info!("Posted {n} reply comment(s)"),
            Err(e) if e.is_unauthorized() => {
                warn!("Session rejected: {e}. Logging in again");
                self.login_with_backoff().await;
            }
            Err(e) => warn!("Poll failed: {e}"),
        }
    }

    async fn poll_then_wait(&mut self, interval: Duration) {
        self.poll_or_relogin().await;
        sleep(interval).await;
    }

    /// Run the bot until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.run_until(tokio::signal::ctrl_c()).await
    }

    /// Run the bot until `shutdown` resolves.
    ///
    /// `shutdown` is watched during login, polls and waits alike.
    pub async fn run_until<F>(mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = std::io::Result<()>>,
    {
        tokio::pin!(shutdown);

        tokio::select! {
            signal = &mut shutdown => {
                signal?;
                info!("Shutdown requested before login completed");
                return Ok(());
            }
            () = self.login_with_backoff() => {}
        }

        let interval = Duration::from_secs(self.config.seconds_between_polls);
        info!(
            "Watching {} every {}s",
            self.config.communities.join(", "),
            interval.as_secs()
        );

        loop {
            tokio::select! {
                signal = &mut shutdown => {
                    signal?;
                    info!("Shutdown requested, stopping");
                    break;
                }
                () = self.poll_then_wait(interval) => {}
            }
        }

        Ok(())
    }
}
