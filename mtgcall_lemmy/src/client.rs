use crate::types::{
    CommentResponse, CommentView, CreateComment, GetCommentsResponse, GetPostsResponse,
    GetSiteResponse, Login, LoginResponse, PostView,
};
use crate::{Error, Result};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, info};

const API_PREFIX: &str = "/api/v3";

/// Thin client for the parts of the Lemmy HTTP API the bot needs.
#[derive(Debug, Clone)]
pub struct LemmyClient {
    client: Client,
    base_url: String,
    jwt: Option<String>,
}

impl LemmyClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("mtgcall/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            jwt: None,
        })
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.jwt.is_some()
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{API_PREFIX}{endpoint}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let jwt = self.jwt.as_ref().ok_or(Error::NotLoggedIn)?;
        Ok(request.bearer_auth(jwt))
    }

    /// Map non-2xx responses to [`Error::Api`], keeping the body for the log.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }

    /// Log in and keep the returned token for later requests.
    pub async fn login(&mut self, username_or_email: &str, password: &str) -> Result<()> {
        let response = self
            .client
            .post(self.url("/user/login"))
            .json(&Login {
                username_or_email,
                password,
            })
            .send()
            .await?;

        let response = match Self::check(response).await {
            Ok(r) => r,
            Err(Error::Api { body, .. }) => return Err(Error::Login(body)),
            Err(e) => return Err(e),
        };

        let jwt = response
            .json::<LoginResponse>()
            .await?
            .jwt
            .ok_or_else(|| Error::Login("no token returned (is the account verified?)".into()))?;

        info!("Logged in to {} as {username_or_email}", self.base_url);
        self.jwt = Some(jwt);
        Ok(())
    }

    /// Name of the logged-in account as the instance reports it.
    pub async fn my_name(&self) -> Result<Option<String>> {
        let request = self.authorized(self.client.get(self.url("/site")))?;
        let site = Self::check(request.send().await?)
            .await?
            .json::<GetSiteResponse>()
            .await?;

        Ok(site.my_user.map(|u| u.local_user_view.person.name))
    }

    /// Newest posts of a community, newest first.
    pub async fn list_posts(&self, community: &str, limit: u32) -> Result<Vec<PostView>> {
        debug!("Fetching posts from {community}");
        let limit = limit.to_string();
        let request = self.authorized(self.client.get(self.url("/post/list")).query(&[
            ("community_name", community),
            ("sort", "New"),
            ("limit", limit.as_str()),
        ]))?;

        let posts = Self::check(request.send().await?)
            .await?
            .json::<GetPostsResponse>()
            .await?
            .posts;
        Ok(posts)
    }

    /// Newest comments of a community, newest first.
    pub async fn list_comments(&self, community: &str, limit: u32) -> Result<Vec<CommentView>> {
        debug!("Fetching comments from {community}");
        let limit = limit.to_string();
        let request = self.authorized(self.client.get(self.url("/comment/list")).query(&[
            ("community_name", community),
            ("sort", "New"),
            ("limit", limit.as_str()),
        ]))?;

        let comments = Self::check(request.send().await?)
            .await?
            .json::<GetCommentsResponse>()
            .await?
            .comments;
        Ok(comments)
    }

    /// Comment on a post, or reply to `parent_id` when given.
    pub async fn create_comment(
        &self,
        content: &str,
        post_id: i64,
        parent_id: Option<i64>,
    ) -> Result<CommentView> {
        let request = self.authorized(self.client.post(self.url("/comment")).json(
            &CreateComment {
                content,
                post_id,
                parent_id,
            },
        ))?;

        let created = Self::check(request.send().await?)
            .await?
            .json::<CommentResponse>()
            .await?
            .comment_view;
        Ok(created)
    }
}
