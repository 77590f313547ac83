//! Lemmy API v3 request and response shapes, reduced to the fields the bot reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Community {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostView {
    pub post: Post,
    pub creator: Person,
    pub community: Community,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentView {
    pub comment: Comment,
    pub creator: Person,
}

#[derive(Debug, Deserialize)]
pub struct GetPostsResponse {
    pub posts: Vec<PostView>,
}

#[derive(Debug, Deserialize)]
pub struct GetCommentsResponse {
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Serialize)]
pub struct Login<'a> {
    pub username_or_email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateComment<'a> {
    pub content: &'a str,
    pub post_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub comment_view: CommentView,
}

#[derive(Debug, Deserialize)]
pub struct LocalUserView {
    pub person: Person,
}

#[derive(Debug, Deserialize)]
pub struct MyUserInfo {
    pub local_user_view: LocalUserView,
}

#[derive(Debug, Deserialize)]
pub struct GetSiteResponse {
    #[serde(default)]
    pub my_user: Option<MyUserInfo>,
}
