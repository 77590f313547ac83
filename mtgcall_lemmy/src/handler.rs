use crate::LemmyBot;
use crate::types::{CommentView, PostView};
use mtgcall_core::CardSearch;
use tracing::{debug, info, warn};

/// What happened to a single feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Handled on an earlier poll.
    AlreadySeen,
    /// Written by the bot itself.
    OwnItem,
    /// Existed before the bot started and backlog replies are off.
    Backlog,
    /// No `[[card name]]` call in the text.
    NoCalls,
    Replied,
    /// The reply was built but posting it failed.
    PostFailed,
}

/// Reply to a post body that calls cards.
pub async fn handle_post<S: CardSearch>(
    bot: &mut LemmyBot<S>,
    community: &str,
    view: &PostView,
) -> Outcome {
    let post = &view.post;
    if !bot.seen.first_post(community, post.id) {
        return Outcome::AlreadySeen;
    }
    if bot.is_own(&view.creator.name) {
        return Outcome::OwnItem;
    }
    if bot.is_backlog(community) {
        return Outcome::Backlog;
    }

    let Some(body) = post.body.as_deref().filter(|b| !b.is_empty()) else {
        debug!("Post {} has no body", post.id);
        return Outcome::NoCalls;
    };

    let Some(reply) = bot.caller.reply_for(body).await else {
        return Outcome::NoCalls;
    };

    info!(
        "[@{}] Post {} in {}: replying",
        view.creator.name, post.id, view.community.name
    );

    match bot.client.create_comment(&reply, post.id, None).await {
        Ok(_) => Outcome::Replied,
        Err(e) => {
            warn!("Failed to reply to post {}: {e}", post.id);
            Outcome::PostFailed
        }
    }
}

/// Reply under a comment that calls cards.
pub async fn handle_comment<S: CardSearch>(
    bot: &mut LemmyBot<S>,
    community: &str,
    view: &CommentView,
) -> Outcome {
    let comment = &view.comment;
    if !bot.seen.first_comment(community, comment.id) {
        return Outcome::AlreadySeen;
    }
    if bot.is_own(&view.creator.name) {
        return Outcome::OwnItem;
    }
    if bot.is_backlog(community) {
        return Outcome::Backlog;
    }

    let Some(reply) = bot.caller.reply_for(&comment.content).await else {
        return Outcome::NoCalls;
    };

    info!(
        "[@{}] Comment {} on post {}: replying",
        view.creator.name, comment.id, comment.post_id
    );

    match bot
        .client
        .create_comment(&reply, comment.post_id, Some(comment.id))
        .await
    {
        Ok(_) => Outcome::Replied,
        Err(e) => {
            warn!("Failed to reply to comment {}: {e}", comment.id);
            Outcome::PostFailed
        }
    }
}
