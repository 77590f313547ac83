use std::collections::{HashMap, HashSet};

/// Ids of posts and comments already handled, per community.
///
/// Only ids inside the latest fetch window are kept, so memory stays bounded
/// by `fetch_limit` per community and kind.
#[derive(Debug, Default)]
pub struct SeenItems {
    posts: HashMap<String, HashSet<i64>>,
    comments: HashMap<String, HashSet<i64>>,
}

impl SeenItems {
    /// Record a post; `true` the first time the id is seen.
    pub fn first_post(&mut self, community: &str, id: i64) -> bool {
        self.posts.entry(community.to_string()).or_default().insert(id)
    }

    /// Record a comment; `true` the first time the id is seen.
    pub fn first_comment(&mut self, community: &str, id: i64) -> bool {
        self.comments
            .entry(community.to_string())
            .or_default()
            .insert(id)
    }

    /// Forget posts of `community` that fell out of the fetched window.
    pub fn retain_posts(&mut self, community: &str, window: &HashSet<i64>) {
        if let Some(ids) = self.posts.get_mut(community) {
            ids.retain(|id| window.contains(id));
        }
    }

    /// Forget comments of `community` that fell out of the fetched window.
    pub fn retain_comments(&mut self, community: &str, window: &HashSet<i64>) {
        if let Some(ids) = self.comments.get_mut(community) {
            ids.retain(|id| window.contains(id));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts
            .values()
            .chain(self.comments.values())
            .map(HashSet::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
