//! In-memory post store backing the gallery.

use wallboard_api::PostRecord;

use crate::post::{Post, PostKey};

/// Ordered cache of every post fetched in the current browsing session.
///
/// Arrival order is preserved so the gallery renders pages in fetch order.
/// Duplicate `(board, id)` pairs from overlapping pages are allowed to
/// accumulate; lookups return the first occurrence.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { posts: Vec::new() }
    }

    /// Clears the store. Called on every board switch and fresh search.
    pub fn reset(&mut self) {
        self.posts.clear();
    }

    /// Appends one page of board-list records, tagging each with
    /// `board_id`. List responses do not echo the board, so the store
    /// assigns it rather than trusting the wire.
    pub fn append_from_board(&mut self, board_id: &str, records: Vec<PostRecord>) {
        self.posts
            .extend(records.into_iter().map(|r| Post::from_record(r, board_id)));
    }

    /// Appends search records, which carry their own board tag.
    pub fn append_tagged(&mut self, records: Vec<PostRecord>) {
        self.posts
            .extend(records.into_iter().map(|r| Post::from_record(r, "")));
    }

    /// Iterates the current contents in arrival order.
    pub fn all(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    /// Looks up a post by its key (first occurrence).
    #[must_use]
    pub fn get(&self, key: &PostKey) -> Option<&Post> {
        self.posts.iter().find(|post| post.key() == *key)
    }

    /// Number of stored posts, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the store holds no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
