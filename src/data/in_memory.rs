use crate::domain::error::DomainError;
use crate::domain::post::Post;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory implementation of `PostStore`.
///
/// Backs the unit and integration test suites so they run without a
/// database. A `Vec` rather than a map: listings must come back in
/// insertion order, stable across calls.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl super::post_store::PostStore for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<Post, DomainError> {
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().await.clone())
    }

    async fn list_approved(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .filter(|post| post.approved)
            .cloned()
            .collect())
    }

    async fn approve(&self, id: Uuid) -> Result<(), DomainError> {
        if let Some(post) = self.posts.write().await.iter_mut().find(|p| p.id == id) {
            post.approved = true;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.posts.write().await.retain(|p| p.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::post_store::PostStore;
    use super::*;

    #[tokio::test]
    async fn insert_stores_a_pending_post() {
        let store = InMemoryPostStore::new();

        let post = store
            .insert(Post::new("Hello world".into(), "Alice".into()))
            .await
            .unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, post.id);
        assert!(!all[0].approved);
    }

    #[tokio::test]
    async fn listings_keep_insertion_order() {
        let store = InMemoryPostStore::new();

        for author in ["first", "second", "third"] {
            store
                .insert(Post::new(format!("by {author}"), author.into()))
                .await
                .unwrap();
        }

        let all = store.list_all().await.unwrap();
        let authors: Vec<&str> = all.iter().map(|p| p.author.as_str()).collect();
        assert_eq!(authors, ["first", "second", "third"]);

        // Stable across calls while nothing is written.
        let again = store.list_all().await.unwrap();
        assert_eq!(
            again.iter().map(|p| p.id).collect::<Vec<_>>(),
            all.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn approve_flips_the_flag_without_changing_counts() {
        let store = InMemoryPostStore::new();
        let post = store
            .insert(Post::new("pending".into(), "Alice".into()))
            .await
            .unwrap();

        assert!(store.list_approved().await.unwrap().is_empty());

        store.approve(post.id).await.unwrap();

        let approved = store.list_approved().await.unwrap();
        assert_eq!(approved.len(), 1);
        assert!(approved[0].approved);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_post() {
        let store = InMemoryPostStore::new();
        let keep = store
            .insert(Post::new("keep".into(), "Alice".into()))
            .await
            .unwrap();
        let drop = store
            .insert(Post::new("spam".into(), "Bob".into()))
            .await
            .unwrap();

        store.delete(drop.id).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep.id);
    }

    #[tokio::test]
    async fn moderating_an_unknown_id_is_a_noop() {
        let store = InMemoryPostStore::new();
        let post = store
            .insert(Post::new("Hello".into(), "Alice".into()))
            .await
            .unwrap();

        store.approve(Uuid::new_v4()).await.unwrap();
        store.delete(Uuid::new_v4()).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, post.id);
        assert!(!all[0].approved);
        assert!(store.list_approved().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn approved_listing_never_contains_pending_posts() {
        let store = InMemoryPostStore::new();
        let first = store
            .insert(Post::new("one".into(), "Alice".into()))
            .await
            .unwrap();
        store
            .insert(Post::new("two".into(), "Bob".into()))
            .await
            .unwrap();

        store.approve(first.id).await.unwrap();

        let approved = store.list_approved().await.unwrap();
        assert!(approved.iter().all(|p| p.approved));
        assert_eq!(approved.len(), 1);
    }
}
