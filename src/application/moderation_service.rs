use std::sync::Arc;

use crate::data::post_store::PostStore;
use crate::domain::{error::DomainError, post::Post};
use tracing::instrument;
use uuid::Uuid;

/// Operation layer consumed by the request handlers. Holds the store as
/// an injected handle; no module-level connection state.
#[derive(Clone)]
pub struct ModerationService {
    store: Arc<dyn PostStore>,
}

impl ModerationService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Accepts any content/author pair, empty text included, and stores
    /// it pending approval.
    #[instrument(skip(self, content))]
    pub async fn submit(&self, content: String, author: String) -> Result<Post, DomainError> {
        self.store.insert(Post::new(content, author)).await
    }

    pub async fn all_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.store.list_all().await
    }

    pub async fn approved_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.store.list_approved().await
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, id: Uuid) -> Result<(), DomainError> {
        self.store.approve(id).await
    }

    /// Rejection deletes the post permanently. There is no rejected
    /// state and no audit trail.
    #[instrument(skip(self))]
    pub async fn reject(&self, id: Uuid) -> Result<(), DomainError> {
        self.store.delete(id).await
    }

    /// The moderation endpoint's decision rule: one boolean picks
    /// between approval and destructive rejection.
    pub async fn decide(&self, id: Uuid, approved: bool) -> Result<(), DomainError> {
        if approved {
            self.approve(id).await
        } else {
            self.reject(id).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::in_memory::InMemoryPostStore;

    fn service() -> ModerationService {
        ModerationService::new(Arc::new(InMemoryPostStore::new()))
    }

    #[tokio::test]
    async fn submit_then_approve_publishes_exactly_that_post() {
        let service = service();

        let post = service
            .submit("Hello world".into(), "Alice".into())
            .await
            .unwrap();

        let all = service.all_posts().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(!all[0].approved);

        service.approve(post.id).await.unwrap();

        let approved = service.approved_posts().await.unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, post.id);
        assert!(approved[0].approved);
        assert_eq!(service.all_posts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn submit_then_reject_leaves_nothing() {
        let service = service();

        let post = service.submit("spam".into(), "Bob".into()).await.unwrap();
        service.reject(post.id).await.unwrap();

        assert!(service.all_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn decide_routes_on_the_boolean() {
        let service = service();

        let kept = service.submit("kept".into(), "Alice".into()).await.unwrap();
        let dropped = service.submit("dropped".into(), "Bob".into()).await.unwrap();

        service.decide(kept.id, true).await.unwrap();
        service.decide(dropped.id, false).await.unwrap();

        let all = service.all_posts().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, kept.id);
        assert!(all[0].approved);
    }

    #[tokio::test]
    async fn deciding_an_unknown_id_changes_nothing() {
        let service = service();
        service.submit("Hello".into(), "Alice".into()).await.unwrap();

        service.decide(Uuid::new_v4(), true).await.unwrap();
        service.decide(Uuid::new_v4(), false).await.unwrap();

        assert_eq!(service.all_posts().await.unwrap().len(), 1);
        assert!(service.approved_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_content_and_author_are_accepted() {
        let service = service();

        let post = service.submit(String::new(), String::new()).await.unwrap();

        assert_eq!(post.content, "");
        assert_eq!(post.author, "");
        assert_eq!(service.all_posts().await.unwrap().len(), 1);
    }
}
