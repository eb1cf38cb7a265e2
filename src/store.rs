//! Shared in-memory message store.

use tokio::sync::RwLock;

use crate::error::StoreError;

/// Greeting returned by the `hello` query.
pub const GREETING: &str = "Hello, GraphQL!";

/// Ordered list of messages behind a reader/writer lock.
///
/// Constructed once at startup and shared across request handlers via `Arc`.
/// All access goes through the lock: reads take the shared guard, mutations
/// take the exclusive guard, so no caller ever observes a half-applied
/// mutation.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: RwLock<Vec<String>>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed greeting; touches no shared state.
    pub fn hello(&self) -> &'static str {
        GREETING
    }

    /// Snapshot of the current messages in insertion order.
    pub async fn list(&self) -> Vec<String> {
        self.messages.read().await.clone()
    }

    /// Append a message at the tail and return the confirmation string.
    ///
    /// The empty string is a valid message; required-argument enforcement
    /// happens in the schema layer before this is called.
    pub async fn append(&self, text: impl Into<String>) -> String {
        let text = text.into();
        self.messages.write().await.push(text.clone());
        format!("Message added: {text}")
    }

    /// Remove the message at `index`, shifting later messages down by one.
    ///
    /// The bounds check and the removal happen under the same write guard,
    /// so a concurrent mutation cannot invalidate a passed check. On a
    /// failed check the list is left untouched.
    pub async fn delete_at(&self, index: i64) -> Result<String, StoreError> {
        let mut messages = self.messages.write().await;
        let i = usize::try_from(index)
            .ok()
            .filter(|&i| i < messages.len())
            .ok_or(StoreError::InvalidIndex { index })?;
        let deleted = messages.remove(i);
        Ok(format!("Deleted message: {deleted}"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn hello_is_constant() {
        let store = MessageStore::new();
        assert_eq!(store.hello(), GREETING);
        store.append("something").await;
        assert_eq!(store.hello(), GREETING);
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        assert!(MessageStore::new().list().await.is_empty());
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let store = MessageStore::new();
        assert_eq!(store.append("first").await, "Message added: first");
        store.append("second").await;
        store.append("").await;
        assert_eq!(store.list().await, vec!["first", "second", ""]);
    }

    #[tokio::test]
    async fn delete_shifts_later_messages_down() {
        let store = MessageStore::new();
        for msg in ["a", "b", "c"] {
            store.append(msg).await;
        }
        assert_eq!(store.delete_at(1).await.unwrap(), "Deleted message: b");
        assert_eq!(store.list().await, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn delete_out_of_bounds_leaves_store_unchanged() {
        let store = MessageStore::new();
        store.append("a").await;

        let err = store.delete_at(5).await.unwrap_err();
        assert_eq!(err, StoreError::InvalidIndex { index: 5 });

        let err = store.delete_at(-1).await.unwrap_err();
        assert_eq!(err, StoreError::InvalidIndex { index: -1 });

        assert_eq!(store.list().await, vec!["a"]);
    }

    #[tokio::test]
    async fn append_then_delete_last_restores_prior_state() {
        let store = MessageStore::new();
        store.append("keep").await;
        let before = store.list().await;

        store.append("transient").await;
        store.delete_at(before.len() as i64).await.unwrap();

        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn concurrent_appends_lose_nothing() {
        let store = Arc::new(MessageStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.append(format!("msg-{i}")).await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let mut messages = store.list().await;
        assert_eq!(messages.len(), 32);
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), 32);
    }
}
