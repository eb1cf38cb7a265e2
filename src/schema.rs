//! GraphQL schema: query and mutation roots bound to the message store.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Result, Schema};

use crate::config::Config;
use crate::store::MessageStore;

/// Executable schema type for the message board.
pub type MessageSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Read operations.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fixed greeting, handy as a smoke-test query.
    async fn hello(&self, ctx: &Context<'_>) -> &'static str {
        ctx.data_unchecked::<Arc<MessageStore>>().hello()
    }

    /// All messages in insertion order.
    async fn get_messages(&self, ctx: &Context<'_>) -> Vec<String> {
        ctx.data_unchecked::<Arc<MessageStore>>().list().await
    }
}

/// Write operations.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Append a message to the board and return a confirmation.
    async fn update_message(&self, ctx: &Context<'_>, input: String) -> String {
        ctx.data_unchecked::<Arc<MessageStore>>().append(input).await
    }

    /// Delete the message at `index`, shifting later messages down.
    async fn delete_message(&self, ctx: &Context<'_>, index: i64) -> Result<String> {
        ctx.data_unchecked::<Arc<MessageStore>>()
            .delete_at(index)
            .await
            .map_err(|err| err.extend())
    }
}

/// Build the executable schema with the store injected as context data.
pub fn build_schema(store: Arc<MessageStore>, config: &Config) -> MessageSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(store);
    if let Some(depth) = config.limit_depth {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = config.limit_complexity {
        builder = builder.limit_complexity(complexity);
    }
    builder.finish()
}
