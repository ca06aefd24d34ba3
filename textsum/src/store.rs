use std::sync::Arc;

use tokio::sync::Mutex;

/// In-memory log of received queries, shared between handlers.
#[derive(Clone, Default)]
pub struct QueryStore {
    queries: Arc<Mutex<Vec<String>>>,
}

impl QueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, query: String) {
        self.queries.lock().await.push(query);
    }

    /// Snapshot of all recorded queries in insertion order.
    pub async fn all(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }
}
