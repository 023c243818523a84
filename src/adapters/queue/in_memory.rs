//! In-memory queue client.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::ports::{QueueClient, QueueError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryQueueClient {
    queues: Arc<Mutex<HashMap<String, VecDeque<String>>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryQueueClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with a connection error until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Pending messages on `queue`, oldest first.
    pub async fn messages(&self, queue: &str) -> Vec<String> {
        self.queues
            .lock()
            .await
            .get(queue)
            .map(|q| q.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn check_available(&self) -> Result<(), QueueError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(QueueError::Connection("in-memory queue switched off".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl QueueClient for InMemoryQueueClient {
    async fn publish(&self, queue: &str, body: &str) -> Result<(), QueueError> {
        self.check_available()?;
        self.queues
            .lock()
            .await
            .entry(queue.to_string())
            .or_default()
            .push_back(body.to_string());
        Ok(())
    }

    async fn purge(&self, queue: &str) -> Result<u64, QueueError> {
        self.check_available()?;
        let mut queues = self.queues.lock().await;
        Ok(queues
            .get_mut(queue)
            .map(|q| {
                let n = q.len() as u64;
                q.clear();
                n
            })
            .unwrap_or(0))
    }

    async fn delete(&self, queue: &str) -> Result<(), QueueError> {
        self.check_available()?;
        self.queues.lock().await.remove(queue);
        Ok(())
    }

    async fn ping(&self) -> Result<(), QueueError> {
        self.check_available()
    }
}
