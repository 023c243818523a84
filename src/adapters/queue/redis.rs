//! Redis-backed queue client.
//!
//! A queue named `q` is the list `queue:q`; the set `queues` records every
//! declared queue name. Publish is SADD + RPUSH, purge is LLEN + DEL and
//! delete is DEL + SREM, each sent as one MULTI/EXEC pipeline.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{Client, RedisError, RedisResult};
use tokio::sync::OnceCell;

use crate::config::QueueConfig;
use crate::ports::{QueueClient, QueueError};

/// Set holding the names of all declared queues.
const QUEUE_REGISTRY_KEY: &str = "queues";

fn list_key(queue: &str) -> String {
    format!("queue:{}", queue)
}

/// Queue client over a single multiplexed, self-reconnecting connection.
///
/// The connection is opened on first use. Concurrent first callers wait on
/// the same initialization; afterwards the `ConnectionManager` handles
/// reconnects itself.
pub struct RedisQueueClient {
    client: Client,
    conn: OnceCell<ConnectionManager>,
    timeout: Duration,
}

impl RedisQueueClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, QueueError> {
        let client = Client::open(url).map_err(|e| QueueError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
            timeout,
        })
    }

    pub fn from_config(config: &QueueConfig) -> Result<Self, QueueError> {
        Self::new(&config.url, config.timeout())
    }

    async fn connection(&self) -> Result<ConnectionManager, QueueError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                match tokio::time::timeout(self.timeout, ConnectionManager::new(self.client.clone()))
                    .await
                {
                    Ok(result) => result.map_err(map_redis_error),
                    Err(_) => Err(QueueError::Timeout(self.timeout)),
                }
            })
            .await?;
        Ok(conn.clone())
    }

    /// Runs one command under the configured timeout.
    async fn bounded<T, F>(&self, fut: F) -> Result<T, QueueError>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(map_redis_error),
            Err(_) => Err(QueueError::Timeout(self.timeout)),
        }
    }
}

fn map_redis_error(err: RedisError) -> QueueError {
    if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
        QueueError::Connection(err.to_string())
    } else {
        QueueError::Command(err.to_string())
    }
}

fn check_name(queue: &str) -> Result<(), QueueError> {
    if queue.trim().is_empty() {
        return Err(QueueError::Command("queue name cannot be empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl QueueClient for RedisQueueClient {
    async fn publish(&self, queue: &str, body: &str) -> Result<(), QueueError> {
        check_name(queue)?;
        let mut conn = self.connection().await?;
        let pipe = redis::pipe()
            .atomic()
            .sadd(QUEUE_REGISTRY_KEY, queue)
            .ignore()
            .rpush(list_key(queue), body)
            .ignore()
            .to_owned();

        self.bounded(pipe.query_async::<_, ()>(&mut conn)).await?;
        tracing::debug!(queue, "message published");
        Ok(())
    }

    async fn purge(&self, queue: &str) -> Result<u64, QueueError> {
        check_name(queue)?;
        let mut conn = self.connection().await?;
        let key = list_key(queue);
        let pipe = redis::pipe().atomic().llen(&key).del(&key).ignore().to_owned();

        let (purged,): (u64,) = self.bounded(pipe.query_async(&mut conn)).await?;
        tracing::info!(queue, purged, "queue purged");
        Ok(purged)
    }

    async fn delete(&self, queue: &str) -> Result<(), QueueError> {
        check_name(queue)?;
        let mut conn = self.connection().await?;
        let pipe = redis::pipe()
            .atomic()
            .del(list_key(queue))
            .ignore()
            .srem(QUEUE_REGISTRY_KEY, queue)
            .ignore()
            .to_owned();

        self.bounded(pipe.query_async::<_, ()>(&mut conn)).await?;
        tracing::info!(queue, "queue deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), QueueError> {
        let mut conn = self.connection().await?;
        let _: String = self
            .bounded(redis::cmd("PING").query_async(&mut conn))
            .await?;
        Ok(())
    }
}
