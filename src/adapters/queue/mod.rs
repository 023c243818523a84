//! Message queue adapters.
//!
//! - `redis` - queues as Redis lists, for deployments
//! - `in_memory` - process-local queues for tests and local runs

mod in_memory;
mod redis;

pub use self::in_memory::InMemoryQueueClient;
pub use self::redis::RedisQueueClient;
