//! Discard Logger Task
//!
//! Moves eviction notices off the request path: the cache listener pushes
//! evicted keys into a channel and a background task logs them.

use std::fmt;
use std::hash::Hash;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::BoundedCache;

/// Registers a listener on `cache` that forwards every evicted key.
///
/// Sending never blocks, so the listener is safe to call while the cache
/// mutex is held. Keys evicted after the receiver is dropped are discarded.
pub fn forward_discards<K, V>(cache: &mut BoundedCache<K, V>) -> UnboundedReceiver<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
    V: Clone,
{
    let (tx, rx) = mpsc::unbounded_channel();
    cache.on_evict(move |key: &K| {
        let _ = tx.send(key.clone());
    });
    rx
}

/// Spawns a background task that logs each evicted key as `DISCARD: <key>`.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown. The task also ends once the cache is dropped.
///
/// # Example
/// ```ignore
/// let discards = forward_discards(&mut cache);
/// let discard_handle = spawn_discard_logger(discards);
/// // Later, during shutdown:
/// discard_handle.abort();
/// ```
pub fn spawn_discard_logger<K>(mut discards: UnboundedReceiver<K>) -> JoinHandle<u64>
where
    K: fmt::Display + Send + 'static,
{
    tokio::spawn(async move {
        info!("Starting discard logger");

        let mut count = 0u64;
        while let Some(key) = discards.recv().await {
            count += 1;
            info!("{}", discard_line(&key));
        }

        info!("Discard logger stopped after {} evictions", count);
        count
    })
}

/// Formats the log line for one evicted key.
pub fn discard_line<K: fmt::Display>(key: &K) -> String {
    format!("DISCARD: {}", key)
}
