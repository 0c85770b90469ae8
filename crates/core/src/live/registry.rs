use log::debug;
use std::collections::HashMap;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use super::live_events::LiveEvent;
use crate::constants::LIVE_CHANNEL_CAPACITY;

/// Registry of currently-open live connections.
///
/// Each connection owns the receiving half of a bounded event channel; the
/// registry keeps the sending halves keyed by connection id. Connections have
/// no identity beyond the lifetime of the process.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: RwLock<HashMap<Uuid, mpsc::Sender<LiveEvent>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a new connection and returns its id together with the
    /// stream of events addressed to it.
    pub async fn register(&self) -> (Uuid, mpsc::Receiver<LiveEvent>) {
        let (tx, rx) = mpsc::channel(LIVE_CHANNEL_CAPACITY);
        let id = Uuid::new_v4();
        self.connections.write().await.insert(id, tx);
        debug!("Live connection {} registered", id);
        (id, rx)
    }

    /// Removes a connection. Removing an id that is already gone is a no-op.
    pub async fn unregister(&self, id: Uuid) {
        if self.connections.write().await.remove(&id).is_some() {
            debug!("Live connection {} removed", id);
        }
    }

    /// Number of currently-open connections
    pub async fn len(&self) -> usize {
        self.connections.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.connections.read().await.is_empty()
    }

    /// Sends an event to a single connection, removing it if its channel has
    /// closed.
    pub async fn send_to(&self, id: Uuid, event: LiveEvent) {
        let sender = self.connections.read().await.get(&id).cloned();
        if let Some(sender) = sender {
            if sender.send(event).await.is_err() {
                self.unregister(id).await;
            }
        }
    }

    /// Fans an event out to every open connection.
    ///
    /// The membership is snapshotted before any send, so connections opening
    /// or closing concurrently can neither be skipped nor visited twice;
    /// entries whose channel has closed are pruned after the pass. Slow
    /// consumers are handled with backpressure on their bounded channel, not
    /// by dropping events.
    pub async fn broadcast(&self, event: LiveEvent) {
        let snapshot: Vec<(Uuid, mpsc::Sender<LiveEvent>)> = {
            let connections = self.connections.read().await;
            connections
                .iter()
                .map(|(id, tx)| (*id, tx.clone()))
                .collect()
        };

        let mut dead = Vec::new();
        for (id, sender) in snapshot {
            if sender.send(event.clone()).await.is_err() {
                dead.push(id);
            }
        }

        if !dead.is_empty() {
            let mut connections = self.connections.write().await;
            for id in dead {
                if connections.remove(&id).is_some() {
                    debug!("Live connection {} pruned after failed send", id);
                }
            }
        }
    }
}
