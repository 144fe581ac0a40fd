//! Connection mailboxes for the HTTP transport.
//!
//! Each SSE client gets a connection with a ring buffer of recent
//! events and a broadcast channel, so a reconnecting client can replay
//! what it missed via Last-Event-ID. These transport connection ids are
//! unrelated to the YOK backend's search session tokens.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use axum::response::sse::Event;
use tokio::sync::{RwLock, broadcast};

/// Maximum number of events kept per connection for replay.
const HISTORY_SIZE: usize = 100;

/// Idle timeout after which connections are cleaned up.
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(3600);

/// Cleanup interval for stale connections.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// A buffered SSE event with an id for replay support.
#[derive(Clone, Debug)]
pub struct StreamEvent {
    /// Monotonically increasing id per connection.
    pub id: u64,
    /// Event type (e.g., "message").
    pub event_type: String,
    /// JSON payload.
    pub data: String,
}

impl StreamEvent {
    /// Convert to an axum SSE event.
    #[must_use]
    pub fn to_sse_event(&self) -> Event {
        Event::default().id(self.id.to_string()).event(self.event_type.clone()).data(self.data.clone())
    }
}

/// A single transport connection with event buffer and broadcast channel.
pub struct Connection {
    /// Unique connection identifier.
    pub id: String,
    tx: broadcast::Sender<StreamEvent>,
    history: RwLock<VecDeque<StreamEvent>>,
    next_event_id: AtomicU64,
    last_active: RwLock<Instant>,
}

impl Connection {
    /// Create a new connection.
    #[must_use]
    pub fn new(id: String) -> Self {
        let (tx, _) = broadcast::channel(64);
        Self {
            id,
            tx,
            history: RwLock::new(VecDeque::with_capacity(HISTORY_SIZE)),
            next_event_id: AtomicU64::new(1),
            last_active: RwLock::new(Instant::now()),
        }
    }

    /// Push an event: stores it in history and broadcasts to live
    /// subscribers. Returns the assigned event id.
    pub async fn push_event(&self, event_type: impl Into<String>, data: impl Into<String>) -> u64 {
        let id = self.next_event_id.fetch_add(1, Ordering::SeqCst);
        let event = StreamEvent { id, event_type: event_type.into(), data: data.into() };

        {
            let mut history = self.history.write().await;
            if history.len() >= HISTORY_SIZE {
                history.pop_front();
            }
            history.push_back(event.clone());
        }

        // No subscribers is fine; the event stays in history for replay.
        let _ = self.tx.send(event);

        *self.last_active.write().await = Instant::now();

        id
    }

    /// Get events after a given id (for replay on reconnection).
    pub async fn events_after(&self, last_event_id: u64) -> Vec<StreamEvent> {
        let history = self.history.read().await;
        history.iter().filter(|e| e.id > last_event_id).cloned().collect()
    }

    /// Subscribe to live events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StreamEvent> {
        self.tx.subscribe()
    }

    /// Check if this connection has been idle past the timeout.
    pub async fn is_stale(&self) -> bool {
        self.last_active.read().await.elapsed() > CONNECTION_TIMEOUT
    }

    /// Update the activity timestamp.
    pub async fn touch(&self) {
        *self.last_active.write().await = Instant::now();
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection").field("id", &self.id).finish()
    }
}

/// Registry of live transport connections.
#[derive(Clone)]
pub struct ConnectionManager {
    connections: Arc<RwLock<HashMap<String, Arc<Connection>>>>,
}

impl ConnectionManager {
    /// Create a new connection manager.
    #[must_use]
    pub fn new() -> Self {
        Self { connections: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Create a new connection with a fresh id.
    pub async fn create(&self) -> Arc<Connection> {
        let id = uuid::Uuid::new_v4().to_string();
        let connection = Arc::new(Connection::new(id.clone()));

        self.connections.write().await.insert(id, connection.clone());

        tracing::info!(connection_id = %connection.id, "Created transport connection");
        connection
    }

    /// Look up an existing connection.
    pub async fn get(&self, id: &str) -> Option<Arc<Connection>> {
        self.connections.read().await.get(id).cloned()
    }

    /// Get an existing connection or create a fresh one.
    pub async fn get_or_create(&self, id: Option<&str>) -> Arc<Connection> {
        if let Some(id) = id {
            if let Some(connection) = self.get(id).await {
                connection.touch().await;
                return connection;
            }
        }
        self.create().await
    }

    /// Number of live connections.
    pub async fn count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Remove idle connections; returns how many were dropped.
    pub async fn cleanup_stale(&self) -> usize {
        let mut to_remove = Vec::new();

        {
            let connections = self.connections.read().await;
            for (id, connection) in connections.iter() {
                if connection.is_stale().await {
                    to_remove.push(id.clone());
                }
            }
        }

        let count = to_remove.len();
        if count > 0 {
            let mut connections = self.connections.write().await;
            for id in to_remove {
                connections.remove(&id);
                tracing::info!(connection_id = %id, "Cleaned up stale connection");
            }
        }

        count
    }

    /// Start the background cleanup task.
    pub fn start_cleanup_task(self: Arc<Self>) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
            loop {
                interval.tick().await;
                let cleaned = self.cleanup_stale().await;
                if cleaned > 0 {
                    tracing::debug!(count = cleaned, "Connection cleanup completed");
                }
            }
        });
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager").finish()
    }
}
