use crate::feed::{FeedSnapshot, FeedUpdate};
use crate::subscription::protocol::{ClientMessage, ErrorMessage, ServerMessage};
use axum::extract::ws::{Message, WebSocket};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

/// Manages a single WebSocket connection with entity subscriptions
pub struct ConnectionManager {
    /// Patient and device ids this connection is subscribed to
    subscriptions: HashSet<String>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            subscriptions: HashSet::new(),
        }
    }

    /// Handle WebSocket connection lifecycle.
    ///
    /// Ends when the client leaves or when `feed_rx` reports that the feed
    /// task has stopped.
    pub async fn handle(
        mut self,
        mut socket: WebSocket,
        mut updates_rx: broadcast::Receiver<FeedUpdate>,
        mut feed_rx: watch::Receiver<Arc<FeedSnapshot>>,
    ) {
        info!("WebSocket connection established");

        loop {
            tokio::select! {
                // Handle incoming client messages
                Some(msg) = socket.recv() => {
                    match msg {
                        Ok(Message::Text(text)) => {
                            if let Some(reply) = self.handle_text(&text) {
                                if let Err(e) = send_json(&mut socket, &reply).await {
                                    error!(error = %e, "Failed to send error message");
                                    break;
                                }
                            }
                        }
                        Ok(Message::Close(_)) => {
                            info!("WebSocket client disconnected");
                            break;
                        }
                        Ok(Message::Ping(data)) => {
                            if let Err(e) = socket.send(Message::Pong(data)).await {
                                error!(error = %e, "Failed to send pong");
                                break;
                            }
                        }
                        Ok(_) => {
                            // Ignore binary, pong messages
                        }
                        Err(e) => {
                            warn!(error = %e, "WebSocket error");
                            break;
                        }
                    }
                }

                // Forward feed ticks
                result = updates_rx.recv() => {
                    match result {
                        Ok(update) => {
                            if self.should_forward_update(&update) {
                                let msg = ServerMessage::from(update);
                                if let Err(e) = send_json(&mut socket, &msg).await {
                                    error!(error = %e, "Failed to send feed update");
                                    break;
                                }
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!(skipped = skipped, "WebSocket lagged, skipped updates");
                            // Continue processing
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            info!("Update channel closed, closing WebSocket");
                            break;
                        }
                    }
                }

                // The feed task owns the only snapshot sender
                result = feed_rx.changed() => {
                    if result.is_err() {
                        info!("Feed stopped, closing WebSocket");
                        break;
                    }
                }

                else => {
                    break;
                }
            }
        }

        info!("WebSocket connection closed");
    }

    /// Process one text frame, returning the error reply to send if it was rejected
    fn handle_text(&mut self, text: &str) -> Option<ErrorMessage> {
        match self.apply_client_message(text) {
            Ok(()) => None,
            Err(reason) => {
                warn!(error = %reason, "Rejected client message");
                Some(ErrorMessage::new(reason))
            }
        }
    }

    /// Apply a subscribe/unsubscribe request, or return why it was rejected
    fn apply_client_message(&mut self, text: &str) -> Result<(), String> {
        let msg: ClientMessage =
            serde_json::from_str(text).map_err(|e| format!("Invalid message: {}", e))?;

        match msg {
            ClientMessage::Subscribe { entity_id } => {
                debug!(entity_id = %entity_id, "Client subscribed to entity");
                self.subscriptions.insert(entity_id);
            }
            ClientMessage::Unsubscribe { entity_id } => {
                debug!(entity_id = %entity_id, "Client unsubscribed from entity");
                self.subscriptions.remove(&entity_id);
            }
        }

        Ok(())
    }

    /// Check if update should be forwarded to this connection
    fn should_forward_update(&self, update: &FeedUpdate) -> bool {
        match update.entity_id() {
            // Summaries go to everyone
            None => true,
            // No subscriptions means everything
            Some(_) if self.subscriptions.is_empty() => true,
            Some(id) => self.subscriptions.contains(id),
        }
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

async fn send_json<T: serde::Serialize>(socket: &mut WebSocket, msg: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string(msg)?;
    socket.send(Message::Text(json)).await?;
    Ok(())
}
