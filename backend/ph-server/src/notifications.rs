use crate::AppState;

use ph_core::Notification;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::sync::broadcast::{self, error::RecvError};

/// GET /api/v1/notifications - WebSocket feed of operator notifications
///
/// The subscription is taken before the upgrade completes so nothing
/// broadcast after the handshake is missed.
pub async fn handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let receiver = state.broadcaster.subscribe();
    ws.on_upgrade(move |socket| forward(socket, receiver))
}

async fn forward(socket: WebSocket, mut notifications: broadcast::Receiver<Notification>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    info!("Notification observer connected");

    loop {
        tokio::select! {
            notification = notifications.recv() => {
                match notification {
                    Ok(notification) => {
                        let payload = match serde_json::to_string(&notification) {
                            Ok(payload) => payload,
                            Err(e) => {
                                warn!("Failed to encode notification: {}", e);
                                continue;
                            }
                        };
                        if ws_sender.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(missed)) => {
                        warn!("Notification observer lagged, missed {} messages", missed);
                    }
                    Err(RecvError::Closed) => {
                        info!("Notification channel closed");
                        break;
                    }
                }
            }

            incoming = ws_receiver.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {
                        debug!("Ignoring message from notification observer");
                    }
                    Some(Err(e)) => {
                        debug!("Notification observer socket error: {}", e);
                        break;
                    }
                }
            }
        }
    }

    info!("Notification observer disconnected");
}
