use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tracing::{debug, warn};
use uuid::Uuid;

use navarch_core::live::LiveEvent;

use crate::main_lib::AppState;

pub const MSG_DISABLE_AUTO_GENERATION: &str = "disable-auto-generation";
pub const MSG_GENERATE_SHIP: &str = "generate-ship";

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sink, mut stream) = socket.split();
    let (id, mut events) = state.registry.register().await;

    // Opening a connection forces auto-generation off, process-wide.
    state.generator.disable_auto_generation();
    debug!("Live client {} connected", id);

    let forward = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let payload = match serde_json::to_string(&event) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("Failed to encode live event: {e}");
                    continue;
                }
            };
            if sink.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(msg)) = stream.next().await {
        match msg {
            Message::Text(text) => handle_control_message(text.trim(), &state, id).await,
            Message::Close(_) => break,
            _ => {}
        }
    }

    state.registry.unregister(id).await;
    forward.abort();
    debug!("Live client {} disconnected", id);
}

async fn handle_control_message(text: &str, state: &Arc<AppState>, sender: Uuid) {
    match text {
        MSG_DISABLE_AUTO_GENERATION => {
            state.generator.disable_auto_generation();
            // Acknowledged to the sender only; other clients are not notified.
            state
                .registry
                .send_to(
                    sender,
                    LiveEvent::Status {
                        message: "Auto-generation disabled".to_string(),
                    },
                )
                .await;
        }
        MSG_GENERATE_SHIP => {
            if let Err(e) = state.generator.generate_batch().await {
                warn!("Manual generation failed: {e}");
                state
                    .registry
                    .send_to(
                        sender,
                        LiveEvent::Status {
                            message: format!("Generation failed: {e}"),
                        },
                    )
                    .await;
            }
        }
        // Unknown messages are accepted and ignored so older clients keep working.
        other => debug!("Ignoring unknown control message: {other}"),
    }
}
