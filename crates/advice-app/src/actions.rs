//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tracing::{debug, warn};

use advice_client::AdviceClient;

use crate::message::{Message, RequestId};
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: &AdviceClient) {
    match action {
        UpdateAction::FetchAdvice { request_id } => {
            spawn_fetch_advice(request_id, client.clone(), msg_tx);
        }
    }
}

/// Spawn the single GET for `request_id` and report its outcome
fn spawn_fetch_advice(request_id: RequestId, client: AdviceClient, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let message = fetch_advice_message(request_id, &client).await;
        if msg_tx.send(message).await.is_err() {
            warn!(
                "Message channel closed before advice {} was delivered",
                request_id
            );
        }
    });
}

/// Await one fetch and turn its result into the completion message
pub async fn fetch_advice_message(request_id: RequestId, client: &AdviceClient) -> Message {
    debug!("Fetching advice {} from {}", request_id, client.endpoint());
    match client.fetch_advice().await {
        Ok(advice) => Message::AdviceReceived { request_id, advice },
        Err(e) => Message::AdviceFetchFailed {
            request_id,
            // Non-fetch errors cannot come out of fetch_advice
            kind: e
                .fetch_kind()
                .unwrap_or(advice_core::FetchFailureKind::Network),
            error: e.to_string(),
        },
    }
}
