use crate::game::providers::LookupTicket;
use crate::locations::LocationPool;
use crate::storage::interface::SessionGameFlowHandler;
use crate::storage::sessions::HashMapSessionsStorage;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Clone, Debug, PartialEq)]
pub struct LookupRequest {
    pub game_id: String,
    pub ticket: LookupTicket,
}

/// Answers lookups until every sender is gone.
pub async fn run(
    pool: LocationPool,
    sessions: HashMapSessionsStorage,
    mut requests: UnboundedReceiver<LookupRequest>,
) {
    while let Some(request) = requests.recv().await {
        let Some(location) = pool.pick() else {
            // The session's own deadline will report the timeout.
            tracing::warn!(
                task = "lookup_unanswered",
                game_id = %request.game_id,
                lookup_id = request.ticket.id,
            );
            continue;
        };
        if let Err(e) = sessions
            .location_found(&request.game_id, request.ticket, location, Instant::now())
            .await
        {
            tracing::debug!(
                task = "lookup_discarded",
                game_id = %request.game_id,
                lookup_id = request.ticket.id,
                reason = %e,
            );
        }
    }
    tracing::info!("Lookup resolver stopped.");
}
