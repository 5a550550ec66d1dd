use crate::game::providers::{LookupTicket, PanoramaProvider};
use crate::locations::resolver::LookupRequest;
use tokio::sync::mpsc::UnboundedSender;

/// Forwards a session's lookups to the resolver task.
#[derive(Clone, Debug)]
pub struct ChannelPanoramaProvider {
    game_id: String,
    requests: UnboundedSender<LookupRequest>,
}

impl ChannelPanoramaProvider {
    pub fn new(game_id: String, requests: UnboundedSender<LookupRequest>) -> Self {
        Self { game_id, requests }
    }
}

impl PanoramaProvider for ChannelPanoramaProvider {
    fn find_valid_location(&mut self, ticket: LookupTicket) {
        let request = LookupRequest {
            game_id: self.game_id.clone(),
            ticket,
        };
        if self.requests.send(request).is_err() {
            tracing::error!(
                task = "lookup_not_sent",
                game_id = %self.game_id,
                lookup_id = ticket.id,
            );
        }
    }
}
