use crate::game::config::GameConfig;
use crate::locations::resolver::LookupRequest;
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub lookups: UnboundedSender<LookupRequest>,
    pub config: Arc<GameConfig>,
}

pub struct RequestContext {
    pub game_id: String,
}

/// The receiver belongs to the lookup resolver task.
pub fn init(
    config: GameConfig,
) -> (
    AppContext<HashMapSessionsStorage>,
    UnboundedReceiver<LookupRequest>,
) {
    let (lookups, lookup_requests) = mpsc::unbounded_channel();
    let app_context = AppContext {
        sessions: HashMapSessionsStorage::default(),
        lookups,
        config: Arc::new(config),
    };
    (app_context, lookup_requests)
}
