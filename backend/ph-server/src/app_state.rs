use ph_lifecycle::{OperationsBroadcaster, Orchestrator};

/// Shared state for every route
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Orchestrator,
    pub broadcaster: OperationsBroadcaster,
}
