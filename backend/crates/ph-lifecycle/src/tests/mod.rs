
use crate::{
    Broadcaster, LifecycleEvent, LifecycleObserver, Orchestrator, RpcOperation,
};

use ph_core::{HostedContentRef, Notification, ProfileRef, RpcOutcome};
use ph_db::{DbError, ProfileCatalog, Result as DbResult};
use ph_rpc::{ProfileRpcClient, RpcError, RpcResult};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

pub(crate) const PROFILE_ID: i64 = 1;
pub(crate) const PROFILE_NAME: &str = "http-c2";
pub(crate) const CONTENT_ID: &str = "uuid-1";
pub(crate) const TARGET: &str = "/update";

/// In-memory catalog.
#[derive(Default)]
pub(crate) struct FakeCatalog {
    profiles: HashMap<i64, ProfileRef>,
    contents: HashMap<String, HostedContentRef>,
    broken: bool,
}

impl FakeCatalog {
    pub(crate) fn with_content(deleted: bool) -> Self {
        let mut catalog = Self::default();
        catalog
            .profiles
            .insert(PROFILE_ID, ProfileRef::new(PROFILE_ID, PROFILE_NAME));
        catalog.contents.insert(
            CONTENT_ID.to_string(),
            HostedContentRef::new(CONTENT_ID, deleted),
        );
        catalog
    }

    pub(crate) fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    fn check(&self) -> DbResult<()> {
        if self.broken {
            return Err(DbError::from(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileCatalog for FakeCatalog {
    async fn find_profile(&self, profile_id: i64) -> DbResult<Option<ProfileRef>> {
        self.check()?;
        Ok(self.profiles.get(&profile_id).cloned())
    }

    async fn find_content(&self, agent_file_id: &str) -> DbResult<Option<HostedContentRef>> {
        self.check()?;
        Ok(self.contents.get(agent_file_id).cloned())
    }
}

#[derive(Debug, Clone)]
pub(crate) enum FakeReply {
    Outcome(RpcOutcome),
    Transport(u16),
}

impl FakeReply {
    pub(crate) fn ok() -> Self {
        Self::Outcome(RpcOutcome::success())
    }

    pub(crate) fn refuse(error: &str) -> Self {
        Self::Outcome(RpcOutcome::failure(error))
    }

    fn to_result(&self) -> RpcResult<RpcOutcome> {
        match self {
            Self::Outcome(outcome) => Ok(outcome.clone()),
            Self::Transport(status) => Err(RpcError::status(*status)),
        }
    }
}

/// Scripted profile server that records every call it receives.
pub(crate) struct FakeRpc {
    attach: FakeReply,
    stop: FakeReply,
    start: FakeReply,
    calls: Mutex<Vec<RpcOperation>>,
}

impl FakeRpc {
    pub(crate) fn new(attach: FakeReply, stop: FakeReply, start: FakeReply) -> Self {
        Self {
            attach,
            stop,
            start,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn all_ok() -> Self {
        Self::new(FakeReply::ok(), FakeReply::ok(), FakeReply::ok())
    }

    pub(crate) fn calls(&self) -> Vec<RpcOperation> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: RpcOperation) {
        self.calls.lock().unwrap().push(operation);
    }
}

#[async_trait]
impl ProfileRpcClient for FakeRpc {
    async fn attach_content(
        &self,
        profile: &ProfileRef,
        content_id: &str,
        target_location: &str,
    ) -> RpcResult<RpcOutcome> {
        assert_eq!(profile.name, PROFILE_NAME);
        assert_eq!(content_id, CONTENT_ID);
        assert_eq!(target_location, TARGET);
        self.record(RpcOperation::Attach);
        self.attach.to_result()
    }

    async fn stop(&self, _profile: &ProfileRef) -> RpcResult<RpcOutcome> {
        self.record(RpcOperation::Stop);
        self.stop.to_result()
    }

    async fn start(&self, _profile: &ProfileRef) -> RpcResult<RpcOutcome> {
        self.record(RpcOperation::Start);
        self.start.to_result()
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(1)
    }
}

#[derive(Default)]
pub(crate) struct RecordingBroadcaster {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingBroadcaster {
    pub(crate) fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.sent().into_iter().map(|n| n.message).collect()
    }
}

impl Broadcaster for RecordingBroadcaster {
    fn broadcast(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

/// Forwards a short label for every event so tests can await the
/// background sequence.
pub(crate) struct ChannelObserver {
    sender: mpsc::UnboundedSender<String>,
}

impl LifecycleObserver for ChannelObserver {
    fn on_event(&self, event: &LifecycleEvent<'_>) {
        let label = match event {
            LifecycleEvent::ValidationRejected { error } => {
                format!("rejected:{}", error.error_code())
            }
            LifecycleEvent::AttachFailed { .. } => "attach_failed".to_string(),
            LifecycleEvent::Accepted { .. } => "accepted".to_string(),
            LifecycleEvent::RestartPhaseFailed { operation, .. } => {
                format!("restart_failed:{operation}")
            }
            LifecycleEvent::RestartCompleted { .. } => "restart_completed".to_string(),
        };
        let _ = self.sender.send(label);
    }
}

pub(crate) struct Harness {
    pub(crate) orchestrator: Orchestrator,
    pub(crate) rpc: Arc<FakeRpc>,
    pub(crate) broadcaster: Arc<RecordingBroadcaster>,
    pub(crate) events: mpsc::UnboundedReceiver<String>,
}

impl Harness {
    pub(crate) fn new(catalog: FakeCatalog, rpc: FakeRpc) -> Self {
        let rpc = Arc::new(rpc);
        let broadcaster = Arc::new(RecordingBroadcaster::default());
        let (sender, events) = mpsc::unbounded_channel();

        let orchestrator = Orchestrator::new(
            Arc::new(catalog),
            rpc.clone(),
            broadcaster.clone(),
        )
        .with_observer(Arc::new(ChannelObserver { sender }));

        Self {
            orchestrator,
            rpc,
            broadcaster,
            events,
        }
    }

    /// Waits for the background sequence to reach a terminal state.
    pub(crate) async fn restart_terminal(&mut self) -> String {
        loop {
            let label = tokio::time::timeout(Duration::from_secs(5), self.events.recv())
                .await
                .expect("restart sequence did not finish")
                .expect("observer channel closed");
            if label.starts_with("restart_") {
                return label;
            }
        }
    }

    /// Events raised so far, without waiting.
    pub(crate) fn drain_events(&mut self) -> Vec<String> {
        let mut labels = Vec::new();
        while let Ok(label) = self.events.try_recv() {
            labels.push(label);
        }
        labels
    }
}
