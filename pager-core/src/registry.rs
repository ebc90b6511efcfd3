//! Process-wide paginator registry and the idle sweeper.

use std::{
    collections::HashMap,
    sync::{Arc, Weak},
    time::Duration,
};

use tokio::{sync::RwLock, task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::dispatch::Dispatcher;
use crate::session::Paginator;

/// How often the sweeper retires idle messages.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);
/// Shortest period the sweeper runs at.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Every live paginator, keyed by id.
///
/// The lock only guards the id map. Session work always runs after the
/// lock is released, so a slow session never blocks lookups or
/// registration.
#[derive(Default)]
pub struct Registry {
    paginators: RwLock<HashMap<String, Arc<Paginator>>>,
}

impl Registry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn register(&self, paginator: Arc<Paginator>) {
        let mut paginators = self.paginators.write().await;
        let id = paginator.id().to_owned();
        paginators.insert(id.clone(), paginator);

        debug!(
            paginator = %id,
            count = paginators.len(),
            "added paginator to registry"
        );
    }

    pub async fn unregister(&self, id: &str) -> Option<Arc<Paginator>> {
        let removed = self.paginators.write().await.remove(id);
        if removed.is_some() {
            debug!(paginator = %id, "removed paginator from registry");
        }
        removed
    }

    pub async fn lookup(&self, id: &str) -> Option<Arc<Paginator>> {
        self.paginators.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.paginators.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.paginators.read().await.is_empty()
    }

    /// Ask every paginator to retire its expired messages.
    ///
    /// Returns the total number of messages retired.
    pub async fn sweep(&self) -> usize {
        let snapshot: Vec<Arc<Paginator>> = self.paginators.read().await.values().cloned().collect();

        let mut retired = 0;
        for paginator in snapshot {
            retired += paginator.sweep().await;
        }
        retired
    }

    /// Dispatcher routing component events to this registry's paginators.
    pub fn dispatcher(self: &Arc<Self>) -> Dispatcher {
        Dispatcher::new(Arc::downgrade(self))
    }

    /// Spawn the background sweep, ticking every `period`.
    ///
    /// Periods shorter than [`MIN_SWEEP_INTERVAL`] are raised to it. The task
    /// stops when the returned [`Sweeper`] is shut down or the registry is
    /// dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> Sweeper {
        let period = period.max(MIN_SWEEP_INTERVAL);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_sweeper(Arc::downgrade(self), period, cancel.clone()));

        Sweeper { cancel, task }
    }
}

async fn run_sweeper(registry: Weak<Registry>, period: Duration, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let Some(registry) = registry.upgrade() else {
            break;
        };

        let retired = registry.sweep().await;
        if retired > 0 {
            debug!(retired, "sweep retired idle paginated messages");
        }
    }

    info!("paginator sweeper stopped");
}

/// Handle to the background sweep task.
pub struct Sweeper {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl Sweeper {
    /// Token that stops the sweep when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Stop the sweep and wait for the task to exit.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").finish_non_exhaustive()
    }
}
