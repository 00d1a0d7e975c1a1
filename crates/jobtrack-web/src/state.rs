use jobtrack::Tracker;

use crate::error::AppError;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Tracker,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    /// Runs a tracker operation on the blocking pool.
    ///
    /// Every operation opens its own SQLite connection and touches the
    /// filesystem, so none of them may run on a runtime worker.
    pub async fn run<F, T>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&Tracker) -> jobtrack::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let tracker = self.tracker.clone();
        let result = tokio::task::spawn_blocking(move || op(&tracker))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("tracker task failed: {e}")))?;
        result.map_err(AppError::from)
    }
}
