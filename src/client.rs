//! Status synchronization client for the pipeline control service.
//!
//! One `SyncClient` owns the local view of remote state: a snapshot of the
//! three control-service views, replaced atomically on each successful poll,
//! plus the view filter and the pending notice queue. Mutating actions
//! (generate, upload, retry) go through the same client and schedule one
//! deferred re-sync on acceptance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::{ApiError, Transport};
use crate::model::{DashboardData, FilterState, Notice, NoticeQueue};

/// Delay between an accepted mutating action and its follow-up refresh. The
/// service processes actions asynchronously and sends no completion signal;
/// two seconds is the contract's fixed grace period, not a tunable.
pub const RESYNC_DELAY: Duration = Duration::from_millis(2_000);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("refresh failed: {0}")]
    Refresh(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Default)]
struct ViewState {
    data: Option<DashboardData>,
    last_updated: Option<DateTime<Utc>>,
    /// Sequence number of the refresh whose result is currently shown.
    applied_seq: u64,
    filter: FilterState,
    notices: NoticeQueue,
}

struct Inner {
    transport: Arc<dyn Transport>,
    state: Mutex<ViewState>,
    /// Monotonic counter; each refresh takes the next value at initiation.
    refresh_seq: AtomicU64,
    auto_refresh: Mutex<Option<JoinHandle<()>>>,
}

/// Handle to the shared sync state. Cheap to clone; every clone sees the
/// same snapshot, filter, and timer.
#[derive(Clone)]
pub struct SyncClient {
    inner: Arc<Inner>,
}

impl SyncClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                state: Mutex::new(ViewState::default()),
                refresh_seq: AtomicU64::new(0),
                auto_refresh: Mutex::new(None),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        // The lock is only ever held for plain field updates, so a poisoned
        // state is still structurally sound.
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push_notice(&self, notice: Notice) {
        self.state().notices.push(notice);
    }

    /// Fetches all three remote views concurrently and replaces the local
    /// snapshot with the result. The replacement is all-or-nothing: if any
    /// sub-fetch fails, one aggregated error notice is emitted and the
    /// previously shown snapshot stays in place. Overlapping refreshes
    /// resolve last-initiated-wins, so a late-arriving older result is
    /// discarded rather than clobbering newer data.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let seq = self.inner.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let transport = &self.inner.transport;

        let (system, content, stats) = tokio::join!(
            transport.fetch_status(),
            transport.fetch_content(),
            transport.fetch_stats(),
        );

        let (system, content, stats) = match (system, content, stats) {
            (Ok(system), Ok(content), Ok(stats)) => (system, content, stats),
            (system, content, stats) => {
                let mut failed = Vec::new();
                if let Err(e) = system {
                    warn!(error = %e, "status fetch failed");
                    failed.push("status");
                }
                if let Err(e) = content {
                    warn!(error = %e, "content fetch failed");
                    failed.push("content");
                }
                if let Err(e) = stats {
                    warn!(error = %e, "stats fetch failed");
                    failed.push("stats");
                }
                let message = format!("Refresh failed ({})", failed.join(", "));
                self.push_notice(Notice::error(message.clone()));
                return Err(ClientError::Refresh(message));
            }
        };

        let mut state = self.state();
        if seq > state.applied_seq {
            state.data = Some(DashboardData {
                system,
                content,
                stats,
            });
            state.last_updated = Some(Utc::now());
            state.applied_seq = seq;
            debug!(seq, "snapshot applied");
        } else {
            debug!(seq, applied = state.applied_seq, "stale refresh discarded");
        }
        Ok(())
    }

    /// Updates the local view filter. Purely local; no request is issued and
    /// the loaded content collection is untouched.
    pub fn set_filter(&self, theme: &str, status: &str) {
        let mut state = self.state();
        state.filter = FilterState {
            theme: theme.trim().to_string(),
            status: status.trim().to_string(),
        };
    }

    pub fn filter(&self) -> FilterState {
        self.state().filter.clone()
    }

    /// Point-in-time copy of the current snapshot, if one has been applied.
    pub fn snapshot(&self) -> Option<DashboardData> {
        self.state().data.clone()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.state().last_updated
    }

    /// Drains pending notices for display.
    pub fn take_notices(&self) -> Vec<Notice> {
        self.state().notices.drain()
    }

    /// Asks the service to generate `count` new videos for `theme`.
    /// Validation happens before any request leaves the client; on remote
    /// acceptance exactly one follow-up refresh runs after [`RESYNC_DELAY`].
    pub async fn request_generation(&self, count: u32, theme: &str) -> Result<(), ClientError> {
        let theme = theme.trim();
        if count == 0 {
            return Err(self.invalid("video count must be at least 1"));
        }
        if theme.is_empty() {
            return Err(self.invalid("a content theme is required"));
        }

        match self.inner.transport.generate_content(count, theme).await {
            Ok(()) => {
                self.push_notice(Notice::info(format!(
                    "Generation of {count} \"{theme}\" video(s) started"
                )));
                self.schedule_resync();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, count, theme, "generation request rejected");
                self.push_notice(Notice::error("Generation request failed"));
                Err(e.into())
            }
        }
    }

    /// Triggers an upload pass over every currently queued item.
    pub async fn request_upload_all(&self) -> Result<(), ClientError> {
        match self.inner.transport.upload_queue().await {
            Ok(()) => {
                self.push_notice(Notice::info("Upload of all queued items started"));
                self.schedule_resync();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "upload-queue request rejected");
                self.push_notice(Notice::error("Upload request failed"));
                Err(e.into())
            }
        }
    }

    /// Uploads one item. An unknown id comes back as a plain non-success
    /// status and surfaces as the same generic failure notice.
    pub async fn request_upload(&self, id: &str) -> Result<(), ClientError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(self.invalid("a content id is required"));
        }

        match self.inner.transport.upload_item(id).await {
            Ok(()) => {
                self.push_notice(Notice::info(format!("Upload of {id} started")));
                self.schedule_resync();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, id, "upload request rejected");
                self.push_notice(Notice::error(format!("Upload failed for {id}")));
                Err(e.into())
            }
        }
    }

    /// Re-runs the pipeline for one failed item.
    pub async fn request_retry(&self, id: &str) -> Result<(), ClientError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(self.invalid("a content id is required"));
        }

        match self.inner.transport.retry_item(id).await {
            Ok(()) => {
                self.push_notice(Notice::info(format!("Retry of {id} started")));
                self.schedule_resync();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, id, "retry request rejected");
                self.push_notice(Notice::error(format!("Retry failed for {id}")));
                Err(e.into())
            }
        }
    }

    /// Starts periodic refreshing. Calling this while a timer is already
    /// running replaces it; there is never more than one periodic timer.
    pub fn start_auto_refresh(&self, interval: Duration) {
        // tokio::time::interval panics on a zero period.
        let interval = interval.max(Duration::from_millis(1));
        let client = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // interval's first tick completes immediately; the periodic
            // cadence starts one full period out.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                // Each tick only initiates a refresh. The fetch runs in its
                // own task so stopping the timer never cancels an in-flight
                // request.
                let tick_client = client.clone();
                tokio::spawn(async move {
                    let _ = tick_client.refresh().await;
                });
            }
        });

        let mut slot = self
            .inner
            .auto_refresh
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Stops the periodic timer. In-flight fetches complete and apply their
    /// result. Calling this with no timer running is a no-op.
    pub fn stop_auto_refresh(&self) {
        let mut slot = self
            .inner
            .auto_refresh
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }

    fn invalid(&self, message: &str) -> ClientError {
        self.push_notice(Notice::error(message));
        ClientError::InvalidRequest(message.to_string())
    }

    fn schedule_resync(&self) {
        let client = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(RESYNC_DELAY).await;
            let _ = client.refresh().await;
        });
    }
}
