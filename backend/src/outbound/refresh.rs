//! View-refresh signalling adapter.
//!
//! The domain announces which presentation paths went stale after a commit;
//! with no attached renderer in this deployment, the signal is recorded in
//! the trace stream where dashboards and tests can observe it.

use tracing::debug;

use crate::domain::ports::ViewRefresh;

/// [`ViewRefresh`] adapter that logs each invalidated path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingViewRefresh;

impl ViewRefresh for TracingViewRefresh {
    fn invalidate(&self, path: &str) {
        debug!(path, "view refresh requested");
    }
}
