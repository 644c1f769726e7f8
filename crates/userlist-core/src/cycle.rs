//! One fetch cycle: fetch, finalize (clear), then render or notify.
//!
//! ```text
//! Idle -> Fetching -> Finalizing -> Rendering        -> Idle
//!                                 \ NotifyingFailure -> Idle
//! ```
//!
//! The surface lock is taken per step and never held across the fetch, so
//! two cycles started together interleave freely on the same surface. There
//! is no in-flight guard.

use crate::fetch::{fetch_users, FetchOutcome, UserSource};
use crate::notify::notify_failure;
use crate::render::render_users;
use crate::surface::{lock, DisplaySurface, EntryHandle, SharedSurface, SurfaceError};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    Fetching,
    Finalizing,
    Rendering,
    NotifyingFailure,
}

/// What a completed cycle did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Handles of the entries appended by this cycle, in order.
    pub handles: Vec<EntryHandle>,
    /// Items skipped for lacking a nickname.
    pub skipped: usize,
    /// True when the failure alert was raised.
    pub notified: bool,
    /// States entered, in order, ending with `Idle`.
    pub states: Vec<CycleState>,
}

impl CycleReport {
    pub fn rendered(&self) -> usize {
        self.handles.len()
    }

    fn enter(&mut self, state: CycleState) {
        tracing::debug!(?state, "fetch cycle");
        self.states.push(state);
    }
}

/// Run one cycle against `surface`.
///
/// Fetch failures end in a single alert and an `Ok` report. Only a surface
/// fault (missing container) is returned as an error; the cycle stops there.
pub async fn run_cycle<S, D>(
    source: Arc<S>,
    surface: &SharedSurface<D>,
    failure_message: &str,
) -> Result<CycleReport, SurfaceError>
where
    S: UserSource,
    D: DisplaySurface,
{
    let mut report = CycleReport::default();

    report.enter(CycleState::Fetching);
    let outcome = fetch_users(source).await;

    report.enter(CycleState::Finalizing);
    lock(surface).clear()?;

    match outcome {
        FetchOutcome::Success(collection) => {
            report.enter(CycleState::Rendering);
            let handles = render_users(&mut *lock(surface), &collection)?;
            report.skipped = collection.items.len() - handles.len();
            report.handles = handles;
        }
        FetchOutcome::Failure => {
            report.enter(CycleState::NotifyingFailure);
            notify_failure(&mut *lock(surface), failure_message);
            report.notified = true;
        }
    }

    report.enter(CycleState::Idle);
    tracing::info!(
        rendered = report.rendered(),
        skipped = report.skipped,
        notified = report.notified,
        "fetch cycle complete"
    );
    Ok(report)
}
