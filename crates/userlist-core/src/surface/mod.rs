//! Display surface: the list container entries are rendered into, plus the
//! alert channel failures are reported on.
//!
//! The surface is an explicit handle owned by whoever initializes the list
//! and passed to the renderer, notifier and click listener. [`Page`] is the
//! in-memory implementation; it can export its container as HTML.

mod html;
mod page;

pub use page::Page;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// One rendered list entry: a link to `href` labelled `nickname`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub href: String,
    pub nickname: String,
}

impl RenderedEntry {
    pub fn new(href: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            nickname: nickname.into(),
        }
    }
}

/// Reference to an appended entry. Only valid for the render pass that
/// created it; once the container is cleared it resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle {
    pub(crate) generation: u64,
    pub(crate) index: usize,
}

impl EntryHandle {
    /// Position of the entry in its container.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("container #{0} not found on the page")]
    MissingContainer(String),
}

pub trait DisplaySurface {
    /// Remove every rendered entry. Handles from earlier passes become stale.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Append one entry at the end of the container.
    fn append(&mut self, entry: RenderedEntry) -> Result<EntryHandle, SurfaceError>;

    /// Resolve a handle from the current render pass.
    fn entry(&self, handle: EntryHandle) -> Option<&RenderedEntry>;

    /// Entries currently rendered, in display order.
    fn entries(&self) -> &[RenderedEntry];

    /// Blocking, user-acknowledged notice.
    fn alert(&mut self, message: &str);
}

/// Surface shared between the initializer and concurrently running cycles.
/// Locked per step, never across a fetch.
pub type SharedSurface<S> = Arc<Mutex<S>>;

pub fn shared<S: DisplaySurface>(surface: S) -> SharedSurface<S> {
    Arc::new(Mutex::new(surface))
}

/// Lock a shared surface. A panic in another holder doesn't invalidate the
/// entries, so poisoning is ignored.
pub fn lock<S>(surface: &SharedSurface<S>) -> MutexGuard<'_, S> {
    surface.lock().unwrap_or_else(PoisonError::into_inner)
}
