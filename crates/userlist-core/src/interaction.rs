//! Click delegation on the list container.
//!
//! The listener is bound to the container, not to entries, so it keeps
//! working across clear/render cycles. A click on an entry suppresses the
//! default navigation and yields the entry's locator. Nothing navigates; the
//! locator is handed back for the host to act on.

use crate::surface::{DisplaySurface, EntryHandle};

/// A click inside the list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: Option<EntryHandle>,
    default_prevented: bool,
}

impl ClickEvent {
    /// Click landing on a rendered entry.
    pub fn on_entry(handle: EntryHandle) -> Self {
        Self {
            target: Some(handle),
            default_prevented: false,
        }
    }

    /// Click on the container itself, between entries.
    pub fn on_container() -> Self {
        Self {
            target: None,
            default_prevented: false,
        }
    }

    pub fn target(&self) -> Option<EntryHandle> {
        self.target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Delegated click listener for one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickDelegate {
    container_id: String,
}

impl ClickDelegate {
    pub fn attach(container_id: impl Into<String>) -> Self {
        let container_id = container_id.into();
        tracing::debug!(container = %container_id, "click listener attached");
        Self { container_id }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Handle a click. Returns the clicked entry's `href` when the click hit
    /// an entry of the current render pass; the event's default is then
    /// prevented. Other clicks pass through untouched.
    pub fn dispatch<S>(&self, surface: &S, event: &mut ClickEvent) -> Option<String>
    where
        S: DisplaySurface + ?Sized,
    {
        let entry = surface.entry(event.target()?)?;
        event.prevent_default();
        let href = entry.href.clone();
        tracing::debug!(container = %self.container_id, %href, "user entry clicked");
        Some(href)
    }
}
