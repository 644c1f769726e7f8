//! The initializer: owns the surface, the source and the click listener.

use crate::config::UserlistConfig;
use crate::cycle::{run_cycle, CycleReport};
use crate::fetch::{HttpUserSource, UserSource};
use crate::interaction::{ClickDelegate, ClickEvent};
use crate::surface::{lock, shared, DisplaySurface, Page, SharedSurface, SurfaceError};
use std::sync::Arc;

/// A user list bound to one surface. The click listener is attached once,
/// here, and stays attached for every cycle run through [`UserList::refresh`].
pub struct UserList<S, D> {
    source: Arc<S>,
    surface: SharedSurface<D>,
    listener: ClickDelegate,
    failure_message: String,
}

impl UserList<HttpUserSource, Page> {
    /// HTTP source and an in-memory page, both taken from `cfg`.
    pub fn from_config(cfg: &UserlistConfig) -> Self {
        Self::new(
            HttpUserSource::from_config(cfg),
            Page::new(cfg.container_id.clone()),
            &cfg.container_id,
            cfg.failure_message.clone(),
        )
    }
}

impl<S, D> UserList<S, D>
where
    S: UserSource,
    D: DisplaySurface,
{
    pub fn new(
        source: S,
        surface: D,
        container_id: &str,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            source: Arc::new(source),
            surface: shared(surface),
            listener: ClickDelegate::attach(container_id),
            failure_message: failure_message.into(),
        }
    }

    /// Start a fetch cycle. Calls are independent; overlapping ones race.
    pub async fn refresh(&self) -> Result<CycleReport, SurfaceError> {
        run_cycle(Arc::clone(&self.source), &self.surface, &self.failure_message).await
    }

    /// Deliver a click to the delegated listener.
    pub fn click(&self, event: &mut ClickEvent) -> Option<String> {
        self.listener.dispatch(&*lock(&self.surface), event)
    }

    pub fn surface(&self) -> &SharedSurface<D> {
        &self.surface
    }
}
