//! Renderer: one list entry per item that has a nickname.

use crate::collection::Collection;
use crate::surface::{DisplaySurface, EntryHandle, RenderedEntry, SurfaceError};

/// Append an entry for every item carrying a `nickname` field record, in
/// collection order. Items without one are skipped. Never removes entries.
pub fn render_users<S>(
    surface: &mut S,
    collection: &Collection,
) -> Result<Vec<EntryHandle>, SurfaceError>
where
    S: DisplaySurface + ?Sized,
{
    let mut handles = Vec::with_capacity(collection.items.len());
    for item in &collection.items {
        let Some(nickname) = item.nickname() else {
            tracing::debug!(href = %item.href, "item has no nickname, skipped");
            continue;
        };
        handles.push(surface.append(RenderedEntry::new(&item.href, nickname))?);
    }
    Ok(handles)
}
