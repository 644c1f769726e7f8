//! In-memory page with one list container and an alert log.

use super::{DisplaySurface, EntryHandle, RenderedEntry, SurfaceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    container_id: String,
    /// None when the page has no element with `container_id`.
    container: Option<Vec<RenderedEntry>>,
    /// Bumped on every clear so stale handles stop resolving.
    generation: u64,
    alerts: Vec<String>,
}

impl Page {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            container: Some(Vec::new()),
            generation: 0,
            alerts: Vec::new(),
        }
    }

    /// A page that lacks the list container; appends fail.
    pub fn without_container(container_id: impl Into<String>) -> Self {
        Self {
            container: None,
            ..Self::new(container_id)
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain alerts once the host has shown them.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

impl DisplaySurface for Page {
    fn clear(&mut self) -> Result<(), SurfaceError> {
        // Emptying a missing element is a no-op; only appends fault.
        if let Some(entries) = self.container.as_mut() {
            entries.clear();
        }
        self.generation += 1;
        Ok(())
    }

    fn append(&mut self, entry: RenderedEntry) -> Result<EntryHandle, SurfaceError> {
        let generation = self.generation;
        let Some(entries) = self.container.as_mut() else {
            return Err(SurfaceError::MissingContainer(self.container_id.clone()));
        };
        entries.push(entry);
        Ok(EntryHandle {
            generation,
            index: entries.len() - 1,
        })
    }

    fn entry(&self, handle: EntryHandle) -> Option<&RenderedEntry> {
        if handle.generation != self.generation {
            return None;
        }
        self.container.as_ref()?.get(handle.index)
    }

    fn entries(&self) -> &[RenderedEntry] {
        self.container.as_deref().unwrap_or(&[])
    }

    fn alert(&mut self, message: &str) {
        tracing::info!(%message, "alert");
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_resolvable_handles() {
        let mut page = Page::new("userlist");
        let a = page.append(RenderedEntry::new("/u/1", "one")).unwrap();
        let b = page.append(RenderedEntry::new("/u/2", "two")).unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(page.entry(b).unwrap().nickname, "two");
        assert_eq!(page.entries().len(), 2);
    }

    #[test]
    fn clear_empties_and_invalidates_handles() {
        let mut page = Page::new("userlist");
        let old = page.append(RenderedEntry::new("/u/1", "one")).unwrap();
        page.clear().unwrap();
        assert!(page.entries().is_empty());
        assert!(page.entry(old).is_none());

        let new = page.append(RenderedEntry::new("/u/2", "two")).unwrap();
        assert_eq!(new.index(), old.index());
        assert!(page.entry(old).is_none());
        assert_eq!(page.entry(new).unwrap().href, "/u/2");
    }

    #[test]
    fn missing_container_faults_on_append_only() {
        let mut page = Page::without_container("userlist");
        assert!(!page.has_container());
        page.clear().unwrap();
        let err = page.append(RenderedEntry::new("/u/1", "one")).unwrap_err();
        assert_eq!(err, SurfaceError::MissingContainer("userlist".to_string()));
        assert_eq!(err.to_string(), "container #userlist not found on the page");
        assert!(page.entries().is_empty());
    }

    #[test]
    fn alerts_accumulate_until_taken() {
        let mut page = Page::new("userlist");
        page.alert("first");
        page.alert("second");
        assert_eq!(page.alerts(), ["first", "second"]);
        assert_eq!(page.take_alerts().len(), 2);
        assert!(page.alerts().is_empty());
    }
}
