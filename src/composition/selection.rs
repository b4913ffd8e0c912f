use crate::composition::model::MediaItem;
use crate::composition::store::Composition;
use crate::foundation::ids::MediaId;

/// View-level cursor naming at most one selected item.
///
/// Holds an id, not the item: a selection whose item has been removed
/// resolves to nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<MediaId>,
}

impl Selection {
    /// Select `id`, replacing any previous selection.
    pub fn select(&mut self, id: MediaId) {
        self.current = Some(id);
    }

    /// Select nothing.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The raw selected id, which may be stale.
    pub fn id(&self) -> Option<MediaId> {
        self.current
    }

    /// Whether `id` is the selected id.
    pub fn is_selected(&self, id: MediaId) -> bool {
        self.current == Some(id)
    }

    /// The selected item, if it is still in `comp`.
    pub fn resolve<'a>(&self, comp: &'a Composition) -> Option<&'a MediaItem> {
        self.current.and_then(|id| comp.get(id).ok())
    }

    /// The selected id, if it is still in `comp`.
    pub fn live_id(&self, comp: &Composition) -> Option<MediaId> {
        self.current.filter(|&id| comp.contains(id))
    }

    /// Drop a dangling selection. Returns `true` if something was cleared.
    pub fn prune(&mut self, comp: &Composition) -> bool {
        match self.current {
            Some(id) if !comp.contains(id) => {
                tracing::debug!(%id, "stale selection cleared");
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/selection.rs"]
mod tests;
