use crate::composition::model::{MediaItem, MediaPatch, NewMedia};
use crate::foundation::core::DEFAULT_MAX_TIMELINE_SECS;
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::foundation::ids::{IdGenerator, MediaId};

/// Ordered, id-keyed collection of every placed media item.
///
/// Insertion order is stacking order (later items draw on top) and timeline
/// row order. The composition is the only owner of [`MediaItem`] values;
/// everything else refers to items by [`MediaId`].
///
/// No item may end after [`max_secs`](Self::max_secs).
#[derive(Clone, Debug)]
pub struct Composition {
    items: Vec<MediaItem>,
    ids: IdGenerator,
    max_secs: f64,
}

impl Default for Composition {
    fn default() -> Self {
        Self::with_max_secs(DEFAULT_MAX_TIMELINE_SECS)
    }
}

impl Composition {
    /// Empty composition bounded at one day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty composition whose items must end by `max_secs`.
    pub fn with_max_secs(max_secs: f64) -> Self {
        Self {
            items: Vec::new(),
            ids: IdGenerator::default(),
            max_secs,
        }
    }

    /// Latest end time an item may have.
    pub fn max_secs(&self) -> f64 {
        self.max_secs
    }

    /// Insert `media` at the top of the stack under a fresh id.
    pub fn add(&mut self, media: NewMedia) -> TimelineResult<MediaId> {
        media.validate()?;
        media.time_range.validate_within(self.max_secs)?;
        let id = self.ids.next_id();
        debug_assert!(self.position_of(id).is_none());
        self.items.push(media.into_item(id));
        tracing::debug!(%id, count = self.items.len(), "media added");
        Ok(id)
    }

    /// Apply `patch` atomically: either every field changes or none does.
    pub fn update(&mut self, id: MediaId, patch: &MediaPatch) -> TimelineResult<&MediaItem> {
        let idx = self.position_of(id).ok_or_else(|| TimelineError::not_found(id))?;
        let next = patch
            .apply_to(&self.items[idx])
            .and_then(|next| {
                next.time_range.validate_within(self.max_secs)?;
                Ok(next)
            })
            .inspect_err(|err| {
                tracing::warn!(%id, %err, "media update rejected");
            })?;
        self.items[idx] = next;
        tracing::debug!(%id, ?patch, "media updated");
        Ok(&self.items[idx])
    }

    /// Look up an item.
    pub fn get(&self, id: MediaId) -> TimelineResult<&MediaItem> {
        self.position_of(id)
            .map(|idx| &self.items[idx])
            .ok_or_else(|| TimelineError::not_found(id))
    }

    /// Whether `id` names a live item.
    pub fn contains(&self, id: MediaId) -> bool {
        self.position_of(id).is_some()
    }

    /// Remove an item, preserving the order of the rest.
    pub fn remove(&mut self, id: MediaId) -> TimelineResult<MediaItem> {
        let idx = self.position_of(id).ok_or_else(|| TimelineError::not_found(id))?;
        let item = self.items.remove(idx);
        tracing::debug!(%id, count = self.items.len(), "media removed");
        Ok(item)
    }

    /// Items in stacking order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Row/stack index of an item.
    pub fn position_of(&self, id: MediaId) -> Option<usize> {
        self.items.iter().position(|it| it.id == id)
    }

    /// Latest end time across all items, floored at `floor_secs`.
    ///
    /// This single value is both the clock's loop point and the timeline's
    /// full-scale time.
    pub fn extent_secs(&self, floor_secs: f64) -> f64 {
        self.items
            .iter()
            .map(|it| it.time_range.end)
            .fold(floor_secs, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/store.rs"]
mod tests;
