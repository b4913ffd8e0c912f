//! Orchestration layer composing the core operations for collaborators.
//!
//! The store, clock, selection and mapper stay independent; the session
//! only wires them together and publishes clock state. Combined actions such
//! as "upload and select" are spelled out here as two separate core calls.

use std::{sync::mpsc, time::Duration};

use crate::{
    composition::model::{MediaItem, MediaKind, MediaPatch, MediaSource, NewMedia},
    composition::selection::Selection,
    composition::store::Composition,
    config::SessionOpts,
    edit::geometry::{self, EditField},
    eval::resolver::{RenderFrame, Resolver},
    foundation::error::{TimelineError, TimelineResult},
    foundation::ids::MediaId,
    playback::cadence::Cadence,
    playback::clock::{PlaybackClock, TickOutcome, TickToken},
    playback::events::{PlaybackBus, PlaybackEvent, PlaybackEventKind},
    timeline::scale::TimelineLayout,
};

/// One editing session: composition, clock, selection and subscribers.
#[derive(Debug)]
pub struct EditorSession {
    opts: SessionOpts,
    comp: Composition,
    clock: PlaybackClock,
    selection: Selection,
    cadence: Cadence,
    bus: PlaybackBus,
}

impl EditorSession {
    /// Empty session.
    pub fn new(opts: SessionOpts) -> TimelineResult<Self> {
        opts.validate()?;
        Ok(Self {
            comp: Composition::with_max_secs(opts.max_timeline_secs),
            clock: PlaybackClock::new(&opts),
            selection: Selection::default(),
            cadence: Cadence::new(opts.tick_interval()),
            bus: PlaybackBus::default(),
            opts,
        })
    }

    /// Options the session was built with.
    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    /// The composition.
    pub fn composition(&self) -> &Composition {
        &self.comp
    }

    /// The clock.
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// The selection cursor.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected item, if it still exists.
    pub fn selected_item(&self) -> Option<&MediaItem> {
        self.selection.resolve(&self.comp)
    }

    /// Receive every future [`PlaybackEvent`].
    pub fn subscribe(&mut self) -> mpsc::Receiver<PlaybackEvent> {
        self.bus.subscribe()
    }

    // --- composition -----------------------------------------------------

    /// Place new media with the configured default geometry.
    pub fn upload(&mut self, kind: MediaKind, source: MediaSource) -> TimelineResult<MediaId> {
        let media = NewMedia::with_defaults(kind, source, &self.opts.upload);
        let id = self.comp.add(media)?;
        tracing::info!(%id, kind = kind.label(), "media uploaded");
        Ok(id)
    }

    /// Upload, then select the new item.
    pub fn import_media(&mut self, kind: MediaKind, source: MediaSource) -> TimelineResult<MediaId> {
        let id = self.upload(kind, source)?;
        self.select(id)?;
        Ok(id)
    }

    /// Remove an item. A selection pointing at it is cleared.
    pub fn remove(&mut self, id: MediaId) -> TimelineResult<MediaItem> {
        let item = self.comp.remove(id)?;
        self.selection.prune(&self.comp);
        Ok(item)
    }

    /// Select an item. A stale id clears the selection and reports `NotFound`.
    pub fn select(&mut self, id: MediaId) -> TimelineResult<()> {
        if !self.comp.contains(id) {
            self.selection.clear();
            return Err(TimelineError::not_found(id));
        }
        self.selection.select(id);
        tracing::debug!(%id, "selected");
        Ok(())
    }

    /// Select nothing.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- geometry ----------------------------------------------------------

    /// Drag-end: move an item.
    pub fn move_to(&mut self, id: MediaId, x: f64, y: f64) -> TimelineResult<&MediaItem> {
        geometry::move_to(&mut self.comp, id, x, y)
    }

    /// Resize-end: resize an item.
    pub fn resize_to(&mut self, id: MediaId, width: f64, height: f64) -> TimelineResult<&MediaItem> {
        geometry::resize_to(&mut self.comp, id, width, height)
    }

    /// Replace an item's time window.
    pub fn set_time_range(&mut self, id: MediaId, start: f64, end: f64) -> TimelineResult<&MediaItem> {
        geometry::set_time_range(&mut self.comp, id, start, end)
    }

    /// Property-form edit with raw text.
    pub fn set_field(&mut self, id: MediaId, field: EditField, raw: &str) -> TimelineResult<&MediaItem> {
        geometry::set_field(&mut self.comp, id, field, raw)
    }

    /// Apply a patch, then select the edited item.
    pub fn edit_and_select(&mut self, id: MediaId, patch: &MediaPatch) -> TimelineResult<()> {
        self.comp.update(id, patch)?;
        self.select(id)
    }

    /// Lowest end time the property form should offer for an item.
    pub fn end_time_lower_bound(&self, id: MediaId) -> TimelineResult<f64> {
        let item = self.comp.get(id)?;
        Ok(geometry::end_time_lower_bound(
            item.time_range.start,
            self.opts.form_time_step_secs,
        ))
    }

    // --- playback ----------------------------------------------------------

    /// Start playing. Idempotent while already playing.
    pub fn play(&mut self) -> TickToken {
        let was_playing = self.clock.is_playing();
        let token = self.clock.start();
        if !was_playing {
            self.cadence.reset();
            self.publish(PlaybackEventKind::Started);
        }
        token
    }

    /// Stop playing. Idempotent while idle.
    pub fn stop(&mut self) {
        if self.clock.stop() {
            self.cadence.reset();
            self.publish(PlaybackEventKind::Stopped);
        }
    }

    /// Stop and rewind to zero.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.cadence.reset();
        self.publish(PlaybackEventKind::Reset);
    }

    /// Move the time cursor.
    pub fn seek(&mut self, time: f64) -> TimelineResult<()> {
        self.clock.seek(time)?;
        self.publish(PlaybackEventKind::Seeked);
        Ok(())
    }

    /// Deliver one tick from a scheduler holding `token`.
    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        let outcome = self.clock.tick(token, &self.comp);
        match outcome {
            TickOutcome::Advanced(_) => self.publish(PlaybackEventKind::Ticked),
            TickOutcome::Looped => {
                self.cadence.reset();
                self.publish(PlaybackEventKind::Looped);
            }
            TickOutcome::Stale => tracing::trace!("stale tick ignored"),
        }
        outcome
    }

    /// Feed elapsed wall time and apply every tick that became due.
    ///
    /// Returns the number of ticks that changed the clock. Ticks due after a
    /// loop are dropped since the clock is idle by then.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let Some(token) = self.clock.active_token() else {
            self.cadence.reset();
            return 0;
        };
        let due = self.cadence.due(elapsed);
        let mut applied = 0;
        for _ in 0..due {
            match self.tick(token) {
                TickOutcome::Advanced(_) => applied += 1,
                TickOutcome::Looped => {
                    applied += 1;
                    break;
                }
                TickOutcome::Stale => break,
            }
        }
        applied
    }

    // --- views -------------------------------------------------------------

    /// Resolve what the canvas draws right now.
    pub fn render(&self) -> RenderFrame {
        Resolver::resolve(
            &self.comp,
            self.clock.current_time(),
            self.clock.phase(),
            &self.selection,
        )
    }

    /// Lay out the timeline view right now.
    pub fn timeline(&self) -> TimelineResult<TimelineLayout> {
        TimelineLayout::build(
            &self.comp,
            self.clock.current_time(),
            &self.selection,
            self.opts.min_timeline_secs,
            self.opts.timeline_row_spacing_px,
        )
    }

    fn publish(&mut self, kind: PlaybackEventKind) {
        self.bus.publish(PlaybackEvent::of(kind, &self.clock));
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
