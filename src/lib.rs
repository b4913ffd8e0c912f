//! Timeline-synchronized composition engine.
//!
//! Image and video elements are placed on a 2D canvas, each with a position,
//! a size and a time window. A shared playback clock reveals and hides them
//! as it advances.
//!
//! # Pieces
//!
//! 1. **Store**: [`Composition`] owns every [`MediaItem`], keyed by
//!    [`MediaId`], in stacking order.
//! 2. **Clock**: [`PlaybackClock`] is an idle/playing state machine that
//!    advances by a fixed step per tick and loops to an idle zero at
//!    `max(latest end, 10s)`. Ticks carry a [`TickToken`], so ticks queued
//!    before a stop are ignored.
//! 3. **Resolver**: [`Resolver`] turns composition + time + phase into a
//!    [`RenderFrame`]. Everything is shown while idle, only in-window items
//!    while playing.
//! 4. **Edits**: [`move_to`], [`resize_to`], [`set_time_range`] and
//!    [`set_field`] validate before committing; a rejected edit changes nothing.
//! 5. **Timeline**: [`TimelineScale`] maps seconds to 0..=100 and
//!    [`TimelineLayout`] positions markers, cursor and bars.
//!
//! [`EditorSession`] wires these together for UI collaborators and publishes
//! [`PlaybackEvent`]s; [`ScriptRunner`] drives a session from JSON.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composition;
mod edit;
mod eval;
mod foundation;
mod playback;
mod timeline;

pub mod config;
pub mod script;
pub mod session;

pub use composition::model::{MediaItem, MediaKind, MediaPatch, MediaSource, NewMedia};
pub use composition::selection::Selection;
pub use composition::store::Composition;
pub use config::{SessionOpts, UploadDefaults};
pub use edit::geometry::{
    EditField, end_time_lower_bound, move_to, resize_to, set_field, set_time_range,
};
pub use eval::resolver::{RenderFrame, RenderItem, Resolver, is_visible};
pub use foundation::core::{DEFAULT_MAX_TIMELINE_SECS, Point, Size, TimeRange};
pub use foundation::error::{TimelineError, TimelineResult};
pub use foundation::ids::MediaId;
pub use playback::cadence::Cadence;
pub use playback::clock::{Phase, PlaybackClock, TickOutcome, TickToken};
pub use playback::events::{PlaybackBus, PlaybackEvent, PlaybackEventKind};
pub use script::{ScriptCommand, ScriptOutput, ScriptRunner, load_script};
pub use session::EditorSession;
pub use timeline::scale::{MAX_MARKERS, TimeMarker, TimelineBar, TimelineLayout, TimelineScale};
