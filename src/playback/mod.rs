//! Playback clock, tick cadence and event fan-out.

pub(crate) mod cadence;
pub(crate) mod clock;
pub(crate) mod events;
