use std::sync::mpsc;

use crate::playback::clock::{Phase, PlaybackClock};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// What happened to the clock.
pub enum PlaybackEventKind {
    /// Idle -> Playing.
    Started,
    /// Time advanced while playing.
    Ticked,
    /// Playing -> Idle by explicit stop.
    Stopped,
    /// Loop point reached: idle at zero.
    Looped,
    /// Time cursor moved by a seek.
    Seeked,
    /// Stopped and rewound by reset.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Clock state published to render collaborators.
///
/// Subscribers decide per-element playback (e.g. starting or pausing video
/// elements) from `phase`; the engine never drives render handles itself.
pub struct PlaybackEvent {
    /// Transition that produced this event.
    pub kind: PlaybackEventKind,
    /// Time after the transition.
    pub current_time: f64,
    /// Phase after the transition.
    pub phase: Phase,
}

impl PlaybackEvent {
    pub(crate) fn of(kind: PlaybackEventKind, clock: &PlaybackClock) -> Self {
        Self {
            kind,
            current_time: clock.current_time(),
            phase: clock.phase(),
        }
    }
}

/// Fan-out of [`PlaybackEvent`]s to any number of subscribers.
#[derive(Debug, Default)]
pub struct PlaybackBus {
    subscribers: Vec<mpsc::Sender<PlaybackEvent>>,
}

impl PlaybackBus {
    /// Register a subscriber. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> mpsc::Receiver<PlaybackEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber.
    pub fn publish(&mut self, event: PlaybackEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        tracing::trace!(?event, subscribers = self.subscribers.len(), "playback event");
    }

    /// Number of live subscribers as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/events.rs"]
mod tests;
