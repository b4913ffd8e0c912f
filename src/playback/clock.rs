use crate::composition::store::Composition;
use crate::config::SessionOpts;
use crate::foundation::error::{TimelineError, TimelineResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Whether the clock is advancing.
pub enum Phase {
    /// Stopped or paused; the canvas shows every item for editing.
    #[default]
    Idle,
    /// Advancing on every tick; only in-window items are shown.
    Playing,
}

/// Permission for one periodic tick source to advance the clock.
///
/// Issued by [`PlaybackClock::start`]. `stop` and `reset` retire the token, so
/// a tick that was already queued when playback stopped has no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickToken {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Result of delivering a tick.
pub enum TickOutcome {
    /// Time moved forward to the contained value.
    Advanced(f64),
    /// The loop point was reached; the clock is now idle at zero.
    Looped,
    /// The token was retired; nothing changed.
    Stale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClockState {
    Idle,
    Playing(TickToken),
}

/// Playback state machine: current time plus idle/playing phase.
///
/// At most one tick source is live at a time. Time only changes through
/// [`tick`](Self::tick), [`seek`](Self::seek) and [`reset`](Self::reset).
#[derive(Clone, Debug)]
pub struct PlaybackClock {
    current_time: f64,
    state: ClockState,
    generation: u64,
    step_secs: f64,
    floor_secs: f64,
    max_secs: f64,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(&SessionOpts::default())
    }
}

impl PlaybackClock {
    /// Idle clock at time zero.
    pub fn new(opts: &SessionOpts) -> Self {
        Self {
            current_time: 0.0,
            state: ClockState::Idle,
            generation: 0,
            step_secs: opts.tick_step_secs,
            floor_secs: opts.min_timeline_secs,
            max_secs: opts.max_timeline_secs,
        }
    }

    /// Current time in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            ClockState::Idle => Phase::Idle,
            ClockState::Playing(_) => Phase::Playing,
        }
    }

    /// Whether the clock is playing.
    pub fn is_playing(&self) -> bool {
        matches!(self.state, ClockState::Playing(_))
    }

    /// The live tick token, if playing.
    pub fn active_token(&self) -> Option<TickToken> {
        match self.state {
            ClockState::Idle => None,
            ClockState::Playing(token) => Some(token),
        }
    }

    /// Time at which playback loops back to zero and stops.
    pub fn loop_point(&self, comp: &Composition) -> f64 {
        comp.extent_secs(self.floor_secs)
    }

    /// Enter `Playing`. Starting while already playing returns the live token
    /// and changes nothing.
    pub fn start(&mut self) -> TickToken {
        if let ClockState::Playing(token) = self.state {
            return token;
        }
        self.generation += 1;
        let token = TickToken {
            generation: self.generation,
        };
        self.state = ClockState::Playing(token);
        tracing::debug!(time = self.current_time, generation = self.generation, "clock started");
        token
    }

    /// Enter `Idle` and retire the live token. Returns `false` when already idle.
    pub fn stop(&mut self) -> bool {
        if self.state == ClockState::Idle {
            return false;
        }
        // Bumping the generation invalidates any token handed out so far.
        self.generation += 1;
        self.state = ClockState::Idle;
        tracing::debug!(time = self.current_time, "clock stopped");
        true
    }

    /// Stop, then rewind to zero.
    pub fn reset(&mut self) {
        self.stop();
        self.current_time = 0.0;
        tracing::debug!("clock reset");
    }

    /// Move the time cursor without touching the phase.
    ///
    /// The target must lie in `0..=max_timeline_secs`.
    pub fn seek(&mut self, time: f64) -> TimelineResult<()> {
        if !time.is_finite() || time < 0.0 || time > self.max_secs {
            return Err(TimelineError::validation(format!(
                "seek time {time} must be finite and within 0..={}",
                self.max_secs
            )));
        }
        self.current_time = time;
        tracing::debug!(time, "clock seeked");
        Ok(())
    }

    /// Advance by one step on behalf of `token`.
    ///
    /// Reaching or passing the loop point stops the clock and rewinds it to
    /// zero in the same step.
    pub fn tick(&mut self, token: TickToken, comp: &Composition) -> TickOutcome {
        if self.state != ClockState::Playing(token) {
            return TickOutcome::Stale;
        }
        let next = self.current_time + self.step_secs;
        let loop_point = self.loop_point(comp);
        // A step too small to move the time would never reach the loop point.
        if next >= loop_point || next <= self.current_time {
            self.stop();
            self.current_time = 0.0;
            tracing::debug!(loop_point, "clock looped");
            return TickOutcome::Looped;
        }
        self.current_time = next;
        TickOutcome::Advanced(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
