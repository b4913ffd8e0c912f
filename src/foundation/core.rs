use crate::foundation::error::{TimelineError, TimelineResult};

pub use kurbo::{Point, Size};

/// Default upper bound on any time value: one day.
pub const DEFAULT_MAX_TIMELINE_SECS: f64 = 86_400.0;

/// Time window of a media item, in seconds.
///
/// Invariant: `start >= 0` and `end > start`, both finite.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeRange {
    /// First second the item is shown (inclusive).
    pub start: f64,
    /// Last second the item is shown (inclusive).
    pub end: f64,
}

impl TimeRange {
    /// Build a validated range.
    pub fn new(start: f64, end: f64) -> TimelineResult<Self> {
        let r = Self { start, end };
        r.validate()?;
        Ok(r)
    }

    /// Check the range invariant.
    pub fn validate(self) -> TimelineResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(TimelineError::validation("time range bounds must be finite"));
        }
        if self.start < 0.0 {
            return Err(TimelineError::validation(format!(
                "start time {} must be >= 0",
                self.start
            )));
        }
        if self.end <= self.start {
            return Err(TimelineError::validation(format!(
                "end time {} must be greater than start time {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Check the range invariant and that `end` does not pass `max_secs`.
    pub fn validate_within(self, max_secs: f64) -> TimelineResult<()> {
        self.validate()?;
        if self.end > max_secs {
            return Err(TimelineError::validation(format!(
                "end time {} exceeds the timeline limit of {max_secs}s",
                self.end
            )));
        }
        Ok(())
    }

    /// Window length in seconds.
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Inclusive on both ends.
    pub fn contains(self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }
}

pub(crate) fn validate_position(p: Point) -> TimelineResult<()> {
    if !p.x.is_finite() || !p.y.is_finite() {
        return Err(TimelineError::validation(format!(
            "position ({}, {}) must be finite",
            p.x, p.y
        )));
    }
    Ok(())
}

pub(crate) fn validate_size(s: Size) -> TimelineResult<()> {
    if !s.width.is_finite() || !s.height.is_finite() {
        return Err(TimelineError::validation(format!(
            "size {}x{} must be finite",
            s.width, s.height
        )));
    }
    if s.width <= 0.0 || s.height <= 0.0 {
        return Err(TimelineError::validation(format!(
            "size {}x{} must be positive in both dimensions",
            s.width, s.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
