//! Session configuration.

use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::composition::model::MediaKind;
use crate::foundation::core::{
    DEFAULT_MAX_TIMELINE_SECS, Point, Size, TimeRange, validate_position, validate_size,
};
use crate::foundation::error::{TimelineError, TimelineResult};

/// Options controlling an [`EditorSession`](crate::EditorSession).
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionOpts {
    /// Wall-clock interval between clock ticks, in milliseconds.
    pub tick_interval_ms: u64,
    /// Logical seconds added to the current time on every tick.
    pub tick_step_secs: f64,
    /// Lower bound of the timeline extent (loop point and scale), in seconds.
    pub min_timeline_secs: f64,
    /// Upper bound on every time value: item end times and seek targets.
    pub max_timeline_secs: f64,
    /// Vertical distance between timeline bar rows, in pixels.
    pub timeline_row_spacing_px: f64,
    /// Step of the property form's time inputs; also the gap enforced between
    /// a start time and the suggested lowest end time.
    pub form_time_step_secs: f64,
    /// Geometry given to freshly uploaded media.
    pub upload: UploadDefaults,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            tick_step_secs: 0.1,
            min_timeline_secs: 10.0,
            max_timeline_secs: DEFAULT_MAX_TIMELINE_SECS,
            timeline_row_spacing_px: 8.0,
            form_time_step_secs: 0.1,
            upload: UploadDefaults::default(),
        }
    }
}

/// Most ticks one pass from zero to `max_timeline_secs` may take.
pub const MAX_TICKS_PER_LOOP: f64 = 10_000_000.0;

impl SessionOpts {
    /// Load options from a JSON file.
    pub fn from_path(path: &Path) -> TimelineResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read session config '{}'", path.display()))?;
        let opts: Self = serde_json::from_str(&text)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Tick cadence as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject configurations the clock or mapper cannot run with.
    pub fn validate(&self) -> TimelineResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(TimelineError::validation("tick_interval_ms must be > 0"));
        }
        for (name, v) in [
            ("tick_step_secs", self.tick_step_secs),
            ("min_timeline_secs", self.min_timeline_secs),
            ("max_timeline_secs", self.max_timeline_secs),
            ("form_time_step_secs", self.form_time_step_secs),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(TimelineError::validation(format!(
                    "{name} must be a positive finite number, got {v}"
                )));
            }
        }
        if self.max_timeline_secs < self.min_timeline_secs {
            return Err(TimelineError::validation(format!(
                "max_timeline_secs {} is below min_timeline_secs {}",
                self.max_timeline_secs, self.min_timeline_secs
            )));
        }
        if self.max_timeline_secs / self.tick_step_secs > MAX_TICKS_PER_LOOP {
            return Err(TimelineError::validation(format!(
                "max_timeline_secs {} needs more than {MAX_TICKS_PER_LOOP} ticks of {}s",
                self.max_timeline_secs, self.tick_step_secs
            )));
        }
        if !self.timeline_row_spacing_px.is_finite() || self.timeline_row_spacing_px < 0.0 {
            return Err(TimelineError::validation(
                "timeline_row_spacing_px must be finite and >= 0",
            ));
        }
        self.upload.validate(self.max_timeline_secs)
    }
}

/// Default geometry assigned by the upload path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UploadDefaults {
    /// Initial top-left position on the canvas.
    pub position: Point,
    /// Initial size of image items.
    pub image_size: Size,
    /// Initial size of video items.
    pub video_size: Size,
    /// Initial time window.
    pub time_range: TimeRange,
}

impl Default for UploadDefaults {
    fn default() -> Self {
        Self {
            position: Point::new(50.0, 50.0),
            image_size: Size::new(320.0, 240.0),
            video_size: Size::new(320.0, 180.0),
            time_range: TimeRange {
                start: 0.0,
                end: 10.0,
            },
        }
    }
}

impl UploadDefaults {
    /// Initial size for the given media kind.
    pub fn size_for(&self, kind: MediaKind) -> Size {
        match kind {
            MediaKind::Image => self.image_size,
            MediaKind::Video => self.video_size,
        }
    }

    fn validate(&self, max_secs: f64) -> TimelineResult<()> {
        validate_position(self.position)?;
        validate_size(self.image_size)?;
        validate_size(self.video_size)?;
        self.time_range.validate_within(max_secs)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
