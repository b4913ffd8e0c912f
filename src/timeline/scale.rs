use crate::{
    composition::model::MediaKind,
    composition::selection::Selection,
    composition::store::Composition,
    foundation::error::{TimelineError, TimelineResult},
    foundation::ids::MediaId,
};

/// Linear mapping from seconds to a 0..=100 display coordinate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimelineScale {
    max_time: f64,
    scale: f64,
}

impl TimelineScale {
    /// Scale whose full width spans `max_time` seconds.
    pub fn new(max_time: f64) -> TimelineResult<Self> {
        if !max_time.is_finite() || max_time <= 0.0 {
            return Err(TimelineError::validation(format!(
                "timeline max time {max_time} must be positive and finite"
            )));
        }
        Ok(Self {
            max_time,
            scale: 100.0 / max_time,
        })
    }

    /// Scale spanning the latest end time in `comp`, floored at `floor_secs`.
    pub fn for_composition(comp: &Composition, floor_secs: f64) -> TimelineResult<Self> {
        Self::new(comp.extent_secs(floor_secs))
    }

    /// Seconds at 100%.
    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    /// Percent per second.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Seconds to percent.
    pub fn to_percent(&self, t: f64) -> f64 {
        t * self.scale
    }

    /// Percent to seconds.
    pub fn time_at_percent(&self, percent: f64) -> f64 {
        percent / self.scale
    }
}

/// Most marker intervals a layout draws.
pub const MAX_MARKERS: u32 = 200;

/// Markers every `stride` seconds, where `stride` is the smallest 1-2-5 step
/// of whole seconds keeping the interval count within [`MAX_MARKERS`].
fn markers_for(scale: &TimelineScale) -> Vec<TimeMarker> {
    let last = scale.max_time().ceil();
    let mut stride = 1.0_f64;
    'search: loop {
        for mult in [1.0, 2.0, 5.0] {
            if last / (stride * mult) <= f64::from(MAX_MARKERS) {
                stride *= mult;
                break 'search;
            }
        }
        stride *= 10.0;
    }
    (0..=MAX_MARKERS)
        .map(|i| f64::from(i) * stride)
        .take_while(|&seconds| seconds <= last)
        .map(|seconds| TimeMarker {
            seconds,
            percent: scale.to_percent(seconds),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Whole-second tick label.
pub struct TimeMarker {
    /// Label value in whole seconds.
    pub seconds: f64,
    /// Horizontal position in percent.
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One item's bar on the timeline.
pub struct TimelineBar {
    /// Item the bar represents.
    pub id: MediaId,
    /// Kind, which picks the bar's color.
    pub kind: MediaKind,
    /// Left edge in percent.
    pub left_percent: f64,
    /// Width in percent.
    pub width_percent: f64,
    /// Row index (insertion order).
    pub row: usize,
    /// Vertical offset of the row in pixels.
    pub top_px: f64,
    /// Whether the item is selected.
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything the timeline view needs to draw.
pub struct TimelineLayout {
    /// Mapping used for every position below.
    pub scale: TimelineScale,
    /// Whole-second markers from 0 to `ceil(max_time)`, thinned to at most
    /// [`MAX_MARKERS`] + 1 labels on long timelines.
    pub markers: Vec<TimeMarker>,
    /// Current-time cursor position in percent.
    pub cursor_percent: f64,
    /// One bar per item, in row order.
    pub bars: Vec<TimelineBar>,
}

impl TimelineLayout {
    #[tracing::instrument(skip(comp, selection), fields(items = comp.len()))]
    /// Lay out markers, cursor and bars for the current state.
    pub fn build(
        comp: &Composition,
        current_time: f64,
        selection: &Selection,
        floor_secs: f64,
        row_spacing_px: f64,
    ) -> TimelineResult<Self> {
        let scale = TimelineScale::for_composition(comp, floor_secs)?;
        let markers = markers_for(&scale);
        let bars = comp
            .items()
            .iter()
            .enumerate()
            .map(|(row, item)| TimelineBar {
                id: item.id(),
                kind: item.kind(),
                left_percent: scale.to_percent(item.time_range.start),
                width_percent: scale.to_percent(item.time_range.duration()),
                row,
                top_px: row as f64 * row_spacing_px,
                selected: selection.is_selected(item.id()),
            })
            .collect();

        Ok(Self {
            scale,
            markers,
            cursor_percent: scale.to_percent(current_time),
            bars,
        })
    }

    /// Map a click at `percent` on `row` back to the item drawn there.
    pub fn hit_test(&self, percent: f64, row: usize) -> Option<MediaId> {
        self.bars
            .iter()
            .find(|b| {
                b.row == row && percent >= b.left_percent && percent <= b.left_percent + b.width_percent
            })
            .map(|b| b.id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scale.rs"]
mod tests;
