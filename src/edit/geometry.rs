//! Validated position, size and time-window edits.
//!
//! Every entry point routes through [`Composition::update`], so a rejected
//! edit leaves the item exactly as it was.

use std::{fmt, str::FromStr};

use crate::{
    composition::model::{MediaItem, MediaPatch},
    composition::store::Composition,
    foundation::error::{TimelineError, TimelineResult},
    foundation::ids::MediaId,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Numeric property exposed by the property form.
pub enum EditField {
    /// Left edge.
    X,
    /// Top edge.
    Y,
    /// Width in pixels.
    Width,
    /// Height in pixels.
    Height,
    /// Window start in seconds.
    #[serde(alias = "start_time")]
    StartTime,
    /// Window end in seconds.
    #[serde(alias = "end_time")]
    EndTime,
}

impl EditField {
    /// Form name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
            Self::StartTime => "startTime",
            Self::EndTime => "endTime",
        }
    }

    /// Current value of this field on `item`.
    pub fn read(self, item: &MediaItem) -> f64 {
        match self {
            Self::X => item.position.x,
            Self::Y => item.position.y,
            Self::Width => item.size.width,
            Self::Height => item.size.height,
            Self::StartTime => item.time_range.start,
            Self::EndTime => item.time_range.end,
        }
    }
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditField {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "startTime" | "start_time" => Ok(Self::StartTime),
            "endTime" | "end_time" => Ok(Self::EndTime),
            other => Err(TimelineError::validation(format!(
                "unknown property field '{other}'"
            ))),
        }
    }
}

/// Move an item's top-left corner.
pub fn move_to(comp: &mut Composition, id: MediaId, x: f64, y: f64) -> TimelineResult<&MediaItem> {
    comp.update(id, &MediaPatch::position(x, y))
}

/// Resize an item. Both dimensions must be positive.
pub fn resize_to(
    comp: &mut Composition,
    id: MediaId,
    width: f64,
    height: f64,
) -> TimelineResult<&MediaItem> {
    comp.update(id, &MediaPatch::size(width, height))
}

/// Replace an item's time window. The pair is validated as a whole.
pub fn set_time_range(
    comp: &mut Composition,
    id: MediaId,
    start: f64,
    end: f64,
) -> TimelineResult<&MediaItem> {
    comp.update(id, &MediaPatch::time_range(start, end))
}

/// Apply a raw form value to one field.
///
/// The text is coerced to a number first; the remaining fields of the same
/// group keep their current values and the result is validated atomically.
pub fn set_field<'a>(
    comp: &'a mut Composition,
    id: MediaId,
    field: EditField,
    raw: &str,
) -> TimelineResult<&'a MediaItem> {
    let value = coerce_number(field, raw)?;
    let item = comp.get(id)?;
    let patch = match field {
        EditField::X => MediaPatch::position(value, item.position.y),
        EditField::Y => MediaPatch::position(item.position.x, value),
        EditField::Width => MediaPatch::size(value, item.size.height),
        EditField::Height => MediaPatch::size(item.size.width, value),
        EditField::StartTime => MediaPatch {
            start: Some(value),
            ..MediaPatch::default()
        },
        EditField::EndTime => MediaPatch {
            end: Some(value),
            ..MediaPatch::default()
        },
    };
    comp.update(id, &patch)
}

/// Smallest end time the form should offer for a given start time.
pub fn end_time_lower_bound(start: f64, step_secs: f64) -> f64 {
    start + step_secs
}

fn coerce_number(field: EditField, raw: &str) -> TimelineResult<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        TimelineError::validation(format!("{field}: '{trimmed}' is not a number"))
    })?;
    if !value.is_finite() {
        return Err(TimelineError::validation(format!(
            "{field}: '{trimmed}' is not a finite number"
        )));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/unit/edit/geometry.rs"]
mod tests;
