use crate::config::UploadDefaults;
use crate::foundation::core::{Point, Size, TimeRange, validate_position, validate_size};
use crate::foundation::error::TimelineResult;
use crate::foundation::ids::MediaId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Kind of placed media. Fixed at creation.
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video clip.
    Video,
}

impl MediaKind {
    /// Human-readable label used by timeline bars and property panels.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Opaque reference to decoded content (data URI, path, handle key).
///
/// The upload collaborator owns the content; the engine only carries the
/// reference and never inspects, frees or duplicates what it points to.
pub struct MediaSource(String);

impl MediaSource {
    /// Wrap a content reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The raw reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One element placed on the canvas.
pub struct MediaItem {
    pub(crate) id: MediaId,
    pub(crate) kind: MediaKind,
    pub(crate) source: MediaSource,
    /// Top-left corner in canvas pixels.
    pub position: Point,
    /// Width and height in pixels, both > 0.
    pub size: Size,
    /// Visibility window in seconds.
    pub time_range: TimeRange,
}

impl MediaItem {
    /// Identifier assigned by the composition.
    pub fn id(&self) -> MediaId {
        self.id
    }

    /// Image or video.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Content reference supplied at upload.
    pub fn source(&self) -> &MediaSource {
        &self.source
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A media item that has not been inserted yet (no id).
pub struct NewMedia {
    /// Image or video.
    pub kind: MediaKind,
    /// Content reference.
    pub source: MediaSource,
    /// Initial position.
    pub position: Point,
    /// Initial size.
    pub size: Size,
    /// Initial time window.
    pub time_range: TimeRange,
}

impl NewMedia {
    /// Media with the upload path's default geometry.
    pub fn with_defaults(kind: MediaKind, source: MediaSource, defaults: &UploadDefaults) -> Self {
        Self {
            kind,
            source,
            position: defaults.position,
            size: defaults.size_for(kind),
            time_range: defaults.time_range,
        }
    }

    pub(crate) fn validate(&self) -> TimelineResult<()> {
        validate_position(self.position)?;
        validate_size(self.size)?;
        self.time_range.validate()
    }

    pub(crate) fn into_item(self, id: MediaId) -> MediaItem {
        MediaItem {
            id,
            kind: self.kind,
            source: self.source,
            position: self.position,
            size: self.size,
            time_range: self.time_range,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Partial change to a media item's mutable fields.
///
/// `start` and `end` are applied together with the item's current values and
/// the resulting pair is validated as a whole.
pub struct MediaPatch {
    /// New top-left position.
    #[serde(default)]
    pub position: Option<Point>,
    /// New size.
    #[serde(default)]
    pub size: Option<Size>,
    /// New window start.
    #[serde(default)]
    pub start: Option<f64>,
    /// New window end.
    #[serde(default)]
    pub end: Option<f64>,
}

impl MediaPatch {
    /// Patch that only moves.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            position: Some(Point::new(x, y)),
            ..Self::default()
        }
    }

    /// Patch that only resizes.
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            size: Some(Size::new(width, height)),
            ..Self::default()
        }
    }

    /// Patch that replaces the whole time window.
    pub fn time_range(start: f64, end: f64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    /// Whether applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.size.is_none() && self.start.is_none() && self.end.is_none()
    }

    /// Produce the patched copy of `item`, or the first validation failure.
    pub(crate) fn apply_to(&self, item: &MediaItem) -> TimelineResult<MediaItem> {
        let mut next = item.clone();
        if let Some(p) = self.position {
            validate_position(p)?;
            next.position = p;
        }
        if let Some(s) = self.size {
            validate_size(s)?;
            next.size = s;
        }
        if self.start.is_some() || self.end.is_some() {
            next.time_range = TimeRange::new(
                self.start.unwrap_or(item.time_range.start),
                self.end.unwrap_or(item.time_range.end),
            )?;
        }
        Ok(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
