use crate::{
    composition::model::{MediaItem, MediaKind, MediaSource},
    composition::selection::Selection,
    composition::store::Composition,
    foundation::core::{Point, Size, TimeRange},
    foundation::ids::MediaId,
    playback::clock::Phase,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything the canvas needs to draw one state of the session.
pub struct RenderFrame {
    /// Clock time the frame was resolved at.
    pub current_time: f64,
    /// Clock phase the frame was resolved at.
    pub phase: Phase,
    /// Live selection, if any.
    pub selected: Option<MediaId>,
    /// Items to draw, bottom to top.
    pub items: Vec<RenderItem>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One item in a [`RenderFrame`].
pub struct RenderItem {
    /// Item identifier.
    pub id: MediaId,
    /// Image or video.
    pub kind: MediaKind,
    /// Content reference.
    pub source: MediaSource,
    /// Top-left position.
    pub position: Point,
    /// Drawn size.
    pub size: Size,
    /// Item's time window.
    pub time_range: TimeRange,
    /// Whether `current_time` falls inside the window. Always true while
    /// playing, since out-of-window items are dropped then.
    pub in_window: bool,
    /// Whether this is the selected item.
    pub selected: bool,
}

/// Stateless resolver from composition + clock state to a render set.
pub struct Resolver;

impl Resolver {
    #[tracing::instrument(skip(comp, selection), fields(items = comp.len()))]
    /// Resolve the render set.
    ///
    /// While playing only items whose window contains `current_time` are
    /// included. While idle every item is included so it can be positioned
    /// regardless of the time cursor. Order is insertion order.
    pub fn resolve(
        comp: &Composition,
        current_time: f64,
        phase: Phase,
        selection: &Selection,
    ) -> RenderFrame {
        let items = comp
            .items()
            .iter()
            .filter_map(|item| {
                let in_window = is_visible(item, current_time);
                if phase == Phase::Playing && !in_window {
                    return None;
                }
                Some(RenderItem {
                    id: item.id(),
                    kind: item.kind(),
                    source: item.source().clone(),
                    position: item.position,
                    size: item.size,
                    time_range: item.time_range,
                    in_window,
                    selected: selection.is_selected(item.id()),
                })
            })
            .collect();

        RenderFrame {
            current_time,
            phase,
            selected: selection.live_id(comp),
            items,
        }
    }
}

/// Whether `item`'s window contains `time`, both ends inclusive.
pub fn is_visible(item: &MediaItem, time: f64) -> bool {
    item.time_range.contains(time)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/resolver.rs"]
mod tests;
