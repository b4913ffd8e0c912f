use super::*;
use crate::composition::model::{MediaKind, MediaSource, NewMedia};
use crate::config::UploadDefaults;

fn comp_with_one() -> (Composition, MediaId) {
    let mut comp = Composition::new();
    let id = comp
        .add(NewMedia::with_defaults(
            MediaKind::Image,
            MediaSource::new("img"),
            &UploadDefaults::default(),
        ))
        .unwrap();
    (comp, id)
}

#[test]
fn select_and_clear() {
    let (comp, id) = comp_with_one();
    let mut sel = Selection::default();
    assert!(sel.resolve(&comp).is_none());
    sel.select(id);
    assert!(sel.is_selected(id));
    assert_eq!(sel.resolve(&comp).unwrap().id(), id);
    sel.clear();
    assert_eq!(sel.id(), None);
}

#[test]
fn dangling_selection_resolves_to_none() {
    let (mut comp, id) = comp_with_one();
    let mut sel = Selection::default();
    sel.select(id);
    comp.remove(id).unwrap();
    assert!(sel.resolve(&comp).is_none());
    assert_eq!(sel.live_id(&comp), None);
    assert!(sel.prune(&comp));
    assert_eq!(sel.id(), None);
    assert!(!sel.prune(&comp));
}
