use super::*;
use std::collections::HashSet;

#[test]
fn display_and_parse_agree() {
    let id = MediaId::from_raw(42);
    assert_eq!(id.to_string(), "media-42");
    assert_eq!("media-42".parse::<MediaId>().unwrap(), id);
    assert_eq!(" media-42 ".parse::<MediaId>().unwrap(), id);
}

#[test]
fn malformed_ids_are_validation_errors() {
    assert!("42".parse::<MediaId>().unwrap_err().is_validation());
    assert!("media-".parse::<MediaId>().unwrap_err().is_validation());
    assert!("media-x1".parse::<MediaId>().unwrap_err().is_validation());
}

#[test]
fn serde_uses_string_form() {
    let id = MediaId::from_raw(3);
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"media-3\"");
    let back: MediaId = serde_json::from_str("\"media-3\"").unwrap();
    assert_eq!(back, id);
    assert!(serde_json::from_str::<MediaId>("\"clip-3\"").is_err());
}

#[test]
fn generator_never_repeats() {
    let mut ids = IdGenerator::default();
    let seen: HashSet<MediaId> = (0..1000).map(|_| ids.next_id()).collect();
    assert_eq!(seen.len(), 1000);
}
