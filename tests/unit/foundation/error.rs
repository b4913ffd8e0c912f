use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TimelineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TimelineError::not_found(MediaId::from_raw(7))
            .to_string()
            .contains("media not found: media-7")
    );
    assert!(
        TimelineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn kind_predicates() {
    assert!(TimelineError::validation("x").is_validation());
    assert!(!TimelineError::validation("x").is_not_found());
    assert!(TimelineError::not_found(MediaId::from_raw(1)).is_not_found());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TimelineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = TimelineError::from(err);
    assert!(matches!(err, TimelineError::Serde(_)));
}
