use super::*;
use crate::config::SessionOpts;

fn parse(json: &str) -> Vec<ScriptCommand> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn commands_parse_from_json() {
    let cmds = parse(
        r#"[
            { "op": "upload", "kind": "video", "source": "clip.mp4", "select": true },
            { "op": "set_field", "id": "media-1", "field": "startTime", "value": "1.5" },
            { "op": "advance", "secs": 0.5 },
            { "op": "snapshot" }
        ]"#,
    );
    assert_eq!(cmds.len(), 4);
    assert_eq!(cmds[0].op(), "upload");
    assert_eq!(
        cmds[1],
        ScriptCommand::SetField {
            id: MediaId::from_raw(1),
            field: EditField::StartTime,
            value: "1.5".to_string(),
        }
    );
}

#[test]
fn runner_reports_errors_and_keeps_going() {
    let mut session = EditorSession::new(SessionOpts::default()).unwrap();
    let cmds = parse(
        r#"[
            { "op": "upload", "kind": "image", "source": "a.png" },
            { "op": "resize", "id": "media-1", "width": 0, "height": 10 },
            { "op": "select", "id": "media-9" },
            { "op": "play" },
            { "op": "advance", "secs": 0.35 },
            { "op": "snapshot" }
        ]"#,
    );
    let mut out = Vec::new();
    let failures = ScriptRunner::new(&mut session).run(&cmds, |o| out.push(o));
    assert_eq!(failures, 2);
    assert_eq!(
        out[0],
        ScriptOutput::Uploaded {
            id: MediaId::from_raw(1)
        }
    );
    assert!(matches!(out[1], ScriptOutput::Error { index: 1, .. }));
    assert!(matches!(out[2], ScriptOutput::Error { index: 2, .. }));
    assert!(matches!(out[3], ScriptOutput::Advanced { ticks: 3, .. }));
    let ScriptOutput::Frame(frame) = &out[4] else {
        panic!("expected frame, got {:?}", out[4]);
    };
    assert_eq!(frame.items.len(), 1);
    assert_eq!(frame.items[0].size.width, 320.0);
}

#[test]
fn negative_advance_is_rejected() {
    let mut session = EditorSession::new(SessionOpts::default()).unwrap();
    let err = ScriptRunner::new(&mut session)
        .execute(&ScriptCommand::Advance { secs: -1.0 })
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn outputs_serialize_with_type_tag() {
    let v = serde_json::to_value(ScriptOutput::Uploaded {
        id: MediaId::from_raw(2),
    })
    .unwrap();
    assert_eq!(v["type"], "uploaded");
    assert_eq!(v["id"], "media-2");
}
