//! JSON command scripts for driving a session without a UI.

use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    composition::model::{MediaKind, MediaSource},
    edit::geometry::EditField,
    eval::resolver::RenderFrame,
    foundation::error::{TimelineError, TimelineResult},
    foundation::ids::MediaId,
    session::EditorSession,
    timeline::scale::TimelineLayout,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
/// One collaborator action.
pub enum ScriptCommand {
    /// Upload media; optionally select it as the upload UI does.
    Upload {
        /// Image or video.
        kind: MediaKind,
        /// Content reference.
        source: MediaSource,
        /// Also select the new item.
        #[serde(default)]
        select: bool,
    },
    /// Select an item.
    Select {
        /// Item to select.
        id: MediaId,
    },
    /// Select nothing.
    ClearSelection,
    /// Drag-end.
    Move {
        /// Item to move.
        id: MediaId,
        /// New left edge.
        x: f64,
        /// New top edge.
        y: f64,
    },
    /// Resize-end.
    Resize {
        /// Item to resize.
        id: MediaId,
        /// New width.
        width: f64,
        /// New height.
        height: f64,
    },
    /// Replace a time window.
    SetTimeRange {
        /// Item to edit.
        id: MediaId,
        /// New start.
        start: f64,
        /// New end.
        end: f64,
    },
    /// Property-form edit with raw text.
    SetField {
        /// Item to edit.
        id: MediaId,
        /// Field name.
        field: EditField,
        /// Raw form text.
        value: String,
    },
    /// Delete an item.
    Remove {
        /// Item to delete.
        id: MediaId,
    },
    /// Start the clock.
    Play,
    /// Stop the clock.
    Stop,
    /// Stop and rewind.
    Reset,
    /// Move the time cursor.
    Seek {
        /// Target time in seconds.
        time: f64,
    },
    /// Let wall time pass.
    Advance {
        /// Elapsed seconds.
        secs: f64,
    },
    /// Emit the current render frame.
    Snapshot,
    /// Emit the current timeline layout.
    Timeline,
}

impl ScriptCommand {
    /// Snake-case op name, for diagnostics.
    pub fn op(&self) -> &'static str {
        match self {
            Self::Upload { .. } => "upload",
            Self::Select { .. } => "select",
            Self::ClearSelection => "clear_selection",
            Self::Move { .. } => "move",
            Self::Resize { .. } => "resize",
            Self::SetTimeRange { .. } => "set_time_range",
            Self::SetField { .. } => "set_field",
            Self::Remove { .. } => "remove",
            Self::Play => "play",
            Self::Stop => "stop",
            Self::Reset => "reset",
            Self::Seek { .. } => "seek",
            Self::Advance { .. } => "advance",
            Self::Snapshot => "snapshot",
            Self::Timeline => "timeline",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Output line produced while running a script.
pub enum ScriptOutput {
    /// New item id from an upload.
    Uploaded {
        /// Assigned id.
        id: MediaId,
    },
    /// Result of an `advance`.
    Advanced {
        /// Ticks applied.
        ticks: u64,
        /// Time afterwards.
        current_time: f64,
    },
    /// Render frame from a `snapshot`.
    Frame(RenderFrame),
    /// Timeline layout from a `timeline`.
    Timeline(TimelineLayout),
    /// A command was rejected; the session is unchanged.
    Error {
        /// Index of the command in the script.
        index: usize,
        /// Op name of the command.
        op: String,
        /// Error message.
        error: String,
    },
}

/// Parse a script file holding a JSON array of commands.
pub fn load_script(path: &Path) -> TimelineResult<Vec<ScriptCommand>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read script '{}'", path.display()))?;
    Ok(serde_json::from_str(&text)?)
}

/// Executes script commands against a session.
#[derive(Debug)]
pub struct ScriptRunner<'a> {
    session: &'a mut EditorSession,
    realtime: bool,
}

impl<'a> ScriptRunner<'a> {
    /// Runner that advances time instantly.
    pub fn new(session: &'a mut EditorSession) -> Self {
        Self {
            session,
            realtime: false,
        }
    }

    /// Sleep for the duration of every `advance` before applying it.
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Run every command, handing outputs to `sink`.
    ///
    /// Rejected commands become [`ScriptOutput::Error`] and the run
    /// continues. Returns the number of rejected commands.
    pub fn run(
        &mut self,
        commands: &[ScriptCommand],
        mut sink: impl FnMut(ScriptOutput),
    ) -> usize {
        let mut failures = 0;
        for (index, cmd) in commands.iter().enumerate() {
            match self.execute(cmd) {
                Ok(Some(out)) => sink(out),
                Ok(None) => {}
                Err(err) => {
                    failures += 1;
                    tracing::warn!(index, op = cmd.op(), %err, "script command rejected");
                    sink(ScriptOutput::Error {
                        index,
                        op: cmd.op().to_string(),
                        error: err.to_string(),
                    });
                }
            }
        }
        failures
    }

    /// Execute a single command.
    pub fn execute(&mut self, cmd: &ScriptCommand) -> TimelineResult<Option<ScriptOutput>> {
        let s = &mut *self.session;
        match cmd {
            ScriptCommand::Upload {
                kind,
                source,
                select,
            } => {
                let id = if *select {
                    s.import_media(*kind, source.clone())?
                } else {
                    s.upload(*kind, source.clone())?
                };
                return Ok(Some(ScriptOutput::Uploaded { id }));
            }
            ScriptCommand::Select { id } => s.select(*id)?,
            ScriptCommand::ClearSelection => s.clear_selection(),
            ScriptCommand::Move { id, x, y } => {
                s.move_to(*id, *x, *y)?;
            }
            ScriptCommand::Resize { id, width, height } => {
                s.resize_to(*id, *width, *height)?;
            }
            ScriptCommand::SetTimeRange { id, start, end } => {
                s.set_time_range(*id, *start, *end)?;
            }
            ScriptCommand::SetField { id, field, value } => {
                s.set_field(*id, *field, value)?;
            }
            ScriptCommand::Remove { id } => {
                s.remove(*id)?;
            }
            ScriptCommand::Play => {
                s.play();
            }
            ScriptCommand::Stop => s.stop(),
            ScriptCommand::Reset => s.reset(),
            ScriptCommand::Seek { time } => s.seek(*time)?,
            ScriptCommand::Advance { secs } => {
                let elapsed = Duration::try_from_secs_f64(*secs).map_err(|_| {
                    TimelineError::validation(format!(
                        "advance secs {secs} must be finite and >= 0"
                    ))
                })?;
                if self.realtime {
                    std::thread::sleep(elapsed);
                }
                let ticks = s.advance(elapsed);
                return Ok(Some(ScriptOutput::Advanced {
                    ticks,
                    current_time: s.clock().current_time(),
                }));
            }
            ScriptCommand::Snapshot => return Ok(Some(ScriptOutput::Frame(s.render()))),
            ScriptCommand::Timeline => return Ok(Some(ScriptOutput::Timeline(s.timeline()?))),
        }
        Ok(None)
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
