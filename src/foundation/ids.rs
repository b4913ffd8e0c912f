use std::{fmt, str::FromStr};

use crate::foundation::error::TimelineError;

const PREFIX: &str = "media-";

/// Opaque identifier of a placed media item.
///
/// Rendered and parsed as `media-<n>`. Ids are never reused within a
/// composition, even after the item they named is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaId(u64);

impl MediaId {
    /// Wrap a raw counter value. Intended for tests and diagnostics; live ids
    /// come from [`IdGenerator`].
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw counter value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl FromStr for MediaId {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix(PREFIX).ok_or_else(|| {
            TimelineError::validation(format!("media id '{s}' must start with '{PREFIX}'"))
        })?;
        let raw = digits
            .parse::<u64>()
            .map_err(|_| TimelineError::validation(format!("media id '{s}' is malformed")))?;
        Ok(Self(raw))
    }
}

impl TryFrom<String> for MediaId {
    type Error = TimelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MediaId> for String {
    fn from(id: MediaId) -> Self {
        id.to_string()
    }
}

/// Monotonic id source owned by a composition.
#[derive(Clone, Debug)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub(crate) fn next_id(&mut self) -> MediaId {
        let id = MediaId(self.next);
        // u64 cannot realistically wrap within a session.
        self.next = self.next.saturating_add(1);
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ids.rs"]
mod tests;
