// ============================================================
// Layer 6 — JSON Roster Store
// ============================================================
// Reads and writes the whole roster as one JSON array.
//
// File layout:
//   [
//       {
//           "name": "Иванов И.И.",
//           "group": 101,
//           "progress": "2345"
//       }
//   ]
//
// Writing:
//   - 4-space indentation
//   - non-ASCII text (Cyrillic names) is written as-is,
//     serde_json never \u-escapes it
//   - the file is truncated and rewritten in full every time
//
// Reading:
//   - a missing file is an empty roster
//   - anything that is not an array of student objects is an
//     error carrying the file path

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{fs, path::Path};

use crate::domain::student::{Roster, Student};
use crate::domain::traits::RosterStore;

const INDENT: &[u8] = b"    ";

/// Stores the roster as a pretty-printed JSON array.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRosterStore;

impl JsonRosterStore {
    pub fn new() -> Self {
        Self
    }
}

impl RosterStore for JsonRosterStore {
    fn load(&self, path: &Path) -> Result<Roster> {
        if !path.exists() {
            tracing::debug!("'{}' does not exist yet, starting with an empty roster", path.display());
            return Ok(Roster::new());
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read roster from '{}'", path.display()))?;

        let roster: Roster = serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a valid roster file", path.display()))?;

        tracing::debug!("Loaded {} students from '{}'", roster.len(), path.display());
        Ok(roster)
    }

    fn save(&self, path: &Path, roster: &[Student]) -> Result<()> {
        let json = to_json(roster)?;

        fs::write(path, json)
            .with_context(|| format!("Cannot write roster to '{}'", path.display()))?;

        tracing::debug!("Saved {} students to '{}'", roster.len(), path.display());
        Ok(())
    }
}

/// Serialise with a 4-space indent. serde_json's own
/// to_string_pretty is fixed at two spaces.
fn to_json(roster: &[Student]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    roster.serialize(&mut ser)?;
    Ok(buf)
}
