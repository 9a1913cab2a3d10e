// ============================================================
// Layer 3 — Core Traits
// ============================================================
// The application layer talks to storage through this trait
// so it never needs to know the roster lives in a JSON file.
//
// Implementations:
//   - JsonRosterStore → one JSON array per file (Layer 6)

use anyhow::Result;
use std::path::Path;

use crate::domain::student::{Roster, Student};

// ─── RosterStore ──────────────────────────────────────────────────────────────
/// Anything that can read and rewrite a whole roster at a path.
pub trait RosterStore {
    /// Load the full roster. A path that does not exist yet is an
    /// empty roster, not an error.
    fn load(&self, path: &Path) -> Result<Roster>;

    /// Replace whatever is stored at `path` with `roster`.
    fn save(&self, path: &Path, roster: &[Student]) -> Result<()>;
}
