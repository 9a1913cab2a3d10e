// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concrete implementations of the domain traits that touch
// the outside world.
//
//   json_store.rs — Roster persistence
//                   Loads the roster from a JSON array file
//                   (missing file → empty roster) and rewrites
//                   the whole file after a change.
//
// Swapping storage (e.g. to TOML or SQLite) means adding a new
// RosterStore implementation here; nothing above this layer
// changes.

/// JSON file roster store
pub mod json_store;
