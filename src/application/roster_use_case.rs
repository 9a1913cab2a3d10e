// ============================================================
// Layer 2 — RosterUseCase
// ============================================================
// Every invocation runs the same short pipeline:
//
//   Step 1: Load the roster          (Layer 6 - infra)
//   Step 2: Apply one operation      (Layer 3 - domain)
//             add     → append one student, mark dirty
//             display → nothing
//             select  → keep students with a failing mark
//   Step 3: Save, only if dirty      (Layer 6 - infra)
//
// Nothing is printed here. The outcome goes back to Layer 1,
// which decides how to show it.

use anyhow::Result;
use std::path::PathBuf;

use crate::domain::student::{self, Roster, FAILING_MARK};
use crate::domain::traits::RosterStore;

/// Fields for a student about to be added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name:  String,
    pub group: Option<i64>,
    pub grade: String,
}

/// The one thing an invocation does to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add(NewStudent),
    Display,
    /// The selector is taken from the command line but the rule is
    /// always "has a failing mark"
    Select { selector: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The roster was changed and written back
    Saved { total: usize },
    /// Students to show, in roster order
    Listing(Roster),
}

pub struct RosterUseCase<S> {
    store: S,
    path:  PathBuf,
}

impl<S: RosterStore> RosterUseCase<S> {
    pub fn new(store: S, path: impl Into<PathBuf>) -> Self {
        Self { store, path: path.into() }
    }

    pub fn execute(&self, op: Operation) -> Result<Outcome> {
        // ── Step 1: Load ──────────────────────────────────────────────────────
        let mut roster = self.store.load(&self.path)?;
        let mut dirty  = false;

        // ── Step 2: Apply ─────────────────────────────────────────────────────
        let outcome = match op {
            Operation::Add(new) => {
                student::add_student(&mut roster, &new.name, new.group, &new.grade);
                dirty = true;
                tracing::info!("Added '{}' ({} students now)", new.name, roster.len());
                Outcome::Saved { total: roster.len() }
            }
            Operation::Display => Outcome::Listing(std::mem::take(&mut roster)),
            Operation::Select { selector } => {
                if selector.trim() != FAILING_MARK.to_string() {
                    tracing::warn!(
                        "Selector '{}' is not applied; listing students with a '{}' mark",
                        selector,
                        FAILING_MARK
                    );
                }
                let selected = student::select_failing(&roster);
                tracing::info!("Selected {} of {} students", selected.len(), roster.len());
                Outcome::Listing(selected)
            }
        };

        // ── Step 3: Save if changed ───────────────────────────────────────────
        if dirty {
            self.store.save(&self.path, &roster)?;
        }

        Ok(outcome)
    }
}
