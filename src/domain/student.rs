// ============================================================
// Layer 3 — Student Domain Type
// ============================================================
// One row of the roster: a name, an optional group number, and
// a progress string made of grade characters, e.g. "2345".
//
// The roster itself is just Vec<Student>. Position in the Vec
// is the only identity a student has; display numbering is
// that position plus one.
//
// A '2' anywhere in the progress string is a failing mark.
//
// On disk the canonical key is "progress". Older files wrote
// the same value under "grade", so that key is accepted as an
// alias when reading.

use serde::{Deserialize, Serialize};

/// The grade character that marks a failed assessment.
pub const FAILING_MARK: char = '2';

/// The in-memory roster for one invocation.
pub type Roster = Vec<Student>;

/// A single student record.
///
/// Every field is defaulted at the deserialisation boundary so a
/// hand-edited record with missing keys still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub name: String,

    /// Group number; not checked against any list of real groups
    #[serde(default)]
    pub group: Option<i64>,

    #[serde(default, alias = "grade")]
    pub progress: Option<String>,
}

impl Student {
    pub fn new(name: impl Into<String>, group: Option<i64>, progress: impl Into<String>) -> Self {
        Self {
            name:     name.into(),
            group,
            progress: Some(progress.into()),
        }
    }

    /// True when the progress string contains at least one failing mark.
    /// A student with no progress recorded has nothing to fail.
    pub fn has_failing_mark(&self) -> bool {
        self.progress
            .as_deref()
            .is_some_and(|p| p.chars().any(|c| c == FAILING_MARK))
    }
}

/// Append a new student to the end of the roster.
///
/// Identical data added twice produces two entries.
pub fn add_student(roster: &mut Roster, name: &str, group: Option<i64>, grade: &str) {
    roster.push(Student::new(name, group, grade));
}

/// Return the students with a failing mark, in roster order.
/// The input roster is left untouched.
pub fn select_failing(roster: &[Student]) -> Roster {
    roster
        .iter()
        .filter(|s| s.has_failing_mark())
        .cloned()
        .collect()
}
