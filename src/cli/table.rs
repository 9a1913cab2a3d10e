// ============================================================
// Layer 1 — Roster Table
// ============================================================
// Fixed-width text table:
//
//   +------+--------------------------------+----------------------+-----------------+
//   |  №   |              Name              |        Group         |    Progress     |
//   +------+--------------------------------+----------------------+-----------------+
//   |    1 | Ivanov                         | 101                  |            2345 |
//   +------+--------------------------------+----------------------+-----------------+
//
// Widths are counted in chars, so Cyrillic names line up.

use crate::domain::student::Student;

pub const EMPTY_ROSTER: &str = "roster is empty";

const INDEX_W:    usize = 4;
const NAME_W:     usize = 30;
const GROUP_W:    usize = 20;
const PROGRESS_W: usize = 15;

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_W),
        "-".repeat(NAME_W),
        "-".repeat(GROUP_W),
        "-".repeat(PROGRESS_W),
    )
}

/// Render the roster as a table, or the empty-roster message.
pub fn render(students: &[Student]) -> String {
    if students.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    let line  = border();
    let mut lines = vec![
        line.clone(),
        format!(
            "| {:^INDEX_W$} | {:^NAME_W$} | {:^GROUP_W$} | {:^PROGRESS_W$} |",
            "№", "Name", "Group", "Progress"
        ),
        line.clone(),
    ];

    for (idx, s) in students.iter().enumerate() {
        let group = s.group.map(|g| g.to_string()).unwrap_or_default();
        lines.push(format!(
            "| {:>INDEX_W$} | {:<NAME_W$} | {:<GROUP_W$} | {:>PROGRESS_W$} |",
            idx + 1,
            s.name,
            group,
            s.progress.as_deref().unwrap_or("0"),
        ));
    }

    lines.push(line);
    lines.join("\n")
}
