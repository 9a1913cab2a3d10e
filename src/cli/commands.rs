// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands: `add`, `display` and `select`.
// Each one takes -d/--data for the roster file; when it is
// left out the path comes from STUDENTS_DATA.
//
// The grade flag is spelled `-gr` on the command line. clap
// short flags are one character, so cli::normalize_args turns
// `-gr` into `--grade` before parsing.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::roster_use_case::{NewStudent, Operation};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new student
    Add(AddArgs),

    /// Display all students
    Display(DisplayArgs),

    /// Select the students with a failing mark
    Select(SelectArgs),
}

/// The roster file flag shared by every subcommand
#[derive(Args, Debug)]
pub struct DataArgs {
    /// The data file name
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub file: DataArgs,

    /// The student's name
    #[arg(short, long)]
    pub name: String,

    /// The student's group
    #[arg(short, long, allow_negative_numbers = true)]
    pub group: Option<i64>,

    /// The student's grade (also -gr)
    #[arg(long)]
    pub grade: String,
}

#[derive(Args, Debug)]
pub struct DisplayArgs {
    #[command(flatten)]
    pub file: DataArgs,
}

#[derive(Args, Debug)]
pub struct SelectArgs {
    #[command(flatten)]
    pub file: DataArgs,

    /// The required select
    #[arg(short, long)]
    pub select: String,
}

/// Convert CLI AddArgs into the application-layer NewStudent.
/// The data file flag is not part of the student and is read
/// separately in `Commands::into_parts`.
impl From<AddArgs> for NewStudent {
    fn from(a: AddArgs) -> Self {
        NewStudent {
            name:  a.name,
            group: a.group,
            grade: a.grade,
        }
    }
}

impl Commands {
    /// Split into the data file flag and the application operation,
    /// so Layer 2 never sees clap types.
    pub fn into_parts(self) -> (Option<PathBuf>, Operation) {
        match self {
            Commands::Add(a) => (a.file.data.clone(), Operation::Add(a.into())),
            Commands::Display(a) => (a.file.data, Operation::Display),
            Commands::Select(a)  => (a.file.data, Operation::Select { selector: a.select }),
        }
    }
}
