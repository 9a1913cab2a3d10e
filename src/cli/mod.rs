// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap, resolves the data file,
// hands the operation to Layer 2 and prints whatever comes
// back. This is the only layer that writes to stdout.
//
//   add     → "Data saved"
//   display → table, or "roster is empty"
//   select  → table of failing students, or "roster is empty"

pub mod commands;
pub mod table;

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;

use crate::application::config::{resolve_data_file, EnvConfig};
use crate::application::roster_use_case::{Outcome, RosterUseCase};
use crate::infra::json_store::JsonRosterStore;
use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "students",
    version = "0.1.0",
    about = "Keep a roster of students in a JSON file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self, env: &EnvConfig) -> Result<()> {
        let (data, op) = self.command.into_parts();

        // MissingDataFile is turned into exit status 1 by main
        let path = resolve_data_file(data, env)?;
        tracing::debug!("Using data file '{}'", path.display());

        let use_case = RosterUseCase::new(JsonRosterStore::new(), path);
        match use_case.execute(op)? {
            Outcome::Saved { total } => {
                tracing::debug!("Roster now holds {} students", total);
                println!("Data saved");
            }
            Outcome::Listing(students) => println!("{}", table::render(&students)),
        }
        Ok(())
    }
}

/// Rewrite the two-letter `-gr` flag to `--grade` so clap can parse it.
/// Arguments after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_terminator {
                return arg;
            }
            if arg == "--" {
                past_terminator = true;
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("-gr") => Some(OsString::from("--grade")),
                Some(s) => s
                    .strip_prefix("-gr=")
                    .map(|value| OsString::from(format!("--grade={value}"))),
                None => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::roster_use_case::{NewStudent, Operation};
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(normalize_args(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_normalize_rewrites_grade_flag() {
        let out = normalize_args(["students", "add", "-gr", "5", "-gr=4", "--", "-gr"]);
        assert_eq!(out, ["students", "add", "--grade", "5", "--grade=4", "--", "-gr"]);
    }

    #[test]
    fn test_parse_add_with_short_flags() {
        let cli = parse(&["students", "add", "-d", "s.json", "-n", "Ivanov", "-g", "101", "-gr", "2345"]);
        let (data, op) = cli.command.into_parts();
        assert_eq!(data, Some(PathBuf::from("s.json")));
        assert_eq!(op, Operation::Add(NewStudent {
            name:  "Ivanov".into(),
            group: Some(101),
            grade: "2345".into(),
        }));
    }

    #[test]
    fn test_parse_add_without_group() {
        let cli = parse(&["students", "add", "--name", "Petrov", "--grade", "345"]);
        let (data, op) = cli.command.into_parts();
        assert_eq!(data, None);
        assert!(matches!(op, Operation::Add(NewStudent { group: None, .. })));
    }

    #[test]
    fn test_add_requires_name_and_grade() {
        assert!(Cli::try_parse_from(["students", "add", "-n", "Ivanov"]).is_err());
        assert!(Cli::try_parse_from(normalize_args(["students", "add", "-gr", "5"])).is_err());
    }

    #[test]
    fn test_group_must_be_an_integer() {
        let args = normalize_args(["students", "add", "-n", "A", "-g", "x", "-gr", "5"]);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_select_and_display() {
        let (_, op) = parse(&["students", "select", "-s", "2"]).command.into_parts();
        assert_eq!(op, Operation::Select { selector: "2".into() });

        let (data, op) = parse(&["students", "display", "--data", "s.json"]).command.into_parts();
        assert_eq!(data, Some(PathBuf::from("s.json")));
        assert_eq!(op, Operation::Display);
    }

    #[test]
    fn test_parse_negative_group() {
        let cli = parse(&["students", "add", "-n", "Ivanov", "-g", "-1", "-gr", "5"]);
        let (_, op) = cli.command.into_parts();
        assert!(matches!(op, Operation::Add(NewStudent { group: Some(-1), .. })));
    }

    #[test]
    fn test_add_args_convert_to_new_student() {
        let cli = parse(&["students", "add", "-d", "s.json", "-n", "Petrov", "-gr", "345"]);
        let Commands::Add(args) = cli.command else {
            panic!("expected the add subcommand");
        };
        assert_eq!(NewStudent::from(args), NewStudent {
            name:  "Petrov".into(),
            group: None,
            grade: "345".into(),
        });
    }

    #[test]
    fn test_select_requires_selector() {
        assert!(Cli::try_parse_from(["students", "select", "-d", "s.json"]).is_err());
    }
}
