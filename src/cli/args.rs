//! @dose
//! purpose: This module defines the command-line interface for aisl-convert using the clap
//!     derive macros. One flat command: a list of paths plus a few mode flags.
//!
//! when-editing:
//!     - !Paths are optional to clap; an empty list is handled in main.rs with the usage text
//!     - CLI flags are the only configuration surface (no config file, no environment)
//!
//! invariants:
//!     - PathBuf is used for all file/directory path arguments
//!     - --check implies no writes, same as --dry-run
//!
//! gotchas:
//!     - Zero paths must exit 1 with the two-line usage text, not clap's exit 2 error

use clap::Parser;
use std::path::PathBuf;

/// Printed when no paths are given.
pub const USAGE: &str = "Usage: aisl-convert <file1.aisl> [file2.aisl ...]\n   or: aisl-convert tests/*.aisl";

#[derive(Parser, Debug)]
#[command(name = "aisl-convert")]
#[command(
    author,
    version,
    about = "Convert AISL files from nested parameter syntax to flat syntax"
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct ConvertArgs {
    /// Files to convert, or directories to search for .aisl files
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Dry run - show what would be converted without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if any file still uses the nested syntax (never writes)
    #[arg(long)]
    pub check: bool,
}

impl ConvertArgs {
    /// Whether files may be rewritten in place
    pub fn writes(&self) -> bool {
        !self.dry_run && !self.check
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_paths() {
        let cli = Cli::try_parse_from(["aisl-convert"]).unwrap();
        assert!(cli.convert.paths.is_empty());
        assert!(!cli.verbose);
        assert!(cli.convert.writes());

        let cli = Cli::try_parse_from(["aisl-convert", "a.aisl", "tests/", "b.aisl"]).unwrap();
        assert_eq!(
            cli.convert.paths,
            vec![
                PathBuf::from("a.aisl"),
                PathBuf::from("tests/"),
                PathBuf::from("b.aisl")
            ]
        );
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["aisl-convert", "--dry-run", "a.aisl"]).unwrap();
        assert!(cli.convert.dry_run);
        assert!(!cli.convert.writes());

        let cli = Cli::try_parse_from(["aisl-convert", "a.aisl", "--check"]).unwrap();
        assert!(cli.convert.check);
        assert!(!cli.convert.writes());

        let cli = Cli::try_parse_from(["aisl-convert", "-v", "a.aisl"]).unwrap();
        assert!(cli.verbose);
        let cli = Cli::try_parse_from(["aisl-convert", "--verbose", "a.aisl"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_error_cases() {
        assert!(Cli::try_parse_from(["aisl-convert", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["aisl-convert", "-x"]).is_err());
    }

    #[test]
    fn test_usage_text() {
        let lines: Vec<&str> = USAGE.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Usage: aisl-convert"));
        assert!(lines[1].trim_start().starts_with("or:"));
    }

    #[test]
    fn test_help_output() {
        let mut cmd = Cli::command();
        let help = format!("{}", cmd.render_help());
        assert!(help.contains("--dry-run"));
        assert!(help.contains("--check"));
        assert!(help.contains("nested parameter syntax"));
    }
}
