//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Running without a
//! subcommand is the same as `run`, and accepts the same flags.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::DEFAULT_SCRIPT;

/// Installs the Python packages the Nokia failure analysis generator needs, then runs it.
#[derive(Debug, Parser)]
#[command(name = "deck-launcher")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Directory containing the generator script (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show pip output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check Python, install dependencies and generate the presentation (default)
    Run(RunArgs),

    /// Only check that a Python interpreter is available
    Check(CheckArgs),

    /// List the packages installed and the commands run
    Deps(DepsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Python interpreter to use instead of searching PATH
    #[arg(long, env = "DECK_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Generator script, relative to the project directory
    #[arg(long, env = "DECK_SCRIPT", value_name = "PATH", default_value = DEFAULT_SCRIPT)]
    pub script: PathBuf,

    /// Preview commands without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Exit without waiting for a keypress
    #[arg(
        long,
        env = "DECK_NO_PAUSE",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub no_pause: bool,

    /// Never prompt or wait for input
    #[arg(long)]
    pub non_interactive: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            python: None,
            script: PathBuf::from(DEFAULT_SCRIPT),
            dry_run: false,
            no_pause: false,
            non_interactive: false,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Python interpreter to check instead of searching PATH
    #[arg(long, env = "DECK_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `deps` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DepsArgs {
    /// Interpreter shown in the listed commands
    #[arg(long, env = "DECK_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Generator script shown in the listed commands
    #[arg(long, env = "DECK_SCRIPT", value_name = "PATH", default_value = DEFAULT_SCRIPT)]
    pub script: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for DepsArgs {
    fn default() -> Self {
        Self {
            python: None,
            script: PathBuf::from(DEFAULT_SCRIPT),
            json: false,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_accepts_run_flags() {
        let cli = Cli::try_parse_from(["deck-launcher", "--dry-run", "--no-pause"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.run.dry_run);
        assert!(cli.run.no_pause);
    }

    #[test]
    fn run_subcommand_parses_python_and_script() {
        let cli = Cli::try_parse_from([
            "deck-launcher",
            "run",
            "--python",
            "/usr/bin/python3",
            "--script",
            "other.py",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.python, Some(PathBuf::from("/usr/bin/python3")));
                assert_eq!(args.script, PathBuf::from("other.py"));
            }
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["deck-launcher", "check", "--quiet", "--json"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Check(CheckArgs { json: true, .. }))));
    }

    #[test]
    fn no_pause_flag_takes_no_value() {
        let cli = Cli::try_parse_from(["deck-launcher", "--no-pause", "check"]);
        assert!(cli.is_err());

        let cli = Cli::try_parse_from(["deck-launcher", "run", "--no-pause"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => assert!(args.no_pause),
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn deps_script_defaults_to_generator() {
        let cli = Cli::try_parse_from(["deck-launcher", "deps", "--script", "other.py"]).unwrap();
        match cli.command {
            Some(Commands::Deps(args)) => assert_eq!(args.script, PathBuf::from("other.py")),
            other => panic!("expected deps, got {:?}", other),
        }
        assert_eq!(DepsArgs::default().script, PathBuf::from(DEFAULT_SCRIPT));
    }

    #[test]
    fn default_run_args_use_default_script() {
        let args = RunArgs::default();
        assert_eq!(args.script, PathBuf::from(DEFAULT_SCRIPT));
        assert!(!args.dry_run);
    }
}
