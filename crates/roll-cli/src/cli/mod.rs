use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `roll` binary.
#[derive(Debug, Parser)]
#[command(
    name = "roll",
    version,
    about = "Rollcall - lessons, files and face-verified attendance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL (overrides `api.base_url`)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            api_url: self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AuthCommands, FileCommands, StudentCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "roll",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "lesson",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Lesson { .. }));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["roll", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["roll", "--format", "xml", "lesson", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn upload_path_is_optional() {
        let cli = Cli::try_parse_from(["roll", "file", "upload", "3"]).expect("cli should parse");
        match cli.command {
            Commands::File {
                action: FileCommands::Upload(args),
            } => {
                assert_eq!(args.lesson_id, 3);
                assert!(args.path.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn student_attend_takes_lesson_and_image() {
        let cli = Cli::try_parse_from(["roll", "student", "attend", "4", "capture.jpg"])
            .expect("cli should parse");
        match cli.command {
            Commands::Student {
                action: StudentCommands::Attend(args),
            } => {
                assert_eq!(args.lesson_id, 4);
                assert_eq!(
                    args.image.as_deref(),
                    Some(std::path::Path::new("capture.jpg"))
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn api_url_is_copied_into_global_flags() {
        let cli = Cli::try_parse_from(["roll", "--api-url", "http://api.test", "user", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.api_url.as_deref(), Some("http://api.test"));
    }
}
