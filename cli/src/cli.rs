// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{
    ArgAction, ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser,
};
use colored::Colorize;
use contactsync_core::{APP_NAME, ContactSync};
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_list::CmdList;
use crate::cmd_sync::CmdSync;
use crate::config::parse_config;

/// Run the contactsync command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse() {
        Ok(cli) => {
            init_tracing(cli.verbose);
            if let Err(e) = cli.run().await {
                eprintln!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(2);
        }
    }
    Ok(())
}

/// Logs go to stderr. `RUST_LOG` applies only without `-v`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Verbosity, the number of `-v` flags
    pub verbose: u8,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Synchronize local contacts with Google Contacts.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $CONTACTSYNC_CONFIG, then \
$XDG_CONFIG_HOME/contactsync/config.toml on Linux and MacOS, \
%APPDATA%/contactsync/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(-v --verbose "Increase log verbosity, repeat for more")
                    .action(ArgAction::Count)
                    .global(true),
            )
            .subcommand(CmdSync::command())
            .subcommand(CmdList::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let command = match matches.subcommand() {
            Some((CmdSync::NAME, matches)) => Commands::Sync(CmdSync::from(matches)),
            Some((CmdList::NAME, matches)) => Commands::List(CmdList::from(matches)),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        Ok(Cli {
            config: matches.get_one("config").cloned(),
            verbose: matches.get_count("verbose"),
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Synchronize contacts with Google
    Sync(CmdSync),

    /// List the local contacts
    List(CmdList),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::Sync(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Commands::List(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut ContactSync) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut sync = ContactSync::new(config).await?;

        f(&mut sync).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::ArgOutputFormat;
    use contactsync_core::Direction;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_parse_global_args_after_subcommand() {
        let cli = Cli::try_parse_from(vec!["test", "sync", "-vv", "--config", "a.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(vec!["test"]).is_err());
    }

    #[test]
    fn test_parse_sync() {
        let args = vec!["test", "sync", "--direction", "from-google", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Sync(cmd) => {
                assert_eq!(cmd.direction, Direction::FromGoogle);
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
            }
            _ => panic!("Expected Sync command"),
        }
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(vec!["test", "list"]).unwrap();
        match cli.command {
            Commands::List(cmd) => assert_eq!(cmd.output_format, ArgOutputFormat::Table),
            _ => panic!("Expected List command"),
        }
    }
}
