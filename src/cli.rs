use std::{ffi::OsString, path::PathBuf};

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, error::ErrorKind};

/// buildtask command-line interface
///
/// The subcommand is read as a plain word rather than a clap subcommand so
/// that unknown or empty words fall through to the usage banner.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "buildtask",
    version,
    about = "Build, serve and check the project without memorizing tool invocations",
    long_about = None
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not echo each step before running it
    #[arg(short, long)]
    pub quiet: bool,

    /// Project root that every path is resolved against (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to <root>/buildtask.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand: web-bin, serve, ci, download-assets, update-readme, help
    #[arg(value_name = "SUBCOMMAND")]
    pub task: Option<String>,

    /// Arguments passed to the subcommand
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Build profile selected for `web-bin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    /// Directory name cargo uses for this profile's artifacts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    /// Extra `cargo build` flag for this profile, if any.
    #[must_use]
    pub const fn cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebBinArgs {
    pub profile: Profile,
    pub name: String,
    /// Tokens after the name, forwarded to `cargo build`.
    pub extra: Vec<String>,
}

impl WebBinArgs {
    /// Parse `[release] <name> [extra...]`.
    ///
    /// # Errors
    /// Returns an error when no example name is given.
    pub fn parse(args: &[String]) -> Result<Self> {
        let (profile, rest) = match args.split_first() {
            Some((first, rest)) if first == "release" => (Profile::Release, rest),
            _ => (Profile::Debug, args),
        };
        let Some((name, extra)) = rest.split_first() else {
            bail!("missing example name for web-bin");
        };
        Ok(Self {
            profile,
            name: name.clone(),
            extra: extra.to_vec(),
        })
    }
}

/// The workflow selected by the subcommand word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    WebBin(WebBinArgs),
    Serve,
    Ci,
    DownloadAssets,
    UpdateReadme,
    Help,
}

impl Task {
    /// Map the subcommand word and its trailing arguments to a workflow.
    /// Anything unrecognised, including no word at all, selects `Help`.
    ///
    /// # Errors
    /// Returns an error when `web-bin` is missing its example name.
    pub fn select(task: Option<&str>, args: &[String]) -> Result<Self> {
        Ok(match task {
            Some("web-bin") => Self::WebBin(WebBinArgs::parse(args)?),
            Some("serve") => Self::Serve,
            Some("ci") => Self::Ci,
            Some("download-assets") => Self::DownloadAssets,
            Some("update-readme") => Self::UpdateReadme,
            _ => Self::Help,
        })
    }

    /// Whether steps of this workflow are echoed.
    #[must_use]
    pub const fn traces_steps(&self) -> bool {
        !matches!(self, Self::Help)
    }
}

impl Cli {
    /// Parse the command line. An unknown flag in subcommand position selects
    /// the usage banner instead of a clap error; `--help` and `--version`
    /// keep clap's handling.
    ///
    /// # Errors
    /// Returns clap's error for anything other than an unknown argument.
    pub fn parse_invocation<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Err(e) if e.kind() == ErrorKind::UnknownArgument => Ok(Self::usage_only()),
            other => other,
        }
    }

    const fn usage_only() -> Self {
        Self {
            verbose: 0,
            quiet: false,
            root: None,
            config: None,
            task: None,
            args: Vec::new(),
        }
    }

    /// Resolve the selected workflow.
    ///
    /// # Errors
    /// See [`Task::select`].
    pub fn task(&self) -> Result<Task> {
        Task::select(self.task.as_deref(), &self.args)
    }
}
