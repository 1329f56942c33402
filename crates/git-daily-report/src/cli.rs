//! CLI definition.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use gitdaily_commit::WindowPolicy;
use gitdaily_config::{Config, load_config, load_or_default_from};
use gitdaily_git::{GitResult, Repository};
use gitdaily_report::Layout;
use tracing::debug;

use crate::banner;
use crate::keys::{self, KeySource};
use crate::session::Session;

/// Window policy argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WindowArg {
    /// Commits recorded on the day only
    Day,
    /// Every commit recorded since the day started
    Since,
}

impl From<WindowArg> for WindowPolicy {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Day => WindowPolicy::Day,
            WindowArg::Since => WindowPolicy::Since,
        }
    }
}

/// Print the commits of a Git repository and its submodules for one day, grouped by author.
#[derive(Debug, Parser)]
#[command(name = "git-daily-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the repository root
    pub repository: Option<PathBuf>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,

    /// Print a single report, then wait for a key
    #[arg(long)]
    pub once: bool,

    /// Day to report on (default: today)
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// How commits are matched against the day
    #[arg(short, long, value_enum)]
    pub window: Option<WindowArg>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    /// Configuration file (default: gitdaily.toml in the current directory or a parent)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the report.
    ///
    /// Repository errors are printed and end the run normally; only
    /// configuration and terminal failures are returned.
    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let policy = self.window.map_or(config.report.window, WindowPolicy::from);
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        debug!(%date, %policy, once = self.once, "starting report");

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if config.banner.enabled && !self.no_banner {
            banner::show_welcome(&mut out, Duration::from_millis(config.banner.delay_ms));
        }

        let mut keys = keys::for_stdin();
        if let Err(e) = self.report(date, policy, &mut out, keys.as_mut()) {
            writeln!(out, "{e}").context("failed to write to stdout")?;
        }

        if self.once {
            out.flush().context("failed to write to stdout")?;
            keys.next_key().context("failed to read from the terminal")?;
        }
        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load {}", path.display())),
            None => {
                let current_dir = std::env::current_dir()
                    .context("failed to read the current directory")?;
                load_or_default_from(current_dir).context("failed to load configuration")
            }
        }
    }

    fn report<W: Write>(
        &self,
        date: NaiveDate,
        policy: WindowPolicy,
        out: &mut W,
        keys: &mut dyn KeySource,
    ) -> GitResult<()> {
        if self.once
            && let Some(path) = &self.repository
        {
            writeln!(out, "Open git {}", path.display())?;
        }

        let repo = Repository::locate(self.repository.as_deref())?;
        let session = Session::new(&repo, policy, Local);

        if self.once {
            session.report(date, Layout::RuleAfterEachGroup, out)
        } else {
            session.navigate_from(date, out, keys).map(|_| ())
        }
    }
}
