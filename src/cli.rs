use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};

use crate::license::classifier::SkuScope;
use crate::models::{AssignmentPath, RemovablePath};
use crate::text::codec::TextEncoding;

#[derive(Parser, Debug)]
#[command(
    name = "license-assignr",
    about = "Report and remove directory license assignments by assignment path",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.license-assignr/config.toml, fallback ~/.config/license-assignr/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show every row and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print summary lines
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Base64-encode text (argument or stdin)
    Encode {
        text: Option<String>,
        #[arg(long, default_value = "utf8")]
        encoding: EncodingArg,
    },
    /// Decode Base64 text (argument or stdin)
    Decode {
        text: Option<String>,
        #[arg(long, default_value = "utf8")]
        encoding: EncodingArg,
    },
    /// Turn lines of text (argument or stdin) into a single-column CSV
    Csv {
        /// Column header
        #[arg(long)]
        header: String,
        text: Option<String>,
    },
    /// Product code lookups
    Sku {
        #[command(subcommand)]
        command: SkuCommand,
    },
    /// Report license holders by assignment path
    Report(ReportArgs),
    /// Remove directly assigned licenses
    Remove(RemoveArgs),
}

#[derive(Subcommand, Debug)]
pub enum SkuCommand {
    /// Resolve a product code to its display name
    Resolve { code: String },
    /// List the tenant's subscribed licenses
    List,
}

#[derive(Args, Debug)]
pub struct ScopeArgs {
    /// Check every license with consumed units
    #[arg(long, conflicts_with = "sku")]
    pub all_licenses: bool,

    /// License to check: sku id, part number, or display name
    #[arg(long, required_unless_present = "all_licenses")]
    pub sku: Option<String>,
}

impl ScopeArgs {
    pub fn scope(&self) -> SkuScope {
        match (&self.sku, self.all_licenses) {
            (Some(sku), false) => SkuScope::Single(sku.clone()),
            _ => SkuScope::AllConsumed,
        }
    }
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Assignment path to report
    #[arg(long, default_value = "all")]
    pub path: PathArg,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout (json and csv only)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ReportArgs {
    /// Reject flag combinations clap cannot express on its own.
    pub fn validate(&self) -> Result<()> {
        if matches!(self.format, ReportFormat::Terminal) && self.output.is_some() {
            bail!("--output needs --format json or --format csv; the terminal report only prints to stdout");
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Assignment path to remove; group-inherited licenses must be removed from the group
    #[arg(long)]
    pub path: RemovablePathArg,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Seconds to wait before each removal call [default: from config, else 1]
    #[arg(long, value_name = "SECONDS")]
    pub delay: Option<u64>,

    /// Remove without asking
    #[arg(long, conflicts_with = "what_if")]
    pub yes: bool,

    /// Show what would be removed without changing anything
    #[arg(long)]
    pub what_if: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum EncodingArg {
    Utf8,
    Utf16le,
}

impl From<EncodingArg> for TextEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Utf8 => TextEncoding::Utf8,
            EncodingArg::Utf16le => TextEncoding::Utf16Le,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum PathArg {
    Directly,
    FromGroup,
    DirectlyAndGroup,
    All,
}

impl PathArg {
    pub fn paths(self) -> Vec<AssignmentPath> {
        match self {
            PathArg::Directly => vec![AssignmentPath::Directly],
            PathArg::FromGroup => vec![AssignmentPath::FromGroup],
            PathArg::DirectlyAndGroup => vec![AssignmentPath::DirectlyAndGroup],
            PathArg::All => vec![
                AssignmentPath::Directly,
                AssignmentPath::DirectlyAndGroup,
                AssignmentPath::FromGroup,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RemovablePathArg {
    Directly,
    DirectlyAndGroup,
}

impl From<RemovablePathArg> for RemovablePath {
    fn from(arg: RemovablePathArg) -> Self {
        match arg {
            RemovablePathArg::Directly => RemovablePath::Directly,
            RemovablePathArg::DirectlyAndGroup => RemovablePath::DirectlyAndGroup,
        }
    }
}
