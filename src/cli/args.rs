// CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::assert::AssertShape;
use crate::report::{ReportOptions, ReportStyle};

/// Structural equality assertions with readable pass/fail reports
#[derive(Parser, Debug)]
#[command(name = "assertify")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare values structurally and print pass/fail reports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(short = 'c', long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Print a shell completion script
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completion: Option<Shell>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two JSON values and print the report
    Compare(CompareArgs),

    /// Run the built-in fixture assertions
    Demo(DemoArgs),
}

/// Report flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Report format (overrides the configuration file)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<ReportStyle>,

    /// Show the location of the first mismatch on failure
    #[arg(long, default_value_t = false, overrides_with = "no_show_mismatch")]
    pub show_mismatch: bool,

    /// Hide the mismatch location even if the configuration enables it
    #[arg(long, default_value_t = false, overrides_with = "show_mismatch")]
    pub no_show_mismatch: bool,

    /// Show a character diff on failure
    #[arg(long, default_value_t = false, overrides_with = "no_diff")]
    pub diff: bool,

    /// Hide the diff even if the configuration enables it
    #[arg(long, default_value_t = false, overrides_with = "diff")]
    pub no_diff: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Actual value: a JSON file, or JSON text with --inline
    pub actual: String,

    /// Expected value: a JSON file, or JSON text with --inline
    pub expected: String,

    /// Treat ACTUAL and EXPECTED as JSON text instead of file paths
    #[arg(short = 'i', long, default_value_t = false)]
    pub inline: bool,

    /// Shape both values must have
    #[arg(short = 's', long, value_enum, default_value_t = AssertShape::Value)]
    pub shape: AssertShape,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DemoArgs {
    #[command(flatten)]
    pub report: ReportArgs,
}

impl ReportArgs {
    /// Layer command-line flags over configured options
    pub fn apply(&self, base: ReportOptions, no_color: bool) -> ReportOptions {
        let mut style = self.format.unwrap_or(base.style);
        if no_color && style == ReportStyle::Color {
            style = ReportStyle::Plain;
        }

        ReportOptions {
            style,
            show_mismatch: toggle(base.show_mismatch, self.show_mismatch, self.no_show_mismatch),
            show_diff: toggle(base.show_diff, self.diff, self.no_diff),
        }
    }
}

/// An explicit flag wins over the configured value
fn toggle(configured: bool, on: bool, off: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => configured,
    }
}

impl Cli {
    /// Report flags of the selected command
    pub fn report_args(&self) -> ReportArgs {
        match &self.command {
            Some(Commands::Compare(args)) => args.report.clone(),
            Some(Commands::Demo(args)) => args.report.clone(),
            None => ReportArgs::default(),
        }
    }
}
