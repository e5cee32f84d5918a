pub mod args;

pub use args::{Cli, Commands, CompareArgs, DemoArgs, ReportArgs};
