// Compare command - assert two JSON inputs

use anyhow::Result;
use tracing::{debug, info};

use crate::assert::Asserter;
use crate::cli::args::CompareArgs;
use crate::report::ReportOptions;
use crate::utils::FileUtils;

/// Run one assertion and print its report. Returns whether it passed.
pub fn handle_compare(args: &CompareArgs, options: ReportOptions) -> Result<bool> {
    let actual = FileUtils::load_value(&args.actual, args.inline, "actual")?;
    let expected = FileUtils::load_value(&args.expected, args.inline, "expected")?;
    debug!("Loaded actual and expected values (shape: {:?})", args.shape);

    let outcome = Asserter::new(options).check(&actual, &expected, args.shape);
    outcome.print();

    if let Some(ref mismatch) = outcome.comparison.mismatch {
        info!("{}", mismatch);
    }

    Ok(outcome.passed())
}
