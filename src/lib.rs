pub mod assert;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod subjects;
pub mod utils;
pub mod value;

pub use assert::{
    AssertShape, Asserter, Comparison, Outcome, assert_arrays_equal, assert_equal,
    assert_objects_equal, check_arrays_equal, check_equal, check_objects_equal, compare,
    equal_mappings, equal_sequences, equal_values,
};
pub use error::AssertifyError;
pub use report::{ReportOptions, ReportStyle, render};
